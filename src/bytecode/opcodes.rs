//! Opcode definitions. Implemented on VM.

use crate::prelude::*;
use crate::config::{Value, LineNumber, ASCII_MAX};
use crate::frontend::parser::{error::ParseErrorKind, types::Mode};
use crate::bytecode::runtime::{VM, error::{RuntimeError, RuntimeErrorKind, RuntimeResult}};

/// Maps a failed output write to a runtime error for the given line.
fn output_error(line: LineNumber) -> impl FnOnce(io::Error) -> RuntimeError {
    move |error| RuntimeError::new(line, RuntimeErrorKind::Output(error.kind()))
}

/// Support methods shared by multiple handlers.
impl<W> VM<W> where W: Write {
    /// Replaces the first two values with `op(second, head)` or reports a shortage for `opcode`.
    fn combine(self: &mut Self, line: LineNumber, opcode: OpCode, op: impl FnOnce(Value, Value) -> Value) -> RuntimeResult {
        if self.sequence.combine_front(op) {
            Ok(())
        } else {
            Err(RuntimeError::new(line, RuntimeErrorKind::StackTooShort(opcode.name())))
        }
    }

    /// Like `combine`, but additionally fails on a zero head value before modifying the sequence.
    fn combine_nonzero(self: &mut Self, line: LineNumber, opcode: OpCode, op: impl FnOnce(Value, Value) -> Value) -> RuntimeResult {
        if self.sequence.len() < 2 {
            Err(RuntimeError::new(line, RuntimeErrorKind::StackTooShort(opcode.name())))
        } else if self.sequence.front() == Some(0) {
            Err(RuntimeError::new(line, RuntimeErrorKind::DivisionByZero))
        } else {
            self.combine(line, opcode, op)
        }
    }
}

impl_opcodes!{

    /// Inserts a value: as new head in stack mode, after the tail in queue mode.
    "push" => fn push(&mut self, line, value: Value) {
        let inserted = match self.mode {
            Mode::Stack => self.sequence.push_front(value),
            Mode::Queue => self.sequence.push_back(value),
        };
        inserted.map_err(|_| RuntimeError::new(line, RuntimeErrorKind::OutOfMemory))
    }

    /// Prints all values from head to tail, one per line.
    "pall" => fn pall(&mut self, line) {
        for value in self.sequence.iter() {
            writeln!(self.output, "{}", value).map_err(output_error(line))?;
        }
        Ok(())
    }

    /// Prints the head value.
    "pint" => fn pint(&mut self, line) {
        let value = self.sequence.front().ok_or(RuntimeError::new(line, RuntimeErrorKind::PintEmpty))?;
        writeln!(self.output, "{}", value).map_err(output_error(line))
    }

    /// Removes the head.
    "pop" => fn pop(&mut self, line) {
        self.sequence.pop_front().ok_or(RuntimeError::new(line, RuntimeErrorKind::PopEmpty))?;
        Ok(())
    }

    /// Does nothing.
    "nop" => fn nop(&mut self, line) {
        Ok(())
    }

    /// Exchanges the first two nodes.
    "swap" => fn swap(&mut self, line) {
        if self.sequence.swap_front() {
            Ok(())
        } else {
            Err(RuntimeError::new(line, RuntimeErrorKind::StackTooShort(OpCode::Swap.name())))
        }
    }

    /// Replaces the first two values with their sum.
    "add" => fn add(&mut self, line) {
        self.combine(line, OpCode::Add, |second, head| second.wrapping_add(head))
    }

    /// Replaces the first two values with the second minus the head.
    "sub" => fn sub(&mut self, line) {
        self.combine(line, OpCode::Sub, |second, head| second.wrapping_sub(head))
    }

    /// Replaces the first two values with the second divided by the head, truncating.
    "div" => fn div(&mut self, line) {
        self.combine_nonzero(line, OpCode::Div, |second, head| second.wrapping_div(head))
    }

    /// Replaces the first two values with their product.
    "mul" => fn mul(&mut self, line) {
        self.combine(line, OpCode::Mul, |second, head| second.wrapping_mul(head))
    }

    /// Replaces the first two values with the remainder of the second divided by the head.
    "mod" => fn modulo(&mut self, line) {
        self.combine_nonzero(line, OpCode::Modulo, |second, head| second.wrapping_rem(head))
    }

    /// Prints the head value as ASCII character followed by a newline.
    "pchar" => fn pchar(&mut self, line) {
        let value = self.sequence.front().ok_or(RuntimeError::new(line, RuntimeErrorKind::PcharEmpty))?;
        if value < 0 || value > ASCII_MAX {
            return Err(RuntimeError::new(line, RuntimeErrorKind::PcharOutOfRange));
        }
        self.output.write_all(&[ value as u8, b'\n' ]).map_err(output_error(line))
    }

    /// Prints values from the head onward as ASCII characters up to the first value outside
    /// of 1..=127, followed by a newline. Unlike `pchar` a 0 terminates.
    "pstr" => fn pstr(&mut self, line) {
        let text: Vec<u8> = self.sequence.iter()
            .take_while(|&value| value > 0 && value <= ASCII_MAX)
            .map(|value| value as u8)
            .collect();
        self.output.write_all(&text).map_err(output_error(line))?;
        self.output.write_all(b"\n").map_err(output_error(line))
    }

    /// Moves the head to the tail.
    "rotl" => fn rotl(&mut self, line) {
        self.sequence.rotate_left();
        Ok(())
    }

    /// Moves the tail to the head.
    "rotr" => fn rotr(&mut self, line) {
        self.sequence.rotate_right();
        Ok(())
    }
}
