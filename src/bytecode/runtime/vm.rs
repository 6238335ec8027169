//! A virtual machine for running Monty scripts.

use tracing::{debug, trace};
use crate::prelude::*;
use crate::config::LineNumber;
use crate::shared::error::Error;
use crate::frontend::parser::{parse_line, types::{Mode, Statement}};
use crate::bytecode::runtime::{sequence::Sequence, error::{RuntimeError, RuntimeErrorKind}};

/// Current state of the vm, updated by each run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VMState {
    /// No program has run yet, or the vm was reset.
    Ready,
    /// The last program ran to the end of its source.
    Terminated,
    /// The last program was halted by a fatal error.
    RuntimeError,
}

/// A virtual machine for running Monty scripts. Program output is written to `W`.
#[derive(Debug)]
pub struct VM<W = io::Stdout> {
    pub(crate) sequence : Sequence,
    pub(crate) mode     : Mode,
    pub(crate) output   : W,
    line                : LineNumber,
    state               : VMState,
}

/// Public VM methods.
impl<W> VM<W> where W: Write {
    /// Create a new VM instance writing program output to the given sink.
    pub fn new(output: W) -> Self {
        VM {
            sequence    : Sequence::new(),
            mode        : Mode::default(),
            output      : output,
            line        : 0,
            state       : VMState::Ready,
        }
    }

    /// Executes the given source until it ends or a fatal error occurs.
    pub fn run(self: &mut Self, source: &str) -> Result<(), Error> {
        self.run_lines(source.lines().map(|line| Ok(line)))
    }

    /// Executes source read line by line from the given reader.
    pub fn run_reader(self: &mut Self, reader: impl BufRead) -> Result<(), Error> {
        self.run_lines(reader.lines())
    }

    /// Releases the sequence and returns to the initial mode.
    pub fn reset(self: &mut Self) {
        self.sequence.release_all();
        self.mode = Mode::default();
        self.line = 0;
        self.state = VMState::Ready;
    }

    /// State after the last run.
    pub fn state(self: &Self) -> VMState {
        self.state
    }

    /// Number of the line executed last.
    pub fn line(self: &Self) -> LineNumber {
        self.line
    }

    /// Current insertion mode.
    pub fn mode(self: &Self) -> Mode {
        self.mode
    }

    /// The sequence. Empty after every completed or failed run.
    pub fn sequence(self: &Self) -> &Sequence {
        &self.sequence
    }

    /// The output sink.
    pub fn output(self: &Self) -> &W {
        &self.output
    }

    /// Consumes the VM, returning the output sink.
    pub fn into_output(self: Self) -> W {
        self.output
    }

    /// Runs lines and releases the sequence after the last line or the first fatal error.
    /// Output is flushed either way.
    fn run_lines<S>(self: &mut Self, lines: impl Iterator<Item = io::Result<S>>) -> Result<(), Error> where S: AsRef<str> {
        self.reset();
        let result = self.exec_lines(lines);
        let flushed = self.output.flush().map_err(|error| RuntimeError::new(self.line, RuntimeErrorKind::Output(error.kind())).into());
        let result = result.and(flushed);
        let released = self.sequence.release_all();
        debug!(released, "released sequence");
        self.state = match result {
            Ok(()) => VMState::Terminated,
            Err(_) => VMState::RuntimeError,
        };
        result
    }

    /// Parses and dispatches each line in order.
    fn exec_lines<S>(self: &mut Self, lines: impl Iterator<Item = io::Result<S>>) -> Result<(), Error> where S: AsRef<str> {
        for text in lines {
            let text = text?;
            self.line += 1;
            let line = self.line;
            match parse_line(line, text.as_ref())? {
                Statement::Empty | Statement::Comment => { },
                Statement::Mode(mode) => {
                    debug!(line, ?mode, "switching mode");
                    self.mode = mode;
                },
                Statement::Instruction(instruction) => {
                    trace!(line, ?instruction, "exec");
                    self.exec(instruction, line)?;
                },
            }
        }
        Ok(())
    }
}
