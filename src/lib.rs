//! Monty, a tiny line-oriented bytecode interpreter.
//!
//! Each source line holds an opcode and an optional operand. The VM executes lines in order
//! against a doubly linked sequence of integers that is used either as a stack or as a queue.
//!
//! ```
//! let mut output = Vec::new();
//! monty::run("push 1\npush 2\nadd\npall", &mut output).unwrap();
//! assert_eq!(output, b"3\n");
//! ```

pub mod config;
pub(crate) mod shared;
pub(crate) mod frontend;
#[macro_use]
pub(crate) mod bytecode;

pub(crate) mod prelude {
    pub use std::fmt::{self, Debug, Display};
    pub use std::io::{self, BufRead, Write};
}

use crate::prelude::*;

pub use crate::shared::error::Error;

pub mod parser {
    //! Source line parsing.
    pub use crate::frontend::parser::{parse_line, types::{Mode, Statement}, error::{ParseError, ParseErrorKind, ParseResult}};
}

pub mod opcodes {
    //! The instruction table.
    pub use crate::bytecode::opcodes::{OpCode, Instruction};
}

pub mod runtime {
    //! Bytecode execution.
    pub use crate::bytecode::runtime::{VM, VMState, error::{RuntimeError, RuntimeErrorKind, RuntimeResult}};
    pub mod sequence {
        //! The node store.
        pub use crate::bytecode::runtime::sequence::{Sequence, SequenceIter, AllocError};
    }
}

/// One stop shop to run the given Monty source, writing program output to `output`.
pub fn run(source: &str, output: &mut impl Write) -> Result<(), Error> {
    let mut vm = runtime::VM::new(output);
    vm.run(source)
}
