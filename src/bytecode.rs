//! Opcode table and bytecode execution.

#[macro_use]
mod macros;
pub mod opcodes;
pub mod runtime;
