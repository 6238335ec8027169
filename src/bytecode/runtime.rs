//! Bytecode execution.

pub mod error;
pub mod sequence;
mod vm;

pub use self::vm::{VM, VMState};
