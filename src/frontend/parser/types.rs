use crate::bytecode::opcodes::Instruction;

/// Where `push` inserts new values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// New values become the head (LIFO).
    #[default]
    Stack,
    /// New values are appended at the tail (FIFO).
    Queue,
}

/// A single parsed source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statement {
    /// Blank or whitespace-only line.
    Empty,
    /// Line whose first token starts with `#`.
    Comment,
    /// `stack` or `queue` directive.
    Mode(Mode),
    /// Instruction to dispatch.
    Instruction(Instruction),
}
