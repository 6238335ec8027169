use crate::prelude::*;
use crate::config::LineNumber;

/// Represents the various possible runtime error-kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    #[error("malloc failed")]
    OutOfMemory,
    #[error("can't pint, stack empty")]
    PintEmpty,
    #[error("can't pop an empty stack")]
    PopEmpty,
    #[error("can't {0}, stack too short")]
    StackTooShort(&'static str),
    #[error("division by zero")]
    DivisionByZero,
    #[error("can't pchar, value out of range")]
    PcharOutOfRange,
    #[error("can't pchar, stack empty")]
    PcharEmpty,
    #[error("output error: {0}")]
    Output(io::ErrorKind),
}

/// An error reported by the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeError {
    kind: RuntimeErrorKind,
    line: LineNumber,
}

impl RuntimeError {
    pub(crate) fn new(line: LineNumber, kind: RuntimeErrorKind) -> RuntimeError {
        Self { kind, line }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &RuntimeErrorKind {
        &self.kind
    }
    /// 1-based source line of the instruction that failed.
    pub fn line(self: &Self) -> LineNumber {
        self.line
    }
}

impl Display for RuntimeError {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RuntimeErrorKind::OutOfMemory => write!(f, "Error: {}", self.kind),
            _ => write!(f, "L{}: {}", self.line, self.kind),
        }
    }
}

impl std::error::Error for RuntimeError { }

pub type RuntimeResult<T = ()> = Result<T, RuntimeError>;
