use crate::prelude::*;
use crate::config::LineNumber;

/// Represents the various possible parser error-kinds.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unknown instruction {0}")]
    UnknownInstruction(String),
    #[error("usage: {0} integer")]
    InvalidOperand(&'static str),
}

/// An error reported by the parser (e.g. unknown opcode).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    line: LineNumber,
}

impl ParseError {
    pub(crate) fn new(line: LineNumber, kind: ParseErrorKind) -> ParseError {
        Self { kind, line }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &ParseErrorKind {
        &self.kind
    }
    /// 1-based source line the error occured on.
    pub fn line(self: &Self) -> LineNumber {
        self.line
    }
}

impl Display for ParseError {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ParseError { }

pub type ParseResult<T = ()> = Result<T, ParseError>;
