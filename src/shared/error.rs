use crate::prelude::*;
use crate::config::LineNumber;
use crate::frontend::parser::error::ParseError;
use crate::bytecode::runtime::error::RuntimeError;

/// An error generated while reading, parsing or executing a program.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    RuntimeError(#[from] RuntimeError),
    #[error("Error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// 1-based source line the error is attributed to, if any.
    pub fn line(self: &Self) -> Option<LineNumber> {
        match self {
            Self::ParseError(e) => Some(e.line()),
            Self::RuntimeError(e) => Some(e.line()),
            Self::IoError(_) => None,
        }
    }
}
