//! Source parsing.

pub mod parser;
