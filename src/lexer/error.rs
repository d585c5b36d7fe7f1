//! Lexing functions for constructing a token stream.
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::span::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorType {
    #[error("Unrecognized character found in source: {0:?}")]
    UnrecognizedCharacter(char),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub struct LexError {
    pub span: Span,
    pub error_type: ErrorType,
}

impl LexError {
    pub fn length(&self) -> Bytes {
        self.span.length()
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.error_type))
    }
}
