//! Functionality for converting a source code string into a [`Token`] stream.
mod char_ext;
mod cursor;
mod error;
mod lexer;

pub mod tokens;

pub use error::*;
pub use lexer::*;

#[allow(unused_imports, reason = "Docstring uses this")]
use tokens::Token;
