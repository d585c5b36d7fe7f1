//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

/// One classified lexeme: the exact source text it was built from,
/// plus its kind. `value` is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
}
impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.value)
    }
}

/// The closed set of token kinds. All four arithmetic operators share the
/// single [`TokenKind::BinaryOperator`] tag; the operator itself survives
/// only in the token's `value`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Identifier,
    Equals,
    OpenParen,
    CloseParen,
    BinaryOperator,
    Let,
}

/// Looks up a reserved word. Exact and case-sensitive, consulted only after
/// a full identifier run has been accumulated.
pub fn keyword(text: &str) -> Option<TokenKind> {
    match text {
        "let" => Some(TokenKind::Let),
        _ => None,
    }
}
