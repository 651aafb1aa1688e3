//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::{Location, Span};

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Value,
    pub span: Span,
    pub start: Location,
}
impl Token {
    /// The token's text, for every kind except the numeric literals.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} {}", self.kind, self.value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    Punctuation,
    Operator,
}

/// The fully decoded value of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Int(u64),
    Float(f64),
}
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{:?}", text),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{:?}", value),
        }
    }
}
impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}
impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}
impl From<char> for Value {
    fn from(ch: char) -> Self {
        Value::Text(ch.to_string())
    }
}
