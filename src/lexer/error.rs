use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, span::*};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorType {
    #[error("Unexpected symbol: {0}")]
    UnrecognizedSymbol(String),
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated block comment")]
    UnterminatedBlockComment,
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
}

/// A fatal scanning error. Tokenization stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub location: Location,
    pub span: Span,
    pub error_type: ErrorType,
}

impl LexError {
    pub fn length(&self) -> Chars {
        self.span.length()
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.error_type, self.location.line, self.location.column
        )
    }
}

impl PositionalError for LexError {
    fn location(&self) -> Location {
        self.location
    }

    fn range(&self) -> Span {
        self.span
    }

    fn describe(&self) -> String {
        self.error_type.to_string()
    }
}
