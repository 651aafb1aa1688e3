//! Functionality for converting a source code string into a [`Token`](tokens::Token) stream.
mod char_ext;
mod cursor;
mod error;
mod lexer;
mod symbols;

pub mod tokens;

pub use cursor::{Cursor, Mark};
pub use error::{ErrorType, LexError};
pub use lexer::*;
pub use symbols::{ConfigError, SymbolConfig, SymbolTable};
