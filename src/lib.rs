//! A lexical scanner configured at runtime by a language's symbol table.
pub mod error;
pub mod lexer;
pub mod source_map;
pub mod span;
