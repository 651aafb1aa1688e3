//! The language-specific symbol table that drives the tokenizer.
use std::collections::HashSet;

use log::debug;
use thiserror::Error;

/// The raw symbol configuration, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolConfig {
    pub keywords: Vec<String>,
    pub punctuation: Vec<String>,
    pub operators: Vec<String>,
    pub string_symbols: Vec<String>,
    pub sl_comment: String,
    pub ml_comment_start: String,
    pub ml_comment_end: String,
}

impl SymbolConfig {
    /// Builds a configuration from whitespace-separated symbol lists,
    /// e.g. `"if then else"` for the keywords.
    pub fn from_spaced(
        keywords: &str,
        punctuation: &str,
        operators: &str,
        string_symbols: &str,
        sl_comment: &str,
        ml_comment_start: &str,
        ml_comment_end: &str,
    ) -> Self {
        fn split(symbols: &str) -> Vec<String> {
            symbols.split_whitespace().map(str::to_string).collect()
        }

        Self {
            keywords: split(keywords),
            punctuation: split(punctuation),
            operators: split(operators),
            string_symbols: split(string_symbols),
            sl_comment: sl_comment.trim().to_string(),
            ml_comment_start: ml_comment_start.trim().to_string(),
            ml_comment_end: ml_comment_end.trim().to_string(),
        }
    }
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self::from_spaced(
            "if then else let def true false print",
            ", ; ( ) { } [ ]",
            "+ - * / % = & | < > >= && || <= !",
            "\" '",
            "//",
            "/*",
            "*/",
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("punctuation must be a single character, found '{0}'")]
    Punctuation(String),
    #[error("string delimiters must be a single character, found '{0}'")]
    StringDelimiter(String),
    #[error("empty {0} entry")]
    Empty(&'static str),
    #[error("{0} must be a single symbol, found '{1}'")]
    Marker(&'static str, String),
    #[error("{0} may not contain whitespace, found '{1}'")]
    Whitespace(&'static str, String),
    #[error("operator '{0}' is defined more than once")]
    DuplicateOperator(String),
}

/// Immutable lookup tables for keywords, punctuation, operators, string
/// delimiters and comment markers.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    keywords: HashSet<String>,
    punctuation: HashSet<char>,
    operators: HashSet<String>,
    operator_chars: HashSet<char>,
    string_delimiters: HashSet<char>,
    line_comment: String,
    block_comment_start: String,
    block_comment_end: String,
    longest_operator: usize,
}

impl SymbolTable {
    pub fn new(config: SymbolConfig) -> Result<Self, ConfigError> {
        let punctuation =
            single_chars("punctuation", config.punctuation, ConfigError::Punctuation)?;
        let string_delimiters = single_chars(
            "string delimiter",
            config.string_symbols,
            ConfigError::StringDelimiter,
        )?;

        let mut operators = HashSet::new();
        for operator in config.operators {
            if operator.is_empty() {
                return Err(ConfigError::Empty("operator"));
            }
            if has_whitespace(&operator) {
                return Err(ConfigError::Whitespace("operator", operator));
            }
            if operators.contains(&operator) {
                return Err(ConfigError::DuplicateOperator(operator));
            }
            operators.insert(operator);
        }

        let mut keywords = HashSet::new();
        for keyword in config.keywords {
            if keyword.is_empty() {
                return Err(ConfigError::Empty("keyword"));
            }
            if has_whitespace(&keyword) {
                return Err(ConfigError::Whitespace("keyword", keyword));
            }
            keywords.insert(keyword);
        }

        let operator_chars = operators.iter().flat_map(|op| op.chars()).collect();
        let longest_operator = operators
            .iter()
            .map(|op| op.chars().count())
            .max()
            .unwrap_or(0);

        let table = Self {
            keywords,
            punctuation,
            operators,
            operator_chars,
            string_delimiters,
            line_comment: marker("line comment marker", config.sl_comment)?,
            block_comment_start: marker("block comment start", config.ml_comment_start)?,
            block_comment_end: marker("block comment end", config.ml_comment_end)?,
            longest_operator,
        };

        debug!(
            "Symbol table: {} keywords, {} punctuation, {} operators (longest {})",
            table.keywords.len(),
            table.punctuation.len(),
            table.operators.len(),
            table.longest_operator
        );

        Ok(table)
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    pub fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation.contains(&ch)
    }

    pub fn is_string_delimiter(&self, ch: char) -> bool {
        self.string_delimiters.contains(&ch)
    }

    /// Checks whether `ch` occurs anywhere inside any operator.
    pub fn is_operator_char(&self, ch: char) -> bool {
        self.operator_chars.contains(&ch)
    }

    pub fn is_exact_operator(&self, text: &str) -> bool {
        self.operators.contains(text)
    }

    /// The length, in characters, of the longest operator.
    pub fn longest_operator_length(&self) -> usize {
        self.longest_operator
    }

    pub fn line_comment(&self) -> &str {
        &self.line_comment
    }

    pub fn block_comment_start(&self) -> &str {
        &self.block_comment_start
    }

    pub fn block_comment_end(&self) -> &str {
        &self.block_comment_end
    }
}

fn single_chars<F>(
    name: &'static str,
    entries: Vec<String>,
    error: F,
) -> Result<HashSet<char>, ConfigError>
where
    F: Fn(String) -> ConfigError,
{
    entries
        .into_iter()
        .map(|entry| {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_whitespace() => {
                    Err(ConfigError::Whitespace(name, entry))
                }
                (Some(ch), None) => Ok(ch),
                _ => Err(error(entry)),
            }
        })
        .collect()
}

fn has_whitespace(text: &str) -> bool {
    text.chars().any(char::is_whitespace)
}

fn marker(name: &'static str, text: String) -> Result<String, ConfigError> {
    if text.is_empty() {
        Err(ConfigError::Empty(name))
    } else if has_whitespace(&text) {
        Err(ConfigError::Marker(name, text))
    } else {
        Ok(text)
    }
}
