use std::path::PathBuf;

use clap::{Args, Parser};
use symlex::lexer::SymbolConfig;

#[derive(Debug, Parser)]
#[command(about = "Splits a source file into tokens using a configurable symbol table")]
pub struct Options {
    /// The file to tokenize
    pub file: PathBuf,
    #[arg(short, long, default_value_t = 1)]
    pub verbose: usize,
    /// Only print the number of tokens
    #[arg(short, long)]
    pub count: bool,
    #[command(flatten)]
    pub symbols: SymbolOptions,
}

/// Overrides for the default symbol table. Each takes a space-separated list.
#[derive(Debug, Args)]
pub struct SymbolOptions {
    #[arg(long)]
    keywords: Option<String>,
    #[arg(long)]
    punctuation: Option<String>,
    #[arg(long)]
    operators: Option<String>,
    #[arg(long)]
    string_symbols: Option<String>,
    #[arg(long)]
    sl_comment: Option<String>,
    #[arg(long)]
    ml_comment_start: Option<String>,
    #[arg(long)]
    ml_comment_end: Option<String>,
}

impl SymbolOptions {
    pub fn config(&self) -> SymbolConfig {
        fn split(symbols: &str) -> Vec<String> {
            symbols.split_whitespace().map(str::to_string).collect()
        }

        let defaults = SymbolConfig::default();
        SymbolConfig {
            keywords: self.keywords.as_deref().map_or(defaults.keywords, split),
            punctuation: self.punctuation.as_deref().map_or(defaults.punctuation, split),
            operators: self.operators.as_deref().map_or(defaults.operators, split),
            string_symbols: self
                .string_symbols
                .as_deref()
                .map_or(defaults.string_symbols, split),
            sl_comment: self.sl_comment.clone().unwrap_or(defaults.sl_comment),
            ml_comment_start: self
                .ml_comment_start
                .clone()
                .unwrap_or(defaults.ml_comment_start),
            ml_comment_end: self.ml_comment_end.clone().unwrap_or(defaults.ml_comment_end),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_are_used_without_overrides() {
        let options = Options::parse_from(["symlex", "program.lang"]);

        assert_eq!(options.symbols.config(), SymbolConfig::default());
        assert_eq!(options.verbose, 1);
        assert!(!options.count);
    }

    #[test]
    fn overrides_replace_single_fields() {
        let options = Options::parse_from([
            "symlex",
            "--operators",
            "=> ==",
            "--sl-comment",
            "#",
            "program.lang",
        ]);
        let config = options.symbols.config();

        assert_eq!(config.operators, vec!["=>".to_string(), "==".to_string()]);
        assert_eq!(config.sl_comment, "#");
        assert_eq!(config.keywords, SymbolConfig::default().keywords);
    }
}
