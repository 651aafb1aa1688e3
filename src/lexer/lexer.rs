//! Turns source text into a stream of [`Token`]s, driven by a [`SymbolTable`].
use log::{debug, trace};

use crate::span::Span;

use super::{char_ext::*, cursor::*, error::*, symbols::*, tokens::*};

type LexResult<T> = Result<T, LexError>;

/// Pulls tokens out of a single source text, one at a time.
///
/// Holds at most one token of lookahead. The first error halts the
/// tokenizer: that call returns the error, and every later call behaves as
/// if the input were exhausted.
pub struct Tokenizer<'t> {
    cursor: Cursor,
    symbols: &'t SymbolTable,
    peeked: Option<Token>,
    halted: bool,
}

/// Tokenizes `source` in one go.
pub fn lex(source: &str, symbols: &SymbolTable) -> LexResult<Vec<Token>> {
    Tokenizer::new(source, symbols).collect()
}

impl<'t> Tokenizer<'t> {
    pub fn new(source: &str, symbols: &'t SymbolTable) -> Self {
        Self {
            cursor: Cursor::new(source),
            symbols,
            peeked: None,
            halted: false,
        }
    }

    /// Returns the next token without consuming it.
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn peek(&mut self) -> LexResult<Option<&Token>> {
        if self.peeked.is_none() {
            self.peeked = self.scan_one()?;
        }
        Ok(self.peeked.as_ref())
    }

    /// Consumes and returns the next token.
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn next(&mut self) -> LexResult<Option<Token>> {
        match self.peeked.take() {
            Some(token) => Ok(Some(token)),
            None => self.scan_one(),
        }
    }

    pub fn eof(&mut self) -> LexResult<bool> {
        Ok(self.peek()?.is_none())
    }

    fn scan_one(&mut self) -> LexResult<Option<Token>> {
        if self.halted {
            return Ok(None);
        }
        let result = self.read_next();
        if result.is_err() {
            self.halted = true;
        }
        result
    }

    fn read_next(&mut self) -> LexResult<Option<Token>> {
        self.skip_whitespace_and_comments()?;

        let Some(ch) = self.cursor.peek() else {
            return Ok(None);
        };
        let start = self.cursor.mark();

        let (kind, value) = if self.symbols.is_string_delimiter(ch) {
            self.string_literal(start, ch)?
        } else if ch.is_ascii_digit() {
            self.number_literal(start)?
        } else if ch.is_identifier_start() {
            self.identifier()
        } else if self.symbols.is_punctuation(ch) {
            self.cursor.next();
            (TokenKind::Punctuation, Value::from(ch))
        } else if self.symbols.is_operator_char(ch) {
            self.operator(start)?
        } else {
            return Err(self
                .cursor
                .report_error(1, ErrorType::UnrecognizedSymbol(ch.to_string())));
        };

        let token = Token {
            kind,
            value,
            span: Span::new(start.position, self.cursor.position()),
            start: start.location,
        };
        trace!("{}: {}", token.start, token);
        Ok(Some(token))
    }

    /// Skips whitespace and comments until neither applies any more.
    fn skip_whitespace_and_comments(&mut self) -> LexResult<()> {
        let symbols = self.symbols;
        loop {
            self.cursor.consume_while(CharExt::is_lex_whitespace);

            if self.cursor.starts_with(symbols.line_comment()) {
                self.skip_line_comment();
            } else if self.cursor.starts_with(symbols.block_comment_start()) {
                self.skip_block_comment()?;
            } else {
                return Ok(());
            }
        }
    }

    /// Skips up to and including the next line break, or to the end of the input.
    fn skip_line_comment(&mut self) {
        let line = self.cursor.location().line;
        self.cursor.consume_while(CharExt::is_not_linebreak);
        self.cursor.recognise('\n');
        debug!("Skipped line comment on line {line}");
    }

    /// Skips a block comment, including both of its markers.
    /// Block comments do not nest.
    fn skip_block_comment(&mut self) -> LexResult<()> {
        let symbols = self.symbols;
        let start = self.cursor.mark();
        let opening = symbols.block_comment_start().chars().count();
        let closing = symbols.block_comment_end();

        self.cursor.consume(opening);
        loop {
            if self.cursor.starts_with(closing) {
                self.cursor.consume(closing.chars().count());
                debug!(
                    "Skipped block comment from {} to {}",
                    start.location,
                    self.cursor.location()
                );
                return Ok(());
            }
            if self.cursor.next().is_none() {
                return Err(self.cursor.report_error_at(
                    start,
                    opening,
                    ErrorType::UnterminatedBlockComment,
                ));
            }
        }
    }

    /// Reads a string up to the next unescaped occurrence of its opening
    /// delimiter. A backslash makes the character after it literal.
    fn string_literal(&mut self, start: Mark, delimiter: char) -> LexResult<(TokenKind, Value)> {
        self.cursor.next();

        let mut value = String::new();
        loop {
            let ch = match self.cursor.next() {
                Some('\\') => self.cursor.next(),
                Some(ch) if ch == delimiter => break,
                other => other,
            };
            match ch {
                Some(ch) => value.push(ch),
                None => {
                    let length = self.cursor.position() - start.position;
                    return Err(self.cursor.report_error_at(
                        start,
                        length.into(),
                        ErrorType::UnterminatedString,
                    ));
                }
            }
        }

        Ok((TokenKind::StringLiteral, Value::Text(value)))
    }

    /// Reads digits with at most one decimal point. A second point ends the number.
    fn number_literal(&mut self, start: Mark) -> LexResult<(TokenKind, Value)> {
        let mut seen_dot = false;
        let text = self.cursor.consume_while(|&ch| match ch {
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            ch => ch.is_ascii_digit(),
        });

        let parsed = if seen_dot {
            text.parse::<f64>()
                .map(|value| (TokenKind::FloatLiteral, Value::Float(value)))
                .map_err(|err| err.to_string())
        } else {
            text.parse::<u64>()
                .map(|value| (TokenKind::IntLiteral, Value::Int(value)))
                .map_err(|err| err.to_string())
        };

        parsed.map_err(|reason| {
            self.cursor.report_error_at(
                start,
                text.chars().count(),
                ErrorType::InvalidNumber(format!("{text} ({reason})")),
            )
        })
    }

    fn identifier(&mut self) -> (TokenKind, Value) {
        let text = self.cursor.consume_while(CharExt::is_identifier_char);

        if self.symbols.is_keyword(&text) {
            (TokenKind::Keyword, Value::Text(text))
        } else {
            (TokenKind::Identifier, Value::Text(text))
        }
    }

    /// Reads the longest operator starting at the current position.
    ///
    /// The whole run of operator characters is tried first. If it is not an
    /// operator by itself, shorter windows from the same start are tried,
    /// longest first, since the run may hold several adjacent operators.
    fn operator(&mut self, start: Mark) -> LexResult<(TokenKind, Value)> {
        let symbols = self.symbols;

        let run = (0..)
            .take_while(|&offset| {
                self.cursor
                    .peek_nth(offset)
                    .is_some_and(|ch| symbols.is_operator_char(ch))
            })
            .count();

        let greedy = self.cursor.lookahead(run);
        if symbols.is_exact_operator(&greedy) {
            self.cursor.consume(run);
            return Ok((TokenKind::Operator, Value::Text(greedy)));
        }

        let longest = run.min(symbols.longest_operator_length());
        for length in (1..=longest).rev() {
            let window = self.cursor.lookahead(length);
            if symbols.is_exact_operator(&window) {
                self.cursor.consume(length);
                return Ok((TokenKind::Operator, Value::Text(window)));
            }
        }

        Err(self
            .cursor
            .report_error_at(start, run, ErrorType::UnrecognizedSymbol(greedy)))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        Tokenizer::next(self).transpose()
    }
}
