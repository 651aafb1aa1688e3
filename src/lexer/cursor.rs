use crate::span::{Chars, Location, Span};

use super::error::{ErrorType, LexError};

/// Owns the source text and a read position into it, tracking the line and
/// column of that position as characters are consumed.
///
/// Lookahead is done by offset rather than by cloning, since the cursor owns
/// its input and is not cheap to copy.
pub struct Cursor {
    chars: Vec<char>,
    position: Chars,
    location: Location,
}

/// A snapshot of the cursor's position, used to point errors and tokens back
/// to where they started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub position: Chars,
    pub location: Location,
}

impl Cursor {
    /// Constructs a new [`Cursor`] for the given source string,
    /// starting at line 1, column 0.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: Chars::new(0),
            location: Location::default(),
        }
    }

    /// Consumes and returns the current character, or [`None`] if the cursor
    /// is already at the end of its input. Consuming `\n` moves to the next
    /// line and resets the column.
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.location.line += 1;
            self.location.column = 0;
        } else {
            self.location.column += 1;
        }
        Some(ch)
    }

    /// Returns the current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Returns the character `offset` positions ahead without consuming
    /// anything. Returns [`None`] past the end of the input.
    pub fn peek_nth(&self, offset: usize) -> Option<char> {
        self.chars.get(usize::from(self.position) + offset).copied()
    }

    pub fn eof(&self) -> bool {
        self.peek().is_none()
    }

    pub fn position(&self) -> Chars {
        self.position
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            location: self.location,
        }
    }

    /// Checks whether the input continues with `text`, without consuming it.
    pub fn starts_with(&self, text: &str) -> bool {
        !text.is_empty()
            && text
                .chars()
                .enumerate()
                .all(|(offset, ch)| self.peek_nth(offset) == Some(ch))
    }

    /// Collects up to `count` characters ahead of the cursor without consuming them.
    pub fn lookahead(&self, count: usize) -> String {
        (0..count).map_while(|offset| self.peek_nth(offset)).collect()
    }

    /// Peeks at the next character, and consumes it if it matches the provided character.
    /// Returns true if the character was consumed, false otherwise.
    pub fn recognise(&mut self, character: char) -> bool {
        if self.peek() == Some(character) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consumes up to `count` characters, stopping early at the end of the input.
    pub fn consume(&mut self, count: usize) {
        for _ in 0..count {
            if self.next().is_none() {
                break;
            }
        }
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns a [`String`] containing the consumed characters.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> String
    where
        P: FnMut(&char) -> bool,
    {
        let mut matches = String::new();
        while let Some(ch) = self.peek() {
            if !predicate(&ch) {
                break;
            }
            matches.push(ch);
            self.next();
        }
        matches
    }

    /// Builds a [`LexError`] for the `length` characters starting at the
    /// current position.
    pub fn report_error(&self, length: usize, error_type: ErrorType) -> LexError {
        self.report_error_at(self.mark(), length, error_type)
    }

    /// Builds a [`LexError`] for the `length` characters starting at `mark`.
    pub fn report_error_at(&self, mark: Mark, length: usize, error_type: ErrorType) -> LexError {
        LexError {
            location: mark.location,
            span: Span::new(mark.position, mark.position + length),
            error_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\ncd");

        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.location(), Location::new(1, 1));
        cursor.next();
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.location(), Location::new(2, 0));
        assert_eq!(cursor.next(), Some('c'));
        assert_eq!(cursor.location(), Location::new(2, 1));
        assert_eq!(cursor.position(), Chars::new(4));
    }

    #[test]
    fn carriage_return_is_a_regular_column() {
        let mut cursor = Cursor::new("\r\n");

        cursor.next();
        assert_eq!(cursor.location(), Location::new(1, 1));
        cursor.next();
        assert_eq!(cursor.location(), Location::new(2, 0));
    }

    #[test]
    fn next_at_end_of_input_is_a_no_op() {
        let mut cursor = Cursor::new("x");

        cursor.next();
        assert!(cursor.eof());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), Chars::new(1));
        assert_eq!(cursor.location(), Location::new(1, 1));
    }

    #[test]
    fn peek_nth_looks_past_the_current_character() {
        let cursor = Cursor::new("/*");

        assert_eq!(cursor.peek(), Some('/'));
        assert_eq!(cursor.peek_nth(1), Some('*'));
        assert_eq!(cursor.peek_nth(2), None);
        assert_eq!(cursor.position(), Chars::new(0));
    }

    #[test]
    fn starts_with_does_not_consume() {
        let cursor = Cursor::new("*/ rest");

        assert!(cursor.starts_with("*/"));
        assert!(!cursor.starts_with("*/ rest and more"));
        assert!(!cursor.starts_with(""));
        assert_eq!(cursor.peek(), Some('*'));
    }

    #[test]
    fn lookahead_stops_at_end_of_input() {
        let cursor = Cursor::new(">=");

        assert_eq!(cursor.lookahead(1), ">");
        assert_eq!(cursor.lookahead(5), ">=");
    }

    #[test]
    fn consume_while_collects_matches() {
        let mut cursor = Cursor::new("123abc");

        assert_eq!(cursor.consume_while(char::is_ascii_digit), "123");
        assert_eq!(cursor.peek(), Some('a'));
    }

    #[test]
    fn recognise_only_consumes_on_match() {
        let mut cursor = Cursor::new("ab");

        assert!(!cursor.recognise('b'));
        assert!(cursor.recognise('a'));
        assert!(cursor.recognise('b'));
        assert!(!cursor.recognise('b'));
    }

    #[test]
    fn report_error_uses_current_location() {
        let mut cursor = Cursor::new("a\n  $");
        cursor.consume(4);

        let error = cursor.report_error(1, ErrorType::UnrecognizedSymbol("$".to_string()));

        assert_eq!(error.location, Location::new(2, 2));
        assert_eq!(error.span, Span::new(Chars::new(4), Chars::new(5)));
    }
}
