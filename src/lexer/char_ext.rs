//! Useful character extensions.
pub trait CharExt {
    /// Space, tab, line feed or carriage return.
    fn is_lex_whitespace(&self) -> bool;

    fn is_identifier_start(&self) -> bool;

    fn is_identifier_char(&self) -> bool;

    fn is_not_linebreak(&self) -> bool;
}
impl CharExt for char {
    fn is_lex_whitespace(&self) -> bool {
        matches!(*self, ' ' | '\t' | '\n' | '\r')
    }

    fn is_identifier_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }

    fn is_identifier_char(&self) -> bool {
        self.is_identifier_start() || self.is_ascii_digit()
    }

    fn is_not_linebreak(&self) -> bool {
        *self != '\n'
    }
}
