use crate::span::{Chars, Location, Span};

/// An error that points at a position in the source text.
pub trait PositionalError {
    fn location(&self) -> Location;
    fn range(&self) -> Span;
    fn describe(&self) -> String;

    fn length(&self) -> Chars {
        self.range().length()
    }
}
