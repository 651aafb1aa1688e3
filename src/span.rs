//! Contains the [`Chars`], [`Span`] and [`Location`] types, which describe source code positions.
use std::{
    fmt::{self, Debug, Display},
    ops::{Add, AddAssign, Sub},
};

/// An offset into the source text, counted in characters rather than bytes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Chars(usize);
impl Chars {
    pub fn new(pos: usize) -> Self {
        Self(pos)
    }
}
impl Display for Chars {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<Chars> for usize {
    fn from(chars: Chars) -> Self {
        chars.0
    }
}
impl AddAssign<usize> for Chars {
    fn add_assign(&mut self, rhs: usize) {
        *self = Self(self.0 + rhs)
    }
}
impl Add<usize> for Chars {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}
impl Sub<Chars> for Chars {
    type Output = Self;

    fn sub(self, rhs: Chars) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: Chars,
    end: Chars,
}
impl Span {
    pub fn new(start: Chars, end: Chars) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> Chars {
        self.end - self.start
    }

    /// Returns the characters covered by this span.
    pub fn lookup(&self, target: &str) -> String {
        target
            .chars()
            .skip(self.start.into())
            .take(self.length().into())
            .collect()
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A human-facing position: 1-based line, 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}
impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}
impl Default for Location {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
