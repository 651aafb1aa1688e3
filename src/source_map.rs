//! Functionality for looking up lines of source code by line number.
use crate::span::{Chars, Span};

/// Finds the line with the given 1-based line number.
/// Lines are separated by `\n` only, matching how the cursor counts them.
pub fn find_line(source: &str, line_no: usize) -> Option<LineContext<'_>> {
    let mut position = Chars::new(0);
    for (line_idx, line) in inclusive_split_lines(source).into_iter().enumerate() {
        let end_position = position + line.chars().count();
        if line_idx + 1 == line_no {
            return Some(LineContext {
                source: line,
                range: Span::new(position, end_position),
                line_no,
            });
        }
        position = end_position;
    }
    None
}

fn inclusive_split_lines(source: &str) -> Vec<&str> {
    let mut seen_lines = vec![];
    let mut start = 0;

    for (position, ch) in source.char_indices() {
        if ch == '\n' {
            let end = position + ch.len_utf8();
            seen_lines.push(&source[start..end]);
            start = end;
        }
    }
    seen_lines.push(&source[start..]);

    seen_lines
}

/// Contains a slice pointing to a single line in the program,
/// enhanced with contextual information describing its line number and character range.
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn range(&self) -> Span {
        self.range
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}
