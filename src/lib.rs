#![allow(clippy::module_inception)]

use crate::errors::errors::{ErrorTip, LexicalError};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte offset into the analysed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns the 1-based line number, the text of that line and the 0-based
/// column (in characters) of `position` within `source`.
///
/// A position at the very end of the input resolves to the last line. A
/// position inside a multi-byte character resolves to that character.
pub fn line_and_column(source: &str, position: usize) -> (usize, String, usize) {
    let mut pos = position.min(source.len());
    while !source.is_char_boundary(pos) {
        pos -= 1;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = line[..pos - start].chars().count();
            return (line_number, line.trim_end_matches('\n').to_string(), column);
        }

        start = end;
        line_number += 1;
    }

    // End of input: either empty source or a trailing newline.
    let last = source[..pos].rsplit('\n').next().unwrap_or("");
    let line_number = source[..pos].matches('\n').count() + 1;
    (line_number, last.to_string(), last.chars().count())
}

/// Renders `error` against the input it came from:
///
/// ```text
/// Error: UnrecognisedCharacter (`#` does not start any token)
///  --> line 1, column 4
///   |
/// 1 | (5 # 3)
///   | ---^
/// ```
pub fn render_error(source: &str, error: &LexicalError) -> String {
    let (line, line_text, column) = line_and_column(source, error.get_position().0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let arrows = column + 1;

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    [
        header,
        format!(" --> line {}, column {}", line, column + 1),
        format!("{:>padding$}", "|"),
        format!("{} | {}", line_string, line_text),
        format!("{:>padding$} {:->arrows$}", "|", "^"),
    ]
    .join("\n")
}
