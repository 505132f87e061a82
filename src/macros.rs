//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a kind, lexeme and byte range

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The matched lexeme
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
///
/// # Example
///
/// ```
/// use radix_lexer::{lexer::tokens::TokenKind, MK_TOKEN};
///
/// let token = MK_TOKEN!(TokenKind::Binary, "101".to_string(), 0, 3);
/// assert_eq!(token.to_string(), "<BINARY, 101>");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $start:expr, $end:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $crate::Span {
                start: $crate::Position($start),
                end: $crate::Position($end),
            },
        }
    };
}
