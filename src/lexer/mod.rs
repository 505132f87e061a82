//! Lexical analysis.
//!
//! Converts text into a sequence of classified tokens using a fixed,
//! priority-ordered table of patterns:
//!
//! - Binary, octal and hexadecimal digit runs, tried in that order
//! - ASCII identifiers
//! - Single-character operators and parentheses
//! - Whitespace, which is consumed and never emitted
//!
//! Any other character is a lexical error.

pub mod lexer;
pub mod rules;
pub mod tokens;
