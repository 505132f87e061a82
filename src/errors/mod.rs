//! Error types for lexical analysis.
//!
//! Tokenization has a single failure mode, an input character that no
//! token class accepts. This module defines:
//!
//! - `LexicalError`, the offending character with its byte position
//! - `ErrorTip`, an optional human-readable suggestion for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
