use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::TokenKind;

/// A token class: the kind it produces and the pattern that recognises it.
///
/// Patterns are anchored, so a match always starts at the current offset.
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: TokenKind,
    regex: Regex,
}

impl Rule {
    fn new(kind: TokenKind, pattern: &str) -> Rule {
        Rule {
            kind,
            regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
        }
    }

    /// Length in bytes of the greedy match at the start of `remaining`.
    pub fn match_len(&self, remaining: &str) -> Option<usize> {
        self.regex
            .find(remaining)
            .map(|m| m.end())
            .filter(|len| *len > 0)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

lazy_static! {
    /// Every token class in priority order, compiled once per process.
    pub static ref RULES: Vec<Rule> = vec![
        Rule::new(TokenKind::Binary, "[01]+"),
        Rule::new(TokenKind::Octal, "[0-7]+"),
        Rule::new(TokenKind::Hexadecimal, "[0-9A-F]+"),
        Rule::new(TokenKind::Identifier, "[a-zA-Z_][a-zA-Z0-9_]*"),
        Rule::new(TokenKind::Plus, "\\+"),
        Rule::new(TokenKind::Minus, "-"),
        Rule::new(TokenKind::Star, "\\*"),
        Rule::new(TokenKind::Slash, "/"),
        Rule::new(TokenKind::LParen, "\\("),
        Rule::new(TokenKind::RParen, "\\)"),
        Rule::new(TokenKind::Whitespace, "[ \\t\\n]+"),
        Rule::new(TokenKind::Unknown, "(?s:.)"),
    ];
}

/// Characters that may continue a word, numeric or identifier.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
