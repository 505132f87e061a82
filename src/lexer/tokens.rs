use std::fmt::Display;

use crate::Span;

/// Token categories, declared in matching-priority order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Binary,
    Octal,
    Hexadecimal,
    Identifier,

    Plus,
    Minus,
    Star,
    Slash,

    LParen,
    RParen,

    Whitespace,
    Unknown,
}

impl TokenKind {
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Binary,
        TokenKind::Octal,
        TokenKind::Hexadecimal,
        TokenKind::Identifier,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Whitespace,
        TokenKind::Unknown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Binary => "BINARY",
            TokenKind::Octal => "OCTAL",
            TokenKind::Hexadecimal => "HEXADECIMAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Numeric classes only match up to a word boundary.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TokenKind::Binary | TokenKind::Octal | TokenKind::Hexadecimal
        )
    }

    /// Whether a match of this kind ends up in the token stream.
    pub fn is_emitted(&self) -> bool {
        !matches!(self, TokenKind::Whitespace | TokenKind::Unknown)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Binary,
            TokenKind::Octal,
            TokenKind::Hexadecimal,
            TokenKind::Identifier,
        ]) {
            format!(
                "{} ({}) @ {}..{}",
                self.kind, self.value, self.span.start.0, self.span.end.0
            )
        } else {
            format!("{} @ {}..{}", self.kind, self.span.start.0, self.span.end.0)
        }
    }
}
