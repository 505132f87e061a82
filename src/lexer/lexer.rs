use tracing::{debug, trace, warn};

use crate::{errors::errors::LexicalError, Position, MK_TOKEN};

use super::{
    rules::{is_word_char, RULES},
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos)
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Picks the rule that classifies the text at the current offset and
    /// returns its kind with the match length in bytes, or `None` at end of
    /// input.
    ///
    /// Rules are tried in priority order and the first acceptable match wins.
    /// A numeric match is only acceptable when it ends on a word boundary;
    /// otherwise it is remembered, and the longest such run is used when
    /// nothing but `Unknown` is left to match.
    pub fn select_rule(&self) -> Option<(TokenKind, usize)> {
        let remaining = self.remainder();
        let mut truncated: Option<(TokenKind, usize)> = None;

        for rule in RULES.iter() {
            let Some(len) = rule.match_len(remaining) else {
                continue;
            };

            if rule.kind.is_numeric() && remaining[len..].starts_with(is_word_char) {
                if truncated.map_or(true, |(_, best)| len > best) {
                    truncated = Some((rule.kind, len));
                }
                continue;
            }

            if rule.kind == TokenKind::Unknown {
                if let Some(numeric) = truncated {
                    return Some(numeric);
                }
            }

            return Some((rule.kind, len));
        }

        // `Unknown` matches any character, so only an empty remainder gets here.
        None
    }

    /// Consumes one match at the current offset.
    ///
    /// On an unrecognised character the offset is left unchanged. At end of
    /// input this does nothing.
    pub fn step(&mut self) -> Result<(), LexicalError> {
        let (Some(current), Some((kind, len))) = (self.at(), self.select_rule()) else {
            return Ok(());
        };
        let lexeme = &self.remainder()[..len];

        trace!(offset = self.pos, %kind, lexeme, "matched");

        match kind {
            TokenKind::Whitespace => {
                self.advance_n(len);
                Ok(())
            }
            TokenKind::Unknown => Err(LexicalError::unrecognised(current, self.position())),
            kind => {
                self.push(MK_TOKEN!(kind, lexeme.to_string(), self.pos, self.pos + len));
                self.advance_n(len);
                Ok(())
            }
        }
    }
}

/// Splits `source` into tokens, dropping whitespace.
///
/// Fails on the first character no token class accepts; no partial result
/// is returned in that case.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    debug!(len = source.len(), "tokenizing input");

    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        if let Err(error) = lex.step() {
            debug!(%error, "tokenizing failed");
            return Err(error);
        }
    }

    debug!(tokens = lex.tokens.len(), "tokenized input");
    Ok(lex.into_tokens())
}

/// Like [`tokenize`], but skips each unrecognised character and keeps going,
/// collecting every error alongside the tokens that could be produced.
pub fn tokenize_recovering(source: &str) -> (Vec<Token>, Vec<LexicalError>) {
    debug!(len = source.len(), "tokenizing input with recovery");

    let mut lex = Lexer::new(source);
    let mut errors = vec![];

    while !lex.at_eof() {
        if let Err(error) = lex.step() {
            warn!(%error, "skipping unrecognised character");
            lex.advance_n(error.get_character().len_utf8());
            errors.push(error);
        }
    }

    debug!(
        tokens = lex.tokens.len(),
        errors = errors.len(),
        "tokenized input with recovery"
    );
    (lex.into_tokens(), errors)
}
