use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The only failure `tokenize` can report: a character no token class
/// accepts, together with where it was found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at offset {}", .position.0)]
pub struct LexicalError {
    internal_error: ErrorImpl,
    position: Position,
}

impl LexicalError {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        LexicalError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn unrecognised(character: char, position: Position) -> Self {
        LexicalError::new(ErrorImpl::UnrecognisedCharacter { character }, position)
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_character(&self) -> char {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => *character,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } if character.is_control() => {
                ErrorTip::None
            }
            ErrorImpl::UnrecognisedCharacter { character } if character.is_ascii_graphic() => {
                ErrorTip::Suggestion(format!("`{}` does not start any token", character))
            }
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "{:?} is outside the accepted ASCII alphabet",
                character
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character {character:?}")]
    UnrecognisedCharacter { character: char },
}
