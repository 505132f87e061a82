//! Unit tests for lexical errors.

use crate::errors::errors::{ErrorImpl, ErrorTip, LexicalError};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = LexicalError::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_character(), '@');
}

#[test]
fn test_error_position() {
    let error = LexicalError::unrecognised('#', Position(42));

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_display() {
    let error = LexicalError::unrecognised('#', Position(0));

    assert_eq!(error.to_string(), "unrecognised character '#' at offset 0");
}

#[test]
fn test_error_tip_for_printable_character() {
    let error = LexicalError::unrecognised('%', Position(3));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`%` does not start any token"),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_error_tip_for_non_ascii_character() {
    let error = LexicalError::unrecognised('λ', Position(0));

    assert_eq!(
        error.get_tip().to_string(),
        "'λ' is outside the accepted ASCII alphabet"
    );
}

#[test]
fn test_error_equality() {
    let a = LexicalError::unrecognised('#', Position(1));
    let b = LexicalError::new(ErrorImpl::UnrecognisedCharacter { character: '#' }, Position(1));
    let c = LexicalError::unrecognised('#', Position(2));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_error_tip_for_control_character() {
    let error = LexicalError::unrecognised('\r', Position(1));

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_position_beyond_u32_range() {
    let offset = u32::MAX as usize + 7;
    let error = LexicalError::unrecognised('#', Position(offset));

    assert_eq!(error.get_position().0, offset);
    assert_eq!(
        error.to_string(),
        format!("unrecognised character '#' at offset {}", offset)
    );
}
