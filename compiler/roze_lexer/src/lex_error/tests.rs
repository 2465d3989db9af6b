use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_codes_by_kind() {
    let span = Span::new(0, 1);
    assert_eq!(
        LexErrorKind::InvalidCharacter.to_diagnostic(span, "@").code,
        ErrorCode::E0002
    );
    assert_eq!(
        LexErrorKind::UnterminatedString.to_diagnostic(span, "\"").code,
        ErrorCode::E0001
    );
    assert_eq!(
        LexErrorKind::InvalidNumber.to_diagnostic(span, "99").code,
        ErrorCode::E0003
    );
    assert_eq!(
        LexErrorKind::InvalidEscape.to_diagnostic(span, "\"\\q\"").code,
        ErrorCode::E0004
    );
}

#[test]
fn test_invalid_character_quotes_slice() {
    let diag = LexErrorKind::InvalidCharacter.to_diagnostic(Span::new(3, 4), "@");
    assert_eq!(diag.message, "invalid character `@`");
}
