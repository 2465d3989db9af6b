use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_matches_as_str() {
    assert_eq!(ErrorCode::E2004.to_string(), "E2004");
    assert_eq!(ErrorCode::E6014.as_str(), "E6014");
}

#[test]
fn test_phase_classification() {
    assert!(ErrorCode::E0001.is_lexer_error());
    assert!(ErrorCode::E1003.is_parser_error());
    assert!(ErrorCode::E2007.is_compile_error());
    assert!(ErrorCode::E6010.is_runtime_error());
    assert!(!ErrorCode::E6010.is_compile_error());
}
