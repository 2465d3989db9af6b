use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_unclosed_points_at_both_ends() {
    let open = Token::new(TokenKind::LBracket, Span::new(0, 1));
    let found = Token::new(TokenKind::Eof, Span::point(6));
    let diag = ParseError::unclosed(open, found).to_diagnostic();

    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.primary_span(), Some(Span::point(6)));
    assert_eq!(diag.labels[1].span, Span::new(0, 1));
    assert_eq!(diag.labels[0].message, "expected `]`");
}

#[test]
fn test_help_becomes_note() {
    let diag = ParseError::nested_named_function(Span::new(4, 10)).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1005);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.labels[0].message, "here");
}
