use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_line_lookup() {
    let source = "a\nbb\nccc";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(2), 2);
    assert_eq!(table.line_from_offset(3), 2);
    assert_eq!(table.line_from_offset(5), 3);
}

#[test]
fn test_columns_count_characters() {
    let source = "s := \"é\" + x";
    let table = LineOffsetTable::build(source);
    // 'x' is the 12th character but starts at byte 12.
    assert_eq!(table.offset_to_line_col(source, 12), (1, 12));
}

#[test]
fn test_line_text_strips_newline() {
    let source = "first\r\nsecond\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("first"));
    assert_eq!(table.line_text(source, 2), Some("second"));
    assert_eq!(table.line_text(source, 0), None);
}

#[test]
fn test_line_number_helper() {
    assert_eq!(line_number("x\ny\nz", Span::new(4, 5)), 3);
}
