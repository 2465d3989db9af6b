use super::*;
use pretty_assertions::assert_eq;

#[test]
fn labels_and_notes_accumulate_in_order() {
    let diag = Diagnostic::error(ErrorCode::E2007)
        .with_message("duplicate parameter `a`")
        .with_label(Span::new(9, 10), "declared again here")
        .with_secondary_label(Span::new(6, 7), "first declared here")
        .with_note("parameter names must be unique");

    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary());
    assert_eq!(diag.labels[1].style, LabelStyle::Secondary);
    assert_eq!(diag.primary_span(), Some(Span::new(9, 10)));
    assert_eq!(diag.notes, vec!["parameter names must be unique"]);
}

#[test]
fn no_primary_span_without_primary_label() {
    let diag = Diagnostic::warning(ErrorCode::E2005).with_secondary_label(Span::new(1, 2), "x");
    assert_eq!(diag.primary_span(), None);
    assert!(!diag.is_error());
}

#[test]
fn display_lists_labels_then_notes() {
    let diag = Diagnostic::error(ErrorCode::E2003)
        .with_message("cannot assign to this expression")
        .with_label(Span::new(0, 3), "not an identifier")
        .with_secondary_label(Span::new(4, 6), "assignment")
        .with_note("only names can be assigned");

    assert_eq!(
        diag.to_string(),
        "error[E2003]: cannot assign to this expression\n  at 0..3: not an identifier\n  \
         see 4..6: assignment\n  note: only names can be assigned"
    );
}

#[test]
fn type_mismatch_names_both_types() {
    let diag = type_mismatch(Span::new(0, 7), "int", "string", "operands differ");
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.message, "mismatched operand types: int and string");
    assert_eq!(diag.primary_span(), Some(Span::new(0, 7)));
}
