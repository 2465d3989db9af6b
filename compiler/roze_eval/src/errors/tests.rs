use pretty_assertions::assert_eq;
use roze_diagnostic::ErrorCode;
use roze_ir::Span;
use roze_types::Type;

use super::*;

#[test]
fn messages() {
    assert_eq!(
        undefined_variable("x").message(),
        "variable `x` used before assignment"
    );
    assert_eq!(
        binary_type_mismatch("+", Type::Integer, Type::String).message(),
        "operator `+` applied to mismatched types int and string"
    );
    assert_eq!(
        arity_mismatch("f", 1, 2).message(),
        "`f` expects 1 arguments, got 2"
    );
    assert_eq!(
        stage_arity(2, 0).message(),
        "pipeline stage 2 must take exactly 1 parameter, it takes 0"
    );
}

#[test]
fn codes_are_runtime_codes() {
    let errors = [
        undefined_variable("x"),
        global_reassignment("f"),
        duplicate_global("f"),
        type_change("x", Type::Integer, Type::String),
        binary_type_mismatch("-", Type::Float, Type::Integer),
        invalid_operator("%", Type::Float),
        division_by_zero(),
        modulo_by_zero(),
        not_callable("x", Type::Integer),
        arity_mismatch("f", 0, 1),
        recursion_limit_exceeded(500),
        stage_not_function(0, Type::Integer),
        stage_arity(1, 2),
        lap_limit_exceeded(10),
    ];
    for err in &errors {
        assert!(err.kind.error_code().is_runtime_error(), "{err}");
    }
    assert_eq!(division_by_zero().kind.error_code(), ErrorCode::E6010);
    assert_eq!(lap_limit_exceeded(3).kind.error_code(), ErrorCode::E6013);
}

#[test]
fn first_span_wins() {
    let err = division_by_zero()
        .with_span(Span::new(4, 9))
        .with_span(Span::new(0, 20));
    assert_eq!(err.span, Some(Span::new(4, 9)));
}

#[test]
fn diagnostic_carries_label_and_backtrace() {
    let backtrace = EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "inner".to_string(),
            span: Some(Span::new(30, 37)),
        },
        BacktraceFrame {
            name: "outer".to_string(),
            span: Some(Span::new(50, 57)),
        },
    ]);
    let diag = undefined_variable("y")
        .with_span(Span::new(12, 13))
        .with_backtrace(backtrace)
        .to_diagnostic();

    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.message, "variable `y` used before assignment");
    assert_eq!(diag.primary_span(), Some(Span::new(12, 13)));
    assert_eq!(
        diag.notes,
        vec!["call stack:\n  0: inner at 30..37\n  1: outer at 50..57".to_string()]
    );
}

#[test]
fn empty_backtrace_adds_no_note() {
    let diag = modulo_by_zero()
        .with_backtrace(EvalBacktrace::default())
        .to_diagnostic();
    assert!(diag.notes.is_empty());
    assert!(diag.labels.is_empty());
}
