//! Compile diagnostics.
//!
//! The compiler never stops at the first problem: each of these is pushed
//! onto the pass's [`CompileErrors`](roze_diagnostic::CompileErrors) and
//! compilation continues with a substitute node.

use roze_diagnostic::{Diagnostic, ErrorCode};
use roze_ir::Span;
use roze_types::Type;

/// Operands of a binary operator have different concrete types.
#[cold]
pub(crate) fn operand_mismatch(span: Span, op: &str, left: Type, right: Type) -> Diagnostic {
    roze_diagnostic::type_mismatch(
        span,
        left.name(),
        right.name(),
        &format!("operands of `{op}` must have the same type"),
    )
}

/// Operator has no implementation for the operand type.
#[cold]
pub(crate) fn invalid_operator(span: Span, op: &str, ty: Type) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message(format!("operator `{op}` is not defined for {ty}"))
        .with_label(span, format!("`{op}` applied to {ty}"))
}

/// `&&`/`||` whose left operand is not statically `bool`.
#[cold]
pub(crate) fn non_bool_logical(span: Span, op: &str, ty: Type) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message(format!("operator `{op}` requires a bool left operand, found {ty}"))
        .with_label(span, "expected bool")
}

#[cold]
pub(crate) fn invalid_assignment_target(span: Span, op: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2003)
        .with_message(format!("left-hand side of `{op}` must be a variable name"))
        .with_label(span, "cannot assign to this")
}

#[cold]
pub(crate) fn type_change(span: Span, name: &str, existing: Type, new: Type) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2004)
        .with_message(format!(
            "cannot change type of `{name}` from {existing} to {new}"
        ))
        .with_label(span, format!("this is {new}"))
        .with_note(format!("`{name}` was first assigned a {existing}"))
}

#[cold]
pub(crate) fn empty_expression(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2005)
        .with_message("expression is empty")
        .with_label(span, "expected an expression here")
}

#[cold]
pub(crate) fn invalid_key(span: Span, ty: Type) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2006)
        .with_message(format!("key-value key must be a string, found {ty}"))
        .with_label(span, "expected string")
}

#[cold]
pub(crate) fn duplicate_parameter(span: Span, first: Span, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2007)
        .with_message(format!("parameter `{name}` is declared more than once"))
        .with_label(span, "duplicate parameter")
        .with_secondary_label(first, "first declared here")
}
