use super::*;
use pretty_assertions::assert_eq;

fn base(kind: BaseKind, span: Span) -> Unary {
    Unary {
        kind: UnaryKind::Base(Base { kind, span }),
        span,
    }
}

#[test]
fn test_command_span_delegates() {
    let span = Span::new(3, 9);
    let command = Command::Expression(Expression {
        assignment: None,
        span,
    });
    assert_eq!(command.span(), span);
}

#[test]
fn test_operation_carries_operator_and_operand() {
    let operand = base(BaseKind::Integer(2), Span::new(4, 5));
    let operation = Operation {
        op: BinaryOp::Mul,
        operand,
        span: Span::new(2, 5),
    };
    assert_eq!(operation.op.as_symbol(), "*");
    assert_eq!(operation.operand.span(), Span::new(4, 5));
}

#[test]
fn test_comparison_classification() {
    assert!(BinaryOp::LtEq.is_comparison());
    assert!(!BinaryOp::Mod.is_comparison());
    assert_eq!(PipeOp::PipeComplete.as_symbol(), ">>>");
    assert_eq!(AssignOp::PlusAssign.as_symbol(), "+=");
}
