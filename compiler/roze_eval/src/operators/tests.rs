use pretty_assertions::assert_eq;
use proptest::prelude::*;
use roze_ir::{BinaryOp, Name};
use roze_types::Type;

use super::*;
use crate::EvalErrorKind;

fn apply(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    resolve_deferred(table_for(op), left, right)
}

#[test]
fn cells_match_the_operator_matrix() {
    let supported = |op: BinaryOp| -> Vec<Type> {
        Type::ALL
            .into_iter()
            .filter(|ty| table_for(op).supports(*ty))
            .collect()
    };
    assert_eq!(
        supported(BinaryOp::Add),
        vec![Type::Float, Type::Integer, Type::String]
    );
    for op in [BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
        assert_eq!(supported(op), vec![Type::Float, Type::Integer]);
    }
    assert_eq!(supported(BinaryOp::Mod), vec![Type::Integer]);
    for op in [BinaryOp::Eq, BinaryOp::NotEq] {
        assert_eq!(
            supported(op),
            vec![Type::Tag, Type::Bool, Type::Float, Type::Integer, Type::String]
        );
    }
    for op in [BinaryOp::Lt, BinaryOp::LtEq, BinaryOp::Gt, BinaryOp::GtEq] {
        assert_eq!(supported(op), vec![Type::Float, Type::Integer, Type::String]);
    }
}

#[test]
fn table_for_matches_op() {
    for op in [BinaryOp::Add, BinaryOp::Mod, BinaryOp::GtEq] {
        assert_eq!(table_for(op).op(), op);
    }
}

#[test]
fn arithmetic() {
    assert_eq!(
        apply(BinaryOp::Add, &Value::Int(1), &Value::Int(2)),
        Ok(Value::Int(3))
    );
    assert_eq!(
        apply(BinaryOp::Add, &Value::Float(1.5), &Value::Float(2.5)),
        Ok(Value::Float(4.0))
    );
    assert_eq!(
        apply(BinaryOp::Add, &Value::string("a"), &Value::string("b")),
        Ok(Value::string("ab"))
    );
    assert_eq!(
        apply(BinaryOp::Div, &Value::Int(7), &Value::Int(2)),
        Ok(Value::Int(3))
    );
    assert_eq!(
        apply(BinaryOp::Mod, &Value::Int(-7), &Value::Int(3)),
        Ok(Value::Int(-1))
    );
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(
        apply(BinaryOp::Add, &Value::Int(i64::MAX), &Value::Int(1)),
        Ok(Value::Int(i64::MIN))
    );
    assert_eq!(
        apply(BinaryOp::Div, &Value::Int(i64::MIN), &Value::Int(-1)),
        Ok(Value::Int(i64::MIN))
    );
}

#[test]
fn division_by_zero() {
    let err = apply(BinaryOp::Div, &Value::Int(1), &Value::Int(0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    let err = apply(BinaryOp::Mod, &Value::Int(1), &Value::Int(0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::ModuloByZero);
    assert_eq!(
        apply(BinaryOp::Div, &Value::Float(1.0), &Value::Float(0.0)),
        Ok(Value::Float(f64::INFINITY))
    );
}

#[test]
fn comparisons() {
    assert_eq!(
        apply(BinaryOp::Lt, &Value::string("a"), &Value::string("b")),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        apply(BinaryOp::Eq, &Value::Tag(Name::COMPLETE), &Value::Tag(Name::COMPLETE)),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        apply(BinaryOp::NotEq, &Value::Bool(true), &Value::Bool(false)),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        apply(BinaryOp::GtEq, &Value::Float(2.0), &Value::Float(2.0)),
        Ok(Value::Bool(true))
    );
}

#[test]
fn deferred_rejects_mixed_types() {
    let err = apply(BinaryOp::Add, &Value::Int(1), &Value::string("a")).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::BinaryTypeMismatch {
            op: "+",
            left: Type::Integer,
            right: Type::String,
        }
    );
}

#[test]
fn deferred_rejects_missing_cell() {
    let err = apply(BinaryOp::Sub, &Value::string("a"), &Value::string("b")).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidOperator {
            op: "-",
            ty: Type::String,
        }
    );
    let err = apply(BinaryOp::Lt, &Value::Bool(true), &Value::Bool(false)).unwrap_err();
    assert_eq!(err.kind.error_code(), roze_diagnostic::ErrorCode::E6003);
}

#[test]
fn deferred_rejects_identifiers() {
    let interner = roze_ir::StringInterner::new();
    let x = Value::Identifier(interner.intern("x"));
    let err = apply(BinaryOp::Eq, &x, &x).unwrap_err();
    assert_eq!(err.kind.error_code(), roze_diagnostic::ErrorCode::E6002);
}

#[test]
fn direct_cell_checks_operands() {
    let Some(cell) = ADD.cell(Type::Integer) else {
        panic!("int + int must have a cell");
    };
    let dispatch = Dispatch::Direct(cell);
    assert!(!dispatch.is_deferred());
    assert_eq!(
        dispatch.apply(&Value::Int(2), &Value::Int(3)),
        Ok(Value::Int(5))
    );
    let err = dispatch
        .apply(&Value::Int(2), &Value::Float(3.0))
        .unwrap_err();
    assert_eq!(err.kind.error_code(), roze_diagnostic::ErrorCode::E6002);
}

proptest! {
    #[test]
    fn int_arithmetic_matches_wrapping(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(
            apply(BinaryOp::Add, &Value::Int(a), &Value::Int(b)),
            Ok(Value::Int(a.wrapping_add(b)))
        );
        prop_assert_eq!(
            apply(BinaryOp::Sub, &Value::Int(a), &Value::Int(b)),
            Ok(Value::Int(a.wrapping_sub(b)))
        );
        prop_assert_eq!(
            apply(BinaryOp::Mul, &Value::Int(a), &Value::Int(b)),
            Ok(Value::Int(a.wrapping_mul(b)))
        );
    }

    #[test]
    fn int_comparison_matches_native(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(
            apply(BinaryOp::Lt, &Value::Int(a), &Value::Int(b)),
            Ok(Value::Bool(a < b))
        );
        prop_assert_eq!(
            apply(BinaryOp::Eq, &Value::Int(a), &Value::Int(b)),
            Ok(Value::Bool(a == b))
        );
    }
}
