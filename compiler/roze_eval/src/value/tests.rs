use pretty_assertions::{assert_eq, assert_ne};
use roze_ir::{Name, StringInterner};
use roze_types::Type;

use super::*;

#[test]
fn range_counts_up_then_completes() {
    let range = RangeGenerator::new(1, 3);
    let drained: Vec<Value> = (0..5).map(|_| range.next_value()).collect();
    assert_eq!(
        drained,
        vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::Tag(Name::COMPLETE),
            Value::Tag(Name::COMPLETE),
        ]
    );
}

#[test]
fn range_counts_down() {
    let range = RangeGenerator::new(2, 0);
    let drained: Vec<Value> = (0..4).map(|_| range.next_value()).collect();
    assert_eq!(
        drained,
        vec![
            Value::Int(2),
            Value::Int(1),
            Value::Int(0),
            Value::Tag(Name::COMPLETE),
        ]
    );
}

#[test]
fn range_single_element() {
    let range = RangeGenerator::new(7, 7);
    assert_eq!(range.next_value(), Value::Int(7));
    assert_eq!(range.next_value(), Value::Tag(Name::COMPLETE));
}

#[test]
fn range_at_integer_limit_does_not_overflow() {
    let range = RangeGenerator::new(i64::MAX - 1, i64::MAX);
    assert_eq!(range.next_value(), Value::Int(i64::MAX - 1));
    assert_eq!(range.next_value(), Value::Int(i64::MAX));
    assert_eq!(range.next_value(), Value::Tag(Name::COMPLETE));
}

#[test]
fn range_clones_share_cursor() {
    let range = RangeGenerator::new(1, 2);
    let copy = range.clone();
    assert_eq!(range.next_value(), Value::Int(1));
    assert_eq!(copy.next_value(), Value::Int(2));
    assert_eq!(range.next_value(), Value::Tag(Name::COMPLETE));
}

#[test]
fn functions_compare_by_identity() {
    let a = FunctionValue::Range(RangeGenerator::new(1, 2));
    let b = FunctionValue::Range(RangeGenerator::new(1, 2));
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn value_types() {
    assert_eq!(Value::Int(1).ty(), Type::Integer);
    assert_eq!(Value::Float(1.0).ty(), Type::Float);
    assert_eq!(Value::string("s").ty(), Type::String);
    assert_eq!(Value::null().ty(), Type::Tag);
    assert_eq!(Value::list(vec![]).ty(), Type::List);
    assert_eq!(
        Value::key_value(Value::string("k"), Value::Int(1)).ty(),
        Type::KeyValue
    );
    assert_eq!(
        Value::Function(FunctionValue::Range(RangeGenerator::new(0, 1))).ty(),
        Type::Function
    );
}

#[test]
fn sentinels() {
    let interner = StringInterner::new();
    let other = interner.intern("#done");
    assert_eq!(Value::Tag(Name::BREAK).as_sentinel(), Some(Name::BREAK));
    assert_eq!(Value::Tag(other).as_sentinel(), None);
    assert_eq!(Value::Int(0).as_sentinel(), None);
}

#[test]
fn display() {
    let interner = StringInterner::new();
    let value = Value::list(vec![
        Value::Int(1),
        Value::Float(2.0),
        Value::string("a\"b"),
        Value::Tag(Name::COMPLETE),
        Value::key_value(Value::string("k"), Value::Bool(true)),
    ]);
    assert_eq!(
        value.display(&interner).to_string(),
        r#"[1, 2.0, "a\"b", #complete, "k": true]"#
    );
    let range = Value::Function(FunctionValue::Range(RangeGenerator::new(1, 4)));
    assert_eq!(range.display(&interner).to_string(), "<range 1..4>");
}
