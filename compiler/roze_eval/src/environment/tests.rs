use pretty_assertions::assert_eq;
use roze_ir::SharedInterner;

use super::*;

#[test]
fn local_set_and_get() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let mut env = Environment::new();
    assert_eq!(env.get(x), Err(EnvError::Undefined));
    assert_eq!(env.set_local(x, Value::Int(1)), Ok(()));
    assert_eq!(env.set_local(x, Value::Int(2)), Ok(()));
    assert_eq!(env.get(x), Ok(Value::Int(2)));
}

#[test]
fn globals_are_write_once() {
    let interner = SharedInterner::default();
    let f = interner.intern("f");

    let mut env = Environment::new();
    assert_eq!(env.set_global(f, Value::Int(1)), Ok(()));
    assert_eq!(env.set_global(f, Value::Int(2)), Err(EnvError::DuplicateGlobal));
    assert_eq!(env.set_local(f, Value::Int(3)), Err(EnvError::GlobalReassignment));
    assert_eq!(env.get(f), Ok(Value::Int(1)));
}

#[test]
fn child_shares_globals_but_not_locals() {
    let interner = SharedInterner::default();
    let f = interner.intern("f");
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.set_global(f, Value::Bool(true)).ok();
    env.set_local(x, Value::Int(1)).ok();

    let mut child = env.child();
    assert_eq!(child.get(f), Ok(Value::Bool(true)));
    assert_eq!(child.lookup(x), None);

    child.set_local(x, Value::Int(2)).ok();
    assert_eq!(env.get(x), Ok(Value::Int(1)));
}

#[test]
fn globals_registered_later_are_visible_to_children() {
    let interner = SharedInterner::default();
    let f = interner.intern("f");

    let mut env = Environment::new();
    let child = env.child();
    env.set_global(f, Value::Int(9)).ok();
    assert!(child.is_global(f));
    assert_eq!(child.get(f), Ok(Value::Int(9)));
}
