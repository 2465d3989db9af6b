//! Runtime values.
//!
//! Values are immutable once built. Compound values share their contents
//! through `Rc`, so cloning a list or a function is a reference-count bump.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use roze_ir::{Name, StringInterner};
use roze_types::Type;

use crate::exec::FunctionDef;

/// A Roze runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    Str(Rc<str>),
    /// Interned bare word, including its leading `#`.
    Tag(Name),
    List(Rc<[Value]>),
    KeyValue(Rc<(Value, Value)>),
    /// A name reference. Never the result of evaluating a program.
    Identifier(Name),
    Function(FunctionValue),
}

impl Value {
    #[inline]
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::from(items))
    }

    #[inline]
    pub fn key_value(key: Value, value: Value) -> Self {
        Value::KeyValue(Rc::new((key, value)))
    }

    /// The `#null` tag.
    #[inline]
    pub const fn null() -> Self {
        Value::Tag(Name::NULL)
    }

    pub fn ty(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::Float(_) => Type::Float,
            Value::Int(_) => Type::Integer,
            Value::Str(_) => Type::String,
            Value::Tag(_) => Type::Tag,
            Value::List(_) => Type::List,
            Value::KeyValue(_) => Type::KeyValue,
            Value::Identifier(_) => Type::Identifier,
            Value::Function(_) => Type::Function,
        }
    }

    /// The sentinel tag this value is, if any.
    #[inline]
    pub fn as_sentinel(&self) -> Option<Name> {
        match self {
            Value::Tag(name) if name.is_sentinel() => Some(*name),
            _ => None,
        }
    }

    /// Render the value, resolving interned names through `interner`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
        }
    }
}

/// [`Value`] paired with the interner needed to print it.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{}\"", s.escape_debug()),
            Value::Tag(name) | Value::Identifier(name) => {
                f.write_str(self.interner.lookup(*name))
            }
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item.display(self.interner))?;
                }
                f.write_str("]")
            }
            Value::KeyValue(pair) => write!(
                f,
                "{}: {}",
                pair.0.display(self.interner),
                pair.1.display(self.interner)
            ),
            Value::Function(FunctionValue::User(def)) => match def.name {
                Some(name) => write!(f, "<fn {}/{}>", self.interner.lookup(name), def.params.len()),
                None => write!(f, "<fn/{}>", def.params.len()),
            },
            Value::Function(FunctionValue::Range(range)) => {
                let cursor = range.cursor.get();
                write!(f, "<range {}..{}>", cursor.next, cursor.to)
            }
        }
    }
}

/// Something that can be applied: a compiled function or a range generator.
#[derive(Clone, Debug)]
pub enum FunctionValue {
    User(Rc<FunctionDef>),
    Range(RangeGenerator),
}

impl FunctionValue {
    /// Declared parameter names, in order.
    pub fn params(&self) -> &[Name] {
        match self {
            FunctionValue::User(def) => &def.params,
            FunctionValue::Range(_) => &[],
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params().len()
    }
}

/// Function values compare by identity.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FunctionValue::User(a), FunctionValue::User(b)) => Rc::ptr_eq(a, b),
            (FunctionValue::Range(a), FunctionValue::Range(b)) => Rc::ptr_eq(&a.cursor, &b.cursor),
            _ => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct RangeCursor {
    next: i64,
    to: i64,
    done: bool,
}

/// Zero-parameter generator produced by `from..to` over integers.
///
/// Each application yields the cursor and steps it towards `to`; after `to`
/// it yields `#complete` forever. Clones share the cursor.
#[derive(Clone, Debug)]
pub struct RangeGenerator {
    cursor: Rc<Cell<RangeCursor>>,
}

impl RangeGenerator {
    pub fn new(from: i64, to: i64) -> Self {
        RangeGenerator {
            cursor: Rc::new(Cell::new(RangeCursor {
                next: from,
                to,
                done: false,
            })),
        }
    }

    /// Yield the next value and advance.
    pub fn next_value(&self) -> Value {
        let mut cursor = self.cursor.get();
        if cursor.done {
            return Value::Tag(Name::COMPLETE);
        }
        let current = cursor.next;
        if current == cursor.to {
            cursor.done = true;
        } else if current < cursor.to {
            cursor.next = current.wrapping_add(1);
        } else {
            cursor.next = current.wrapping_sub(1);
        }
        self.cursor.set(cursor);
        Value::Int(current)
    }
}

#[cfg(test)]
mod tests;
