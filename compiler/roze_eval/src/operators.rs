//! Operator dispatch tables.
//!
//! Every table-driven operator has one [`OpTable`]: a fixed array of cells
//! indexed by [`Type`]. The compiler picks a cell when both operand types are
//! known ([`Dispatch::Direct`]) and falls back to [`Dispatch::Deferred`] when
//! either side is `Unknown`, in which case [`resolve_deferred`] chooses the
//! cell from the runtime values.
//!
//! Cells are:
//!
//! | op            | types                      |
//! |---------------|----------------------------|
//! | `+`           | float, int, string         |
//! | `- * /`       | float, int                 |
//! | `%`           | int                        |
//! | `== !=`       | bool, float, int, string, tag |
//! | `< <= > >=`   | float, int, string         |
//!
//! Integer arithmetic wraps. Integer `/` and `%` by zero are errors; float
//! division follows IEEE-754.

use std::fmt;

use roze_ir::BinaryOp;
use roze_types::Type;

use crate::errors::{binary_type_mismatch, division_by_zero, invalid_operator, modulo_by_zero};
use crate::{EvalResult, Value};

/// Implementation of one operator for one operand type.
pub type BinaryFn = fn(&Value, &Value) -> EvalResult;

/// Cells of one operator, indexed by the left operand's type.
pub struct OpTable {
    op: BinaryOp,
    cells: [Option<BinaryFn>; Type::COUNT],
}

impl OpTable {
    const fn new(op: BinaryOp, entries: &[(Type, BinaryFn)]) -> Self {
        let mut cells: [Option<BinaryFn>; Type::COUNT] = [None; Type::COUNT];
        let mut i = 0;
        while i < entries.len() {
            let (ty, cell) = entries[i];
            cells[ty.index()] = Some(cell);
            i += 1;
        }
        OpTable { op, cells }
    }

    #[inline]
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    /// The cell for `ty`, if the operator is defined for it.
    #[inline]
    pub fn cell(&self, ty: Type) -> Option<BinaryFn> {
        self.cells[ty.index()]
    }

    pub fn supports(&self, ty: Type) -> bool {
        self.cell(ty).is_some()
    }
}

impl fmt::Debug for OpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supported: Vec<Type> = Type::ALL
            .into_iter()
            .filter(|ty| self.supports(*ty))
            .collect();
        f.debug_struct("OpTable")
            .field("op", &self.op)
            .field("cells", &supported)
            .finish()
    }
}

/// How a compiled binary node applies its operator.
#[derive(Copy, Clone)]
pub enum Dispatch {
    /// Both operand types were known at compile time.
    Direct(BinaryFn),
    /// Pick the cell from the runtime operand types.
    Deferred(&'static OpTable),
}

impl Dispatch {
    pub fn apply(self, left: &Value, right: &Value) -> EvalResult {
        match self {
            Dispatch::Direct(cell) => cell(left, right),
            Dispatch::Deferred(table) => resolve_deferred(table, left, right),
        }
    }

    pub fn is_deferred(self) -> bool {
        matches!(self, Dispatch::Deferred(_))
    }
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::Direct(_) => f.write_str("Direct"),
            Dispatch::Deferred(table) => write!(f, "Deferred({})", table.op.as_symbol()),
        }
    }
}

/// Apply `table` to operands whose types were not known at compile time.
///
/// Both values must have the same type, and that type must have a cell.
/// Identifiers are never valid operands.
pub fn resolve_deferred(table: &OpTable, left: &Value, right: &Value) -> EvalResult {
    let (lt, rt) = (left.ty(), right.ty());
    let symbol = table.op.as_symbol();
    if lt != rt || lt == Type::Identifier {
        return Err(binary_type_mismatch(symbol, lt, rt));
    }
    match table.cell(lt) {
        Some(cell) => cell(left, right),
        None => Err(invalid_operator(symbol, lt)),
    }
}

/// The dispatch table for `op`.
pub fn table_for(op: BinaryOp) -> &'static OpTable {
    match op {
        BinaryOp::Add => &ADD,
        BinaryOp::Sub => &SUB,
        BinaryOp::Mul => &MUL,
        BinaryOp::Div => &DIV,
        BinaryOp::Mod => &MOD,
        BinaryOp::Eq => &EQ,
        BinaryOp::NotEq => &NOT_EQ,
        BinaryOp::Lt => &LT,
        BinaryOp::LtEq => &LT_EQ,
        BinaryOp::Gt => &GT,
        BinaryOp::GtEq => &GT_EQ,
    }
}

// Tables

pub static ADD: OpTable = OpTable::new(
    BinaryOp::Add,
    &[
        (Type::Float, add_float as BinaryFn),
        (Type::Integer, add_int as BinaryFn),
        (Type::String, concat_str as BinaryFn),
    ],
);

pub static SUB: OpTable = OpTable::new(
    BinaryOp::Sub,
    &[(Type::Float, sub_float as BinaryFn), (Type::Integer, sub_int as BinaryFn)],
);

pub static MUL: OpTable = OpTable::new(
    BinaryOp::Mul,
    &[(Type::Float, mul_float as BinaryFn), (Type::Integer, mul_int as BinaryFn)],
);

pub static DIV: OpTable = OpTable::new(
    BinaryOp::Div,
    &[(Type::Float, div_float as BinaryFn), (Type::Integer, div_int as BinaryFn)],
);

pub static MOD: OpTable = OpTable::new(BinaryOp::Mod, &[(Type::Integer, mod_int as BinaryFn)]);

pub static EQ: OpTable = OpTable::new(
    BinaryOp::Eq,
    &[
        (Type::Bool, eq_bool as BinaryFn),
        (Type::Float, eq_float as BinaryFn),
        (Type::Integer, eq_int as BinaryFn),
        (Type::String, eq_str as BinaryFn),
        (Type::Tag, eq_tag as BinaryFn),
    ],
);

pub static NOT_EQ: OpTable = OpTable::new(
    BinaryOp::NotEq,
    &[
        (Type::Bool, ne_bool as BinaryFn),
        (Type::Float, ne_float as BinaryFn),
        (Type::Integer, ne_int as BinaryFn),
        (Type::String, ne_str as BinaryFn),
        (Type::Tag, ne_tag as BinaryFn),
    ],
);

pub static LT: OpTable = OpTable::new(
    BinaryOp::Lt,
    &[
        (Type::Float, lt_float as BinaryFn),
        (Type::Integer, lt_int as BinaryFn),
        (Type::String, lt_str as BinaryFn),
    ],
);

pub static LT_EQ: OpTable = OpTable::new(
    BinaryOp::LtEq,
    &[
        (Type::Float, le_float as BinaryFn),
        (Type::Integer, le_int as BinaryFn),
        (Type::String, le_str as BinaryFn),
    ],
);

pub static GT: OpTable = OpTable::new(
    BinaryOp::Gt,
    &[
        (Type::Float, gt_float as BinaryFn),
        (Type::Integer, gt_int as BinaryFn),
        (Type::String, gt_str as BinaryFn),
    ],
);

pub static GT_EQ: OpTable = OpTable::new(
    BinaryOp::GtEq,
    &[
        (Type::Float, ge_float as BinaryFn),
        (Type::Integer, ge_int as BinaryFn),
        (Type::String, ge_str as BinaryFn),
    ],
);

// Cells
//
// A cell accepts only operands of its own type; any other pair is a type
// mismatch.

#[cold]
fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> crate::EvalError {
    binary_type_mismatch(op.as_symbol(), left.ty(), right.ty())
}

/// Define cells over one operand variant: `name(a, b) => result`.
macro_rules! cells {
    ($variant:ident: $($op:ident $name:ident($a:ident, $b:ident) => $body:expr;)*) => {
        $(
            fn $name(left: &Value, right: &Value) -> EvalResult {
                match (left, right) {
                    (Value::$variant($a), Value::$variant($b)) => $body,
                    _ => Err(mismatch(BinaryOp::$op, left, right)),
                }
            }
        )*
    };
}

cells! { Int:
    Add add_int(a, b) => Ok(Value::Int(a.wrapping_add(*b)));
    Sub sub_int(a, b) => Ok(Value::Int(a.wrapping_sub(*b)));
    Mul mul_int(a, b) => Ok(Value::Int(a.wrapping_mul(*b)));
    Div div_int(a, b) => if *b == 0 {
        Err(division_by_zero())
    } else {
        Ok(Value::Int(a.wrapping_div(*b)))
    };
    Mod mod_int(a, b) => if *b == 0 {
        Err(modulo_by_zero())
    } else {
        Ok(Value::Int(a.wrapping_rem(*b)))
    };
    Eq eq_int(a, b) => Ok(Value::Bool(a == b));
    NotEq ne_int(a, b) => Ok(Value::Bool(a != b));
    Lt lt_int(a, b) => Ok(Value::Bool(a < b));
    LtEq le_int(a, b) => Ok(Value::Bool(a <= b));
    Gt gt_int(a, b) => Ok(Value::Bool(a > b));
    GtEq ge_int(a, b) => Ok(Value::Bool(a >= b));
}

cells! { Float:
    Add add_float(a, b) => Ok(Value::Float(a + b));
    Sub sub_float(a, b) => Ok(Value::Float(a - b));
    Mul mul_float(a, b) => Ok(Value::Float(a * b));
    Div div_float(a, b) => Ok(Value::Float(a / b));
    Eq eq_float(a, b) => Ok(Value::Bool(a == b));
    NotEq ne_float(a, b) => Ok(Value::Bool(a != b));
    Lt lt_float(a, b) => Ok(Value::Bool(a < b));
    LtEq le_float(a, b) => Ok(Value::Bool(a <= b));
    Gt gt_float(a, b) => Ok(Value::Bool(a > b));
    GtEq ge_float(a, b) => Ok(Value::Bool(a >= b));
}

cells! { Str:
    Add concat_str(a, b) => Ok(Value::string(&format!("{a}{b}")));
    Eq eq_str(a, b) => Ok(Value::Bool(a == b));
    NotEq ne_str(a, b) => Ok(Value::Bool(a != b));
    Lt lt_str(a, b) => Ok(Value::Bool(a < b));
    LtEq le_str(a, b) => Ok(Value::Bool(a <= b));
    Gt gt_str(a, b) => Ok(Value::Bool(a > b));
    GtEq ge_str(a, b) => Ok(Value::Bool(a >= b));
}

cells! { Bool:
    Eq eq_bool(a, b) => Ok(Value::Bool(a == b));
    NotEq ne_bool(a, b) => Ok(Value::Bool(a != b));
}

cells! { Tag:
    Eq eq_tag(a, b) => Ok(Value::Bool(a == b));
    NotEq ne_tag(a, b) => Ok(Value::Bool(a != b));
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
