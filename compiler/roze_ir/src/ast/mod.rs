//! Parse tree.
//!
//! One node type per precedence level, from [`Program`] down to [`Base`].
//! Every binary level is stored as a first operand followed by a list of
//! `(operator, operand)` pairs, so the compiler folds them left to right.

mod operators;

pub use operators::{AssignOp, BinaryOp, LogicalOp, PipeOp, UnaryOp};

use crate::{Name, Span, Spanned};

/// A whole source file.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub commands: Vec<Command>,
    pub span: Span,
}

/// A top-level command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `fn name(params) { ... }`, only allowed at the top level.
    NamedFunction(NamedFunction),
    Expression(Expression),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedFunction {
    pub name: Name,
    pub name_span: Span,
    pub params: Vec<Param>,
    pub body: Block,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Param {
    pub name: Name,
    pub span: Span,
}

/// `fn(params) { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct UnnamedFunction {
    pub params: Vec<Param>,
    pub body: Block,
    pub span: Span,
}

/// `{ statement; statement }`
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub statements: Vec<Expression>,
    pub span: Span,
}

/// An expression statement.
///
/// `assignment` is `None` for an empty expression such as `()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub assignment: Option<Box<Assignment>>,
    pub span: Span,
}

/// An operator together with its right-hand operand.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation<O, T> {
    pub op: O,
    pub operand: T,
    pub span: Span,
}

/// `pipe (':=' | '+=') pipe`
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub pipe: Pipe,
    pub operation: Option<Operation<AssignOp, Pipe>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    pub first: Logical,
    pub rest: Vec<Operation<PipeOp, Logical>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Logical {
    pub first: Comparison,
    pub rest: Vec<Operation<LogicalOp, Comparison>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub first: Series,
    pub rest: Vec<Operation<BinaryOp, Series>>,
    pub span: Span,
}

/// `from ('..' to)?`
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub from: KeyValue,
    pub to: Option<KeyValue>,
    pub span: Span,
}

/// `key (':' value)?`
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue {
    pub key: Addition,
    pub value: Option<Addition>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Addition {
    pub first: Multiplication,
    pub rest: Vec<Operation<BinaryOp, Multiplication>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Multiplication {
    pub first: Unary,
    pub rest: Vec<Operation<BinaryOp, Unary>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Unary {
    pub kind: UnaryKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UnaryKind {
    Op { op: UnaryOp, operand: Box<Unary> },
    Base(Base),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Base {
    pub kind: BaseKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BaseKind {
    Bool(bool),
    Float(f64),
    Integer(i64),
    /// Tag word, interned with its leading `#`.
    Tag(Name),
    Ident(Name),
    Str(String),
    /// `( expression )`
    Subexpression(Box<Expression>),
    /// `[ expression, ... ]`
    List(Vec<Expression>),
    UnnamedFunction(Box<UnnamedFunction>),
    /// `name(args)`
    Invocation { name: Name, args: Vec<Expression> },
}

macro_rules! impl_spanned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Spanned for $ty {
                #[inline]
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

impl_spanned!(
    Program,
    NamedFunction,
    Param,
    UnnamedFunction,
    Block,
    Expression,
    Assignment,
    Pipe,
    Logical,
    Comparison,
    Series,
    KeyValue,
    Addition,
    Multiplication,
    Unary,
    Base,
);

impl<O, T> Spanned for Operation<O, T> {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Command {
    fn span(&self) -> Span {
        match self {
            Command::NamedFunction(function) => function.span,
            Command::Expression(expression) => expression.span,
        }
    }
}

#[cfg(test)]
mod tests;
