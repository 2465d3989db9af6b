//! Executable tree.
//!
//! The compiler lowers the parse tree into these nodes once; the interpreter
//! walks them. Nodes own their children and are immutable after
//! compilation. Function bodies are behind `Rc` so every function value made
//! from a literal shares the compiled body.

use std::fmt::{self, Write};
use std::rc::Rc;

use roze_ir::{BinaryOp, Name, Span, StringInterner};
use roze_types::{Type, TypeRegistry};

use crate::operators::Dispatch;
use crate::Value;

/// A compiled expression.
#[derive(Debug)]
pub struct ExecNode {
    pub kind: ExecKind,
    pub span: Span,
}

#[derive(Debug)]
pub enum ExecKind {
    Literal(Value),
    /// Variable read.
    Identifier(Name),
    Not(Box<ExecNode>),
    Negate(Box<ExecNode>),
    /// Table-dispatched arithmetic. `ty` is the left operand's compile-time
    /// type.
    Binary {
        op: BinaryOp,
        dispatch: Dispatch,
        ty: Type,
        left: Box<ExecNode>,
        right: Box<ExecNode>,
    },
    /// Table-dispatched comparison; always `Bool`.
    Compare {
        op: BinaryOp,
        dispatch: Dispatch,
        left: Box<ExecNode>,
        right: Box<ExecNode>,
    },
    And(Box<ExecNode>, Box<ExecNode>),
    Or(Box<ExecNode>, Box<ExecNode>),
    KeyValue {
        key: Box<ExecNode>,
        value: Box<ExecNode>,
    },
    List(Vec<ExecNode>),
    /// `from..to`.
    Series {
        from: Box<ExecNode>,
        to: Box<ExecNode>,
    },
    Pipeline(Vec<PipelineStage>),
    /// `name := value`.
    Assign {
        name: Name,
        value: Box<ExecNode>,
    },
    /// `name += value`.
    PlusAssign {
        name: Name,
        value: Box<ExecNode>,
    },
    /// Function literal, named or not.
    Function(Rc<FunctionDef>),
    Invoke {
        name: Name,
        args: Vec<ExecNode>,
    },
}

impl ExecNode {
    pub fn new(kind: ExecKind, span: Span) -> Self {
        ExecNode { kind, span }
    }

    /// The node's result type as far as the compiler can tell.
    pub fn ty(&self, registry: &TypeRegistry) -> Type {
        match &self.kind {
            ExecKind::Literal(value) => value.ty(),
            ExecKind::Identifier(name) => registry.type_of(*name),
            ExecKind::Negate(operand) => operand.ty(registry),
            ExecKind::Binary { ty, .. } => *ty,
            ExecKind::Not(_) | ExecKind::Compare { .. } | ExecKind::And(..) | ExecKind::Or(..) => {
                Type::Bool
            }
            ExecKind::KeyValue { .. } => Type::KeyValue,
            ExecKind::List(_) => Type::List,
            ExecKind::Assign { value, .. } | ExecKind::PlusAssign { value, .. } => {
                value.ty(registry)
            }
            ExecKind::Function(_) => Type::Function,
            ExecKind::Series { .. } | ExecKind::Pipeline(_) | ExecKind::Invoke { .. } => {
                Type::Unknown
            }
        }
    }

    /// Render as an s-expression.
    pub fn dump(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = Dumper { interner, out: &mut out }.node(self);
        out
    }
}

/// One operand of a `>>` chain.
#[derive(Debug)]
pub struct PipelineStage {
    pub node: ExecNode,
    /// Joined to the previous stage with `>>>`. Recorded only.
    pub complete: bool,
}

/// A sequence of statements; evaluates to its last statement.
#[derive(Debug, Default)]
pub struct ExecBlock {
    pub statements: Vec<ExecNode>,
    pub span: Span,
}

/// A compiled function literal.
#[derive(Debug)]
pub struct FunctionDef {
    /// `None` for an unnamed function.
    pub name: Option<Name>,
    pub params: Vec<Name>,
    pub body: ExecBlock,
    pub span: Span,
}

/// A whole compiled program.
#[derive(Debug, Default)]
pub struct ProgramExecutable {
    /// Top-level `fn name(...) { ... }` declarations, in source order.
    pub functions: Vec<Rc<FunctionDef>>,
    pub block: ExecBlock,
}

impl ProgramExecutable {
    /// The named functions and the top-level block, one tree per line.
    pub fn dump(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        let mut dumper = Dumper { interner, out: &mut out };
        let _ = dumper.functions(&self.functions);
        let _ = dumper.block(&self.block);
        out.push('\n');
        out
    }
}

struct Dumper<'a> {
    interner: &'a StringInterner,
    out: &'a mut String,
}

impl Dumper<'_> {
    fn name(&mut self, name: Name) -> fmt::Result {
        self.out.write_str(self.interner.lookup(name))
    }

    fn functions(&mut self, functions: &[Rc<FunctionDef>]) -> fmt::Result {
        self.out.write_str("(functions")?;
        for def in functions {
            self.out.write_str("\n  ")?;
            self.function(def)?;
        }
        self.out.write_str(")\n")
    }

    fn function(&mut self, def: &FunctionDef) -> fmt::Result {
        self.out.write_str("(fn ")?;
        if let Some(name) = def.name {
            self.name(name)?;
            self.out.write_char(' ')?;
        }
        self.out.write_str("(params")?;
        for param in &def.params {
            self.out.write_char(' ')?;
            self.name(*param)?;
        }
        self.out.write_str(") ")?;
        self.block(&def.body)?;
        self.out.write_char(')')
    }

    fn block(&mut self, block: &ExecBlock) -> fmt::Result {
        self.out.write_str("(block")?;
        for statement in &block.statements {
            self.out.write_char(' ')?;
            self.node(statement)?;
        }
        self.out.write_char(')')
    }

    fn list(&mut self, head: &str, nodes: &[&ExecNode]) -> fmt::Result {
        write!(self.out, "({head}")?;
        for node in nodes {
            self.out.write_char(' ')?;
            self.node(node)?;
        }
        self.out.write_char(')')
    }

    fn node(&mut self, node: &ExecNode) -> fmt::Result {
        match &node.kind {
            ExecKind::Literal(value) => match value {
                Value::Int(n) => write!(self.out, "(int {n})"),
                Value::Float(x) => write!(self.out, "(float {x:?})"),
                Value::Bool(b) => write!(self.out, "(bool {b})"),
                Value::Str(s) => write!(self.out, "(string {s:?})"),
                Value::Tag(name) => {
                    self.out.write_str("(tag ")?;
                    self.name(*name)?;
                    self.out.write_char(')')
                }
                other => write!(self.out, "(value {})", other.display(self.interner)),
            },
            ExecKind::Identifier(name) => {
                self.out.write_str("(ident ")?;
                self.name(*name)?;
                self.out.write_char(')')
            }
            ExecKind::Not(operand) => self.list("!", &[&**operand]),
            ExecKind::Negate(operand) => self.list("neg", &[&**operand]),
            ExecKind::Binary {
                op,
                dispatch,
                left,
                right,
                ..
            }
            | ExecKind::Compare {
                op,
                dispatch,
                left,
                right,
            } => {
                let head = if dispatch.is_deferred() {
                    format!("{}?", op.as_symbol())
                } else {
                    op.as_symbol().to_string()
                };
                self.list(&head, &[&**left, &**right])
            }
            ExecKind::And(left, right) => self.list("&&", &[&**left, &**right]),
            ExecKind::Or(left, right) => self.list("||", &[&**left, &**right]),
            ExecKind::KeyValue { key, value } => self.list("key-value", &[&**key, &**value]),
            ExecKind::List(items) => self.list("list", &items.iter().collect::<Vec<_>>()),
            ExecKind::Series { from, to } => self.list("series", &[&**from, &**to]),
            ExecKind::Pipeline(stages) => {
                self.out.write_str("(pipe")?;
                for (i, stage) in stages.iter().enumerate() {
                    if i > 0 {
                        self.out
                            .write_str(if stage.complete { " >>>" } else { " >>" })?;
                    }
                    self.out.write_char(' ')?;
                    self.node(&stage.node)?;
                }
                self.out.write_char(')')
            }
            ExecKind::Assign { name, value } | ExecKind::PlusAssign { name, value } => {
                let op = if matches!(node.kind, ExecKind::Assign { .. }) {
                    ":="
                } else {
                    "+="
                };
                write!(self.out, "({op} ")?;
                self.name(*name)?;
                self.out.write_char(' ')?;
                self.node(value)?;
                self.out.write_char(')')
            }
            ExecKind::Function(def) => self.function(def),
            ExecKind::Invoke { name, args } => {
                self.out.write_str("(call ")?;
                self.name(*name)?;
                for arg in args {
                    self.out.write_char(' ')?;
                    self.node(arg)?;
                }
                self.out.write_char(')')
            }
        }
    }
}
