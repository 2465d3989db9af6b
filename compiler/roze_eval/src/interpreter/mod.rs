//! Tree-walking interpreter for Roze.
//!
//! Evaluation goes through [`Interpreter::eval`], one `match` arm per
//! [`ExecKind`]. Helper modules hold the larger arms:
//!
//! - `call` - invocation and function application
//! - `pipeline` - `>>` pipelines and `a..b` range generators
//!
//! Every activation (function call or pipeline stage) runs in a fresh
//! [`Environment`] that shares only the global tier with its caller.

mod builder;
mod call;
mod pipeline;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use roze_ir::{Name, Span, StringInterner};
use roze_stack::ensure_sufficient_stack;

use crate::diagnostics::CallStack;
use crate::environment::EnvError;
use crate::errors::{
    binary_type_mismatch, duplicate_global, global_reassignment, invalid_operator, type_change,
    undefined_variable,
};
use crate::eval_mode::EvalMode;
use crate::exec::{ExecBlock, ExecKind, ExecNode, ProgramExecutable};
use crate::operators;
use crate::{Environment, EvalError, EvalResult, FunctionValue, Value};

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    mode: EvalMode,
    call_stack: CallStack,
    /// Laps any single pipeline may run; `None` for unlimited.
    max_laps: Option<usize>,
}

impl<'a> Interpreter<'a> {
    /// An `Interpret`-mode interpreter. Use [`InterpreterBuilder`] for
    /// anything else.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn mode(&self) -> &EvalMode {
        &self.mode
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn max_laps(&self) -> Option<usize> {
        self.max_laps
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.call_stack.max_depth()
    }

    /// Register the named functions as globals, then run the top-level
    /// block.
    ///
    /// Returns the last statement's value, or `None` for an empty program.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_program(&mut self, program: &ProgramExecutable) -> Result<Option<Value>, EvalError> {
        let mut env = Environment::new();
        for def in &program.functions {
            let Some(name) = def.name else {
                continue;
            };
            let value = Value::Function(FunctionValue::User(Rc::clone(def)));
            if env.set_global(name, value).is_err() {
                return Err(duplicate_global(self.name(name)).with_span(def.span));
            }
            tracing::debug!(function = self.name(name), "registered global");
        }
        self.eval_block(&program.block, &mut env)
    }

    /// Evaluate statements in order; the block's value is the last one's.
    pub fn eval_block(
        &mut self,
        block: &ExecBlock,
        env: &mut Environment,
    ) -> Result<Option<Value>, EvalError> {
        let mut last = None;
        for statement in &block.statements {
            last = Some(self.eval(statement, env)?);
        }
        Ok(last)
    }

    /// Evaluate one node.
    pub fn eval(&mut self, node: &ExecNode, env: &mut Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(node, env))
    }

    fn eval_inner(&mut self, node: &ExecNode, env: &mut Environment) -> EvalResult {
        let span = node.span;
        match &node.kind {
            ExecKind::Literal(value) => Ok(value.clone()),
            ExecKind::Identifier(name) => self.read(*name, env, span),
            ExecKind::Not(operand) => match self.eval(operand, env)? {
                Value::Bool(b) => Ok(Value::Bool(!b)),
                other => Err(invalid_operator("!", other.ty()).with_span(span)),
            },
            ExecKind::Negate(operand) => match self.eval(operand, env)? {
                Value::Int(n) => Ok(Value::Int(n.wrapping_neg())),
                Value::Float(x) => Ok(Value::Float(-x)),
                other => Err(invalid_operator("-", other.ty()).with_span(span)),
            },
            ExecKind::Binary {
                dispatch,
                left,
                right,
                ..
            }
            | ExecKind::Compare {
                dispatch,
                left,
                right,
                ..
            } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                dispatch
                    .apply(&left, &right)
                    .map_err(|err| err.with_span(span))
            }
            ExecKind::And(left, right) => match self.eval(left, env)? {
                Value::Bool(false) => Ok(Value::Bool(false)),
                Value::Bool(true) => self.eval(right, env),
                other => Err(invalid_operator("&&", other.ty()).with_span(span)),
            },
            ExecKind::Or(left, right) => match self.eval(left, env)? {
                Value::Bool(true) => Ok(Value::Bool(true)),
                Value::Bool(false) => self.eval(right, env),
                other => Err(invalid_operator("||", other.ty()).with_span(span)),
            },
            ExecKind::KeyValue { key, value } => {
                let key = self.eval(key, env)?;
                let value = self.eval(value, env)?;
                Ok(Value::key_value(key, value))
            }
            ExecKind::List(items) => {
                let values = items
                    .iter()
                    .map(|item| self.eval(item, env))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::list(values))
            }
            ExecKind::Series { from, to } => self.eval_series(from, to, env),
            ExecKind::Pipeline(stages) => self.eval_pipeline(stages, span, env),
            ExecKind::Assign { name, value } => self.eval_assign(*name, value, span, env),
            ExecKind::PlusAssign { name, value } => self.eval_plus_assign(*name, value, span, env),
            ExecKind::Function(def) => Ok(Value::Function(FunctionValue::User(Rc::clone(def)))),
            ExecKind::Invoke { name, args } => self.eval_invoke(*name, args, span, env),
        }
    }

    /// `name := value`.
    ///
    /// A variable keeps its runtime type: rebinding it to a value of another
    /// type fails.
    fn eval_assign(
        &mut self,
        name: Name,
        value: &ExecNode,
        span: Span,
        env: &mut Environment,
    ) -> EvalResult {
        let value = self.eval(value, env)?;
        // Globals are rejected by `bind` below.
        if !env.is_global(name) {
            if let Some(existing) = env.lookup(name) {
                if existing.ty() != value.ty() {
                    return Err(
                        type_change(self.name(name), existing.ty(), value.ty()).with_span(span)
                    );
                }
            }
        }
        self.bind(name, value.clone(), span, env)?;
        Ok(value)
    }

    /// `name += value`, through the `+` table.
    fn eval_plus_assign(
        &mut self,
        name: Name,
        value: &ExecNode,
        span: Span,
        env: &mut Environment,
    ) -> EvalResult {
        let current = self.read(name, env, span)?;
        let delta = self.eval(value, env)?;
        let ty = current.ty();
        if ty != delta.ty() {
            return Err(binary_type_mismatch("+=", ty, delta.ty()).with_span(span));
        }
        let Some(add) = operators::ADD.cell(ty) else {
            return Err(invalid_operator("+=", ty).with_span(span));
        };
        let updated = add(&current, &delta).map_err(|err| err.with_span(span))?;
        self.bind(name, updated.clone(), span, env)?;
        Ok(updated)
    }

    fn read(&self, name: Name, env: &Environment, span: Span) -> EvalResult {
        env.get(name)
            .map_err(|err| self.env_error(err, name).with_span(span))
    }

    fn bind(
        &self,
        name: Name,
        value: Value,
        span: Span,
        env: &mut Environment,
    ) -> Result<(), EvalError> {
        env.set_local(name, value)
            .map_err(|err| self.env_error(err, name).with_span(span))
    }

    fn env_error(&self, err: EnvError, name: Name) -> EvalError {
        let name = self.name(name);
        match err {
            EnvError::Undefined => undefined_variable(name),
            EnvError::GlobalReassignment => global_reassignment(name),
            EnvError::DuplicateGlobal => duplicate_global(name),
        }
    }

    #[inline]
    fn name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
