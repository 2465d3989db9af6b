//! Function invocation and application.

use smallvec::SmallVec;

use roze_ir::{Name, Span};

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::errors::{arity_mismatch, not_callable};
use crate::exec::ExecNode;
use crate::{Environment, EvalResult, FunctionValue, Value};

impl Interpreter<'_> {
    /// `name(args...)`.
    ///
    /// Arguments are evaluated in the caller's environment and bound to the
    /// parameters in a fresh one, so the callee sees globals and its own
    /// parameters only.
    pub(super) fn eval_invoke(
        &mut self,
        name: Name,
        args: &[ExecNode],
        span: Span,
        env: &mut Environment,
    ) -> EvalResult {
        let function = match self.read(name, env, span)? {
            Value::Function(function) => function,
            other => return Err(not_callable(self.name(name), other.ty()).with_span(span)),
        };
        if function.arity() != args.len() {
            return Err(
                arity_mismatch(self.name(name), function.arity(), args.len()).with_span(span),
            );
        }

        let mut values: SmallVec<[Value; 4]> = SmallVec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg, env)?);
        }

        let mut local = env.child();
        for (&param, value) in function.params().iter().zip(values) {
            self.bind(param, value, span, &mut local)?;
        }

        self.call_stack
            .push(CallFrame {
                name,
                call_span: Some(span),
            })
            .map_err(|err| err.with_span(span))?;
        tracing::debug!(
            function = self.name(name),
            depth = self.call_stack.depth(),
            "invoke"
        );
        let result = self
            .apply(&function, &mut local)
            .map_err(|err| self.call_stack.attach_backtrace(err, self.interner));
        self.call_stack.pop();
        result
    }

    /// Run `function` in `env`, which already holds its parameters.
    ///
    /// A function whose body is empty evaluates to `#null`.
    pub fn apply(&mut self, function: &FunctionValue, env: &mut Environment) -> EvalResult {
        match function {
            FunctionValue::User(def) => Ok(self
                .eval_block(&def.body, env)?
                .unwrap_or_else(Value::null)),
            FunctionValue::Range(range) => Ok(range.next_value()),
        }
    }
}
