//! Pipelines and range generators.
//!
//! A pipeline `s0 >> s1 >> ... >> sn` evaluates each stage once to a
//! function value, then runs laps. In a lap, `s0` is applied with no
//! argument and each later stage receives the previous stage's result as its
//! single parameter. A sentinel tag (`#complete`, `#continue`, `#break`,
//! `#null`) abandons the rest of the lap. A lap that ends on `#complete`,
//! `#break` or `#null` ends the pipeline with that value; anything else,
//! `#continue` included, starts the next lap.

use smallvec::SmallVec;

use roze_ir::{Name, Span};

use super::Interpreter;
use crate::errors::{lap_limit_exceeded, stage_arity, stage_not_function};
use crate::exec::{ExecNode, PipelineStage};
use crate::value::RangeGenerator;
use crate::{Environment, EvalResult, FunctionValue, Value};

impl Interpreter<'_> {
    pub(super) fn eval_pipeline(
        &mut self,
        stages: &[PipelineStage],
        span: Span,
        env: &mut Environment,
    ) -> EvalResult {
        let mut functions: SmallVec<[FunctionValue; 4]> = SmallVec::with_capacity(stages.len());
        for (index, stage) in stages.iter().enumerate() {
            let function = match self.eval(&stage.node, env)? {
                Value::Function(function) => function,
                other => {
                    return Err(stage_not_function(index, other.ty()).with_span(stage.node.span))
                }
            };
            if index > 0 && function.arity() != 1 {
                return Err(stage_arity(index, function.arity()).with_span(stage.node.span));
            }
            functions.push(function);
        }

        let mut laps: usize = 0;
        loop {
            if let Some(limit) = self.max_laps {
                if laps >= limit {
                    return Err(lap_limit_exceeded(limit).with_span(span));
                }
            }
            laps += 1;
            let last = self.run_lap(&functions, span, env)?;
            tracing::debug!(lap = laps, result = %last.display(self.interner), "pipeline lap");
            if last.as_sentinel().is_some_and(Name::is_terminal) {
                return Ok(last);
            }
        }
    }

    /// One pass over the stages; returns the value the lap ended on.
    fn run_lap(
        &mut self,
        functions: &[FunctionValue],
        span: Span,
        env: &Environment,
    ) -> EvalResult {
        let mut last = Value::null();
        for (index, function) in functions.iter().enumerate() {
            let mut stage_env = env.child();
            if index > 0 {
                if let Some(&param) = function.params().first() {
                    let input = std::mem::replace(&mut last, Value::null());
                    self.bind(param, input, span, &mut stage_env)?;
                }
            }
            last = self.apply(function, &mut stage_env)?;
            if last.as_sentinel().is_some() {
                break;
            }
        }
        Ok(last)
    }

    /// `from..to`: a generator over integers, otherwise just `from`.
    pub(super) fn eval_series(
        &mut self,
        from: &ExecNode,
        to: &ExecNode,
        env: &mut Environment,
    ) -> EvalResult {
        let from = self.eval(from, env)?;
        let to = self.eval(to, env)?;
        match (&from, &to) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Function(FunctionValue::Range(
                RangeGenerator::new(*a, *b),
            ))),
            _ => Ok(from),
        }
    }
}
