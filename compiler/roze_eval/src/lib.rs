//! Roze Eval - values, executable tree and interpreter.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime values, including function values
//!   and range generators
//! - [`operators`]: per-operator dispatch tables indexed by `Type`
//! - [`Environment`]: global tier (named functions) plus a per-activation
//!   local tier
//! - [`exec`]: the executable tree produced by `roze_compile`
//! - [`Interpreter`]: walks the executable tree
//!
//! Every evaluation step returns [`EvalResult`]; nothing in this crate exits
//! the process.

mod diagnostics;
mod environment;
pub mod errors;
mod eval_mode;
pub mod exec;
pub mod interpreter;
pub mod operators;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{EnvError, Environment};
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use eval_mode::EvalMode;
pub use exec::{ExecBlock, ExecKind, ExecNode, FunctionDef, PipelineStage, ProgramExecutable};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{Dispatch, OpTable};
pub use value::{FunctionValue, RangeGenerator, Value, ValueDisplay};
