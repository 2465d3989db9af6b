//! Source text in, value or diagnostics out.

use roze_diagnostic::Diagnostic;
use roze_eval::{EvalError, EvalMode, InterpreterBuilder, ProgramExecutable, Value};
use roze_ir::StringInterner;

/// How to run a program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: EvalMode,
    /// Replaces the mode's per-pipeline lap limit.
    pub max_laps: Option<usize>,
    /// Replaces the mode's call depth limit.
    pub max_depth: Option<usize>,
}

impl RunOptions {
    /// Bounded options for tests.
    pub fn test_run() -> Self {
        RunOptions {
            mode: EvalMode::test_run(),
            ..RunOptions::default()
        }
    }

    fn builder<'a>(&self, interner: &'a StringInterner) -> InterpreterBuilder<'a> {
        let mut builder = InterpreterBuilder::new(interner).mode(self.mode.clone());
        if let Some(limit) = self.max_laps {
            builder = builder.max_laps(Some(limit));
        }
        if let Some(limit) = self.max_depth {
            builder = builder.max_depth(Some(limit));
        }
        builder
    }
}

/// Why a program produced no value.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Lexer, parser or compiler errors. The program never ran.
    #[error("{} error(s) before execution", .0.len())]
    Frontend(Vec<Diagnostic>),
    #[error(transparent)]
    Runtime(#[from] EvalError),
}

impl RunError {
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            RunError::Frontend(diagnostics) => diagnostics.clone(),
            RunError::Runtime(err) => vec![err.to_diagnostic()],
        }
    }
}

/// Lex, parse and compile `source`.
///
/// Lexical errors stop before parsing and parse errors stop before
/// compiling. Compile errors are all collected.
pub fn check_source(
    source: &str,
    interner: &StringInterner,
) -> Result<ProgramExecutable, Vec<Diagnostic>> {
    let program = roze_parse::parse_source(source, interner)?;
    let (executable, errors) = roze_compile::compile_program(&program, interner);
    if errors.is_empty() {
        Ok(executable)
    } else {
        Err(errors.into_vec())
    }
}

/// Compile and run `source`, returning its last statement's value.
#[tracing::instrument(level = "debug", skip_all, fields(mode = ?options.mode))]
pub fn run_source(
    source: &str,
    interner: &StringInterner,
    options: &RunOptions,
) -> Result<Option<Value>, RunError> {
    let executable = check_source(source, interner).map_err(RunError::Frontend)?;
    let mut interpreter = options.builder(interner).build();
    Ok(interpreter.run_program(&executable)?)
}
