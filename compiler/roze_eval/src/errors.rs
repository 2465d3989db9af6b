//! Runtime errors.
//!
//! `EvalErrorKind` is the structured category; factory functions below are
//! the construction API. The interpreter attaches the span and, inside a
//! function call, a backtrace of the active call frames.

use std::fmt;

use roze_diagnostic::{Diagnostic, ErrorCode};
use roze_ir::Span;
use roze_types::Type;

use crate::Value;

/// Result of evaluating a node.
pub type EvalResult = Result<Value, EvalError>;

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Access
    #[error("variable `{name}` used before assignment")]
    UndefinedVariable { name: String },
    #[error("cannot reassign global `{name}`")]
    GlobalReassignment { name: String },
    #[error("duplicate function `{name}`")]
    DuplicateGlobal { name: String },
    #[error("cannot assign {new} to `{name}`, which holds {existing}")]
    TypeChange {
        name: String,
        existing: Type,
        new: Type,
    },

    // Operators
    #[error("operator `{op}` applied to mismatched types {left} and {right}")]
    BinaryTypeMismatch {
        op: &'static str,
        left: Type,
        right: Type,
    },
    #[error("operator `{op}` is not defined for {ty}")]
    InvalidOperator { op: &'static str, ty: Type },
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,

    // Calls
    #[error("`{name}` is {found}, not a function")]
    NotCallable { name: String, found: Type },
    #[error("`{name}` expects {expected} arguments, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("maximum recursion depth exceeded (limit: {depth})")]
    RecursionLimit { depth: usize },

    // Pipelines
    #[error("pipeline stage {stage} is {found}, not a function")]
    StageNotFunction { stage: usize, found: Type },
    #[error("pipeline stage {stage} must take exactly 1 parameter, it takes {params}")]
    StageArity { stage: usize, params: usize },
    #[error("pipeline did not finish within {limit} laps")]
    LapLimit { limit: usize },
}

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UndefinedVariable { .. } => ErrorCode::E6001,
            Self::BinaryTypeMismatch { .. } => ErrorCode::E6002,
            Self::InvalidOperator { .. } => ErrorCode::E6003,
            Self::NotCallable { .. } => ErrorCode::E6004,
            Self::ArityMismatch { .. } => ErrorCode::E6005,
            Self::DuplicateGlobal { .. } => ErrorCode::E6006,
            Self::GlobalReassignment { .. } => ErrorCode::E6007,
            Self::StageNotFunction { .. } => ErrorCode::E6008,
            Self::StageArity { .. } => ErrorCode::E6009,
            Self::DivisionByZero => ErrorCode::E6010,
            Self::ModuloByZero => ErrorCode::E6011,
            Self::TypeChange { .. } => ErrorCode::E6012,
            Self::LapLimit { .. } => ErrorCode::E6013,
            Self::RecursionLimit { .. } => ErrorCode::E6014,
        }
    }

    /// Short label for the primary span.
    pub fn primary_label(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "not assigned in this scope",
            Self::GlobalReassignment { .. } => "assigned here",
            Self::DuplicateGlobal { .. } => "defined again here",
            Self::TypeChange { .. } => "type changed here",
            Self::BinaryTypeMismatch { .. } => "mismatched types",
            Self::InvalidOperator { .. } => "operator not supported",
            Self::DivisionByZero => "division by zero here",
            Self::ModuloByZero => "modulo by zero here",
            Self::NotCallable { .. } => "not callable",
            Self::ArityMismatch { .. } => "wrong number of arguments",
            Self::RecursionLimit { .. } => "recursion limit exceeded",
            Self::StageNotFunction { .. } => "not a function",
            Self::StageArity { .. } => "wrong number of parameters",
            Self::LapLimit { .. } => "pipeline never finished",
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub name: String,
    /// Call site.
    pub span: Option<Span>,
}

/// Snapshot of the call stack where an error was raised, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(span) = frame.span {
                write!(f, " at {span}")?;
            }
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source location where the error occurred.
    pub span: Option<Span>,
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            span: None,
            backtrace: None,
        }
    }

    /// Attach a source span unless one is already set.
    ///
    /// Errors from operator cells are raised without a span and pick up the
    /// span of the node that applied them.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Convert into a `Diagnostic` with an E6xxx code.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code()).with_message(self.message());
        if let Some(span) = self.span {
            diag = diag.with_label(span, self.kind.primary_label());
        }
        if let Some(backtrace) = &self.backtrace {
            if !backtrace.is_empty() {
                diag = diag.with_note(format!("call stack:\n{backtrace}"));
            }
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

// Access errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn global_reassignment(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::GlobalReassignment {
        name: name.to_string(),
    })
}

#[cold]
pub fn duplicate_global(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::DuplicateGlobal {
        name: name.to_string(),
    })
}

#[cold]
pub fn type_change(name: &str, existing: Type, new: Type) -> EvalError {
    EvalError::new(EvalErrorKind::TypeChange {
        name: name.to_string(),
        existing,
        new,
    })
}

// Operator errors

#[cold]
pub fn binary_type_mismatch(op: &'static str, left: Type, right: Type) -> EvalError {
    EvalError::new(EvalErrorKind::BinaryTypeMismatch { op, left, right })
}

#[cold]
pub fn invalid_operator(op: &'static str, ty: Type) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidOperator { op, ty })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::ModuloByZero)
}

// Call errors

#[cold]
pub fn not_callable(name: &str, found: Type) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable {
        name: name.to_string(),
        found,
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimit { depth })
}

// Pipeline errors

#[cold]
pub fn stage_not_function(stage: usize, found: Type) -> EvalError {
    EvalError::new(EvalErrorKind::StageNotFunction { stage, found })
}

#[cold]
pub fn stage_arity(stage: usize, params: usize) -> EvalError {
    EvalError::new(EvalErrorKind::StageArity { stage, params })
}

#[cold]
pub fn lap_limit_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::LapLimit { limit })
}

#[cfg(test)]
mod tests;
