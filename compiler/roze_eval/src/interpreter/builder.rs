//! `InterpreterBuilder` for creating `Interpreter` instances.

use roze_ir::StringInterner;

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::eval_mode::EvalMode;

/// Builder for [`Interpreter`].
///
/// [`mode`](Self::mode) resets both limits to the mode's defaults;
/// [`max_laps`](Self::max_laps) and [`max_depth`](Self::max_depth) called
/// after it override them.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    mode: EvalMode,
    max_laps: Option<usize>,
    max_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    /// A builder in `Interpret` mode.
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            mode: EvalMode::default(),
            max_laps: None,
            max_depth: None,
        }
        .mode(EvalMode::default())
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.max_laps = mode.max_laps();
        self.max_depth = mode.max_recursion_depth();
        self.mode = mode;
        self
    }

    /// Override the per-pipeline lap limit. `None` means unlimited.
    #[must_use]
    pub fn max_laps(mut self, limit: Option<usize>) -> Self {
        self.max_laps = limit;
        self
    }

    /// Override the call depth limit. `None` means unlimited.
    #[must_use]
    pub fn max_depth(mut self, limit: Option<usize>) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            mode: self.mode,
            call_stack: CallStack::new(self.max_depth),
            max_laps: self.max_laps,
        }
    }
}
