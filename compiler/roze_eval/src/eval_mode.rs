//! Evaluation modes.
//!
//! `roze run` interprets without limits. Tests run bounded, so a runaway
//! pipeline or recursion fails with an error instead of hanging.

/// Evaluation policy, dispatched by `match`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// `roze run`.
    #[default]
    Interpret,
    /// Bounded evaluation for tests.
    TestRun {
        /// Maximum laps any single pipeline may run.
        max_laps: usize,
    },
}

impl EvalMode {
    /// Lap bound used by [`EvalMode::test_run`].
    pub const DEFAULT_TEST_LAPS: usize = 10_000;

    /// `TestRun` with the default lap bound.
    pub fn test_run() -> Self {
        Self::TestRun {
            max_laps: Self::DEFAULT_TEST_LAPS,
        }
    }

    /// Maximum call depth, or `None` for unlimited (the stack grows on
    /// demand).
    #[inline]
    pub fn max_recursion_depth(&self) -> Option<usize> {
        match self {
            Self::Interpret => None,
            Self::TestRun { .. } => Some(500),
        }
    }

    /// Maximum laps per pipeline, or `None` for unlimited.
    #[inline]
    pub fn max_laps(&self) -> Option<usize> {
        match self {
            Self::Interpret => None,
            Self::TestRun { max_laps } => Some(*max_laps),
        }
    }
}

#[cfg(test)]
mod tests;
