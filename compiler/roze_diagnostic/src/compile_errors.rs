//! Accumulator for diagnostics raised by phases that do not stop at the
//! first error.

use std::fmt;

use crate::Diagnostic;

/// Ordered collection of diagnostics.
///
/// A phase that returns a non-empty `CompileErrors` still returns its
/// best-effort output; callers must check [`CompileErrors::is_empty`] before
/// using that output.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CompileErrors {
    diagnostics: Vec<Diagnostic>,
}

impl CompileErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append every diagnostic from `other`, keeping order.
    pub fn extend(&mut self, other: CompileErrors) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl From<Vec<Diagnostic>> for CompileErrors {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        CompileErrors { diagnostics }
    }
}

impl<'a> IntoIterator for &'a CompileErrors {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl IntoIterator for CompileErrors {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl fmt::Display for CompileErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}
