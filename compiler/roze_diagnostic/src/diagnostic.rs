use std::fmt;

use roze_ir::Span;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a label marks the offending code or points at related context.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelStyle {
    Primary,
    Secondary,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub style: LabelStyle,
}

impl Label {
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }
}

/// One reported problem.
///
/// Built with the `with_*` methods:
///
/// ```text
/// Diagnostic::error(ErrorCode::E2004)
///     .with_message("cannot change the type of `x` from int to string")
///     .with_label(span, "assigned a string here")
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a diagnostic does nothing until it is reported"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Primary labels first by convention; the emitter prints them in order.
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    const fn blank(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub const fn error(code: ErrorCode) -> Self {
        Self::blank(code, Severity::Error)
    }

    pub const fn warning(code: ErrorCode) -> Self {
        Self::blank(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Mark `span` as the offending code.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message.into(), LabelStyle::Primary)
    }

    /// Point at `span` as related context.
    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message.into(), LabelStyle::Secondary)
    }

    fn labeled(mut self, span: Span, message: String, style: LabelStyle) -> Self {
        self.labels.push(Label {
            span,
            message,
            style,
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(|label| label.span)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Plain rendering without source positions, used in logs and test output.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            let role = match label.style {
                LabelStyle::Primary => "at",
                LabelStyle::Secondary => "see",
            };
            write!(f, "\n  {role} {:?}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

/// Operands of two different concrete types meeting at one operator.
#[cold]
pub fn type_mismatch(span: Span, left: &str, right: &str, context: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("mismatched operand types: {left} and {right}"))
        .with_label(span, context)
}

#[cfg(test)]
mod tests;
