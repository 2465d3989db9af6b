//! Terminal output for diagnostics.
//!
//! ```text
//! error[E2004]: cannot change the type of `x` from int to string
//!   --> main.roze:2:1: assigned a string here
//!    | x := "s"
//!   = note: `x` was first assigned an int
//! ```
//!
//! Without a source attached, positions fall back to raw byte spans.

use std::io::{self, Write};

use roze_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, LabelStyle, Severity};

use super::DiagnosticEmitter;

/// When to emit ANSI escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Clone, Copy)]
enum Paint {
    Error,
    Warning,
    Emphasis,
    Context,
}

impl Paint {
    const RESET: &'static str = "\x1b[0m";

    fn escape(self) -> &'static str {
        match self {
            Paint::Error => "\x1b[1;31m",
            Paint::Warning => "\x1b[1;33m",
            Paint::Emphasis => "\x1b[1m",
            Paint::Context => "\x1b[1;34m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Paint::Error,
            Severity::Warning => Paint::Warning,
        }
    }
}

/// The file a run's spans point into.
struct SourceFile {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

impl SourceFile {
    fn position(&self, offset: u32) -> (u32, u32) {
        self.lines.offset_to_line_col(&self.text, offset)
    }

    fn line_containing(&self, offset: u32) -> Option<&str> {
        self.lines
            .line_text(&self.text, self.lines.line_from_offset(offset))
    }
}

pub struct TerminalEmitter<W: Write> {
    out: W,
    color: bool,
    file: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(out: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            out,
            color: mode.enabled(is_tty),
            file: None,
        }
    }

    /// Resolve spans against `text`, reporting positions in `path`.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = LineOffsetTable::build(&text);
        self.file = Some(SourceFile {
            path: path.into(),
            text,
            lines,
        });
        self
    }

    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }

    // Output is best effort: a closed stderr must not turn a report into a panic.
    fn paint(&mut self, text: &str, paint: Paint) {
        let _ = if self.color {
            write!(self.out, "{}{text}{}", paint.escape(), Paint::RESET)
        } else {
            write!(self.out, "{text}")
        };
    }

    fn header(&mut self, diagnostic: &Diagnostic) {
        self.paint(
            diagnostic.severity.as_str(),
            Paint::for_severity(diagnostic.severity),
        );
        let code = format!("[{}]", diagnostic.code);
        self.paint(&code, Paint::Emphasis);
        let _ = writeln!(self.out, ": {}", diagnostic.message);
    }

    fn location(&self, span: Span) -> String {
        match &self.file {
            Some(file) => {
                let (line, col) = file.position(span.start);
                format!("{}:{line}:{col}", file.path)
            }
            None => format!("{span:?}"),
        }
    }

    fn label(&mut self, label: &Label, severity: Severity) {
        let (arrow, paint) = match label.style {
            LabelStyle::Primary => ("-->", Paint::for_severity(severity)),
            LabelStyle::Secondary => ("...", Paint::Context),
        };
        let location = self.location(label.span);
        let _ = write!(self.out, "  {arrow} {location}: ");
        self.paint(&label.message, paint);
        let _ = writeln!(self.out);

        if label.is_primary() {
            let line = self
                .file
                .as_ref()
                .and_then(|file| file.line_containing(label.span.start))
                .map(str::to_owned);
            if let Some(line) = line {
                let _ = writeln!(self.out, "   | {line}");
            }
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.header(diagnostic);
        for label in &diagnostic.labels {
            self.label(label, diagnostic.severity);
        }
        for note in &diagnostic.notes {
            let _ = write!(self.out, "  = ");
            self.paint("note", Paint::Emphasis);
            let _ = writeln!(self.out, ": {note}");
        }
        let _ = writeln!(self.out);
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let (count, severity) = match (error_count, warning_count) {
            (0, 0) => return,
            (0, warnings) => (warnings, Severity::Warning),
            (errors, _) => (errors, Severity::Error),
        };
        self.paint(severity.as_str(), Paint::for_severity(severity));
        let plural = if count == 1 { "" } else { "s" };
        let _ = writeln!(self.out, ": {count} {severity}{plural} reported");
    }
}
