//! Lexical errors.

use roze_diagnostic::{Diagnostic, ErrorCode};
use roze_ir::Span;

/// Why a slice of source could not become a token.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// No token pattern matches.
    #[default]
    InvalidCharacter,
    /// String literal without a closing quote on the same line.
    UnterminatedString,
    /// Escape other than `\n`, `\t`, `\\` or `\"`.
    InvalidEscape,
    /// Integer literal outside the `i64` range.
    InvalidNumber,
}

impl LexErrorKind {
    pub fn to_diagnostic(self, span: Span, slice: &str) -> Diagnostic {
        match self {
            LexErrorKind::InvalidCharacter => Diagnostic::error(ErrorCode::E0002)
                .with_message(format!("invalid character `{slice}`"))
                .with_label(span, "not valid here"),
            LexErrorKind::UnterminatedString => Diagnostic::error(ErrorCode::E0001)
                .with_message("unterminated string literal")
                .with_label(span, "string starts here")
                .with_note("strings cannot span lines; use `\\n`"),
            LexErrorKind::InvalidEscape => Diagnostic::error(ErrorCode::E0004)
                .with_message("invalid escape sequence in string literal")
                .with_label(span, "in this string")
                .with_note("valid escapes are `\\n`, `\\t`, `\\\\` and `\\\"`"),
            LexErrorKind::InvalidNumber => Diagnostic::error(ErrorCode::E0003)
                .with_message(format!("integer literal `{slice}` does not fit in 64 bits"))
                .with_label(span, "out of range"),
        }
    }
}

#[cfg(test)]
mod tests;
