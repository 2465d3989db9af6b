//! Parse error type.

use roze_diagnostic::{Diagnostic, ErrorCode};
use roze_ir::Span;
use roze_lexer::{Token, TokenKind};

/// A parse error, converted to a [`Diagnostic`] for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Label text at `span`.
    pub context: Option<String>,
    /// Secondary location, e.g. where an unclosed delimiter was opened.
    pub related: Option<(Span, String)>,
    pub help: Vec<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            related: None,
            help: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Found `token` where `expected` should have been.
    #[cold]
    pub fn unexpected(token: Token, expected: &str) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!(
                "unexpected token: expected {expected}, found `{}`",
                token.kind.display_name()
            ),
            token.span,
        )
        .with_context(format!("expected {expected}"))
    }

    #[cold]
    pub fn expected_expression(token: Token) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found `{}`", token.kind.display_name()),
            token.span,
        )
        .with_context("expected expression here")
    }

    /// `9223372036854775808` without a leading `-`.
    #[cold]
    pub fn integer_overflow(token: Token) -> Self {
        ParseError::new(
            ErrorCode::E0003,
            "integer literal does not fit in 64 bits",
            token.span,
        )
        .with_context("out of range")
        .with_help("write `-9223372036854775808` for the smallest integer")
    }

    #[cold]
    pub fn expected_identifier(token: Token) -> Self {
        ParseError::new(
            ErrorCode::E1004,
            format!("expected identifier, found `{}`", token.kind.display_name()),
            token.span,
        )
    }

    /// `open` was never closed; `found` is where the closer was expected.
    #[cold]
    pub fn unclosed(open: Token, found: Token) -> Self {
        let close = match open.kind {
            TokenKind::LParen => ")",
            TokenKind::LBracket => "]",
            _ => "}",
        };
        let mut error = ParseError::new(
            ErrorCode::E1003,
            format!(
                "unclosed delimiter `{}`: expected `{close}`, found `{}`",
                open.kind.display_name(),
                found.kind.display_name()
            ),
            found.span,
        )
        .with_context(format!("expected `{close}`"));
        error.related = Some((open.span, "unclosed delimiter opened here".to_string()));
        error
    }

    /// `fn name(...)` anywhere but the top level.
    #[cold]
    pub fn nested_named_function(span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            "named functions are only allowed at the top level",
            span,
        )
        .with_help("assign an unnamed function instead: `name := fn(x) { ... }`")
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"));

        if let Some((span, text)) = &self.related {
            diag = diag.with_secondary_label(*span, text);
        }

        for help in &self.help {
            diag = diag.with_note(help);
        }

        diag
    }
}

#[cfg(test)]
mod tests;
