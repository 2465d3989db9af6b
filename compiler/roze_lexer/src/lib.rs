//! Lexer for Roze using logos with string interning.
//!
//! Newlines are significant (they separate statements) and are kept as
//! tokens; comments and horizontal whitespace are dropped. Lexical errors
//! become [`TokenKind::Error`] tokens so the parser can report them in
//! source order alongside its own diagnostics.

mod lex_error;
mod token;

pub use lex_error::LexErrorKind;
pub use token::{Token, TokenKind, TokenList};

use logos::Logos;
use roze_diagnostic::Diagnostic;
use roze_ir::{Span, StringInterner};

/// What logos recognises before names are interned.
///
/// Punctuation and keywords map straight to their [`TokenKind`]; only
/// literals and names need a second look in [`lex`].
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"//[^\n]*")]
enum Scanned {
    #[token("\n", |_| TokenKind::Newline)]
    #[token("fn", |_| TokenKind::Fn)]
    #[token("true", |_| TokenKind::True)]
    #[token("false", |_| TokenKind::False)]
    #[token("(", |_| TokenKind::LParen)]
    #[token(")", |_| TokenKind::RParen)]
    #[token("{", |_| TokenKind::LBrace)]
    #[token("}", |_| TokenKind::RBrace)]
    #[token("[", |_| TokenKind::LBracket)]
    #[token("]", |_| TokenKind::RBracket)]
    #[token(",", |_| TokenKind::Comma)]
    #[token(":", |_| TokenKind::Colon)]
    #[token(";", |_| TokenKind::Semicolon)]
    #[token(":=", |_| TokenKind::ColonEq)]
    #[token("+=", |_| TokenKind::PlusEq)]
    #[token(">>>", |_| TokenKind::GtGtGt)]
    #[token(">>", |_| TokenKind::GtGt)]
    #[token("&&", |_| TokenKind::AmpAmp)]
    #[token("||", |_| TokenKind::PipePipe)]
    #[token("==", |_| TokenKind::EqEq)]
    #[token("!=", |_| TokenKind::NotEq)]
    #[token("<", |_| TokenKind::Lt)]
    #[token("<=", |_| TokenKind::LtEq)]
    #[token(">", |_| TokenKind::Gt)]
    #[token(">=", |_| TokenKind::GtEq)]
    #[token("..", |_| TokenKind::DotDot)]
    #[token("+", |_| TokenKind::Plus)]
    #[token("-", |_| TokenKind::Minus)]
    #[token("*", |_| TokenKind::Star)]
    #[token("/", |_| TokenKind::Slash)]
    #[token("%", |_| TokenKind::Percent)]
    #[token("!", |_| TokenKind::Bang)]
    Fixed(TokenKind),

    #[regex(r"[0-9]+", |lex| {
        lex.slice()
            .parse::<u64>()
            .ok()
            .filter(|&magnitude| magnitude <= i64::MIN.unsigned_abs())
            .ok_or(LexErrorKind::InvalidNumber)
    })]
    Int(u64),

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().parse::<f64>().map_err(|_| LexErrorKind::InvalidNumber)
    })]
    Float(f64),

    /// Quoted text, escapes still raw. Newlines end a string.
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    Quoted,

    #[regex(r#""([^"\\\n\r]|\\.)*"#)]
    Unclosed,

    #[regex(r"#[a-zA-Z_][a-zA-Z0-9_]*")]
    Tag,

    /// `#!` line; skipped at offset 0, an error anywhere else.
    #[regex(r"#![^\n]*")]
    Shebang,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Tokenize `source`. The list always ends with [`TokenKind::Eof`].
///
/// Lexing never fails: bad input becomes [`TokenKind::Error`] tokens, which
/// [`lex_errors`] turns into diagnostics.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut tokens = TokenList::new();
    let mut scanner = Scanned::lexer(source);

    while let Some(scanned) = scanner.next() {
        let span = Span::from_range(scanner.span());
        let text = scanner.slice();
        let kind = match scanned {
            Ok(Scanned::Fixed(kind)) => kind,
            Ok(Scanned::Int(value)) => TokenKind::Int(value),
            Ok(Scanned::Float(value)) => TokenKind::Float(value.to_bits()),
            Ok(Scanned::Quoted) => {
                let body = &text[1..text.len() - 1];
                unescape(body).map_or_else(TokenKind::Error, |value| {
                    TokenKind::String(interner.intern(&value))
                })
            }
            Ok(Scanned::Unclosed) => TokenKind::Error(LexErrorKind::UnterminatedString),
            Ok(Scanned::Tag) => TokenKind::Tag(interner.intern(text)),
            Ok(Scanned::Ident) => TokenKind::Ident(interner.intern(text)),
            Ok(Scanned::Shebang) if span.start == 0 => continue,
            Ok(Scanned::Shebang) => TokenKind::Error(LexErrorKind::InvalidCharacter),
            Err(error) => TokenKind::Error(error),
        };
        tokens.push(Token::new(kind, span));
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
    tokens
}

/// One diagnostic per error token, in source order.
pub fn lex_errors(source: &str, tokens: &TokenList) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for token in tokens {
        if let TokenKind::Error(error) = token.kind {
            let text = source.get(token.span.to_range()).unwrap_or_default();
            diagnostics.push(error.to_diagnostic(token.span, text));
        }
    }
    diagnostics
}

fn unescape(body: &str) -> Result<String, LexErrorKind> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        let decoded = match c {
            '\\' => match chars.next() {
                Some('n') => '\n',
                Some('t') => '\t',
                Some(quoted @ ('\\' | '"')) => quoted,
                _ => return Err(LexErrorKind::InvalidEscape),
            },
            other => other,
        };
        out.push(decoded);
    }
    Ok(out)
}
