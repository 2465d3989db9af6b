//! Recursive descent parser for Roze.
//!
//! Produces the parse tree defined in `roze_ir::ast`. Errors inside a
//! top-level command are recorded and the parser skips to the next
//! statement separator, so one run reports every independent error.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use roze_diagnostic::Diagnostic;
use roze_ir::ast::Program;
use roze_ir::{Name, Span, StringInterner};
use roze_lexer::{Token, TokenKind, TokenList};

/// Parse result: a best-effort program plus every error found.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
        }
    }

    #[inline]
    fn current(&self) -> Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn peek_next_kind(&self) -> TokenKind {
        self.cursor.peek_next_kind()
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn skip_newlines(&mut self) {
        self.cursor.skip_newlines();
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        self.cursor.expect_ident()
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    /// Skip to the next statement separator at bracket depth zero.
    fn recover_to_next_statement(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            match self.current_kind() {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                }
                TokenKind::Newline | TokenKind::Semicolon if depth == 0 => return,
                _ => {}
            }
            self.advance();
        }
    }
}

/// Parse a token list into a program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    let output = Parser::new(tokens, interner).parse_program();
    tracing::debug!(
        commands = output.program.commands.len(),
        errors = output.errors.len(),
        "parsed program"
    );
    output
}

/// Lex and parse `source`.
///
/// Lexical errors are reported without attempting to parse.
pub fn parse_source(source: &str, interner: &StringInterner) -> Result<Program, Vec<Diagnostic>> {
    let tokens = roze_lexer::lex(source, interner);
    let lex_errors = roze_lexer::lex_errors(source, &tokens);
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }

    let output = parse(&tokens, interner);
    if output.has_errors() {
        Err(output.diagnostics())
    } else {
        Ok(output.program)
    }
}
