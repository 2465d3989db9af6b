//! Token cursor for navigating the token stream.

use roze_ir::{Name, Span, StringInterner};
use roze_lexer::{Token, TokenKind, TokenList};

use crate::ParseError;

/// Cursor for navigating tokens.
///
/// Invariant: the token list ends with `Eof` and the cursor never moves
/// past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current token. Past the end this is the final `Eof`.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.as_slice().last())
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY))
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_separator(&self) -> bool {
        self.current_kind().is_separator()
    }

    /// Advance to the next token and return the consumed token.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Skip newline tokens.
    pub fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skip newlines and semicolons.
    pub fn skip_separators(&mut self) {
        while self.check_separator() {
            self.advance();
        }
    }

    /// Consume a token of `kind` or fail with "unexpected token".
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(
                self.current(),
                &format!("`{}`", kind.display_name()),
            ))
        }
    }

    /// Consume an identifier, returning its name.
    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Ok((name, span))
            }
            _ => Err(ParseError::expected_identifier(self.current())),
        }
    }
}
