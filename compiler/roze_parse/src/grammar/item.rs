//! Program, commands, functions and blocks.

use roze_ir::ast::{Block, Command, NamedFunction, Param, Program, UnnamedFunction};
use roze_ir::Span;
use roze_lexer::TokenKind;

use crate::{ParseError, ParseOutput, Parser};

impl Parser<'_> {
    /// `program := (command? (NEWLINE | ';'))* EOF`
    pub fn parse_program(mut self) -> ParseOutput {
        let mut commands = Vec::new();
        let mut errors = Vec::new();

        loop {
            self.cursor.skip_separators();
            if self.is_at_end() {
                break;
            }

            match self.parse_command() {
                Ok(command) => {
                    commands.push(command);
                    if !self.is_at_end() && !self.cursor.check_separator() {
                        errors.push(ParseError::unexpected(
                            self.current(),
                            "newline or `;` after statement",
                        ));
                        self.recover_to_next_statement();
                    }
                }
                Err(error) => {
                    errors.push(error);
                    self.recover_to_next_statement();
                }
            }
        }

        let end = self.current_span().end;
        ParseOutput {
            program: Program {
                commands,
                span: Span::new(0, end),
            },
            errors,
        }
    }

    fn parse_command(&mut self) -> Result<Command, ParseError> {
        if self.check(TokenKind::Fn) && matches!(self.peek_next_kind(), TokenKind::Ident(_)) {
            self.parse_named_function().map(Command::NamedFunction)
        } else {
            self.parse_expression().map(Command::Expression)
        }
    }

    /// `'fn' IDENT '(' params ')' block`
    fn parse_named_function(&mut self) -> Result<NamedFunction, ParseError> {
        let start = self.expect(TokenKind::Fn)?.span;
        let (name, name_span) = self.expect_ident()?;
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        Ok(NamedFunction {
            name,
            name_span,
            params,
            span: start.merge(body.span),
            body,
        })
    }

    /// `'fn' '(' params ')' block`, with the `fn` already consumed.
    pub(crate) fn parse_unnamed_function(
        &mut self,
        start: Span,
    ) -> Result<UnnamedFunction, ParseError> {
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        Ok(UnnamedFunction {
            params,
            span: start.merge(body.span),
            body,
        })
    }

    /// `'(' (IDENT (',' IDENT)*)? ')'`
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let open = self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();

        self.skip_newlines();
        while !self.check(TokenKind::RParen) {
            if self.is_at_end() {
                return Err(ParseError::unclosed(open, self.current()));
            }
            let (name, span) = self.expect_ident()?;
            params.push(Param { name, span });

            self.skip_newlines();
            if self.check(TokenKind::Comma) {
                self.advance();
                self.skip_newlines();
            } else if !self.check(TokenKind::RParen) {
                return Err(ParseError::unexpected(self.current(), "`,` or `)`"));
            }
        }
        self.advance();

        Ok(params)
    }

    /// `'{' (expression? (NEWLINE | ';'))* '}'`
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.skip_newlines();
        let open = self.expect(TokenKind::LBrace)?;
        let mut statements = Vec::new();

        loop {
            self.cursor.skip_separators();
            if self.check(TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                return Err(ParseError::unclosed(open, self.current()));
            }

            statements.push(self.parse_expression()?);

            if !self.cursor.check_separator() && !self.check(TokenKind::RBrace) {
                if self.is_at_end() {
                    return Err(ParseError::unclosed(open, self.current()));
                }
                return Err(ParseError::unexpected(
                    self.current(),
                    "newline, `;` or `}` after statement",
                ));
            }
        }

        let close = self.advance();
        Ok(Block {
            statements,
            span: open.span.merge(close.span),
        })
    }
}
