//! Expressions, from assignment down to base terms.
//!
//! Each binary level parses a first operand followed by `(op operand)*`.
//! A newline directly after an operator continues the expression.

use roze_ir::ast::{
    Addition, Assignment, Base, BaseKind, Comparison, Expression, KeyValue, Logical,
    Multiplication, Operation, Pipe, Series, Unary, UnaryKind,
};
use roze_ir::{AssignOp, BinaryOp, LogicalOp, PipeOp, Span, Spanned, UnaryOp};
use roze_lexer::TokenKind;

use crate::{ParseError, Parser};

type Chain<O, T> = (T, Vec<Operation<O, T>>, Span);

impl Parser<'_> {
    /// Parse one expression statement.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        roze_stack::ensure_sufficient_stack(|| {
            let assignment = self.parse_assignment()?;
            Ok(Expression {
                span: assignment.span,
                assignment: Some(Box::new(assignment)),
            })
        })
    }

    /// Parse `first (op operand)*`, where `op_of` recognises operators of
    /// this level.
    fn parse_chain<O, T: Spanned>(
        &mut self,
        operand: fn(&mut Self) -> Result<T, ParseError>,
        op_of: fn(TokenKind) -> Option<O>,
    ) -> Result<Chain<O, T>, ParseError> {
        let first = operand(self)?;
        let mut span = first.span();
        let mut rest = Vec::new();

        while let Some(op) = op_of(self.current_kind()) {
            let op_span = self.advance().span;
            self.skip_newlines();
            let right = operand(self)?;
            span = span.merge(right.span());
            rest.push(Operation {
                op,
                span: op_span.merge(right.span()),
                operand: right,
            });
        }

        Ok((first, rest, span))
    }

    /// `pipe ((':=' | '+=') pipe)?`
    fn parse_assignment(&mut self) -> Result<Assignment, ParseError> {
        let pipe = self.parse_pipe()?;
        let op = match self.current_kind() {
            TokenKind::ColonEq => AssignOp::Bind,
            TokenKind::PlusEq => AssignOp::PlusAssign,
            _ => {
                return Ok(Assignment {
                    span: pipe.span,
                    pipe,
                    operation: None,
                })
            }
        };

        let op_span = self.advance().span;
        self.skip_newlines();
        let value = self.parse_pipe()?;
        Ok(Assignment {
            span: pipe.span.merge(value.span),
            pipe,
            operation: Some(Operation {
                op,
                span: op_span.merge(value.span),
                operand: value,
            }),
        })
    }

    fn parse_pipe(&mut self) -> Result<Pipe, ParseError> {
        let (first, rest, span) = self.parse_chain(Self::parse_logical, |kind| match kind {
            TokenKind::GtGt => Some(PipeOp::Pipe),
            TokenKind::GtGtGt => Some(PipeOp::PipeComplete),
            _ => None,
        })?;
        Ok(Pipe { first, rest, span })
    }

    fn parse_logical(&mut self) -> Result<Logical, ParseError> {
        let (first, rest, span) = self.parse_chain(Self::parse_comparison, |kind| match kind {
            TokenKind::AmpAmp => Some(LogicalOp::And),
            TokenKind::PipePipe => Some(LogicalOp::Or),
            _ => None,
        })?;
        Ok(Logical { first, rest, span })
    }

    fn parse_comparison(&mut self) -> Result<Comparison, ParseError> {
        let (first, rest, span) = self.parse_chain(Self::parse_series, |kind| match kind {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        })?;
        Ok(Comparison { first, rest, span })
    }

    /// `keyvalue ('..' keyvalue)?`
    fn parse_series(&mut self) -> Result<Series, ParseError> {
        let from = self.parse_key_value()?;
        if !self.check(TokenKind::DotDot) {
            return Ok(Series {
                span: from.span,
                from,
                to: None,
            });
        }

        self.advance();
        self.skip_newlines();
        let to = self.parse_key_value()?;
        Ok(Series {
            span: from.span.merge(to.span),
            from,
            to: Some(to),
        })
    }

    /// `addition (':' addition)?`
    fn parse_key_value(&mut self) -> Result<KeyValue, ParseError> {
        let key = self.parse_addition()?;
        if !self.check(TokenKind::Colon) {
            return Ok(KeyValue {
                span: key.span,
                key,
                value: None,
            });
        }

        self.advance();
        self.skip_newlines();
        let value = self.parse_addition()?;
        Ok(KeyValue {
            span: key.span.merge(value.span),
            key,
            value: Some(value),
        })
    }

    fn parse_addition(&mut self) -> Result<Addition, ParseError> {
        let (first, rest, span) = self.parse_chain(Self::parse_multiplication, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        })?;
        Ok(Addition { first, rest, span })
    }

    fn parse_multiplication(&mut self) -> Result<Multiplication, ParseError> {
        let (first, rest, span) = self.parse_chain(Self::parse_unary, |kind| match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        })?;
        Ok(Multiplication { first, rest, span })
    }

    /// `('!' | '-') unary | base`
    fn parse_unary(&mut self) -> Result<Unary, ParseError> {
        if let Some(base) = self.parse_min_integer() {
            return Ok(Unary {
                span: base.span,
                kind: UnaryKind::Base(base),
            });
        }

        let op = match self.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => {
                let base = self.parse_base()?;
                return Ok(Unary {
                    span: base.span,
                    kind: UnaryKind::Base(base),
                });
            }
        };

        let start = self.advance().span;
        let operand = roze_stack::ensure_sufficient_stack(|| self.parse_unary())?;
        Ok(Unary {
            span: start.merge(operand.span),
            kind: UnaryKind::Op {
                op,
                operand: Box::new(operand),
            },
        })
    }

    /// `-9223372036854775808` as one literal; its magnitude alone overflows.
    fn parse_min_integer(&mut self) -> Option<Base> {
        let is_min = self.check(TokenKind::Minus)
            && self.peek_next_kind() == TokenKind::Int(i64::MIN.unsigned_abs());
        if !is_min {
            return None;
        }
        let minus = self.advance().span;
        let literal = self.advance().span;
        Some(Base {
            kind: BaseKind::Integer(i64::MIN),
            span: minus.merge(literal),
        })
    }

    fn parse_base(&mut self) -> Result<Base, ParseError> {
        let token = self.current();
        let kind = match token.kind {
            TokenKind::Int(magnitude) => match i64::try_from(magnitude) {
                Ok(n) => BaseKind::Integer(n),
                Err(_) => return Err(ParseError::integer_overflow(token)),
            },
            TokenKind::Float(bits) => BaseKind::Float(f64::from_bits(bits)),
            TokenKind::String(name) => BaseKind::Str(self.interner().lookup(name).to_owned()),
            TokenKind::Tag(name) => BaseKind::Tag(name),
            TokenKind::True => BaseKind::Bool(true),
            TokenKind::False => BaseKind::Bool(false),
            TokenKind::Ident(name) => {
                if self.peek_next_kind() == TokenKind::LParen {
                    return self.parse_invocation(name);
                }
                BaseKind::Ident(name)
            }
            TokenKind::LParen => return self.parse_subexpression(),
            TokenKind::LBracket => return self.parse_list(),
            TokenKind::Fn => return self.parse_function_literal(),
            _ => return Err(ParseError::expected_expression(token)),
        };

        self.advance();
        Ok(Base {
            kind,
            span: token.span,
        })
    }

    /// `'(' expression? ')'`. `()` is an empty expression.
    fn parse_subexpression(&mut self) -> Result<Base, ParseError> {
        let open = self.advance();
        self.skip_newlines();

        let expression = if self.check(TokenKind::RParen) {
            Expression {
                assignment: None,
                span: Span::point(open.span.end),
            }
        } else {
            self.parse_expression()?
        };

        self.skip_newlines();
        let close = self.expect_closing(open, TokenKind::RParen)?;
        Ok(Base {
            kind: BaseKind::Subexpression(Box::new(expression)),
            span: open.span.merge(close),
        })
    }

    /// `'[' (expression (',' expression)*)? ']'`
    fn parse_list(&mut self) -> Result<Base, ParseError> {
        let open = self.advance();
        let (items, close) = self.parse_comma_list(open, TokenKind::RBracket)?;
        Ok(Base {
            kind: BaseKind::List(items),
            span: open.span.merge(close),
        })
    }

    /// `IDENT '(' args ')'`
    fn parse_invocation(&mut self, name: roze_ir::Name) -> Result<Base, ParseError> {
        let start = self.advance().span;
        let open = self.advance();
        let (args, close) = self.parse_comma_list(open, TokenKind::RParen)?;
        Ok(Base {
            kind: BaseKind::Invocation { name, args },
            span: start.merge(close),
        })
    }

    fn parse_function_literal(&mut self) -> Result<Base, ParseError> {
        let start = self.advance().span;
        if let TokenKind::Ident(_) = self.current_kind() {
            return Err(ParseError::nested_named_function(
                start.merge(self.current_span()),
            ));
        }

        let function = self.parse_unnamed_function(start)?;
        Ok(Base {
            span: function.span,
            kind: BaseKind::UnnamedFunction(Box::new(function)),
        })
    }

    /// Comma-separated expressions up to `close`; the opener is consumed.
    /// Returns the items and the closer's span.
    fn parse_comma_list(
        &mut self,
        open: roze_lexer::Token,
        close: TokenKind,
    ) -> Result<(Vec<Expression>, Span), ParseError> {
        let mut items = Vec::new();

        self.skip_newlines();
        while !self.check(close) {
            if self.is_at_end() {
                return Err(ParseError::unclosed(open, self.current()));
            }
            items.push(self.parse_expression()?);

            self.skip_newlines();
            if self.check(TokenKind::Comma) {
                self.advance();
                self.skip_newlines();
            } else if !self.check(close) {
                return Err(self.closing_error(open, close));
            }
        }

        let close_span = self.advance().span;
        Ok((items, close_span))
    }

    fn expect_closing(
        &mut self,
        open: roze_lexer::Token,
        close: TokenKind,
    ) -> Result<Span, ParseError> {
        if self.check(close) {
            Ok(self.advance().span)
        } else if self.is_at_end() {
            Err(ParseError::unclosed(open, self.current()))
        } else {
            Err(ParseError::unexpected(
                self.current(),
                &format!("`{}`", close.display_name()),
            ))
        }
    }

    /// At end of input the delimiter is unclosed; otherwise the token is
    /// simply unexpected.
    fn closing_error(&self, open: roze_lexer::Token, close: TokenKind) -> ParseError {
        if self.is_at_end() {
            ParseError::unclosed(open, self.current())
        } else {
            ParseError::unexpected(
                self.current(),
                &format!("`,` or `{}`", close.display_name()),
            )
        }
    }
}
