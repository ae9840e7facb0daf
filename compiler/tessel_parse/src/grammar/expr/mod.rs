//! Expressions embedded in types: tuple-element defaults and array sizes.
//!
//! Precedence climbing over `BinaryOp::precedence`. `<` after a name is
//! read as a generic argument list only when the prober says the whole
//! `<...>` run is one and the token after `>` confirms it.

use tessel_diagnostic::ErrorCode;
use tessel_ir::{BinaryOp, Expr, ExprId, ExprKind, Span, TokenKind, UnaryOp};

use crate::{ExprMessage, ParseError, Parser};

impl Parser<'_> {
    /// Parse one expression.
    pub fn parse_expr(&mut self) -> Option<ExprId> {
        self.parse_expr_with(ExprMessage::ExpectedExpr)
    }

    /// Parse one expression, reporting `message` if none starts here.
    pub fn parse_expr_with(&mut self, message: ExprMessage) -> Option<ExprId> {
        self.nested(|p| p.parse_binary(0, message))
    }

    /// Parse `expr (',' expr)*`.
    pub fn parse_expr_list(&mut self) -> Option<Vec<ExprId>> {
        let mut exprs = Vec::new();
        loop {
            exprs.push(self.parse_expr()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Some(exprs)
    }

    fn parse_binary(&mut self, min_precedence: u8, message: ExprMessage) -> Option<ExprId> {
        let mut left = self.parse_unary(message)?;

        while let Some((op, width)) = self.match_binary_op() {
            let precedence = op.precedence();
            if precedence <= min_precedence {
                break;
            }
            for _ in 0..width {
                self.bump();
            }
            let right = self.nested(|p| p.parse_binary(precedence, ExprMessage::ExpectedExpr))?;
            let span = self.exprs.span(left).merge(self.exprs.span(right));
            left = self.alloc_expr(ExprKind::Binary { op, left, right }, span);
        }

        Some(left)
    }

    /// Infix operator at the cursor and how many tokens spell it.
    ///
    /// `<` and `>` are always lexed alone, so `<<`, `>>`, `<=` and `>=`
    /// are reassembled from adjacent tokens here.
    fn match_binary_op(&self) -> Option<(BinaryOp, usize)> {
        let next = self.cursor.peek_next_kind();
        let glued = self.cursor.next_is_adjacent();
        match self.current_kind() {
            TokenKind::Lt if glued && next == TokenKind::Lt => Some((BinaryOp::Shl, 2)),
            TokenKind::Lt if glued && next == TokenKind::Eq => Some((BinaryOp::LtEq, 2)),
            TokenKind::Lt => Some((BinaryOp::Lt, 1)),
            TokenKind::Gt if glued && next == TokenKind::Gt => Some((BinaryOp::Shr, 2)),
            TokenKind::Gt if glued && next == TokenKind::Eq => Some((BinaryOp::GtEq, 2)),
            TokenKind::Gt => Some((BinaryOp::Gt, 1)),
            TokenKind::Operator(name) => {
                let spelling = self.cursor.interner().lookup(name);
                Some((
                    BinaryOp::from_spelling(spelling).unwrap_or(BinaryOp::Custom(name)),
                    1,
                ))
            }
            _ => None,
        }
    }

    fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Operator(name) => Some(match self.cursor.interner().lookup(name) {
                "-" => UnaryOp::Neg,
                "!" => UnaryOp::Not,
                "~" => UnaryOp::BitNot,
                _ => UnaryOp::Custom(name),
            }),
            _ => None,
        }
    }

    fn parse_unary(&mut self, message: ExprMessage) -> Option<ExprId> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_postfix(message);
        };
        let start = self.bump();
        let operand = self.nested(|p| p.parse_unary(message))?;
        let span = start.merge(self.exprs.span(operand));
        Some(self.alloc_expr(ExprKind::Unary { op, operand }, span))
    }

    fn parse_postfix(&mut self, message: ExprMessage) -> Option<ExprId> {
        let mut expr = self.parse_primary(message)?;

        loop {
            if self.check(TokenKind::Period) || self.cursor.is_period_after_angle() {
                self.bump();
                let name = match self.cursor.expect_member_name() {
                    Ok(name) => name,
                    Err(err) => {
                        self.error(err);
                        return None;
                    }
                };
                let span = self.exprs.span(expr).merge(self.previous_span());
                expr = self.alloc_expr(ExprKind::Member { base: expr, name }, span);
            } else if self.check(TokenKind::LParen) && !self.cursor.at_line_start() {
                let open = self.bump();
                let (args, _) = self.parse_delimited_exprs(open, TokenKind::RParen, '(')?;
                let span = self.exprs.span(expr).merge(self.previous_span());
                expr = self.alloc_expr(ExprKind::Call { func: expr, args }, span);
            } else if self.cursor.is_following_lsquare() {
                let open = self.bump();
                let (args, _) = self.parse_delimited_exprs(open, TokenKind::RBracket, '[')?;
                let span = self.exprs.span(expr).merge(self.previous_span());
                expr = self.alloc_expr(ExprKind::Subscript { base: expr, args }, span);
            } else if self.check(TokenKind::Lt)
                && matches!(
                    self.exprs.get(expr).kind,
                    ExprKind::Ident(_) | ExprKind::Member { .. }
                )
                && self.can_parse_as_generic_argument_list()
            {
                let generics = self.parse_generic_arguments()?;
                let span = self.exprs.span(expr).merge(generics.angles);
                expr = self.alloc_expr(
                    ExprKind::Specialize {
                        base: expr,
                        args: generics.args,
                    },
                    span,
                );
            } else {
                break;
            }
        }

        Some(expr)
    }

    fn parse_primary(&mut self, message: ExprMessage) -> Option<ExprId> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Int(value) => ExprKind::Int(value),
            TokenKind::Float(bits) => ExprKind::Float(bits),
            TokenKind::String(name) => ExprKind::String(name),
            TokenKind::KwTrue => ExprKind::Bool(true),
            TokenKind::KwFalse => ExprKind::Bool(false),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::PeriodPrefix => {
                self.bump();
                let name = match self.cursor.expect_member_name() {
                    Ok(name) => name,
                    Err(err) => {
                        self.error(err);
                        return None;
                    }
                };
                let span = span.merge(self.previous_span());
                return Some(self.alloc_expr(ExprKind::ImplicitMember(name), span));
            }
            TokenKind::LParen => return self.parse_paren_expr(),
            TokenKind::Error => {
                self.error(ParseError::new(ErrorCode::E0002, "invalid character", span));
                return None;
            }
            found => {
                let diag = tessel_diagnostic::expected_expression(span, found.display_name())
                    .with_message(format!("{}, found {}", message.as_str(), found.display_name()));
                self.error(ParseError::from_diagnostic(&diag));
                return None;
            }
        };
        self.bump();
        Some(self.alloc_expr(kind, span))
    }

    /// `()`, `(e)` or `(a, b, ...)`.
    fn parse_paren_expr(&mut self) -> Option<ExprId> {
        let open = self.bump();
        let (mut items, trailing_comma) =
            self.parse_delimited_exprs(open, TokenKind::RParen, '(')?;
        let span = open.merge(self.previous_span());
        let kind = if items.len() == 1 && !trailing_comma {
            ExprKind::Paren(items.remove(0))
        } else {
            ExprKind::Tuple(items)
        };
        Some(self.alloc_expr(kind, span))
    }

    /// Comma-separated expressions up to `close`, which is consumed. The
    /// opening delimiter has already been consumed. A trailing comma is
    /// allowed and reported in the second field, so `(a,)` stays a tuple.
    fn parse_delimited_exprs(
        &mut self,
        open: Span,
        close: TokenKind,
        delimiter: char,
    ) -> Option<(Vec<ExprId>, bool)> {
        let mut items = Vec::new();
        let mut trailing_comma = false;
        while !self.check(close) {
            items.push(self.parse_expr()?);
            trailing_comma = self.cursor.eat(TokenKind::Comma);
            if !trailing_comma {
                break;
            }
        }
        if !self.check(close) {
            self.error(ParseError::unclosed(open, self.current_span(), delimiter));
            return None;
        }
        self.bump();
        Some((items, trailing_comma))
    }

    fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.exprs.alloc(Expr::new(kind, span))
    }
}
