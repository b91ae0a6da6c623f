//! Expression parsing for default values.
//!
//! Precedence climbing over `+ -` and `* /` (left associative), prefix `-`,
//! and primaries: literals, identifiers, parenthesized expressions and
//! tuples.

use kiln_ir::{BinaryOp, ExprId, ExprKind, TokenKind, UnaryOp};

use crate::recovery::skip_past_closing_paren;
use crate::stack::ensure_sufficient_stack;
use crate::{error, propagate, ParseOutcome, Parser};

fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// An identifier that does not resolve in the current scope chain is
    /// reported and yields `SemaError`.
    pub fn parse_expr(&mut self) -> ParseOutcome<ExprId> {
        ensure_sufficient_stack(|| self.parse_binary(0))
    }

    fn parse_binary(&mut self, min_prec: u8) -> ParseOutcome<ExprId> {
        let start = self.cursor.current_span();
        let mut left = propagate!(self.parse_unary());

        while let Some(op) = binary_op(self.cursor.current_kind()) {
            let prec = op.precedence();
            if prec <= min_prec {
                break;
            }
            self.cursor.advance();
            let right = propagate!(self.parse_binary(prec));
            left = match (left, right) {
                (Some(left), Some(right)) => {
                    let span = start.merge(self.cursor.previous_span());
                    let kind = ExprKind::Binary { op, left, right };
                    Some(self.session.arena.alloc_expr(kind, span))
                }
                _ => None,
            };
        }

        ParseOutcome::from_option(left)
    }

    fn parse_unary(&mut self) -> ParseOutcome<ExprId> {
        if !self.cursor.check(&TokenKind::Minus) {
            return self.parse_primary();
        }
        let start = self.cursor.advance().span;
        let operand = propagate!(ensure_sufficient_stack(|| self.parse_unary()));
        ParseOutcome::from_option(operand.map(|operand| {
            let span = start.merge(self.cursor.previous_span());
            let kind = ExprKind::Unary {
                op: UnaryOp::Neg,
                operand,
            };
            self.session.arena.alloc_expr(kind, span)
        }))
    }

    fn parse_primary(&mut self) -> ParseOutcome<ExprId> {
        let token = *self.cursor.current();
        let kind = match token.kind {
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::Float(bits) => ExprKind::Float(bits),
            TokenKind::String(name) => ExprKind::String(name),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Ident(name) => {
                self.cursor.advance();
                return match self.session.scopes.lookup_var(self.scope, name) {
                    Some(var) => ParseOutcome::Value(
                        self.session.arena.alloc_expr(ExprKind::Ident(var), token.span),
                    ),
                    None => {
                        let text = self.interner().lookup(name);
                        self.emit(error::unresolved_identifier(text, token.span));
                        ParseOutcome::SemaError
                    }
                };
            }
            TokenKind::LParen => return self.parse_paren_expr(),
            _ => return ParseOutcome::ParseError(self.emit(error::expected_expression(&token))),
        };
        self.cursor.advance();
        ParseOutcome::Value(self.session.arena.alloc_expr(kind, token.span))
    }

    /// `()`, `(e)` or `(e, e, ...)`.
    fn parse_paren_expr(&mut self) -> ParseOutcome<ExprId> {
        let open = self.cursor.current_span();
        self.cursor.advance();

        let mut elements = Vec::new();
        let mut tainted = false;

        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                match self.parse_expr() {
                    ParseOutcome::Value(expr) => elements.push(expr),
                    ParseOutcome::SemaError => tainted = true,
                    ParseOutcome::ParseError(guar) => {
                        skip_past_closing_paren(&mut self.cursor);
                        return ParseOutcome::ParseError(guar);
                    }
                }
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        if !self.cursor.check(&TokenKind::RParen) {
            let found = *self.cursor.current();
            let guar = self.emit(error::unclosed_paren(&found, open, "to close expression"));
            skip_past_closing_paren(&mut self.cursor);
            return ParseOutcome::ParseError(guar);
        }
        self.cursor.advance();

        if tainted {
            return ParseOutcome::SemaError;
        }
        match elements.as_slice() {
            [only] => ParseOutcome::Value(*only),
            _ => {
                let span = open.merge(self.cursor.previous_span());
                ParseOutcome::Value(self.session.arena.alloc_expr(ExprKind::Tuple(elements), span))
            }
        }
    }
}

#[cfg(test)]
mod tests;
