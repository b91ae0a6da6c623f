//! Type parsing.
//!
//! ```text
//! type      := type-atom ('->' type)?
//! type-atom := IDENTIFIER | '(' (type-elem (',' type-elem)*)? ')'
//! type-elem := (IDENTIFIER ':')? type
//! ```
//!
//! Arrows associate to the right. A single unlabeled element in parens is
//! grouping, not a one-element tuple.

use kiln_ir::{TokenKind, TupleTypeElt, TypeId};

use crate::recovery::skip_past_closing_paren;
use crate::stack::ensure_sufficient_stack;
use crate::{error, propagate, ParseOutcome, Parser};

impl Parser<'_> {
    /// Parse a type expression, interning it in the session's type pool.
    pub fn parse_type(&mut self) -> ParseOutcome<TypeId> {
        ensure_sufficient_stack(|| {
            let param = propagate!(self.parse_type_atom());
            if !self.cursor.eat(&TokenKind::Arrow) {
                return ParseOutcome::from_option(param);
            }
            let result = propagate!(self.parse_type());
            match (param, result) {
                (Some(param), Some(result)) => {
                    ParseOutcome::Value(self.session.types.function(param, result))
                }
                _ => ParseOutcome::SemaError,
            }
        })
    }

    fn parse_type_atom(&mut self) -> ParseOutcome<TypeId> {
        let token = *self.cursor.current();
        match token.kind {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                match self.session.scopes.lookup_type(self.scope, name) {
                    Some(ty) => ParseOutcome::Value(ty),
                    None => {
                        let text = self.interner().lookup(name);
                        self.emit(error::undeclared_type(text, token.span));
                        ParseOutcome::SemaError
                    }
                }
            }
            TokenKind::LParen => self.parse_tuple_type(),
            _ => ParseOutcome::ParseError(self.emit(error::expected_type(&token))),
        }
    }

    fn parse_tuple_type(&mut self) -> ParseOutcome<TypeId> {
        let open = self.cursor.current_span();
        self.cursor.advance();

        let mut elements = Vec::new();
        let mut tainted = false;

        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                let label = match self.cursor.current_ident() {
                    Some(name) if matches!(self.cursor.peek_next_kind(), TokenKind::Colon) => {
                        self.cursor.advance();
                        self.cursor.advance();
                        Some(name)
                    }
                    _ => None,
                };

                match self.parse_type() {
                    ParseOutcome::Value(ty) => elements.push(TupleTypeElt {
                        ty,
                        name: label,
                        default: None,
                    }),
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
            let guar = self.emit(error::unclosed_paren(&found, open, "in tuple type"));
            skip_past_closing_paren(&mut self.cursor);
            return ParseOutcome::ParseError(guar);
        }
        self.cursor.advance();

        if tainted {
            return ParseOutcome::SemaError;
        }
        match elements.as_slice() {
            [only] if only.name.is_none() => ParseOutcome::Value(only.ty),
            _ => ParseOutcome::Value(self.session.types.tuple(elements)),
        }
    }
}

#[cfg(test)]
mod tests;
