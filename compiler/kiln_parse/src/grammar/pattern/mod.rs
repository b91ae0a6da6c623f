//! Pattern parsing.
//!
//! ```text
//! pattern            := pattern-atom (':' type)?
//! pattern-atom       := IDENTIFIER | pattern-tuple
//! pattern-tuple      := '(' (pattern-tuple-elem (',' pattern-tuple-elem)*)? ')'
//! pattern-tuple-elem := pattern ('=' expr)?
//! ```

use kiln_diagnostic::ErrorGuaranteed;
use kiln_ir::{PatternId, PatternKind, TokenKind, TuplePatternElt};
use tracing::trace;

use crate::recovery::skip_past_closing_paren;
use crate::stack::ensure_sufficient_stack;
use crate::{error, propagate, ParseOutcome, Parser};

impl Parser<'_> {
    /// Parse a pattern with an optional `: type` annotation.
    ///
    /// A `SemaError` atom still has its annotation consumed. A `SemaError`
    /// annotation on a good atom makes the whole pattern `SemaError`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_pattern(&mut self) -> ParseOutcome<PatternId> {
        ensure_sufficient_stack(|| {
            let start = self.cursor.current_span();
            let atom = propagate!(self.parse_pattern_atom());

            if !self.cursor.eat(&TokenKind::Colon) {
                return ParseOutcome::from_option(atom);
            }

            let ty = propagate!(self.parse_type());
            match (atom, ty) {
                (Some(atom), Some(ty)) => {
                    let span = start.merge(self.cursor.previous_span());
                    ParseOutcome::Value(self.session.arena.alloc_typed_pattern(atom, ty, span))
                }
                _ => ParseOutcome::SemaError,
            }
        })
    }

    /// Parse an identifier, `_`, or a parenthesized pattern list.
    ///
    /// An identifier other than `_` declares a new variable in the current
    /// scope.
    pub fn parse_pattern_atom(&mut self) -> ParseOutcome<PatternId> {
        let token = *self.cursor.current();
        match token.kind {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                let kind = if name == self.underscore {
                    PatternKind::Any
                } else {
                    let var = self.session.arena.alloc_var(name, token.span, self.scope);
                    self.session.scopes.declare_var(self.scope, name, var);
                    PatternKind::Named(var)
                };
                ParseOutcome::Value(self.session.arena.alloc_pattern(kind, token.span))
            }
            TokenKind::LParen => self.parse_pattern_tuple(),
            _ => ParseOutcome::ParseError(self.emit(error::expected_pattern(&token))),
        }
    }

    /// Parse `( elem, ... )` starting at the `(`.
    ///
    /// One element with neither a default nor a bound name is a `Paren`
    /// (grouping), so `(_)` and `((a, b))` group while `(x)` and `(x: Int)`
    /// are one-element tuples. Anything else is a `Tuple`. On a syntax error inside the list the cursor skips past
    /// the matching `)` before `ParseError` is returned.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_pattern_tuple(&mut self) -> ParseOutcome<PatternId> {
        let open = self.cursor.current_span();
        debug_assert!(self.cursor.check(&TokenKind::LParen));
        self.cursor.advance();

        let mut elements = Vec::new();
        let mut tainted = false;

        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                let pattern = match self.parse_pattern() {
                    ParseOutcome::Value(pattern) => Some(pattern),
                    ParseOutcome::SemaError => None,
                    ParseOutcome::ParseError(guar) => return self.abandon_pattern_tuple(guar),
                };

                let mut init = None;
                if self.cursor.eat(&TokenKind::Eq) {
                    match self.parse_expr() {
                        ParseOutcome::Value(expr) => init = Some(expr),
                        ParseOutcome::SemaError => tainted = true,
                        ParseOutcome::ParseError(guar) => {
                            return self.abandon_pattern_tuple(guar)
                        }
                    }
                }

                match pattern {
                    Some(pattern) => elements.push(TuplePatternElt { pattern, init }),
                    None => tainted = true,
                }

                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        if !self.cursor.check(&TokenKind::RParen) {
            let found = *self.cursor.current();
            let guar = self.emit(error::unclosed_paren(&found, open, "to close pattern list"));
            return self.abandon_pattern_tuple(guar);
        }
        self.cursor.advance();

        if tainted {
            return ParseOutcome::SemaError;
        }

        let span = open.merge(self.cursor.previous_span());
        let arena = &self.session.arena;
        let kind = match elements.as_slice() {
            [only] if only.init.is_none() && arena.bound_name(only.pattern).is_none() => {
                PatternKind::Paren(only.pattern)
            }
            _ => PatternKind::Tuple(elements),
        };
        ParseOutcome::Value(self.session.arena.alloc_pattern(kind, span))
    }

    #[cold]
    fn abandon_pattern_tuple(&mut self, guar: ErrorGuaranteed) -> ParseOutcome<PatternId> {
        trace!("abandoning pattern tuple");
        skip_past_closing_paren(&mut self.cursor);
        ParseOutcome::ParseError(guar)
    }
}
