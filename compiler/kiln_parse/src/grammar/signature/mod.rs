//! Function signatures: one or more curried parameter clauses and an
//! optional result type.
//!
//! ```text
//! signature := pattern-tuple+ ('->' type)?
//! ```
//!
//! `(a: A)(b: B) -> R` has type `A -> (B -> R)`. Every clause must be fully
//! typed; a clause that is not contributes `()` in its position so the
//! signature type is always complete.

use kiln_ir::{PatternId, Span, TokenKind, TypeId};
use tracing::debug;

use crate::typed::check_fully_typed;
use crate::{error, ParseOutcome, Parser};

/// A parsed signature and its folded function type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionSignature {
    /// Clauses that parsed to a pattern, in source order.
    pub params: Vec<PatternId>,
    /// The curried function type.
    pub ty: TypeId,
    pub span: Span,
    /// A clause or the result type was dropped because of a `SemaError`.
    pub had_sema_error: bool,
}

impl Parser<'_> {
    /// Parse a function signature.
    ///
    /// Returns `ParseError` only for syntax errors (including a missing
    /// first clause). Semantic problems in individual clauses are recorded
    /// in [`FunctionSignature::had_sema_error`] and never produce
    /// `SemaError`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_function_signature(&mut self) -> ParseOutcome<FunctionSignature> {
        let start = self.cursor.current_span();

        if !self.cursor.check(&TokenKind::LParen) {
            let found = *self.cursor.current();
            return ParseOutcome::ParseError(self.emit(error::expected_parameter_clause(&found)));
        }

        let mut params = Vec::new();
        let mut had_sema_error = false;

        while self.cursor.check(&TokenKind::LParen) {
            match self.parse_pattern_tuple() {
                ParseOutcome::Value(clause) => params.push(clause),
                ParseOutcome::SemaError => had_sema_error = true,
                ParseOutcome::ParseError(guar) => return ParseOutcome::ParseError(guar),
            }
        }

        let mut result = TypeId::UNIT;
        if self.cursor.eat(&TokenKind::Arrow) {
            match self.parse_type() {
                ParseOutcome::Value(ty) => result = ty,
                ParseOutcome::SemaError => had_sema_error = true,
                ParseOutcome::ParseError(guar) => return ParseOutcome::ParseError(guar),
            }
        }

        let ty = self.fold_clauses(&params, result);
        ParseOutcome::Value(FunctionSignature {
            params,
            ty,
            span: start.merge(self.cursor.previous_span()),
            had_sema_error,
        })
    }

    /// Fold clauses right to left into `P1 -> (P2 -> ... -> result)`.
    fn fold_clauses(&mut self, params: &[PatternId], result: TypeId) -> TypeId {
        let session = &mut *self.session;
        let mut running = result;
        for &clause in params.iter().rev() {
            let param = check_fully_typed(
                &mut session.arena,
                &mut session.types,
                &mut session.diagnostics,
                clause,
            )
            .unwrap_or_else(|_| {
                debug!(?clause, "clause not fully typed, using ()");
                TypeId::UNIT
            });
            running = session.types.function(param, running);
        }
        debug!(clauses = params.len(), ?running, "folded signature");
        running
    }
}
