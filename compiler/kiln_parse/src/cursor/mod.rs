//! Forward-only access to the lexer output.

use kiln_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Monotonic position in a [`TokenList`].
///
/// The list must end with `Eof` (as produced by `kiln_lexer::lex`); the
/// cursor never moves past it, so `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// # Panics
    /// Panics if `tokens` is empty.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        assert!(!tokens.is_empty(), "token list must end with Eof");
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Index of the current token. Compare before and after a call to see
    /// whether anything was consumed.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token, or `Span::DUMMY` at the start.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check the current token's kind, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// The current identifier, if the current token is one.
    #[inline]
    pub fn current_ident(&self) -> Option<Name> {
        match self.current_kind() {
            TokenKind::Ident(name) => Some(*name),
            _ => None,
        }
    }

    /// Kind of the token after the current one; `Eof` past the end.
    pub fn peek_next_kind(&self) -> &TokenKind {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + 1).min(last)].kind
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}
