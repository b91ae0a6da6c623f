//! Skipping input after a syntax error.
//!
//! Declarations recover by skipping to the next token in a [`TokenSet`].
//! Parenthesized lists recover by skipping past their own closing `)`.

use kiln_ir::TokenKind;
use tracing::trace;

use crate::cursor::Cursor;

/// Token kinds, ignoring payloads, packed one bit per
/// [`TokenKind::discriminant_index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

const _: () = assert!(TokenKind::COUNT <= 64, "TokenSet needs a wider bitset");

const fn bit(kind: &TokenKind) -> u64 {
    1u64 << kind.discriminant_index()
}

impl TokenSet {
    pub const fn new() -> Self {
        TokenSet(0)
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub const fn with(self, kind: TokenKind) -> Self {
        TokenSet(self.0 | bit(&kind))
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        self.0 & bit(kind) != 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokens that can start a top-level declaration.
pub const ITEM_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Func)
    .with(TokenKind::Type)
    .with(TokenKind::Eof);

/// Skip until the current token is in `recovery`.
///
/// Returns `false` when the input ran out first.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    let start = cursor.position();
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            trace!(skipped = cursor.position() - start, "synchronized");
            return true;
        }
        cursor.advance();
    }
    trace!(skipped = cursor.position() - start, "synchronize reached end of file");
    false
}

/// Abandon a parenthesized list whose `(` was already consumed.
///
/// Skips tokens, tracking nested parens, up to and including the `)` that
/// closes the list. Returns `false` if the input ended first.
pub fn skip_past_closing_paren(cursor: &mut Cursor<'_>) -> bool {
    let start = cursor.position();
    let mut depth = 1usize;
    while !cursor.is_at_end() {
        match cursor.current_kind() {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth -= 1,
            _ => {}
        }
        cursor.advance();
        if depth == 0 {
            trace!(skipped = cursor.position() - start, "resynchronized past `)`");
            return true;
        }
    }
    trace!(skipped = cursor.position() - start, "resync reached end of file");
    false
}
