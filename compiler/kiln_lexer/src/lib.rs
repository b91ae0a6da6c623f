//! Kiln lexer.
//!
//! Turns source text into a [`TokenList`]. Lexing never fails: input that
//! matches no rule (and integer literals that overflow `u64`) becomes a
//! [`TokenKind::Error`] token and the parser reports it in context.

mod convert;
mod raw_token;

use kiln_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

use crate::convert::convert_token;
use crate::raw_token::RawToken;

/// Lex `source` into tokens, always ending with a single `Eof`.
///
/// Offsets past `u32::MAX` saturate like [`Span::from_range`]. Callers
/// reading untrusted files reject those first with [`Span::try_from_range`].
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut tokens = TokenList::new();
    for (raw, range) in RawToken::lexer(source).spanned() {
        let span = Span::from_range(range.clone());
        let kind = match raw {
            Ok(raw) => convert_token(raw, &source[range], interner),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token::new(kind, span));
    }
    let end = source.len();
    tokens.push(Token::new(TokenKind::Eof, Span::from_range(end..end)));

    tracing::trace!(tokens = tokens.len(), "lexed");
    tokens
}
