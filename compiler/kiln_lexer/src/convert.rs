//! Converts raw logos tokens to `TokenKind`, interning strings.

use kiln_ir::{StringInterner, TokenKind};

use crate::raw_token::RawToken;

pub(crate) fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::Float(f.to_bits()),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(&unescape(content)))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::Func => TokenKind::Func,
        RawToken::Type => TokenKind::Type,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
    }
}

/// Resolve `\n`, `\t`, `\\` and `\"`. Unknown escapes keep the character.
fn unescape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
