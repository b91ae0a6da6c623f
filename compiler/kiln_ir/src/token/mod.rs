//! Tokens produced by the lexer and consumed by the parser.

use std::fmt;
use std::ops::Index;

use crate::{Name, Span};

/// Token kinds.
///
/// Literal payloads are stored inline: integers as `u64`, floats as their
/// bit pattern (so the enum stays `Eq + Hash`), strings and identifiers as
/// interned [`Name`]s.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Ident(Name),
    Int(u64),
    Float(u64),
    String(Name),

    // Keywords
    Func,
    Type,
    True,
    False,

    // Punctuation
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    Eq,
    Arrow,
    Plus,
    Minus,
    Star,
    Slash,

    /// Input the lexer could not recognize.
    Error,
    Eof,
}

impl TokenKind {
    /// Number of distinct discriminants; bounds `TokenSet` bit indices.
    pub const COUNT: u8 = 21;

    /// Dense discriminant index, ignoring payloads.
    pub const fn discriminant_index(&self) -> u8 {
        match self {
            TokenKind::Ident(_) => 0,
            TokenKind::Int(_) => 1,
            TokenKind::Float(_) => 2,
            TokenKind::String(_) => 3,
            TokenKind::Func => 4,
            TokenKind::Type => 5,
            TokenKind::True => 6,
            TokenKind::False => 7,
            TokenKind::LParen => 8,
            TokenKind::RParen => 9,
            TokenKind::Comma => 10,
            TokenKind::Colon => 11,
            TokenKind::Semicolon => 12,
            TokenKind::Eq => 13,
            TokenKind::Arrow => 14,
            TokenKind::Plus => 15,
            TokenKind::Minus => 16,
            TokenKind::Star => 17,
            TokenKind::Slash => 18,
            TokenKind::Error => 19,
            TokenKind::Eof => 20,
        }
    }

    /// Human-readable name used in diagnostics and `kiln lex` output.
    pub const fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::String(_) => "string",
            TokenKind::Func => "func",
            TokenKind::Type => "type",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Eq => "=",
            TokenKind::Arrow => "->",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }

    /// True for kinds that differ only by payload.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        self.discriminant_index() == other.discriminant_index()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output. Always terminated by a single `Eof` token when produced by
/// `kiln_lexer::lex`.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
