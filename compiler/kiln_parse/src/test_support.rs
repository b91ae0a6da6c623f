//! Shared helpers for driving a `Parser` over a source string.

use kiln_diagnostic::{Diagnostic, DiagnosticConfig, ErrorCode};
use kiln_ir::{Name, StringInterner, TokenKind, TokenList};

use crate::{ParseSession, Parser};

pub(crate) struct Harness {
    pub interner: StringInterner,
    pub tokens: TokenList,
}

/// What a parser call left behind.
pub(crate) struct Run<T> {
    pub value: T,
    pub session: ParseSession,
    /// Kind of the first token not consumed.
    pub next: TokenKind,
}

impl<T> Run<T> {
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        self.session.diagnostics.peek().collect()
    }

    pub fn codes(&self) -> Vec<ErrorCode> {
        self.session.diagnostics.peek().map(|d| d.code).collect()
    }
}

impl Harness {
    pub fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = kiln_lexer::lex(source, &interner);
        Harness { interner, tokens }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Run `f` on a fresh parser with unlimited, non-deduplicated
    /// diagnostics.
    pub fn run<T>(&self, f: impl FnOnce(&mut Parser<'_>) -> T) -> Run<T> {
        let mut session = ParseSession::with_config(&self.interner, DiagnosticConfig::unlimited());
        let (value, next) = {
            let mut parser = Parser::new(&self.tokens, &self.interner, &mut session);
            let value = f(&mut parser);
            (value, *parser.cursor().current_kind())
        };
        Run {
            value,
            session,
            next,
        }
    }
}
