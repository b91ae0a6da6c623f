//! Recursive descent parser for Kiln patterns and function signatures.
//!
//! The centre of this crate is the pattern grammar
//!
//! ```text
//! pattern            := pattern-atom (':' type)?
//! pattern-atom       := IDENTIFIER | pattern-tuple
//! pattern-tuple      := '(' (pattern-tuple-elem (',' pattern-tuple-elem)*)? ')'
//! pattern-tuple-elem := pattern ('=' expr)?
//! ```
//!
//! and the signature builder that folds curried parameter clauses into one
//! function type. Types and default-value expressions have small grammars
//! of their own so the pattern parser can be driven end to end.
//!
//! Every operation returns a [`ParseOutcome`]; see its module docs for the
//! `Value` / `ParseError` / `SemaError` discipline.

mod cursor;
pub mod error;
mod grammar;
mod outcome;
pub mod print;
pub mod recovery;
mod stack;
mod typed;

#[cfg(test)]
mod test_support;

pub use cursor::Cursor;
pub use grammar::{FunctionDecl, FunctionSignature, Module, TypeDecl};
pub use outcome::ParseOutcome;
pub use typed::check_fully_typed;

use kiln_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorGuaranteed};
use kiln_ir::{AstArena, Name, ScopeId, ScopeTree, StringInterner, TokenList, TypePool};

/// Everything a parse produces besides the module itself.
///
/// Owned by the caller and lent to the [`Parser`] for its lifetime.
pub struct ParseSession {
    pub arena: AstArena,
    pub types: TypePool,
    pub scopes: ScopeTree,
    pub diagnostics: DiagnosticQueue,
}

impl ParseSession {
    /// A session with the builtin types declared and default diagnostics.
    pub fn new(interner: &StringInterner) -> Self {
        Self::with_config(interner, DiagnosticConfig::default())
    }

    pub fn with_config(interner: &StringInterner, config: DiagnosticConfig) -> Self {
        let mut types = TypePool::new();
        let scopes = ScopeTree::with_builtin_types(interner, &mut types);
        ParseSession {
            arena: AstArena::new(),
            types,
            scopes,
            diagnostics: DiagnosticQueue::with_config(config),
        }
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    session: &'a mut ParseSession,
    /// Scope that new bindings are declared in and names resolve from.
    scope: ScopeId,
    underscore: Name,
}

impl<'a> Parser<'a> {
    pub fn new(
        tokens: &'a TokenList,
        interner: &'a StringInterner,
        session: &'a mut ParseSession,
    ) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            session,
            scope: ScopeId::ROOT,
            underscore: interner.intern("_"),
        }
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub fn session(&self) -> &ParseSession {
        self.session
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Open a child of the current scope and make it current. Returns the
    /// scope to restore with [`set_scope`](Self::set_scope).
    pub fn enter_scope(&mut self) -> ScopeId {
        let child = self.session.scopes.push_child(self.scope);
        std::mem::replace(&mut self.scope, child)
    }

    pub fn set_scope(&mut self, scope: ScopeId) {
        self.scope = scope;
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    #[cold]
    fn emit(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        self.session.diagnostics.emit(diag)
    }
}

/// Output of [`parse`].
pub struct ParseOutput {
    pub module: Module,
    pub session: ParseSession,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.session.diagnostics.has_errors().is_some()
    }
}

/// Parse a whole module.
pub fn parse(tokens: &TokenList, interner: &StringInterner, config: DiagnosticConfig) -> ParseOutput {
    let mut session = ParseSession::with_config(interner, config);
    let module = Parser::new(tokens, interner, &mut session).parse_module();
    ParseOutput { module, session }
}
