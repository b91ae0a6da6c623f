//! Top-level declarations.
//!
//! ```text
//! module := decl*
//! decl   := 'func' IDENTIFIER signature ';'?
//!         | 'type' IDENTIFIER ';'?
//! ```
//!
//! Types are visible from their declaration onward; a signature cannot name
//! a type declared later in the file.

use kiln_diagnostic::ErrorGuaranteed;
use kiln_ir::{Name, ScopeId, Span, TokenKind, TypeId};
use tracing::debug;

use crate::recovery::{synchronize, ITEM_BOUNDARY};
use crate::{error, FunctionSignature, ParseOutcome, Parser};

/// A parsed module.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Module {
    pub functions: Vec<FunctionDecl>,
    pub types: Vec<TypeDecl>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionDecl {
    pub name: Name,
    pub span: Span,
    /// Scope holding the parameter bindings.
    pub scope: ScopeId,
    pub signature: FunctionSignature,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeDecl {
    pub name: Name,
    pub span: Span,
    pub ty: TypeId,
}

impl Parser<'_> {
    /// Parse declarations until end of input.
    ///
    /// A declaration that hits a syntax error is dropped and parsing resumes
    /// at the next `func` or `type`.
    pub fn parse_module(&mut self) -> Module {
        let mut module = Module::default();

        while !self.cursor.is_at_end() {
            let token = *self.cursor.current();
            let parsed = match token.kind {
                TokenKind::Func => self
                    .parse_function()
                    .map(|func| module.functions.extend(func)),
                TokenKind::Type => self
                    .parse_type_decl(&module)
                    .map(|decl| module.types.extend(decl)),
                TokenKind::Semicolon => {
                    self.cursor.advance();
                    Ok(())
                }
                _ => {
                    self.cursor.advance();
                    Err(self.emit(error::expected_declaration(&token)))
                }
            };

            if parsed.is_err() {
                synchronize(&mut self.cursor, ITEM_BOUNDARY);
            }
        }

        module
    }

    #[tracing::instrument(level = "trace", skip_all)]
    fn parse_function(&mut self) -> Result<Option<FunctionDecl>, ErrorGuaranteed> {
        let start = self.cursor.advance().span;
        let name = self.expect_ident("func")?;

        let outer = self.enter_scope();
        let scope = self.scope;
        let signature = self.parse_function_signature();
        self.set_scope(outer);

        let signature = match signature {
            ParseOutcome::Value(signature) => signature,
            ParseOutcome::ParseError(guar) => return Err(guar),
            ParseOutcome::SemaError => return Ok(None),
        };
        self.cursor.eat(&TokenKind::Semicolon);

        debug!(
            name = self.interner().lookup(name),
            ty = %self.session.types.display(signature.ty, self.interner()),
            "parsed function"
        );
        Ok(Some(FunctionDecl {
            name,
            span: start.merge(self.cursor.previous_span()),
            scope,
            signature,
        }))
    }

    fn parse_type_decl(&mut self, module: &Module) -> Result<Option<TypeDecl>, ErrorGuaranteed> {
        let start = self.cursor.advance().span;
        let name_span = self.cursor.current_span();
        let name = self.expect_ident("type")?;
        self.cursor.eat(&TokenKind::Semicolon);

        let ty = self.session.types.named(name);
        if !self.session.scopes.declare_type(self.scope, name, ty) {
            let previous = module.types.iter().find(|d| d.name == name).map(|d| d.span);
            let text = self.interner().lookup(name);
            self.emit(error::duplicate_type(text, name_span, previous));
            return Ok(None);
        }

        Ok(Some(TypeDecl {
            name,
            span: start.merge(self.cursor.previous_span()),
            ty,
        }))
    }

    fn expect_ident(&mut self, after: &str) -> Result<Name, ErrorGuaranteed> {
        if let Some(name) = self.cursor.current_ident() {
            self.cursor.advance();
            return Ok(name);
        }
        let found = *self.cursor.current();
        Err(self.emit(error::expected_identifier(&found, after)))
    }
}
