//! Append-only storage for AST nodes.

use crate::{
    Expr, ExprId, ExprKind, Name, Pattern, PatternId, PatternKind, ScopeId, Span, TypeId,
    VarDecl, VarId,
};

/// Index of the next node in a table holding `len` nodes.
///
/// The parser allocates at most one node per table for each token it
/// consumes, and a token covers at least one byte of a source whose offsets
/// fit in a `u32`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "node counts are bounded by the token count"
)]
fn next_id(len: usize) -> u32 {
    debug_assert!(u32::try_from(len).is_ok(), "AST arena overflow");
    len as u32
}

/// Owns every pattern, expression and variable declaration of a
/// compilation unit.
///
/// Nodes are never removed. Type slots on patterns and variables are
/// write-once: the first assignment wins and later ones are ignored.
#[derive(Default, Debug)]
pub struct AstArena {
    patterns: Vec<Pattern>,
    exprs: Vec<Expr>,
    vars: Vec<VarDecl>,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    // Patterns

    pub fn alloc_pattern(&mut self, kind: PatternKind, span: Span) -> PatternId {
        let id = PatternId::new(next_id(self.patterns.len()));
        self.patterns.push(Pattern {
            kind,
            span,
            ty: None,
        });
        id
    }

    /// Build `pattern : ty`.
    ///
    /// Writes `ty` onto the new node. An `Any` or `Named` child gets `ty`
    /// too, and so does the binding of a `Named` one. `Paren` and `Tuple`
    /// children keep an empty slot for the checker to synthesize.
    pub fn alloc_typed_pattern(&mut self, pattern: PatternId, ty: TypeId, span: Span) -> PatternId {
        match self.patterns[pattern.index()].kind {
            PatternKind::Named(var) => {
                self.set_pattern_type(pattern, ty);
                self.set_var_type(var, ty);
            }
            PatternKind::Any => {
                self.set_pattern_type(pattern, ty);
            }
            PatternKind::Typed { .. } | PatternKind::Paren(_) | PatternKind::Tuple(_) => {}
        }
        let id = self.alloc_pattern(PatternKind::Typed { pattern, ty }, span);
        self.set_pattern_type(id, ty);
        id
    }

    /// # Panics
    /// Panics if `id` does not belong to this arena.
    #[inline]
    pub fn pattern(&self, id: PatternId) -> &Pattern {
        &self.patterns[id.index()]
    }

    #[inline]
    pub fn pattern_type(&self, id: PatternId) -> Option<TypeId> {
        self.patterns[id.index()].ty
    }

    /// Assign a pattern's type if it has none yet. Returns whether the slot
    /// was written.
    pub fn set_pattern_type(&mut self, id: PatternId, ty: TypeId) -> bool {
        let slot = &mut self.patterns[id.index()].ty;
        if slot.is_some() {
            return false;
        }
        *slot = Some(ty);
        true
    }

    /// The identifier a pattern binds when used as a tuple element.
    ///
    /// `Named` yields its variable's name and `Typed` looks through to its
    /// child. Every other kind binds nothing.
    pub fn bound_name(&self, id: PatternId) -> Option<Name> {
        match &self.pattern(id).kind {
            PatternKind::Named(var) => Some(self.var(*var).name),
            PatternKind::Typed { pattern, .. } => self.bound_name(*pattern),
            PatternKind::Any | PatternKind::Paren(_) | PatternKind::Tuple(_) => None,
        }
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    // Variables

    pub fn alloc_var(&mut self, name: Name, span: Span, scope: ScopeId) -> VarId {
        let id = VarId::new(next_id(self.vars.len()));
        self.vars.push(VarDecl {
            name,
            span,
            scope,
            ty: None,
        });
        id
    }

    #[inline]
    pub fn var(&self, id: VarId) -> &VarDecl {
        &self.vars[id.index()]
    }

    /// Write-once, like [`set_pattern_type`](Self::set_pattern_type).
    pub fn set_var_type(&mut self, id: VarId, ty: TypeId) -> bool {
        let slot = &mut self.vars[id.index()].ty;
        if slot.is_some() {
            return false;
        }
        *slot = Some(ty);
        true
    }

    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    // Expressions

    pub fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId::new(next_id(self.exprs.len()));
        self.exprs.push(Expr { kind, span });
        id
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }
}

#[cfg(test)]
mod tests;
