use crate::{ExprId, Name, PatternId, ScopeId, Span, TypeId, VarId};

/// A pattern node.
///
/// `ty` is empty until the node is annotated (`Typed`, or the direct child of
/// one) or synthesized by the full-typedness check. Once set it never changes.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
    pub ty: Option<TypeId>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum PatternKind {
    /// `_`
    Any,
    /// A binding introduced into the enclosing scope.
    Named(VarId),
    /// `( pattern )`, grouping only.
    Paren(PatternId),
    /// `( elem, elem, ... )`, possibly empty.
    Tuple(Vec<TuplePatternElt>),
    /// `pattern : type`
    Typed { pattern: PatternId, ty: TypeId },
}

/// One element of a tuple pattern: a sub-pattern and an optional default.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TuplePatternElt {
    pub pattern: PatternId,
    pub init: Option<ExprId>,
}

/// A variable binding created by a `Named` pattern.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VarDecl {
    pub name: Name,
    pub span: Span,
    pub scope: ScopeId,
    pub ty: Option<TypeId>,
}
