use super::*;
use crate::{StringInterner, TuplePatternElt, TypePool};

#[test]
fn typed_pattern_writes_child_and_binding() {
    let interner = StringInterner::new();
    let mut types = TypePool::new();
    let int = types.named(interner.intern("Int"));
    let mut arena = AstArena::new();

    let var = arena.alloc_var(interner.intern("x"), Span::new(1, 2), ScopeId::ROOT);
    let named = arena.alloc_pattern(PatternKind::Named(var), Span::new(1, 2));
    let typed = arena.alloc_typed_pattern(named, int, Span::new(1, 7));

    assert_eq!(arena.pattern_type(typed), Some(int));
    assert_eq!(arena.pattern_type(named), Some(int));
    assert_eq!(arena.var(var).ty, Some(int));
    assert_eq!(
        arena.pattern(typed).kind,
        PatternKind::Typed {
            pattern: named,
            ty: int
        }
    );
}

#[test]
fn typed_pattern_leaves_composite_child_empty() {
    let interner = StringInterner::new();
    let mut types = TypePool::new();
    let int = types.named(interner.intern("Int"));
    let mut arena = AstArena::new();

    let any = arena.alloc_pattern(PatternKind::Any, Span::new(1, 2));
    let tuple = arena.alloc_pattern(
        PatternKind::Tuple(vec![
            TuplePatternElt { pattern: any, init: None },
            TuplePatternElt { pattern: any, init: None },
        ]),
        Span::new(0, 6),
    );
    let paren = arena.alloc_pattern(PatternKind::Paren(tuple), Span::new(0, 8));
    let typed = arena.alloc_typed_pattern(paren, int, Span::new(0, 13));

    assert_eq!(arena.pattern_type(typed), Some(int));
    assert_eq!(arena.pattern_type(paren), None);
    assert_eq!(arena.pattern_type(tuple), None);

    let typed_any = arena.alloc_typed_pattern(any, int, Span::new(1, 7));
    assert_eq!(arena.pattern_type(typed_any), Some(int));
    assert_eq!(arena.pattern_type(any), Some(int));
}

#[test]
fn type_slots_are_write_once() {
    let interner = StringInterner::new();
    let mut types = TypePool::new();
    let int = types.named(interner.intern("Int"));
    let mut arena = AstArena::new();

    let any = arena.alloc_pattern(PatternKind::Any, Span::new(0, 1));
    assert!(arena.set_pattern_type(any, int));
    assert!(!arena.set_pattern_type(any, TypeId::UNIT));
    assert_eq!(arena.pattern_type(any), Some(int));

    let var = arena.alloc_var(interner.intern("y"), Span::DUMMY, ScopeId::ROOT);
    assert!(arena.set_var_type(var, TypeId::UNIT));
    assert!(!arena.set_var_type(var, int));
    assert_eq!(arena.var(var).ty, Some(TypeId::UNIT));
}

#[test]
fn bound_name_looks_through_typed_only() {
    let interner = StringInterner::new();
    let mut arena = AstArena::new();
    let x = interner.intern("x");

    let var = arena.alloc_var(x, Span::DUMMY, ScopeId::ROOT);
    let named = arena.alloc_pattern(PatternKind::Named(var), Span::DUMMY);
    let typed = arena.alloc_typed_pattern(named, TypeId::UNIT, Span::DUMMY);
    let paren = arena.alloc_pattern(PatternKind::Paren(named), Span::DUMMY);
    let any = arena.alloc_pattern(PatternKind::Any, Span::DUMMY);
    let tuple = arena.alloc_pattern(
        PatternKind::Tuple(vec![TuplePatternElt {
            pattern: named,
            init: None,
        }]),
        Span::DUMMY,
    );

    assert_eq!(arena.bound_name(named), Some(x));
    assert_eq!(arena.bound_name(typed), Some(x));
    assert_eq!(arena.bound_name(paren), None);
    assert_eq!(arena.bound_name(any), None);
    assert_eq!(arena.bound_name(tuple), None);
}

#[test]
fn ids_are_dense() {
    let mut arena = AstArena::new();
    let a = arena.alloc_expr(ExprKind::Int(1), Span::new(0, 1));
    let b = arena.alloc_expr(ExprKind::Bool(true), Span::new(2, 6));
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(arena.expr_count(), 2);
    assert_eq!(arena.expr(b).kind, ExprKind::Bool(true));
}
