use super::*;

#[test]
fn builtins_live_in_root() {
    let interner = StringInterner::new();
    let mut types = TypePool::new();
    let tree = ScopeTree::with_builtin_types(&interner, &mut types);
    for builtin in BUILTIN_TYPES {
        assert!(tree.has_type(ScopeId::ROOT, interner.intern(builtin)), "{builtin}");
    }
    assert!(!tree.has_type(ScopeId::ROOT, interner.intern("Widget")));
}

#[test]
fn child_scopes_see_parent_declarations() {
    let interner = StringInterner::new();
    let mut types = TypePool::new();
    let mut tree = ScopeTree::with_builtin_types(&interner, &mut types);
    let child = tree.push_child(ScopeId::ROOT);
    let x = interner.intern("x");
    tree.declare_var(child, x, VarId::new(0));

    assert_eq!(tree.parent(child), Some(ScopeId::ROOT));
    assert_eq!(tree.lookup_var(child, x), Some(VarId::new(0)));
    assert_eq!(tree.lookup_var(ScopeId::ROOT, x), None);
    assert!(tree.has_type(child, interner.intern("Int")));
}

#[test]
fn later_var_shadows_earlier() {
    let interner = StringInterner::new();
    let mut tree = ScopeTree::new();
    let x = interner.intern("x");
    tree.declare_var(ScopeId::ROOT, x, VarId::new(0));
    tree.declare_var(ScopeId::ROOT, x, VarId::new(1));
    assert_eq!(tree.lookup_var(ScopeId::ROOT, x), Some(VarId::new(1)));
}

#[test]
fn duplicate_type_in_same_scope_is_rejected() {
    let interner = StringInterner::new();
    let mut types = TypePool::new();
    let mut tree = ScopeTree::new();
    let name = interner.intern("Point");
    let ty = types.named(name);
    assert!(tree.declare_type(ScopeId::ROOT, name, ty));
    assert!(!tree.declare_type(ScopeId::ROOT, name, ty));

    let child = tree.push_child(ScopeId::ROOT);
    assert!(tree.declare_type(child, name, ty));
}
