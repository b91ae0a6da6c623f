//! Lexical scopes for variable and type resolution.

use rustc_hash::FxHashMap;

use crate::{Name, StringInterner, TypeId, TypePool, VarId};

/// Index of a scope in a [`ScopeTree`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The module-level scope holding the builtin types.
    pub const ROOT: ScopeId = ScopeId(0);

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Default)]
struct Scope {
    parent: Option<ScopeId>,
    vars: FxHashMap<Name, VarId>,
    types: FxHashMap<Name, TypeId>,
}

/// Tree of scopes. Lookups walk from a scope to the root.
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

/// Types every module can name without declaring them.
pub const BUILTIN_TYPES: [&str; 4] = ["Int", "Float", "Bool", "String"];

impl ScopeTree {
    /// A tree containing only an empty root scope.
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![Scope::default()],
        }
    }

    /// A tree whose root scope declares [`BUILTIN_TYPES`].
    pub fn with_builtin_types(interner: &StringInterner, types: &mut TypePool) -> Self {
        let mut tree = Self::new();
        for builtin in BUILTIN_TYPES {
            let name = interner.intern(builtin);
            let ty = types.named(name);
            tree.declare_type(ScopeId::ROOT, name, ty);
        }
        tree
    }

    /// # Panics
    /// Panics once the tree holds `u32::MAX` scopes.
    pub fn push_child(&mut self, parent: ScopeId) -> ScopeId {
        let raw = u32::try_from(self.scopes.len())
            .unwrap_or_else(|_| panic!("scope tree exceeded {} scopes", u32::MAX));
        self.scopes.push(Scope {
            parent: Some(parent),
            ..Scope::default()
        });
        ScopeId(raw)
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.index()].parent
    }

    /// Declare `name` in `scope`, shadowing any earlier binding of the same
    /// name in that scope.
    pub fn declare_var(&mut self, scope: ScopeId, name: Name, var: VarId) {
        self.scopes[scope.index()].vars.insert(name, var);
    }

    pub fn lookup_var(&self, scope: ScopeId, name: Name) -> Option<VarId> {
        self.ancestors(scope)
            .find_map(|s| self.scopes[s.index()].vars.get(&name).copied())
    }

    /// Declare a nominal type. Returns `false` if `scope` already declares it.
    pub fn declare_type(&mut self, scope: ScopeId, name: Name, ty: TypeId) -> bool {
        let types = &mut self.scopes[scope.index()].types;
        if types.contains_key(&name) {
            return false;
        }
        types.insert(name, ty);
        true
    }

    pub fn lookup_type(&self, scope: ScopeId, name: Name) -> Option<TypeId> {
        self.ancestors(scope)
            .find_map(|s| self.scopes[s.index()].types.get(&name).copied())
    }

    pub fn has_type(&self, scope: ScopeId, name: Name) -> bool {
        self.lookup_type(scope, name).is_some()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    fn ancestors(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), |s| self.scopes[s.index()].parent)
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
