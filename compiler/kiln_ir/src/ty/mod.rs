//! Hash-consed types.
//!
//! Every structurally distinct [`Type`] is stored once in a [`TypePool`], so
//! two types are equal exactly when their [`TypeId`]s are.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{ExprId, Name, StringInterner};

/// Index of a type in a [`TypePool`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// The empty tuple `()`, pre-interned in every pool.
    pub const UNIT: TypeId = TypeId(0);

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// A nominal type such as `Int`.
    Named(Name),
    Tuple(Vec<TupleTypeElt>),
    Function { param: TypeId, result: TypeId },
}

/// One element of a tuple type.
///
/// Pattern-derived tuple types keep the bound name and the default value of
/// each element, so `(x: Int)` and `(y: Int)` are distinct types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TupleTypeElt {
    pub ty: TypeId,
    pub name: Option<Name>,
    pub default: Option<ExprId>,
}

impl TupleTypeElt {
    /// An unlabeled element without a default.
    pub const fn plain(ty: TypeId) -> Self {
        TupleTypeElt {
            ty,
            name: None,
            default: None,
        }
    }
}

/// Append-only, deduplicating type storage.
pub struct TypePool {
    types: Vec<Type>,
    map: FxHashMap<Type, TypeId>,
}

impl TypePool {
    pub fn new() -> Self {
        let mut pool = TypePool {
            types: Vec::new(),
            map: FxHashMap::default(),
        };
        let unit = pool.intern(Type::Tuple(Vec::new()));
        debug_assert_eq!(unit, TypeId::UNIT);
        pool
    }

    /// # Panics
    /// Panics once the pool holds `u32::MAX` types.
    pub fn intern(&mut self, ty: Type) -> TypeId {
        if let Some(&id) = self.map.get(&ty) {
            return id;
        }
        let raw = u32::try_from(self.types.len())
            .unwrap_or_else(|_| panic!("type pool exceeded {} entries", u32::MAX));
        let id = TypeId(raw);
        self.types.push(ty.clone());
        self.map.insert(ty, id);
        id
    }

    pub fn named(&mut self, name: Name) -> TypeId {
        self.intern(Type::Named(name))
    }

    pub fn tuple(&mut self, elements: Vec<TupleTypeElt>) -> TypeId {
        self.intern(Type::Tuple(elements))
    }

    pub fn function(&mut self, param: TypeId, result: TypeId) -> TypeId {
        self.intern(Type::Function { param, result })
    }

    /// # Panics
    /// Panics if `id` was not produced by this pool.
    pub fn get(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    pub fn is_function(&self, id: TypeId) -> bool {
        matches!(self.get(id), Type::Function { .. })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        // `()` is always present.
        false
    }

    /// Render `id` as source-like text.
    ///
    /// Tuple elements keep their labels but not their defaults. Function
    /// types nested on either side of an arrow are parenthesized.
    pub fn display(&self, id: TypeId, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.write_type(&mut out, id, interner);
        out
    }

    fn write_type(&self, out: &mut String, id: TypeId, interner: &StringInterner) {
        match self.get(id) {
            Type::Named(name) => out.push_str(interner.lookup(*name)),
            Type::Tuple(elements) => {
                out.push('(');
                for (i, elt) in elements.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    if let Some(name) = elt.name {
                        out.push_str(interner.lookup(name));
                        out.push_str(": ");
                    }
                    self.write_type(out, elt.ty, interner);
                }
                out.push(')');
            }
            Type::Function { param, result } => {
                self.write_arrow_operand(out, *param, interner);
                out.push_str(" -> ");
                self.write_arrow_operand(out, *result, interner);
            }
        }
    }

    fn write_arrow_operand(&self, out: &mut String, id: TypeId, interner: &StringInterner) {
        if self.is_function(id) {
            out.push('(');
            self.write_type(out, id, interner);
            out.push(')');
        } else {
            self.write_type(out, id, interner);
        }
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}
