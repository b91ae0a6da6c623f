//! Flat AST nodes.
//!
//! Patterns, expressions and variable declarations live in an
//! [`AstArena`](crate::AstArena) and refer to one another by id.

mod expr;
mod pattern;

pub use expr::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use pattern::{Pattern, PatternKind, TuplePatternElt, VarDecl};

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

arena_id! {
    /// Index of a [`Pattern`] in the arena.
    PatternId
}

arena_id! {
    /// Index of an [`Expr`] in the arena.
    ExprId
}

arena_id! {
    /// Index of a [`VarDecl`] in the arena.
    VarId
}

mod size_asserts {
    use super::{ExprId, PatternId, VarId};
    crate::static_assert_size!(PatternId, 4);
    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(VarId, 4);
}
