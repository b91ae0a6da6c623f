//! Data shared by the lexer, the parser and the driver.
//!
//! Source positions are [`Span`]s and identifiers are interned [`Name`]s.
//! The lexer produces a [`TokenList`]. The parser stores pattern and
//! expression nodes flat in an [`AstArena`], hash-conses types in a
//! [`TypePool`], and resolves names through a [`ScopeTree`].
//!
//! Nodes refer to each other through `u32` ids, never boxes. Types that
//! contain floats store them as `u64` bits so everything stays `Eq + Hash`.

/// Fails the build if `size_of::<$ty>()` is not `$size`.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod interner;
mod name;
mod scope;
mod span;
mod token;
mod ty;

pub use arena::AstArena;
pub use ast::{
    BinaryOp, Expr, ExprId, ExprKind, Pattern, PatternId, PatternKind, TuplePatternElt, UnaryOp,
    VarDecl, VarId,
};
pub use interner::StringInterner;
pub use name::Name;
pub use scope::{ScopeId, ScopeTree, BUILTIN_TYPES};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use ty::{TupleTypeElt, Type, TypeId, TypePool};
