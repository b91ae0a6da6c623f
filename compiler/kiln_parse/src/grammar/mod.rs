//! Grammar productions, one module per construct.

mod expr;
mod item;
mod pattern;
mod signature;
mod ty;

pub use item::{FunctionDecl, Module, TypeDecl};
pub use signature::FunctionSignature;
