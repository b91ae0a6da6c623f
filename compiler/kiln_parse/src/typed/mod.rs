//! Full-typedness check for signature patterns.
//!
//! Every leaf of a parameter pattern must sit under an explicit `: type`.
//! The check walks the tree pre-order, synthesizes types for `Paren` and
//! `Tuple` nodes bottom-up, and stops at the first untyped leaf.

use kiln_diagnostic::{DiagnosticQueue, ErrorGuaranteed};
use kiln_ir::{AstArena, PatternId, PatternKind, TupleTypeElt, TypeId, TypePool};
use tracing::debug;

use crate::error;
use crate::stack::ensure_sufficient_stack;

/// Check that `pattern` is fully typed and return its type.
///
/// - `Typed` passes with its annotation; its children are not visited.
/// - `Paren` passes with its child's type.
/// - `Tuple` checks elements in order and passes with a tuple type built
///   from each element's (type, bound name, default).
/// - `Any` and `Named` fail with a diagnostic at their span.
///
/// Synthesized types are written to the write-once slots, so checking an
/// already-checked tree changes nothing and returns the same `TypeId`. On
/// failure exactly one diagnostic is emitted and no slot on the failing
/// path is written.
pub fn check_fully_typed(
    arena: &mut AstArena,
    types: &mut TypePool,
    diagnostics: &mut DiagnosticQueue,
    pattern: PatternId,
) -> Result<TypeId, ErrorGuaranteed> {
    ensure_sufficient_stack(|| {
        let node = arena.pattern(pattern);
        let span = node.span;
        match &node.kind {
            PatternKind::Typed { ty, .. } => Ok(*ty),
            PatternKind::Paren(child) => {
                let child = *child;
                let ty = check_fully_typed(arena, types, diagnostics, child)?;
                arena.set_pattern_type(pattern, ty);
                Ok(arena.pattern_type(pattern).unwrap_or(ty))
            }
            PatternKind::Tuple(elements) => {
                let elements = elements.clone();
                let mut fields = Vec::with_capacity(elements.len());
                for element in elements {
                    let ty = check_fully_typed(arena, types, diagnostics, element.pattern)?;
                    fields.push(TupleTypeElt {
                        ty,
                        name: arena.bound_name(element.pattern),
                        default: element.init,
                    });
                }
                let ty = types.tuple(fields);
                arena.set_pattern_type(pattern, ty);
                Ok(arena.pattern_type(pattern).unwrap_or(ty))
            }
            PatternKind::Any | PatternKind::Named(_) => {
                debug!(?pattern, "untyped pattern in signature");
                Err(diagnostics.emit(error::untyped_pattern(span)))
            }
        }
    })
}
