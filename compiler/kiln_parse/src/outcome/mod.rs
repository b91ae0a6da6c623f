//! Three-way parse outcome.
//!
//! | Variant | Tokens | Diagnostic | Node |
//! |---------|--------|------------|------|
//! | `Value` | consumed | none | built |
//! | `ParseError` | stopped at the bad token | exactly one, already emitted | none |
//! | `SemaError` | fully consumed | emitted at the origin, if any | none |
//!
//! A `ParseError` must be propagated immediately (see [`propagate!`]) or
//! resynchronized at a paren boundary. A `SemaError` never causes token
//! skipping; it only taints every composite that contains it.

use kiln_diagnostic::ErrorGuaranteed;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a ParseError must be propagated or recovered from"]
pub enum ParseOutcome<T> {
    /// The node was built.
    Value(T),
    /// Syntax error; the guarantee proves the diagnostic was emitted.
    ParseError(ErrorGuaranteed),
    /// Well-formed input whose node could not be built.
    SemaError,
}

impl<T> ParseOutcome<T> {
    /// `Some` becomes `Value`, `None` becomes `SemaError`.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => ParseOutcome::Value(value),
            None => ParseOutcome::SemaError,
        }
    }

    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, ParseOutcome::Value(_))
    }

    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ParseOutcome::ParseError(_))
    }

    /// The built node, if any.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            ParseOutcome::Value(value) => Some(value),
            ParseOutcome::ParseError(_) | ParseOutcome::SemaError => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParseOutcome<U> {
        match self {
            ParseOutcome::Value(value) => ParseOutcome::Value(f(value)),
            ParseOutcome::ParseError(guar) => ParseOutcome::ParseError(guar),
            ParseOutcome::SemaError => ParseOutcome::SemaError,
        }
    }

    /// Split off the syntax error, keeping the semantic one in the `Option`.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, ErrorGuaranteed> {
        match self {
            ParseOutcome::Value(value) => Ok(Some(value)),
            ParseOutcome::ParseError(guar) => Err(guar),
            ParseOutcome::SemaError => Ok(None),
        }
    }
}

/// Return early on `ParseError`; otherwise evaluate to `Option<T>`, with
/// `None` standing for `SemaError`.
///
/// ```ignore
/// let atom = propagate!(self.parse_pattern_atom());
/// let ty = propagate!(self.parse_type());
/// match (atom, ty) {
///     (Some(atom), Some(ty)) => ParseOutcome::Value(/* ... */),
///     _ => ParseOutcome::SemaError,
/// }
/// ```
#[macro_export]
macro_rules! propagate {
    ($outcome:expr) => {
        match $crate::ParseOutcome::into_result($outcome) {
            Ok(value) => value,
            Err(guar) => return $crate::ParseOutcome::ParseError(guar),
        }
    };
}
