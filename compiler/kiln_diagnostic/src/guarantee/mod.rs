use std::fmt;

/// Proof that at least one error diagnostic was emitted.
///
/// Not constructible outside this crate except through
/// [`from_error_count`](Self::from_error_count), which only succeeds when
/// errors exist.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    #[inline]
    pub(crate) const fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// `None` when `count` is zero.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("compilation produced errors")
    }
}
