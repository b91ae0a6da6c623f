//! The sink the lexer, parser and checker report into.
//!
//! The queue caps how many errors are kept, drops a second report of the
//! same code at the same span, and hands everything back in source order.

use kiln_ir::Span;
use rustc_hash::FxHashSet;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// Limits applied by a [`DiagnosticQueue`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before further errors are dropped
    /// (0 = unlimited).
    pub error_limit: usize,
    /// Drop an error whose code and primary span match an earlier one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Keep every error, duplicates included.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Collected diagnostics for one parse.
///
/// ```text
/// let mut queue = DiagnosticQueue::with_config(config);
/// let guarantee = queue.emit(diagnostic);
/// let in_source_order = queue.flush();
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Errors accepted into the queue.
    error_count: usize,
    /// Errors dropped because the limit was reached.
    suppressed: usize,
    seen: FxHashSet<(ErrorCode, Option<Span>)>,
    config: DiagnosticConfig,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            suppressed: 0,
            seen: FxHashSet::default(),
            config,
        }
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Add a diagnostic of any severity.
    ///
    /// Returns `true` if the diagnostic was queued, `false` if it was
    /// filtered by the limit or deduplication.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let error = diag.is_error();

        if error && self.limit_reached() {
            self.suppressed += 1;
            return false;
        }

        if self.config.deduplicate
            && error
            && !self.seen.insert((diag.code, diag.primary_span()))
        {
            return false;
        }

        tracing::trace!(code = %diag.code, message = %diag.message, "diagnostic queued");
        self.diagnostics.push(diag);
        if error {
            self.error_count += 1;
        }
        true
    }

    /// Queue an error and return the guarantee a `ParseError` carries.
    ///
    /// The guarantee is returned even when the diagnostic itself is
    /// filtered: a filtered error is always preceded by an accepted one.
    pub fn emit(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "emit() is for errors; use add() for warnings");
        self.add(diag);
        ErrorGuaranteed::new()
    }

    /// True once `error_limit` errors have been accepted.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of errors dropped after the limit was reached.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    /// `Some` when at least one error was accepted.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get diagnostics without clearing the queue, in emission order.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Sort diagnostics by primary span and return them.
    ///
    /// Clears the queue. Diagnostics without a span sort last; ties keep
    /// emission order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut drained = std::mem::take(&mut self.diagnostics);
        drained.sort_by_key(|diag| diag.primary_span().map_or(u32::MAX, |span| span.start));

        self.error_count = 0;
        self.suppressed = 0;
        self.seen.clear();

        drained
    }
}

/// Summary appended by the driver when errors were suppressed.
#[cold]
pub fn too_many_errors(limit: usize, suppressed: usize) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!("aborting after {limit} errors"))
        .with_note(format!("{suppressed} further error(s) were not shown"))
        .with_note("pass --error-limit=0 to see every error")
}

#[cfg(test)]
mod tests;
