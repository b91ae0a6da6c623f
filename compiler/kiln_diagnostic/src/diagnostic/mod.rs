//! The diagnostic value handed from the parser to the driver.

use std::fmt;

use kiln_ir::Span;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span attached to a diagnostic.
///
/// The primary label marks the offending token; secondary labels point at
/// related source such as the `(` a missing `)` should close.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    fn new(span: Span, message: impl Into<String>, is_primary: bool) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary,
        }
    }

    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message, true)
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message, false)
    }
}

/// One reported problem.
///
/// Built with the `with_*` methods and then handed to a
/// [`DiagnosticQueue`](crate::DiagnosticQueue). The message defaults to the
/// code's description until [`with_message`](Self::with_message) replaces it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a diagnostic does nothing until it is queued"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn at_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: code.description().to_string(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self::at_severity(code, Severity::Error)
    }

    pub fn warning(code: ErrorCode) -> Self {
        Self::at_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    fn with(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Mark the location of the problem.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.with(Label::primary(span, message))
    }

    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.with(Label::secondary(span, message))
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// A hint for fixing the problem, rendered as `help:`.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Span of the first primary label. Sorting and deduplication key on it.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find_map(|label| label.is_primary.then_some(label.span))
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Renders without source context:
///
/// ```text
/// error[E2005]: pattern must have an explicit type in a function signature
///   at 7..8: type annotation needed
///   help: add a type, as in `x: Int`
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            let lead = if label.is_primary { "at" } else { "see" };
            write!(f, "\n  {lead} {}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  help: {suggestion}")?;
        }
        Ok(())
    }
}
