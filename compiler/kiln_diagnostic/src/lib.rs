//! Diagnostic system for the Kiln front end.
//!
//! Every diagnostic carries an error code, a message, a primary span and
//! optional labels, notes and suggestions.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is proof that at least one error was emitted. The
//! only way to obtain one is through [`DiagnosticQueue::emit`], so a parse
//! failure carrying it cannot exist without a matching report.
//!
//! ```text
//! let guarantee = queue.emit(diagnostic);
//! return ParseOutcome::ParseError(guarantee);
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
