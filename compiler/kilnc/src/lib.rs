//! Driver for the Kiln front end.
//!
//! Runs lex and parse over a file and renders the results. The binary in
//! `main.rs` is a thin argument parser over the functions here.

mod error;

use std::fmt::Write as _;
use std::sync::Once;

use kiln_diagnostic::queue::too_many_errors;
use kiln_diagnostic::span_utils::LineTable;
use kiln_diagnostic::{Diagnostic, DiagnosticConfig};
use kiln_ir::{Span, StringInterner, TokenKind};
use kiln_parse::print::pattern_to_string;
use kiln_parse::ParseOutput;
use tracing::debug;

pub use error::DriverError;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. `KILN_LOG_TREE=1` selects the
/// indented span tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        if std::env::var_os("KILN_LOG_TREE").is_some_and(|v| v == "1") {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

/// Options shared by the file commands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileOptions {
    pub path: String,
    pub config: DiagnosticConfig,
}

impl FileOptions {
    /// Parse `<file> [--error-limit=N] [--no-dedup]` in any order.
    pub fn parse(args: &[String]) -> Result<Self, DriverError> {
        let mut path = None;
        let mut config = DiagnosticConfig::default();

        for arg in args {
            if let Some(limit) = arg.strip_prefix("--error-limit=") {
                config.error_limit = limit
                    .parse()
                    .map_err(|_| DriverError::InvalidFlag(arg.clone()))?;
            } else if arg == "--no-dedup" {
                config.deduplicate = false;
            } else if arg.starts_with('-') {
                return Err(DriverError::InvalidFlag(arg.clone()));
            } else if path.is_none() {
                path = Some(arg.clone());
            } else {
                return Err(DriverError::UnexpectedArgument(arg.clone()));
            }
        }

        let path = path.ok_or(DriverError::MissingPath)?;
        Ok(FileOptions { path, config })
    }
}

/// Read a source file whose byte offsets all fit in a [`Span`].
pub fn read_file(path: &str) -> Result<String, DriverError> {
    let source = std::fs::read_to_string(path).map_err(|e| DriverError::from_io(path, e))?;
    ensure_addressable(path, source.len())?;
    Ok(source)
}

fn ensure_addressable(path: &str, len: usize) -> Result<(), DriverError> {
    Span::try_from_range(len..len)
        .map(drop)
        .map_err(|source| DriverError::TooLarge {
            path: path.to_string(),
            source,
        })
}

/// What a command prints.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
    /// Lines for stdout.
    pub lines: Vec<String>,
    /// Rendered diagnostics for stderr, in source order.
    pub diagnostics: Vec<String>,
    pub has_errors: bool,
}

impl Report {
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_errors)
    }
}

/// Parse `source` and list each function with its signature type.
pub fn check_source(path: &str, source: &str, config: DiagnosticConfig) -> Report {
    let interner = StringInterner::new();
    let tokens = kiln_lexer::lex(source, &interner);
    let mut output = kiln_parse::parse(&tokens, &interner, config);

    let lines = output
        .module
        .functions
        .iter()
        .map(|func| {
            format!(
                "{} : {}",
                interner.lookup(func.name),
                output.session.types.display(func.signature.ty, &interner)
            )
        })
        .collect();

    finish(path, source, lines, &mut output)
}

/// Parse `source` and print every declaration with its parameter clauses.
pub fn ast_source(path: &str, source: &str, config: DiagnosticConfig) -> Report {
    let interner = StringInterner::new();
    let tokens = kiln_lexer::lex(source, &interner);
    let mut output = kiln_parse::parse(&tokens, &interner, config);

    let mut lines = Vec::new();
    for decl in &output.module.types {
        lines.push(format!("type {}", interner.lookup(decl.name)));
    }
    for func in &output.module.functions {
        let session = &output.session;
        lines.push(format!(
            "func {} : {}",
            interner.lookup(func.name),
            session.types.display(func.signature.ty, &interner)
        ));
        for &clause in &func.signature.params {
            lines.push(format!("  {}", pattern_to_string(session, &interner, clause)));
        }
    }

    finish(path, source, lines, &mut output)
}

fn finish(path: &str, source: &str, lines: Vec<String>, output: &mut ParseOutput) -> Report {
    let has_errors = output.has_errors();
    let queue = &mut output.session.diagnostics;
    let suppressed = queue.suppressed_count();
    let limit = queue.config().error_limit;

    let mut diagnostics = queue.flush();
    if suppressed > 0 {
        diagnostics.push(too_many_errors(limit, suppressed));
    }
    debug!(
        diagnostics = diagnostics.len(),
        suppressed, "rendering diagnostics"
    );

    let table = LineTable::build(source);
    let diagnostics = diagnostics
        .iter()
        .map(|diag| render_diagnostic(path, source, &table, diag))
        .collect();

    Report {
        lines,
        diagnostics,
        has_errors,
    }
}

/// `path:line:col: severity[CODE]: message`, followed by indented notes and
/// suggestions. Diagnostics without a span omit `line:col`.
pub fn render_diagnostic(path: &str, source: &str, table: &LineTable, diag: &Diagnostic) -> String {
    let mut out = String::new();
    match diag.primary_span() {
        Some(span) => {
            let (line, col) = table.line_col(source, span.start);
            let _ = write!(out, "{path}:{line}:{col}: ");
        }
        None => {
            let _ = write!(out, "{path}: ");
        }
    }
    let _ = write!(out, "{}[{}]: {}", diag.severity, diag.code.as_str(), diag.message);
    for note in &diag.notes {
        let _ = write!(out, "\n    = note: {note}");
    }
    for suggestion in &diag.suggestions {
        let _ = write!(out, "\n    = help: {suggestion}");
    }
    out
}

/// One line per token: kind, payload and byte range.
pub fn lex_source(source: &str) -> Vec<String> {
    let interner = StringInterner::new();
    let tokens = kiln_lexer::lex(source, &interner);
    tokens
        .iter()
        .map(|token| {
            let kind = match token.kind {
                TokenKind::Ident(name) => format!("Ident({})", interner.lookup(name)),
                TokenKind::Int(n) => format!("Int({n})"),
                TokenKind::Float(bits) => format!("Float({:?})", f64::from_bits(bits)),
                TokenKind::String(name) => format!("String({:?})", interner.lookup(name)),
                TokenKind::Eof => "EOF".to_string(),
                other => format!("`{}`", other.display_name()),
            };
            format!("{kind} @ {}..{}", token.span.start, token.span.end)
        })
        .collect()
}

#[cfg(test)]
mod tests;
