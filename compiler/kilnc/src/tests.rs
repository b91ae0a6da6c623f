#![allow(clippy::unwrap_used, clippy::expect_used)]

use kiln_diagnostic::span_utils::LineTable;
use kiln_diagnostic::{Diagnostic, DiagnosticConfig, ErrorCode};
use kiln_ir::Span;
use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_check_lists_function_types() {
    let source = "type Point\nfunc f(x: Int)(y: Int) -> Int\nfunc g(p: Point)";
    let report = check_source("main.kn", source, DiagnosticConfig::default());
    assert_eq!(
        report.lines,
        vec![
            "f : (x: Int) -> ((y: Int) -> Int)".to_string(),
            "g : (p: Point) -> ()".to_string()
        ]
    );
    assert!(report.diagnostics.is_empty());
    assert!(!report.has_errors);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_check_renders_diagnostics_with_positions() {
    let source = "func ok(a: Int)\nfunc f(x) -> Int";
    let report = check_source("main.kn", source, DiagnosticConfig::default());
    assert_eq!(report.lines, vec!["ok : (a: Int) -> ()", "f : () -> Int"]);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(
        report.diagnostics,
        vec![
            "main.kn:2:8: error[E2005]: pattern must have an explicit type in a function signature\n    = help: add a type, as in `x: Int`"
                .to_string()
        ]
    );
}

#[test]
fn test_diagnostics_are_in_source_order() {
    let source = "func a(x: Nope) func b(y: Int,) func c(z)";
    let report = check_source("m.kn", source, DiagnosticConfig::default());
    let codes: Vec<&str> = report
        .diagnostics
        .iter()
        .map(|d| d.split_once('[').unwrap().1.split_once(']').unwrap().0)
        .collect();
    assert_eq!(codes, vec!["E2002", "E1008", "E2005"]);
}

#[test]
fn test_error_limit_appends_summary() {
    let source = "func a(x) func b(y) func c(z)";
    let config = DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    };
    let report = check_source("m.kn", source, config);
    assert_eq!(report.diagnostics.len(), 3);
    let last = report.diagnostics.last().unwrap();
    assert!(
        last.starts_with("m.kn: error[E9002]: aborting after 2 errors"),
        "{last}"
    );
    assert!(last.contains("1 further error(s) were not shown"));
}

#[test]
fn test_ast_prints_clauses() {
    let source = "type T; func f(a: Int, b: T = 1)(_: Bool)";
    let report = ast_source("m.kn", source, DiagnosticConfig::default());
    assert_eq!(
        report.lines,
        vec![
            "type T",
            "func f : (a: Int, b: T) -> (Bool -> ())",
            "  (a: Int, b: T = 1)",
            "  (_: Bool)",
        ]
    );
    assert!(!report.has_errors);
}

#[test]
fn test_lex_lists_tokens() {
    let lines = lex_source("func f(x: Int) // done");
    assert_eq!(
        lines,
        vec![
            "`func` @ 0..4",
            "Ident(f) @ 5..6",
            "`(` @ 6..7",
            "Ident(x) @ 7..8",
            "`:` @ 8..9",
            "Ident(Int) @ 10..13",
            "`)` @ 13..14",
            "EOF @ 22..22",
        ]
    );
}

#[test]
fn test_render_without_span() {
    let source = "func f()";
    let table = LineTable::build(source);
    let diag = Diagnostic::error(ErrorCode::E9002).with_message("stop");
    assert_eq!(render_diagnostic("m.kn", source, &table, &diag), "m.kn: error[E9002]: stop");
}

#[test]
fn test_render_counts_characters() {
    let source = "// é\n  x";
    let table = LineTable::build(source);
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `func` or `type`, found identifier")
        .with_label(Span::new(8, 9), "here");
    assert_eq!(
        render_diagnostic("m.kn", source, &table, &diag),
        "m.kn:2:3: error[E1001]: expected `func` or `type`, found identifier"
    );
}

#[test]
fn test_file_options() {
    let options = FileOptions::parse(&args(&["--no-dedup", "a.kn", "--error-limit=3"])).unwrap();
    assert_eq!(options.path, "a.kn");
    assert_eq!(
        options.config,
        DiagnosticConfig {
            error_limit: 3,
            deduplicate: false,
        }
    );

    let defaults = FileOptions::parse(&args(&["a.kn"])).unwrap();
    assert_eq!(defaults.config, DiagnosticConfig::default());
}

#[test]
fn test_file_option_errors() {
    assert!(matches!(
        FileOptions::parse(&args(&[])),
        Err(DriverError::MissingPath)
    ));
    assert!(matches!(
        FileOptions::parse(&args(&["a.kn", "--error-limit=many"])),
        Err(DriverError::InvalidFlag(flag)) if flag == "--error-limit=many"
    ));
    assert!(matches!(
        FileOptions::parse(&args(&["a.kn", "--verbose"])),
        Err(DriverError::InvalidFlag(_))
    ));
    assert!(matches!(
        FileOptions::parse(&args(&["a.kn", "b.kn"])),
        Err(DriverError::UnexpectedArgument(arg)) if arg == "b.kn"
    ));
}

#[test]
fn test_missing_file() {
    let err = read_file("/nonexistent/kiln/input.kn").unwrap_err();
    assert!(matches!(err, DriverError::NotFound { .. }));
    assert_eq!(err.to_string(), "cannot find file '/nonexistent/kiln/input.kn'");
}

#[test]
fn test_driver_error_messages() {
    assert_eq!(
        DriverError::UnknownCommand("build".into()).to_string(),
        "unknown command 'build'"
    );
    assert_eq!(DriverError::MissingPath.to_string(), "missing file path");
}

#[test]
fn test_oversized_source_is_rejected() {
    assert!(ensure_addressable("a.kn", 1024).is_ok());
    assert!(ensure_addressable("a.kn", u32::MAX as usize).is_ok());

    let len = u32::MAX as usize + 1;
    let err = ensure_addressable("big.kn", len).unwrap_err();
    assert!(matches!(err, DriverError::TooLarge { ref path, .. } if path == "big.kn"));
    assert_eq!(
        err.to_string(),
        format!("'big.kn' is too large: byte offset {len} is past the {} byte limit", u32::MAX)
    );
}
