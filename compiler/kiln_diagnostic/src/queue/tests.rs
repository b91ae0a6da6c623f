use super::*;
use pretty_assertions::assert_eq;

fn error_at(code: ErrorCode, start: u32, message: &str) -> Diagnostic {
    Diagnostic::error(code)
        .with_message(message)
        .with_label(Span::new(start, start + 1), "here")
}

#[test]
fn test_emit_counts_errors() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());
    let _ = queue.emit(error_at(ErrorCode::E1008, 0, "first"));
    assert_eq!(queue.error_count(), 1);
    assert!(queue.has_errors().is_some());
}

#[test]
fn test_warnings_do_not_count() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(Diagnostic::warning(ErrorCode::E1001).with_message("hmm")));
    assert_eq!(queue.error_count(), 0);
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_same_code_and_span_is_deduplicated() {
    let mut queue = DiagnosticQueue::new();
    let _ = queue.emit(error_at(ErrorCode::E2005, 3, "untyped"));
    let _ = queue.emit(error_at(ErrorCode::E2005, 3, "untyped"));
    let _ = queue.emit(error_at(ErrorCode::E2005, 7, "untyped"));
    let _ = queue.emit(error_at(ErrorCode::E1003, 3, "unclosed"));
    assert_eq!(queue.error_count(), 3);
}

#[test]
fn test_dedup_can_be_disabled() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let _ = queue.emit(error_at(ErrorCode::E2005, 3, "untyped"));
    let _ = queue.emit(error_at(ErrorCode::E2005, 3, "untyped"));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_error_limit_suppresses_and_still_guarantees() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    });
    for i in 0..5 {
        let _guarantee = queue.emit(error_at(ErrorCode::E1002, i * 2, "expected expression"));
    }
    assert!(queue.limit_reached());
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.suppressed_count(), 3);
}

#[test]
fn test_flush_sorts_by_position_and_resets() {
    let mut queue = DiagnosticQueue::new();
    let _ = queue.emit(error_at(ErrorCode::E1002, 20, "third"));
    let _ = queue.emit(Diagnostic::error(ErrorCode::E9002).with_message("last"));
    let _ = queue.emit(error_at(ErrorCode::E1008, 2, "first"));
    let _ = queue.emit(error_at(ErrorCode::E1003, 10, "second"));

    let messages: Vec<String> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["first", "second", "third", "last"]);
    assert!(queue.is_empty());
    assert_eq!(queue.error_count(), 0);

    // Dedup state is cleared too.
    let _ = queue.emit(error_at(ErrorCode::E1008, 2, "first"));
    assert_eq!(queue.error_count(), 1);
}

#[test]
fn test_too_many_errors_diagnostic() {
    let diag = too_many_errors(10, 4);
    assert_eq!(diag.code, ErrorCode::E9002);
    assert_eq!(diag.message, "aborting after 10 errors");
    assert_eq!(diag.notes[0], "4 further error(s) were not shown");
}
