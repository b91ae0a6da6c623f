//! Diagnostic constructors for parse and resolution errors.
//!
//! Every "expected X" error reports an `Error` token as `E0001 invalid
//! token` instead, so unrecognized input gets one diagnostic that names the
//! real problem.

use kiln_diagnostic::{Diagnostic, ErrorCode};
use kiln_ir::{Span, Token, TokenKind};

/// How a found token is described in "expected X, found Y" messages.
fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident(_)
        | TokenKind::Int(_)
        | TokenKind::Float(_)
        | TokenKind::String(_)
        | TokenKind::Eof => kind.display_name().to_string(),
        _ => format!("`{}`", kind.display_name()),
    }
}

fn expected(code: ErrorCode, what: &str, found: &Token) -> Diagnostic {
    if matches!(found.kind, TokenKind::Error) {
        return invalid_token(found.span);
    }
    Diagnostic::error(code)
        .with_message(format!("expected {what}, found {}", describe(&found.kind)))
        .with_label(found.span, format!("expected {what}"))
}

pub fn invalid_token(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message("invalid token")
        .with_label(span, "not recognized by the lexer")
}

pub fn expected_pattern(found: &Token) -> Diagnostic {
    expected(ErrorCode::E1008, "a pattern", found)
        .with_note("a pattern is an identifier, `_`, or a parenthesized list of patterns")
}

pub fn expected_type(found: &Token) -> Diagnostic {
    expected(ErrorCode::E1005, "type", found)
}

pub fn expected_expression(found: &Token) -> Diagnostic {
    expected(ErrorCode::E1002, "expression", found)
}

pub fn expected_parameter_clause(found: &Token) -> Diagnostic {
    expected(ErrorCode::E1016, "'(' to begin a parameter clause", found)
}

pub fn expected_identifier(found: &Token, after: &str) -> Diagnostic {
    expected(ErrorCode::E1004, &format!("identifier after `{after}`"), found)
}

pub fn expected_declaration(found: &Token) -> Diagnostic {
    expected(ErrorCode::E1001, "`func` or `type`", found)
}

/// Missing `)` at the end of a parenthesized list.
///
/// `what` finishes the sentence "expected ')' ...".
pub fn unclosed_paren(found: &Token, open: Span, what: &str) -> Diagnostic {
    if matches!(found.kind, TokenKind::Error) {
        return invalid_token(found.span);
    }
    Diagnostic::error(ErrorCode::E1003)
        .with_message(format!("expected ')' {what}"))
        .with_label(found.span, format!("found {}", describe(&found.kind)))
        .with_secondary_label(open, "unclosed `(` here")
}

pub fn undeclared_type(name: &str, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message(format!("use of undeclared type `{name}`"))
        .with_label(span, "not found in this scope")
}

pub fn unresolved_identifier(name: &str, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2003)
        .with_message(format!("use of unresolved identifier `{name}`"))
        .with_label(span, "not found in this scope")
}

pub fn untyped_pattern(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2005)
        .with_message("pattern must have an explicit type in a function signature")
        .with_label(span, "type annotation needed")
        .with_suggestion("add a type, as in `x: Int`")
}

pub fn duplicate_type(name: &str, span: Span, previous: Option<Span>) -> Diagnostic {
    let diag = Diagnostic::error(ErrorCode::E2006)
        .with_message(format!("duplicate type `{name}`"))
        .with_label(span, "redeclared here");
    match previous {
        Some(previous) => diag.with_secondary_label(previous, "first declared here"),
        None => diag.with_note(format!("`{name}` is a builtin type")),
    }
}
