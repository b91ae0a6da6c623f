#![allow(clippy::unwrap_used, clippy::expect_used)]

use kiln_diagnostic::ErrorCode;
use kiln_ir::{BinaryOp, ExprKind, TokenKind};
use pretty_assertions::assert_eq;

use crate::print::expr_to_string;
use crate::test_support::Harness;
use crate::ParseOutcome;

fn render(source: &str) -> String {
    let h = Harness::new(source);
    let run = h.run(|p| p.parse_expr());
    let id = run.value.value().unwrap();
    assert!(run.codes().is_empty(), "{source}: {:?}", run.codes());
    expr_to_string(&run.session, &h.interner, id)
}

#[test]
fn test_literals() {
    assert_eq!(render("42"), "42");
    assert_eq!(render("1.5"), "1.5");
    assert_eq!(render("true"), "true");
    assert_eq!(render("false"), "false");
    assert_eq!(render(r#""hi""#), r#""hi""#);
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(render("1 + 2 * 3"), "1 + 2 * 3");
    assert_eq!(render("(1 + 2) * 3"), "(1 + 2) * 3");
    assert_eq!(render("1 - 2 - 3"), "1 - 2 - 3");
    assert_eq!(render("1 - (2 - 3)"), "1 - (2 - 3)");
    assert_eq!(render("-(1 + 2)"), "-(1 + 2)");
}

#[test]
fn test_binary_tree_shape() {
    let h = Harness::new("1 + 2 * 3");
    let run = h.run(|p| p.parse_expr());
    let arena = &run.session.arena;
    let id = run.value.value().unwrap();

    let ExprKind::Binary { op, left, right } = arena.expr(id).kind else {
        panic!("expected Binary");
    };
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(arena.expr(left).kind, ExprKind::Int(1));
    assert!(matches!(
        arena.expr(right).kind,
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn test_tuples() {
    assert_eq!(render("()"), "()");
    assert_eq!(render("(1, 2)"), "(1, 2)");
    assert_eq!(render("((1))"), "1");
}

#[test]
fn test_identifier_resolves_in_scope() {
    let h = Harness::new("x x");
    let run = h.run(|p| {
        p.parse_pattern().value().unwrap();
        p.parse_expr()
    });
    let id = run.value.value().unwrap();
    let ExprKind::Ident(var) = run.session.arena.expr(id).kind else {
        panic!("expected Ident");
    };
    assert_eq!(run.session.arena.var(var).name, h.name("x"));
}

#[test]
fn test_unresolved_identifier_is_sema_error() {
    let h = Harness::new("1 + nope * 2");
    let run = h.run(|p| p.parse_expr());
    assert_eq!(run.value, ParseOutcome::SemaError);
    assert_eq!(run.codes(), vec![ErrorCode::E2003]);
    assert_eq!(run.next, TokenKind::Eof);
}

#[test]
fn test_missing_operand() {
    let h = Harness::new("1 + )");
    let run = h.run(|p| p.parse_expr());
    assert!(run.value.is_parse_error());
    assert_eq!(run.codes(), vec![ErrorCode::E1002]);
    assert_eq!(run.next, TokenKind::RParen);
}

#[test]
fn test_error_in_paren_resyncs_past_close() {
    let h = Harness::new("(1, *) 7");
    let run = h.run(|p| p.parse_expr());
    assert!(run.value.is_parse_error());
    assert_eq!(run.codes(), vec![ErrorCode::E1002]);
    assert_eq!(run.next, TokenKind::Int(7));
}

#[test]
fn test_unclosed_paren_expression() {
    let h = Harness::new("(1 2)");
    let run = h.run(|p| p.parse_expr());
    assert!(run.value.is_parse_error());
    assert_eq!(run.diagnostics()[0].message, "expected ')' to close expression");
    assert_eq!(run.next, TokenKind::Eof);
}
