#![allow(clippy::unwrap_used, clippy::expect_used)]

use kiln_diagnostic::ErrorCode;
use kiln_ir::{TokenKind, Type};
use pretty_assertions::assert_eq;

use crate::test_support::Harness;
use crate::ParseOutcome;

fn display(source: &str) -> String {
    let h = Harness::new(source);
    let run = h.run(|p| p.parse_type());
    let ty = run.value.value().unwrap();
    assert!(run.codes().is_empty(), "{source}: {:?}", run.codes());
    run.session.types.display(ty, &h.interner)
}

#[test]
fn test_builtin_names() {
    for name in ["Int", "Float", "Bool", "String"] {
        assert_eq!(display(name), name);
    }
}

#[test]
fn test_arrow_is_right_associative() {
    assert_eq!(display("Int -> Bool -> String"), "Int -> (Bool -> String)");
    assert_eq!(display("(Int -> Bool) -> String"), "(Int -> Bool) -> String");
}

#[test]
fn test_tuple_types() {
    assert_eq!(display("()"), "()");
    assert_eq!(display("(Int, Bool)"), "(Int, Bool)");
    assert_eq!(display("((Int))"), "Int");
}

#[test]
fn test_labeled_single_element_is_tuple() {
    let h = Harness::new("(x: Int)");
    let run = h.run(|p| p.parse_type());
    let ty = run.value.value().unwrap();
    let Type::Tuple(elements) = run.session.types.get(ty) else {
        panic!("expected a tuple type");
    };
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].name, Some(h.name("x")));
}

#[test]
fn test_labels_distinguish_types() {
    let h = Harness::new("(x: Int) (y: Int) (Int)");
    let run = h.run(|p| {
        let a = p.parse_type().value().unwrap();
        let b = p.parse_type().value().unwrap();
        let c = p.parse_type().value().unwrap();
        (a, b, c)
    });
    let (a, b, c) = run.value;
    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_same_type_interns_once() {
    let h = Harness::new("(Int, Bool) (Int, Bool)");
    let run = h.run(|p| (p.parse_type(), p.parse_type()));
    assert_eq!(run.value.0, run.value.1);
}

#[test]
fn test_undeclared_name_is_sema_error() {
    let h = Harness::new("Widget -> Int");
    let run = h.run(|p| p.parse_type());
    assert_eq!(run.value, ParseOutcome::SemaError);
    assert_eq!(run.codes(), vec![ErrorCode::E2002]);
    assert_eq!(run.next, TokenKind::Eof);
}

#[test]
fn test_undeclared_name_inside_tuple_consumes_tuple() {
    let h = Harness::new("(Int, Widget, Bool);");
    let run = h.run(|p| p.parse_type());
    assert_eq!(run.value, ParseOutcome::SemaError);
    assert_eq!(run.next, TokenKind::Semicolon);
}

#[test]
fn test_missing_type() {
    let h = Harness::new(", Int");
    let run = h.run(|p| p.parse_type());
    assert!(run.value.is_parse_error());
    let diags = run.diagnostics();
    assert_eq!(diags[0].code, ErrorCode::E1005);
    assert_eq!(diags[0].message, "expected type, found `,`");
    assert_eq!(run.next, TokenKind::Comma);
}

#[test]
fn test_missing_result_after_arrow() {
    let h = Harness::new("Int ->");
    let run = h.run(|p| p.parse_type());
    assert!(run.value.is_parse_error());
    assert_eq!(run.codes(), vec![ErrorCode::E1005]);
}

#[test]
fn test_error_in_tuple_type_resyncs_past_close() {
    let h = Harness::new("(Int, , Bool) next");
    let run = h.run(|p| p.parse_type());
    assert!(run.value.is_parse_error());
    assert_eq!(run.codes(), vec![ErrorCode::E1005]);
    assert_eq!(run.next, TokenKind::Ident(h.name("next")));
}

#[test]
fn test_unclosed_tuple_type() {
    let h = Harness::new("(Int Bool) next");
    let run = h.run(|p| p.parse_type());
    assert!(run.value.is_parse_error());
    let diags = run.diagnostics();
    assert_eq!(diags[0].code, ErrorCode::E1003);
    assert_eq!(diags[0].message, "expected ')' in tuple type");
    assert_eq!(run.next, TokenKind::Ident(h.name("next")));
}
