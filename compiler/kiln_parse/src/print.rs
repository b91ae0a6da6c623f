//! Render patterns and expressions back to source text.
//!
//! The output re-parses to the same tree shape: `Paren` keeps its parens,
//! tuples keep arity, annotations and defaults. Binary expressions are
//! parenthesized only where precedence requires it.

use std::fmt::Write as _;

use kiln_ir::{ExprId, ExprKind, PatternId, PatternKind, StringInterner};

use crate::ParseSession;

pub fn pattern_to_string(session: &ParseSession, interner: &StringInterner, id: PatternId) -> String {
    let mut out = String::new();
    Printer {
        session,
        interner,
        out: &mut out,
    }
    .pattern(id);
    out
}

pub fn expr_to_string(session: &ParseSession, interner: &StringInterner, id: ExprId) -> String {
    let mut out = String::new();
    Printer {
        session,
        interner,
        out: &mut out,
    }
    .expr(id, 0);
    out
}

struct Printer<'a> {
    session: &'a ParseSession,
    interner: &'a StringInterner,
    out: &'a mut String,
}

impl Printer<'_> {
    fn pattern(&mut self, id: PatternId) {
        let session = self.session;
        match &session.arena.pattern(id).kind {
            PatternKind::Any => self.out.push('_'),
            PatternKind::Named(var) => {
                let name = session.arena.var(*var).name;
                self.out.push_str(self.interner.lookup(name));
            }
            PatternKind::Paren(inner) => {
                self.out.push('(');
                self.pattern(*inner);
                self.out.push(')');
            }
            PatternKind::Tuple(elements) => {
                self.out.push('(');
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.pattern(element.pattern);
                    if let Some(init) = element.init {
                        self.out.push_str(" = ");
                        self.expr(init, 0);
                    }
                }
                self.out.push(')');
            }
            PatternKind::Typed { pattern, ty } => {
                self.pattern(*pattern);
                self.out.push_str(": ");
                let ty = session.types.display(*ty, self.interner);
                self.out.push_str(&ty);
            }
        }
    }

    /// `min_prec` is the binding power of the surrounding operator.
    fn expr(&mut self, id: ExprId, min_prec: u8) {
        let session = self.session;
        match &session.arena.expr(id).kind {
            ExprKind::Int(n) => {
                let _ = write!(self.out, "{n}");
            }
            ExprKind::Float(bits) => {
                let _ = write!(self.out, "{:?}", f64::from_bits(*bits));
            }
            ExprKind::String(name) => {
                let _ = write!(self.out, "{:?}", self.interner.lookup(*name));
            }
            ExprKind::Bool(b) => {
                let _ = write!(self.out, "{b}");
            }
            ExprKind::Ident(var) => {
                let name = session.arena.var(*var).name;
                self.out.push_str(self.interner.lookup(name));
            }
            ExprKind::Tuple(elements) => {
                self.out.push('(');
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.expr(*element, 0);
                }
                self.out.push(')');
            }
            ExprKind::Unary { operand, .. } => {
                self.out.push('-');
                self.expr(*operand, u8::MAX);
            }
            ExprKind::Binary { op, left, right } => {
                let prec = op.precedence();
                let wrap = prec < min_prec;
                if wrap {
                    self.out.push('(');
                }
                self.expr(*left, prec);
                let _ = write!(self.out, " {} ", op.as_str());
                // Left associative: an equal-precedence right operand needs parens.
                self.expr(*right, prec + 1);
                if wrap {
                    self.out.push(')');
                }
            }
        }
    }
}
