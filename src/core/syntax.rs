//! Call-site view over swc expressions.
//!
//! Rules never see raw swc nodes. The traversal engine converts every
//! `CallExpr` and `NewExpr` into a [`CallSite`] whose arguments are classified
//! into a small set of tagged variants, so rules match exhaustively instead of
//! probing node shapes.

use swc_common::Span;
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, NewExpr};

/// The two node kinds a rule can register interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// `callee(args)`
    Call,
    /// `new callee(args)`
    New,
}

/// A classified call argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    /// A string literal with valid UTF-8 content.
    StringLiteral(&'a str),
    /// A bare identifier reference.
    Identifier(&'a str),
    /// `...expr`
    Spread,
    /// Any other expression.
    Other,
}

impl<'a> Argument<'a> {
    fn classify(arg: &'a ExprOrSpread) -> Self {
        if arg.spread.is_some() {
            return Argument::Spread;
        }
        match &*arg.expr {
            // Strings holding lone surrogates have no `&str` form.
            Expr::Lit(Lit::Str(s)) => s
                .value
                .as_str()
                .map_or(Argument::Other, Argument::StringLiteral),
            Expr::Ident(ident) => Argument::Identifier(&*ident.sym),
            _ => Argument::Other,
        }
    }

    pub fn as_string(&self) -> Option<&'a str> {
        match *self {
            Argument::StringLiteral(value) => Some(value),
            Argument::Identifier(_) | Argument::Spread | Argument::Other => None,
        }
    }
}

/// A function call or construction call, borrowed from the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub kind: CallKind,
    pub span: Span,
    /// Identifier text of the callee; `None` for member access, `super`,
    /// dynamic `import()`, parenthesised or computed callees.
    pub callee_name: Option<&'a str>,
    pub arguments: Vec<Argument<'a>>,
}

impl<'a> CallSite<'a> {
    pub fn from_call(call: &'a CallExpr) -> Self {
        let callee_name = match &call.callee {
            Callee::Expr(expr) => ident_name(expr),
            Callee::Super(_) | Callee::Import(_) => None,
        };
        Self {
            kind: CallKind::Call,
            span: call.span,
            callee_name,
            arguments: call.args.iter().map(Argument::classify).collect(),
        }
    }

    pub fn from_new(new: &'a NewExpr) -> Self {
        Self {
            kind: CallKind::New,
            span: new.span,
            callee_name: ident_name(&new.callee),
            arguments: new
                .args
                .iter()
                .flatten()
                .map(Argument::classify)
                .collect(),
        }
    }

    pub fn argument(&self, index: usize) -> Option<&Argument<'a>> {
        self.arguments.get(index)
    }

    /// The argument at `index` if it is a string literal.
    pub fn string_argument(&self, index: usize) -> Option<&'a str> {
        self.argument(index).and_then(Argument::as_string)
    }
}

fn ident_name(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::Ident(ident) => Some(&*ident.sym),
        _ => None,
    }
}
