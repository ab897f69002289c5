//! The public conversion surface: markup text in, dialect text out.
//!
//! Both conversions are deterministic pure functions of their input, and
//! neither can fail: when markup does not upgrade to a structured tree, the
//! markup tree is printed [best-effort](MarkupNodeRoot::best_effort_evaluable)
//! instead. An invalid result is only detected downstream, by the solver or
//! the widget rejecting it.
//!
//! Note that these functions are *not* idempotent: feeding a conversion's
//! output back into it is undefined, because the output is no longer markup.

use core::fmt;

use crate::{
    emit::Emitter,
    emitters::{rewrite_evaluable, EvaluableEmitter, GraphingEmitter},
    node::markup::{MarkupNodeRoot, Upgradable},
};

/// A flattened arithmetic string accepted by the remote solver's expression
/// grammar: function-call syntax, `**` exponentiation, explicit
/// multiplication and named constants.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct EvaluableExpression(pub(crate) String);

/// A flattened arithmetic string accepted by the graphing widget's command
/// syntax: `^` exponentiation and the display glyph for the circle constant.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct GraphingExpression(pub(crate) String);

impl EvaluableExpression {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl GraphingExpression {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EvaluableExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GraphingExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts markup text to an expression for the remote solver. This is the
/// value submitted in a solve request's `equation` field.
pub fn markup_to_evaluable(markup: &str) -> EvaluableExpression {
    let tree = MarkupNodeRoot::parse(markup);

    let text = match tree.upgrade() {
        Ok(node) => EvaluableEmitter.emit(&node),
        Err(_) => tree.best_effort_evaluable(),
    };

    EvaluableExpression(text)
}

/// Converts markup text straight to an expression for the graphing widget,
/// without round-tripping through the solver dialect.
pub fn markup_to_graphing(markup: &str) -> GraphingExpression {
    let tree = MarkupNodeRoot::parse(markup);

    let text = match tree.upgrade() {
        Ok(node) => GraphingEmitter.emit(&node),
        Err(_) => rewrite_evaluable(&tree.best_effort_evaluable()),
    };

    GraphingExpression(text)
}

/// Converts an expression in the solver dialect (or a raw user expression in
/// the same dialect) to one for the graphing widget.
pub fn evaluable_to_graphing(expr: &str) -> GraphingExpression {
    GraphingExpression(rewrite_evaluable(expr))
}
