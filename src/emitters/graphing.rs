//! The widget-dialect emitter: `^` exponentiation, the circle-ratio glyph,
//! and juxtaposed multiplication in front of parenthesised groups.

use rust_decimal::Decimal;

use crate::{
    emit::Emitter,
    node::structured::{Constant, StructuredNode},
};

/// Prints a structured tree as an expression for the graphing widget.
#[derive(Default, Clone, Debug)]
pub struct GraphingEmitter;

impl Emitter for GraphingEmitter {
    fn emit(&self, node: &StructuredNode) -> String {
        emit(node)
    }
}

/// Rewrites an expression already in the solver dialect (or a raw user
/// expression in the same dialect) into the widget dialect. This is a flat
/// textual pass: the input here has no grouping commands left, so character
/// rewrites are all that is needed.
///
/// An expression with no independent variable in it comes through unchanged,
/// and defines a constant function; it is never rejected.
pub fn rewrite_evaluable(expr: &str) -> String {
    let expr = expr.replace("**", "^");
    let expr = expr.replace("*(", "(");

    // Evaluator namespace prefixes mean nothing to the widget
    let expr = expr.replace("math.", "");
    let expr = expr.replace("np.", "");

    expr.replace("pi", "π")
}

fn emit(node: &StructuredNode) -> String {
    match node {
        StructuredNode::Number(number) => number.to_string(),
        StructuredNode::Variable(v) => v.to_string(),

        StructuredNode::Constant(c) => match c {
            Constant::Pi => "π",
            Constant::Euler => "e",
            Constant::Infinity => "inf",
        }
        .into(),

        StructuredNode::Sqrt(arg) => format!("sqrt({})", emit(arg)),

        StructuredNode::Root(degree, arg) => {
            format!("pow({},1/{})", emit(arg), script(degree))
        }

        StructuredNode::Add(l, r) => format!("{}+{}", emit(l), emit(r)),
        StructuredNode::Subtract(l, r) => format!("{}-{}", emit(l), emit(r)),

        StructuredNode::Multiply(l, r) => {
            if is_negative_one(l) {
                format!("-{}", emit(r))
            } else if begins_with_parenthesis(r) {
                // The widget reads juxtaposition as multiplication, and its
                // command syntax has no `*(`
                format!("{}{}", emit(l), emit(r))
            } else {
                format!("{}*{}", emit(l), emit(r))
            }
        }

        StructuredNode::Divide(l, r) => format!("{}/{}", emit(l), emit(r)),

        StructuredNode::Power(base, exp) => format!("{}^{}", emit(base), script(exp)),

        StructuredNode::FunctionCall(func, args) => {
            let args = args.iter().map(emit).collect::<Vec<_>>().join(",");
            format!("{}({})", func.name(), args)
        }

        StructuredNode::Parentheses(inner) => format!("({})", emit(inner)),
    }
}

/// Prints an exponent or root degree: a one-digit literal stays bare (`x^2`),
/// anything else is parenthesised (`x^(10)`).
fn script(node: &StructuredNode) -> String {
    if node.is_single_digit() {
        emit(node)
    } else {
        format!("({})", emit(node))
    }
}

/// A `-1 * x` produced by a unary minus prints as `-x`.
fn is_negative_one(node: &StructuredNode) -> bool {
    matches!(node, StructuredNode::Number(d) if *d == -Decimal::ONE)
}

/// Whether this node prints something starting with an opening parenthesis.
/// Fractions do: they print as `(numerator)/(denominator)`.
fn begins_with_parenthesis(node: &StructuredNode) -> bool {
    match node {
        StructuredNode::Parentheses(_) => true,
        StructuredNode::Divide(l, _) => begins_with_parenthesis(l),
        _ => false,
    }
}
