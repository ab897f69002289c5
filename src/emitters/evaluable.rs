//! The solver-dialect emitter: function-call syntax, `**` exponentiation,
//! explicit multiplication, and namespaced constants.

use rust_decimal::Decimal;

use crate::{
    emit::Emitter,
    node::structured::{Constant, StructuredNode},
};

/// Prints a structured tree as an expression for the remote solver.
#[derive(Default, Clone, Debug)]
pub struct EvaluableEmitter;

impl Emitter for EvaluableEmitter {
    fn emit(&self, node: &StructuredNode) -> String {
        emit(node)
    }
}

fn emit(node: &StructuredNode) -> String {
    match node {
        StructuredNode::Number(number) => number.to_string(),
        StructuredNode::Variable(v) => v.to_string(),

        StructuredNode::Constant(c) => match c {
            Constant::Pi => "pi",
            Constant::Euler => "math.e",
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
            } else {
                format!("{}*{}", emit(l), emit(r))
            }
        }

        StructuredNode::Divide(l, r) => format!("{}/{}", emit(l), emit(r)),

        StructuredNode::Power(base, exp) => format!("{}**{}", emit(base), script(exp)),

        StructuredNode::FunctionCall(func, args) => {
            let args = args.iter().map(emit).collect::<Vec<_>>().join(",");
            format!("{}({})", func.name(), args)
        }

        StructuredNode::Parentheses(inner) => format!("({})", emit(inner)),
    }
}

/// Prints an exponent or root degree: a one-digit literal stays bare
/// (`x**2`), anything else is parenthesised (`x**(10)`).
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
