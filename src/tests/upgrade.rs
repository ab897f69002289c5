use core::str::FromStr;

use rust_decimal::Decimal;

use crate::{
    error::NodeError,
    node::{
        function::Function,
        structured::{Constant, StructuredNode},
    },
    tests::util::structured,
};

fn num(n: i64) -> StructuredNode {
    StructuredNode::Number(Decimal::from(n))
}

fn var(v: char) -> StructuredNode {
    StructuredNode::Variable(v)
}

#[test]
fn test_operator_precedence() {
    assert_eq!(
        structured("2+3\\cdot x"),
        Ok(StructuredNode::Add(
            Box::new(num(2)),
            Box::new(StructuredNode::Multiply(
                Box::new(num(3)),
                Box::new(var('x')),
            )),
        )),
    );
}

#[test]
fn test_implicit_multiplication() {
    assert_eq!(
        structured("2x"),
        Ok(StructuredNode::Multiply(
            Box::new(num(2)),
            Box::new(var('x')),
        )),
    );

    // The power binds tighter than the implicit multiplication
    assert_eq!(
        structured("3x^2"),
        Ok(StructuredNode::Multiply(
            Box::new(num(3)),
            Box::new(StructuredNode::Power(Box::new(var('x')), Box::new(num(2)))),
        )),
    );
}

#[test]
fn test_number_literals() {
    assert_eq!(
        structured("3.14"),
        Ok(StructuredNode::Number(Decimal::from_str("3.14").unwrap())),
    );

    // Trailing zeros in the literal's spelling survive
    assert_eq!(
        structured("1.50").unwrap(),
        StructuredNode::Number(Decimal::from_str("1.50").unwrap()),
    );

    assert_eq!(structured("-3"), Ok(num(-3)));
    assert_eq!(structured("--3"), Ok(num(3)));
}

#[test]
fn test_unary_minus_on_unit() {
    assert_eq!(
        structured("-x"),
        Ok(StructuredNode::Multiply(
            Box::new(num(-1)),
            Box::new(var('x')),
        )),
    );
}

#[test]
fn test_fraction_keeps_parentheses() {
    assert_eq!(
        structured("\\frac{1}{2}"),
        Ok(StructuredNode::Divide(
            Box::new(StructuredNode::Parentheses(Box::new(num(1)))),
            Box::new(StructuredNode::Parentheses(Box::new(num(2)))),
        )),
    );
}

#[test]
fn test_euler_disambiguation() {
    assert_eq!(structured("e"), Ok(StructuredNode::Constant(Constant::Euler)));

    // Touching a digit, `e` is just a variable
    assert_eq!(
        structured("2e"),
        Ok(StructuredNode::Multiply(
            Box::new(num(2)),
            Box::new(var('e')),
        )),
    );

    // With an exponent, `e` is the base of an exp call
    assert_eq!(
        structured("e^{x}"),
        Ok(StructuredNode::FunctionCall(Function::Exp, vec![var('x')])),
    );
}

#[test]
fn test_function_calls() {
    assert_eq!(
        structured("\\sin(x)"),
        Ok(StructuredNode::FunctionCall(Function::Sine, vec![var('x')])),
    );

    // Reciprocal commands have no function of their own
    assert_eq!(
        structured("\\csc(x)"),
        Ok(StructuredNode::Divide(
            Box::new(num(1)),
            Box::new(StructuredNode::FunctionCall(Function::Sine, vec![var('x')])),
        )),
    );

    assert_eq!(
        structured("\\sin^{-1}(x)"),
        Ok(StructuredNode::FunctionCall(
            Function::ArcSine,
            vec![var('x')],
        )),
    );

    let log10 = Ok(StructuredNode::FunctionCall(
        Function::Log10,
        vec![var('x')],
    ));
    assert_eq!(structured("\\log(x)"), log10.clone());
    assert_eq!(structured("\\log_{10}(x)"), log10);
    assert_eq!(
        structured("\\ln(x)"),
        Ok(StructuredNode::FunctionCall(
            Function::NaturalLog,
            vec![var('x')],
        )),
    );
}

#[test]
fn test_upgrade_errors() {
    assert_eq!(structured("3+"), Err(NodeError::ExpectedUnit));
    assert_eq!(
        structured("\\theta"),
        Err(NodeError::RawMarkup("\\theta".into())),
    );
    assert_eq!(structured("x^"), Err(NodeError::UnexpectedNodesAtEnd));
    assert_eq!(structured("^{2}"), Err(NodeError::PowerMissingBase));
    assert_eq!(structured("\\csc^{-1}(x)"), Err(NodeError::UnsupportedInverse));
    assert_eq!(structured("\\log_{2}(x)"), Err(NodeError::UnsupportedLogBase));
}
