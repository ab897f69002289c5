macro_rules! markup_list {
    ($($x:expr),* $(,)?) => { crate::MarkupNodeList { items: vec![ $($x),* ] } };
}

macro_rules! token {
    (+)             => { crate::MarkupNode::Token(crate::Token::Add) };
    (-)             => { crate::MarkupNode::Token(crate::Token::Subtract) };
    (*)             => { crate::MarkupNode::Token(crate::Token::Multiply) };
    (/)             => { crate::MarkupNode::Token(crate::Token::Divide) };
    (.)             => { crate::MarkupNode::Token(crate::Token::Point) };
    (pi)            => { crate::MarkupNode::Token(crate::Token::Pi) };
    (inf)           => { crate::MarkupNode::Token(crate::Token::Infinity) };
    (var $v:ident)  => { crate::MarkupNode::Token(crate::Token::Variable(stringify!($v).chars().next().unwrap())) };
    ($x:literal)    => { crate::MarkupNode::Token(crate::Token::Digit($x)) };
}

macro_rules! tokens {
    ($($x:tt) *) => { crate::MarkupNodeList { items: vec![ $(token!($x)),* ] } };
}

macro_rules! frac {
    ($t:expr, $b:expr $(,)?) => { crate::MarkupNode::Fraction($t, $b) };
}

use crate::{error::NodeError, MarkupNodeRoot, StructuredNode, Upgradable};

/// Runs the full markup-to-solver-dialect conversion.
pub fn ev(markup: &str) -> String {
    crate::markup_to_evaluable(markup).into_string()
}

/// Runs the full markup-to-widget-dialect conversion.
pub fn gr(markup: &str) -> String {
    crate::markup_to_graphing(markup).into_string()
}

/// Parses markup and upgrades it, without the best-effort fallback.
pub fn structured(markup: &str) -> Result<StructuredNode, NodeError> {
    MarkupNodeRoot::parse(markup).upgrade()
}
