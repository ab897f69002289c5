//! Defines and implements the [Upgradable] trait, for converting to a
//! [structured](crate::node::structured) node tree.

use crate::{
    error::NodeError,
    node::{parser, structured::StructuredNode},
};

use super::{MarkupNode, MarkupNodeList, MarkupNodeRoot};

/// Implemented by types which can be _upgraded_ - that is, converted into a
/// [structured](crate::node::structured) node tree.
pub trait Upgradable {
    /// Attempts to upgrade this node tree, and returns a [StructuredNode] if
    /// it succeeds.
    ///
    /// Failures will primarily occur due to syntax errors; for example, `3+`
    /// is a valid markup node tree (a pair of two tokens, `3` and `+`), but
    /// cannot be encoded as a structured node tree because it is not a
    /// syntactically valid mathematical expression. In cases like this, a
    /// [NodeError] is returned instead.
    fn upgrade(&self) -> Result<StructuredNode, NodeError>;
}

impl Upgradable for MarkupNodeList {
    fn upgrade(&self) -> Result<StructuredNode, NodeError> {
        parser::Parser {
            index: 0,
            nodes: &self.items[..],
        }
        .parse()
    }
}

impl Upgradable for MarkupNodeRoot {
    fn upgrade(&self) -> Result<StructuredNode, NodeError> {
        self.root.upgrade()
    }
}

impl Upgradable for MarkupNode {
    fn upgrade(&self) -> Result<StructuredNode, NodeError> {
        match self {
            MarkupNode::Parentheses(inner) => {
                Ok(StructuredNode::Parentheses(Box::new(inner.upgrade()?)))
            }

            MarkupNode::Fraction(a, b) => Ok(StructuredNode::Divide(
                Box::new(a.upgrade()?.in_parentheses()),
                Box::new(b.upgrade()?.in_parentheses()),
            )),

            MarkupNode::Root(None, arg) => Ok(StructuredNode::Sqrt(Box::new(arg.upgrade()?))),
            MarkupNode::Root(Some(index), arg) => Ok(StructuredNode::Root(
                Box::new(index.upgrade()?),
                Box::new(arg.upgrade()?),
            )),

            // The parser should always bind these to a neighbour
            MarkupNode::Power(_) => Err(NodeError::PowerMissingBase),
            MarkupNode::Subscript(_) => Err(NodeError::StraySubscript),

            // Functions take their argument from the following group, which a
            // lone node does not have
            MarkupNode::Function(_) => Err(NodeError::ExpectedUnit),

            MarkupNode::Raw(text) => Err(NodeError::RawMarkup(text.clone())),

            MarkupNode::Token(_) => Err(NodeError::ExpectedUnit),
        }
    }
}
