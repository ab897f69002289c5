//! Core library for numerical-methods calculator frontends.
//!
//! Three concerns live here, and nothing else: converting user-edited
//! formula markup into the remote solver's expression dialect and the
//! graphing widget's dialect ([conversion]), the request/response contract
//! spoken with the solver ([solver]), and scripting the embedded graphing
//! widget ([graph]). Form state, routing and rendering belong to the
//! embedding frontend.

pub mod conversion;
pub mod emit;
pub mod emitters;
pub mod error;
pub mod graph;
pub mod node;
pub mod solver;

#[cfg(test)]
mod tests;

pub use crate::{
    conversion::{
        evaluable_to_graphing, markup_to_evaluable, markup_to_graphing, EvaluableExpression,
        GraphingExpression,
    },
    node::{
        markup::{MarkupNode, MarkupNodeList, MarkupNodeRoot, Token, Upgradable},
        structured::StructuredNode,
    },
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
