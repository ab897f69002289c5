//! Error types for every fallible seam of the crate.

use thiserror::Error;

/// An error produced while upgrading a markup node tree into a
/// [structured](crate::node::structured) tree.
///
/// These never escape the best-effort conversion entry points in
/// [`conversion`](crate::conversion), which fall back to re-printing the
/// markup tree instead; they are visible to callers using the fallible
/// [`Upgradable`](crate::node::markup::Upgradable) path directly.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum NodeError {
    /// A unit (number, variable, group or function call) was expected, but
    /// something else was found.
    #[error("expected a unit")]
    ExpectedUnit,

    /// The expression ended, but there were still markup nodes left over.
    #[error("unexpected nodes at end of expression")]
    UnexpectedNodesAtEnd,

    /// An exponent appeared with nothing in front of it to act as its base.
    #[error("power has no base")]
    PowerMissingBase,

    /// A number literal was too large to represent.
    #[error("number literal overflow")]
    Overflow,

    /// Markup which has no structural meaning, such as an unrecognised
    /// command, reached the upgrade step.
    #[error("markup cannot be upgraded: {0}")]
    RawMarkup(String),

    /// A subscript was attached to something other than a logarithm.
    #[error("subscript is only meaningful on a logarithm")]
    StraySubscript,

    /// A `^{-1}` inverse was applied to a function with no inverse form.
    #[error("function has no inverse form")]
    UnsupportedInverse,

    /// A logarithm carried a subscript base other than 10.
    #[error("only base-10 logarithm subscripts are supported")]
    UnsupportedLogBase,
}

/// A failure reported by a [`Transport`](crate::solver::Transport)
/// implementation.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// The remote end answered with a non-success status. `body` carries the
    /// decoded JSON body when there was one.
    #[error("unexpected HTTP status {status}")]
    Status {
        status: u16,
        body: Option<serde_json::Value>,
    },

    /// The request never produced a response at all.
    #[error("{0}")]
    Network(String),
}

/// An error produced by [`SolverClient`](crate::solver::SolverClient).
#[derive(Error, Debug, Clone)]
pub enum SolverError {
    /// The solver rejected the submission and explained why. The detail
    /// message is intended to be shown to the user verbatim.
    #[error("{detail}")]
    Rejected { detail: String },

    /// The request failed before reaching the solver; no structured body is
    /// available.
    #[error("could not reach the solver: {0}")]
    Transport(String),

    /// A solve request is already outstanding on this client.
    #[error("a solve request is already in progress")]
    Busy,

    /// Anything else: an undecodable response, or a failure which fits no
    /// other category.
    #[error("could not process the request: {0}")]
    Unexpected(String),
}

/// A failure reported by a [`CommandSink`](crate::graph::CommandSink)
/// implementation.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct SinkError(pub String);

/// An error produced by [`GraphClient`](crate::graph::GraphClient).
#[derive(Error, Debug, Clone)]
pub enum GraphError {
    /// The widget has not finished loading, or has been disposed.
    #[error("graphing widget is not ready")]
    NotReady,

    /// The widget bridge failed to run a command.
    #[error("widget command failed: {0}")]
    Sink(#[from] SinkError),
}
