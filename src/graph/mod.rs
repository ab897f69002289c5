//! The graphing widget boundary: typed commands for the embedded widget's
//! imperative API, and a client owning the widget handle with an explicit
//! initialize/ready/dispose lifecycle.

mod command;
pub use command::*;

mod client;
pub use client::*;

use crate::error::SinkError;

/// The bridge between [GraphClient] and the embedded widget. Implementations
/// forward to the real embed; test doubles record what they are given.
pub trait CommandSink {
    /// Clears the widget back to an empty state.
    fn reset(&mut self) -> Result<(), SinkError>;

    /// Runs one command, given in the widget's command syntax.
    fn run(&mut self, command: &str) -> Result<(), SinkError>;
}
