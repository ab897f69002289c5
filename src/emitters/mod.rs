//! Emitter implementations for the two output dialects.

mod evaluable;
pub use evaluable::*;

mod graphing;
pub use graphing::*;
