//! The remote solver boundary: the request and response contract for each
//! numerical method, and a client which packages fields and classifies
//! failures.
//!
//! The numerical algorithms themselves live on the server; nothing in this
//! module computes. The `equation` (and `g_function`) fields of the requests
//! are exactly the output of
//! [`markup_to_evaluable`](crate::conversion::markup_to_evaluable).

mod methods;
pub use methods::*;

mod client;
pub use client::*;
