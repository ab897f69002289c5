//! The seam between structured node trees and output dialects.

use crate::node::structured::StructuredNode;

/// Implemented by printers which turn a structured node tree into the flat
/// text of one output dialect.
///
/// Each emitter walks the tree independently; the dialects differ in more
/// than spelling (exponent syntax, constant forms, when a multiplication
/// sign is written), so there is no shared rendering pass for them to hook
/// into.
pub trait Emitter {
    /// Prints a structured node in this emitter's dialect.
    fn emit(&self, node: &StructuredNode) -> String;
}
