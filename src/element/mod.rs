//! The schema-ordered element store.
//!
//! This module provides the in-memory tree the paragraph builder mutates:
//! typed element nodes, the get-or-create property accessor, the schema rank
//! table that decides where property children sit among their siblings, and
//! markup emission for the finished fragment.

pub mod kind;
pub mod markup;
pub mod node;
pub(crate) mod schema;

// Re-export the node and vocabulary types
pub use kind::{Attr, ElementKind};
pub use node::Element;
