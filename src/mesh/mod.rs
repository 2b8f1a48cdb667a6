//! Mesh representation.
//!
//! Provides the data structures shared by the reader, the surface
//! resolution pass and the writer:
//! - Nodes, elements and named element sets in parse order
//! - Edge numbering families for 2D target element types

mod family;
mod model;

pub use family::EdgeNumbering;
pub use model::{Element, ElementId, ElementSet, Mesh, Node, NodeId};
