//! Graph elements, edge sets and spanning-tree verification
//!
//! - `types`: node arena addressed by `NodeId`, plus the `GraphProvider` seam
//! - `edges`: directed, symmetric edge set produced by the walk engine
//! - `traversal`: depth-first verifier with cycle detection and path queries

pub mod edges;
pub mod traversal;
pub mod types;

pub use edges::EdgeSet;
pub use traversal::{traverse, traverse_node, TraversalResult};
pub use types::{Graph, GraphProvider, Node, NodeId, NodeLabel};
