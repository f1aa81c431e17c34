//! Weighted cell-adjacency graphs with vertex contraction.
//!
//! [`ContractableGraph`] is the contraction engine; [`GridGraph`] ties one to
//! the grid it was built from and to the wells contracted into it.

pub mod contractable;
pub mod grid_graph;

#[cfg(test)]
mod tests;

pub use contractable::{ContractableGraph, EdgeList, Vertex};
pub use grid_graph::GridGraph;

/// Global (compressed) cell index, used as vertex id.
pub type CellId = usize;
