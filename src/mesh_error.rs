//! MeshGraphError: Unified error type for mesh-wellgraph public APIs
//!
//! Graph lookups, well registration and the partitioner boundary all report
//! failures through this enum instead of panicking.

use thiserror::Error;

use crate::graph::CellId;

/// Unified error type for mesh-wellgraph operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshGraphError {
    /// The vertex is not (or no longer) in the graph.
    #[error("vertex with ID {0} is not in graph")]
    VertexNotFound(CellId),
    /// A vertex cannot be contracted with itself.
    #[error("cannot contract vertex {0} with itself")]
    SelfContraction(CellId),
    /// A cartesian index outside the logical cartesian box.
    #[error("cartesian index {cartesian} out of range (logical size {size:?})")]
    CartesianOutOfRange { cartesian: usize, size: [usize; 3] },
    /// A well references a cell that is not active in the grid.
    #[error("well references inactive cell with cartesian index {cartesian}")]
    InactiveCell { cartesian: usize },
    /// Edge count supplied by the partitioner disagrees with the graph.
    #[error(
        "edge number disagreement between partitioner ({expected}) and graph ({actual}) for vertex with ID {vertex}"
    )]
    EdgeCountMismatch {
        vertex: CellId,
        expected: i64,
        actual: usize,
    },
    /// A caller-provided output buffer cannot hold the requested data.
    #[error("buffer `{buffer}` too small: need {needed}, got {got}")]
    BufferTooSmall {
        buffer: &'static str,
        needed: usize,
        got: usize,
    },
    /// Id (or count) does not fit into the partitioner's integer type.
    #[error("value {0} does not fit into a partitioner id")]
    IdOverflow(usize),
    /// Adjacency is not symmetric.
    #[error("edge {from} -> {to} has no matching reverse edge of equal weight")]
    AsymmetricEdge { from: CellId, to: CellId },
    /// A vertex lists itself as neighbour.
    #[error("vertex {0} has a self-loop")]
    SelfLoop(CellId),
    /// Two registered wells share a cell.
    #[error("cell {cell} belongs to more than one well")]
    WellOverlap { cell: CellId },
    /// A non-representative well cell is still a vertex of its own.
    #[error("well cell {cell} was not contracted into its representative")]
    UncontractedWellCell { cell: CellId },
    /// Negative or otherwise invalid id received from the partitioner.
    #[error("invalid partitioner id {0}")]
    InvalidId(i64),
    /// A well whose representative is missing from the graph, or which has
    /// too few members to have been contracted.
    #[error("well with representative {0} is not contracted in the graph")]
    MissingRepresentative(CellId),
    /// Error reported by an in-process partitioner.
    #[error("partitioner error: {0}")]
    Partitioner(String),
}
