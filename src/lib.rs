//! # mesh-wellgraph
//!
//! mesh-wellgraph builds the weighted cell-adjacency graph of a reservoir grid
//! for load balancing, with every well contracted into a single vertex so that
//! a graph partitioner can never split it across processes.
//!
//! ## Features
//! - [`ContractableGraph`](graph::ContractableGraph): weighted undirected graph
//!   with vertex contraction (weights and shared edges add up)
//! - [`WellRegistry`](wells::WellRegistry): contracts wells and merges wells
//!   that share cells
//! - Zoltan-style query callbacks, callable from Rust or through C function
//!   pointers ([`partitioning::ffi`])
//! - CSR export for arrays-based partitioners, with optional METIS k-way
//!   partitioning (`metis-support`)
//! - Re-expansion of partitioner import/export lists to every well cell
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mesh-wellgraph = "0.1"
//! # Optional features:
//! # features = ["metis-support", "strict-invariants"]
//! ```
//!
//! ```
//! use mesh_wellgraph::prelude::*;
//!
//! let grid = CartesianGrid::new([5, 4, 3]);
//! let mut graph = GridGraph::new(&grid);
//! graph.add_well([5, 10, 15], true).unwrap();
//! assert_eq!(graph.size(), 58);
//! assert_eq!(graph.vertex(5).unwrap().weight, 3.0);
//! ```
//!
//! ## Invariants
//!
//! Structural invariants (symmetric adjacency, disjoint wells, contracted
//! well cells) are checked after every well insertion in debug builds, or in
//! release builds with the `strict-invariants` feature.

pub mod config;
pub mod debug_invariants;
pub mod graph;
pub mod mesh_error;
pub mod partitioning;
pub mod topology;
pub mod wells;

pub use debug_invariants::DebugInvariants;
pub use mesh_error::MeshGraphError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::config::GraphOptions;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph::{CellId, ContractableGraph, EdgeList, GridGraph, Vertex};
    pub use crate::mesh_error::MeshGraphError;
    pub use crate::partitioning::{
        CallbackStatus, CellListEntry, CsrGraph, ExportEntry, ImportEntry, PartitionGraph,
        extend_import_export_list,
    };
    pub use crate::topology::{AttributeSet, CartesianGrid, CellGrid};
    pub use crate::wells::{
        Well, WellConnections, WellRegistry, WellSpec, add_future_connection_wells,
        add_well_connections,
    };
}
