//! Read-only graph view handed to partitioners.
//!
//! [`PartitionGraph`] is the narrow query surface the callback and CSR
//! layers are written against; both graph types implement it.

use crate::graph::{CellId, ContractableGraph, GridGraph};
use crate::mesh_error::MeshGraphError;
use crate::topology::CellGrid;

/// One outgoing edge as seen by a partitioner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: CellId,
    pub weight: f64,
    /// Process hint of the neighbouring vertex.
    pub owner: usize,
}

/// Read-only queries a partitioner needs from a weighted graph.
///
/// All methods are pure; vertex order is whatever the implementor's storage
/// yields and must stay stable while the graph is not mutated.
pub trait PartitionGraph {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Every vertex with its weight.
    fn vertices(&self) -> impl Iterator<Item = (CellId, f64)> + '_;

    /// Degree of `v`; a lookup miss is an error, not zero.
    fn num_edges(&self, v: CellId) -> Result<usize, MeshGraphError>;

    /// Neighbours of `v` with edge weights and owner hints.
    fn edges(&self, v: CellId) -> Result<impl Iterator<Item = Neighbor> + '_, MeshGraphError>;
}

impl PartitionGraph for ContractableGraph {
    fn vertex_count(&self) -> usize {
        self.size()
    }

    fn vertices(&self) -> impl Iterator<Item = (CellId, f64)> + '_ {
        self.iter().map(|(id, v)| (id, v.weight))
    }

    fn num_edges(&self, v: CellId) -> Result<usize, MeshGraphError> {
        ContractableGraph::num_edges(self, v)
    }

    fn edges(&self, v: CellId) -> Result<impl Iterator<Item = Neighbor> + '_, MeshGraphError> {
        let list = self.edge_list(v)?;
        Ok(list.iter().map(move |(&id, &weight)| Neighbor {
            id,
            weight,
            owner: self.vertex(id).map_or(0, |n| n.owner),
        }))
    }
}

impl<G: CellGrid> PartitionGraph for GridGraph<'_, G> {
    fn vertex_count(&self) -> usize {
        self.graph().vertex_count()
    }

    fn vertices(&self) -> impl Iterator<Item = (CellId, f64)> + '_ {
        self.graph().vertices()
    }

    fn num_edges(&self, v: CellId) -> Result<usize, MeshGraphError> {
        PartitionGraph::num_edges(self.graph(), v)
    }

    fn edges(&self, v: CellId) -> Result<impl Iterator<Item = Neighbor> + '_, MeshGraphError> {
        self.graph().edges(v)
    }
}
