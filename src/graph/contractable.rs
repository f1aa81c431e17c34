//! Contractable weighted graph.
//!
//! Vertices are keyed by their [`CellId`]. Each vertex stores the number of
//! cells folded into it (`weight`), a process hint (`owner`) and its
//! neighbours with edge weights. Adjacency is kept symmetric and free of
//! self-loops.
//!
//! Contracting `a` and `b` keeps `min(a, b)` as representative: weights add
//! up, edges to neighbours shared by both add up, and the edge between `a`
//! and `b` disappears. The representative keeps its own owner.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::CellId;
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshGraphError;
use crate::topology::CellGrid;

/// Neighbour id → edge weight.
pub type EdgeList = BTreeMap<CellId, f64>;

/// One graph vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Sum of the weights of all vertices contracted into this one.
    pub weight: f64,
    /// Process the vertex currently lives on.
    pub owner: usize,
    /// Weighted adjacency.
    pub edges: EdgeList,
}

impl Vertex {
    fn new(weight: f64, owner: usize) -> Self {
        Self {
            weight,
            owner,
            edges: EdgeList::new(),
        }
    }
}

/// Weighted undirected graph supporting vertex contraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractableGraph {
    vertices: HashMap<CellId, Vertex>,
}

impl ContractableGraph {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// One unit-weight vertex per grid cell, one unit-weight edge per pair
    /// of face neighbours.
    pub fn from_grid<G: CellGrid>(grid: &G, default_owner: usize) -> Self {
        let mut vertices = HashMap::with_capacity(grid.num_cells());
        for cell in 0..grid.num_cells() {
            vertices.insert(cell, Vertex::new(1.0, default_owner));
        }
        for (a, b) in grid.face_neighbors() {
            if a == b {
                continue;
            }
            if let Some(v) = vertices.get_mut(&a) {
                v.edges.insert(b, 1.0);
            }
            if let Some(v) = vertices.get_mut(&b) {
                v.edges.insert(a, 1.0);
            }
        }
        Self { vertices }
    }

    /// Insert an isolated vertex. Returns `false` if `id` already exists.
    pub fn add_vertex(&mut self, id: CellId, weight: f64, owner: usize) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id, Vertex::new(weight, owner));
        true
    }

    /// Set the weight of the undirected edge `a`–`b`.
    pub fn add_edge(&mut self, a: CellId, b: CellId, weight: f64) -> Result<(), MeshGraphError> {
        if a == b {
            return Err(MeshGraphError::SelfLoop(a));
        }
        self.vertex(a)?;
        self.vertex(b)?;
        if let Some(v) = self.vertices.get_mut(&a) {
            v.edges.insert(b, weight);
        }
        if let Some(v) = self.vertices.get_mut(&b) {
            v.edges.insert(a, weight);
        }
        Ok(())
    }

    /// Number of live vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: CellId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Number of neighbours of `id`.
    pub fn num_edges(&self, id: CellId) -> Result<usize, MeshGraphError> {
        Ok(self.vertex(id)?.edges.len())
    }

    /// Neighbours of `id` with their edge weights.
    pub fn edge_list(&self, id: CellId) -> Result<&EdgeList, MeshGraphError> {
        Ok(&self.vertex(id)?.edges)
    }

    pub fn vertex(&self, id: CellId) -> Result<&Vertex, MeshGraphError> {
        self.vertices
            .get(&id)
            .ok_or(MeshGraphError::VertexNotFound(id))
    }

    /// Update the process hint of a vertex.
    pub fn set_owner(&mut self, id: CellId, owner: usize) -> Result<(), MeshGraphError> {
        let v = self
            .vertices
            .get_mut(&id)
            .ok_or(MeshGraphError::VertexNotFound(id))?;
        v.owner = owner;
        Ok(())
    }

    /// Live vertices in the map's native (unordered) order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Vertex)> + '_ {
        self.vertices.iter().map(|(&id, v)| (id, v))
    }

    /// Sum of all vertex weights; unchanged by contraction.
    pub fn total_weight(&self) -> f64 {
        self.vertices.values().map(|v| v.weight).sum()
    }

    /// Contract `a` and `b` into `min(a, b)` and return the survivor.
    ///
    /// The larger id disappears from the graph; every edge that pointed to
    /// it now points to the survivor, summed with any edge already there.
    pub fn contract_vertices(&mut self, a: CellId, b: CellId) -> Result<CellId, MeshGraphError> {
        if a == b {
            return Err(MeshGraphError::SelfContraction(a));
        }
        self.vertex(a)?;
        self.vertex(b)?;
        let (keep, gone) = if a < b { (a, b) } else { (b, a) };
        let removed = self
            .vertices
            .remove(&gone)
            .ok_or(MeshGraphError::VertexNotFound(gone))?;

        // re-point the removed vertex's neighbours to the survivor
        for (&nbr, &w) in &removed.edges {
            if nbr == keep {
                continue;
            }
            if let Some(n) = self.vertices.get_mut(&nbr) {
                n.edges.remove(&gone);
                *n.edges.entry(keep).or_insert(0.0) += w;
            }
        }

        let survivor = self
            .vertices
            .get_mut(&keep)
            .ok_or(MeshGraphError::VertexNotFound(keep))?;
        survivor.weight += removed.weight;
        survivor.edges.remove(&gone);
        for (nbr, w) in removed.edges {
            if nbr != keep {
                *survivor.edges.entry(nbr).or_insert(0.0) += w;
            }
        }
        log::trace!("contracted vertex {gone} into {keep}");
        Ok(keep)
    }
}

impl DebugInvariants for ContractableGraph {
    fn validate_invariants(&self) -> Result<(), MeshGraphError> {
        for (&id, v) in &self.vertices {
            for (&nbr, &w) in &v.edges {
                if nbr == id {
                    return Err(MeshGraphError::SelfLoop(id));
                }
                match self.vertices.get(&nbr).and_then(|n| n.edges.get(&id)) {
                    Some(&back) if back == w => {}
                    _ => return Err(MeshGraphError::AsymmetricEdge { from: id, to: nbr }),
                }
            }
        }
        Ok(())
    }
}
