//! Export a [`PartitionGraph`] as a CSR (compressed-sparse-row) graph.
//
// METIS-style partitioners take the graph as arrays instead of callbacks:
//
// * `xadj[i] .. xadj[i+1]`   = neighbour slots of vertex *i*
// * `adjncy`                 = concatenated neighbour indices
// * `vwgt[i]`                = vertex weight (cells folded into vertex *i*)
// * `adjwgt`                 = edge weights aligned with `adjncy`
//
// Vertices are numbered by ascending cell id; `order[i]` is the cell id of
// CSR vertex *i*.

use hashbrown::HashMap;

use crate::graph::CellId;
use crate::mesh_error::MeshGraphError;
use crate::partitioning::graph_traits::PartitionGraph;
use crate::wells::WellRegistry;

/// CSR arrays of a weighted graph.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    pub xadj: Vec<usize>,
    pub adjncy: Vec<usize>,
    pub vwgt: Vec<f64>,
    pub adjwgt: Vec<f64>,
    /// Cell id of every CSR vertex.
    pub order: Vec<CellId>,
}

impl CsrGraph {
    /// Build the CSR arrays of `graph`.
    pub fn from_graph<G: PartitionGraph + ?Sized>(graph: &G) -> Result<Self, MeshGraphError> {
        let mut vertices: Vec<(CellId, f64)> = graph.vertices().collect();
        vertices.sort_unstable_by_key(|&(id, _)| id);
        let n = vertices.len();
        let idx_of: HashMap<CellId, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, &(id, _))| (id, i))
            .collect();

        let mut xadj = Vec::with_capacity(n + 1);
        let mut adjncy = Vec::new();
        let mut adjwgt = Vec::new();
        xadj.push(0);
        for &(id, _) in &vertices {
            for nbr in graph.edges(id)? {
                let j = *idx_of
                    .get(&nbr.id)
                    .ok_or(MeshGraphError::VertexNotFound(nbr.id))?;
                adjncy.push(j);
                adjwgt.push(nbr.weight);
            }
            xadj.push(adjncy.len());
        }

        let (order, vwgt) = vertices.into_iter().unzip();
        Ok(Self {
            xadj,
            adjncy,
            vwgt,
            adjwgt,
            order,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.order.len()
    }

    /// Neighbour indices of vertex `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjncy[self.xadj[i]..self.xadj[i + 1]]
    }

    /// Edge weights of vertex `i`, aligned with [`CsrGraph::neighbors`].
    #[inline]
    pub fn neighbor_weights(&self, i: usize) -> &[f64] {
        &self.adjwgt[self.xadj[i]..self.xadj[i + 1]]
    }

    /// Map a part per CSR vertex back to a part per cell.
    ///
    /// Well members receive the part of their representative. The result
    /// is sorted by cell id.
    pub fn expand_parts<P: Copy>(
        &self,
        parts: &[P],
        wells: &WellRegistry,
    ) -> Result<Vec<(CellId, P)>, MeshGraphError> {
        if parts.len() < self.num_vertices() {
            return Err(MeshGraphError::BufferTooSmall {
                buffer: "parts",
                needed: self.num_vertices(),
                got: parts.len(),
            });
        }
        let mut out: Vec<(CellId, P)> = self.order.iter().copied().zip(parts.iter().copied()).collect();
        let members: Vec<(CellId, P)> = wells
            .iter()
            .filter_map(|well| {
                let rep = *well.first()?;
                let i = self.order.binary_search(&rep).ok()?;
                Some(well.iter().skip(1).map(move |&cell| (cell, parts[i])))
            })
            .flatten()
            .collect();
        out.extend(members);
        out.sort_by_key(|&(cell, _)| cell);
        Ok(out)
    }

    /// Partition into `nparts` parts with METIS k-way; one part per CSR vertex.
    #[cfg(feature = "metis-support")]
    pub fn metis_partition(&self, nparts: usize) -> Result<Vec<metis::Idx>, MeshGraphError> {
        use metis::Idx;

        let n = self.num_vertices();
        if n == 0 {
            return Ok(Vec::new());
        }
        let to_idx = |x: usize| Idx::try_from(x).map_err(|_| MeshGraphError::IdOverflow(x));
        let xadj = self.xadj.iter().map(|&x| to_idx(x)).collect::<Result<Vec<_>, _>>()?;
        let adjncy = self.adjncy.iter().map(|&x| to_idx(x)).collect::<Result<Vec<_>, _>>()?;
        // weights are integral cell and face counts
        let vwgt: Vec<Idx> = self.vwgt.iter().map(|&w| w.round() as Idx).collect();
        let adjwgt: Vec<Idx> = self.adjwgt.iter().map(|&w| w.round() as Idx).collect();
        let nparts = to_idx(nparts)?;

        let mut part = vec![0; n];
        metis::Graph::new(1, nparts, &xadj, &adjncy)
            .map_err(|e| MeshGraphError::Partitioner(format!("{e:?}")))?
            .set_vwgt(&vwgt)
            .set_adjwgt(&adjwgt)
            .part_kway(&mut part)
            .map_err(|e| MeshGraphError::Partitioner(format!("{e:?}")))?;
        Ok(part)
    }
}
