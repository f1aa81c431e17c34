//! Status-coded query functions in the shape of Zoltan's graph callbacks.
//!
//! Each function fills caller-owned buffers sized from counts the caller
//! obtained earlier (vertex count, per-vertex edge counts and their sum) and
//! returns a [`CallbackStatus`]. On [`CallbackStatus::Fatal`] the buffers may
//! be partially written and must not be used. Every fatal status is logged
//! with the offending vertex.

use crate::graph::CellId;
use crate::mesh_error::MeshGraphError;
use crate::partitioning::graph_traits::PartitionGraph;

/// Integer id type of the partitioner.
pub type ZoltanId = i32;

/// `ZOLTAN_OK`
pub const ZOLTAN_OK: i32 = 1;
/// `ZOLTAN_FATAL`
pub const ZOLTAN_FATAL: i32 = 0;

/// Outcome of a query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum CallbackStatus {
    Fatal = ZOLTAN_FATAL,
    Ok = ZOLTAN_OK,
}

impl CallbackStatus {
    #[inline]
    pub fn is_ok(self) -> bool {
        self == CallbackStatus::Ok
    }

    fn report(query: &str, result: Result<(), MeshGraphError>) -> Self {
        match result {
            Ok(()) => CallbackStatus::Ok,
            Err(e) => {
                log::error!("{query} error: {e}");
                CallbackStatus::Fatal
            }
        }
    }
}

fn to_zoltan(value: usize) -> Result<ZoltanId, MeshGraphError> {
    ZoltanId::try_from(value).map_err(|_| MeshGraphError::IdOverflow(value))
}

fn to_cell(id: ZoltanId) -> Result<CellId, MeshGraphError> {
    CellId::try_from(id).map_err(|_| MeshGraphError::InvalidId(id.into()))
}

fn ensure_len(buffer: &'static str, needed: usize, got: usize) -> Result<(), MeshGraphError> {
    if got < needed {
        return Err(MeshGraphError::BufferTooSmall {
            buffer,
            needed,
            got,
        });
    }
    Ok(())
}

/// Number of vertices in the graph.
pub fn num_vertices<G: PartitionGraph + ?Sized>(graph: &G) -> (ZoltanId, CallbackStatus) {
    match to_zoltan(graph.vertex_count()) {
        Ok(n) => (n, CallbackStatus::Ok),
        Err(e) => (0, CallbackStatus::report("num_vertices", Err(e))),
    }
}

/// Write every vertex id into `global_ids` and its weight into `weights`.
///
/// The graph has no local ids; a partitioner's local-id buffer is left alone.
pub fn vertex_list<G: PartitionGraph + ?Sized>(
    graph: &G,
    global_ids: &mut [ZoltanId],
    weights: &mut [f32],
) -> CallbackStatus {
    let result = (|| -> Result<(), MeshGraphError> {
        let n = graph.vertex_count();
        ensure_len("global_ids", n, global_ids.len())?;
        ensure_len("weights", n, weights.len())?;
        for (i, (id, weight)) in graph.vertices().enumerate() {
            global_ids[i] = to_zoltan(id)?;
            weights[i] = weight as f32;
        }
        Ok(())
    })();
    CallbackStatus::report("vertex_list", result)
}

/// Write the degree of every vertex in `global_ids` into `num_edges`.
///
/// Stops at the first id that is not in the graph.
pub fn num_edges_multi<G: PartitionGraph + ?Sized>(
    graph: &G,
    global_ids: &[ZoltanId],
    num_edges: &mut [i32],
) -> CallbackStatus {
    let result = (|| -> Result<(), MeshGraphError> {
        ensure_len("num_edges", global_ids.len(), num_edges.len())?;
        for (slot, &gid) in num_edges.iter_mut().zip(global_ids) {
            let degree = graph.num_edges(to_cell(gid)?)?;
            *slot = to_zoltan(degree)?;
        }
        Ok(())
    })();
    CallbackStatus::report("num_edges_multi", result)
}

/// Write the neighbours of every vertex in `global_ids`, one after another,
/// into `nbor_global_ids`, their owner hints into `nbor_procs` and the edge
/// weights into `edge_weights`.
///
/// `num_edges[i]` is the degree the caller expects for `global_ids[i]`; a
/// disagreement with the graph stops the batch.
pub fn edge_list_multi<G: PartitionGraph + ?Sized>(
    graph: &G,
    global_ids: &[ZoltanId],
    num_edges: &[i32],
    nbor_global_ids: &mut [ZoltanId],
    nbor_procs: &mut [i32],
    edge_weights: &mut [f32],
) -> CallbackStatus {
    let result = (|| -> Result<(), MeshGraphError> {
        ensure_len("num_edges", global_ids.len(), num_edges.len())?;
        let capacity = nbor_global_ids
            .len()
            .min(nbor_procs.len())
            .min(edge_weights.len());
        let mut pos = 0;
        for (&gid, &expected) in global_ids.iter().zip(num_edges) {
            let vertex = to_cell(gid)?;
            let actual = graph.num_edges(vertex)?;
            if i64::from(expected) != actual as i64 {
                return Err(MeshGraphError::EdgeCountMismatch {
                    vertex,
                    expected: expected.into(),
                    actual,
                });
            }
            ensure_len("edge list", pos + actual, capacity)?;
            for nbr in graph.edges(vertex)? {
                nbor_global_ids[pos] = to_zoltan(nbr.id)?;
                nbor_procs[pos] = to_zoltan(nbr.owner)?;
                edge_weights[pos] = nbr.weight as f32;
                pos += 1;
            }
        }
        Ok(())
    })();
    CallbackStatus::report("edge_list_multi", result)
}
