//! C-ABI graph query callbacks and their registration.
//!
//! The functions here have the exact signatures of Zoltan's
//! `ZOLTAN_NUM_OBJ_FN`, `ZOLTAN_OBJ_LIST_FN`, `ZOLTAN_NUM_EDGES_MULTI_FN` and
//! `ZOLTAN_EDGE_LIST_MULTI_FN`. The opaque `data` pointer is a `*const G`
//! for the graph type the callbacks were instantiated with. They only
//! rebuild slices from the raw pointers and forward to
//! [`callbacks`](super::callbacks).
//!
//! Ids are single integers and weights single floats: any other
//! `num_gid_entries` or `wgt_dim` is reported fatal.

use std::ffi::{c_float, c_int, c_void};

use super::callbacks::{self, CallbackStatus, ZoltanId};
use super::graph_traits::PartitionGraph;

/// `ZOLTAN_NUM_OBJ_FN`
pub type NumObjFn = unsafe extern "C" fn(data: *mut c_void, ierr: *mut c_int) -> c_int;

/// `ZOLTAN_OBJ_LIST_FN`
pub type ObjListFn = unsafe extern "C" fn(
    data: *mut c_void,
    num_gid_entries: c_int,
    num_lid_entries: c_int,
    global_ids: *mut ZoltanId,
    local_ids: *mut ZoltanId,
    wgt_dim: c_int,
    obj_wgts: *mut c_float,
    ierr: *mut c_int,
);

/// `ZOLTAN_NUM_EDGES_MULTI_FN`
pub type NumEdgesMultiFn = unsafe extern "C" fn(
    data: *mut c_void,
    num_gid_entries: c_int,
    num_lid_entries: c_int,
    num_obj: c_int,
    global_ids: *mut ZoltanId,
    local_ids: *mut ZoltanId,
    num_edges: *mut c_int,
    ierr: *mut c_int,
);

/// `ZOLTAN_EDGE_LIST_MULTI_FN`
pub type EdgeListMultiFn = unsafe extern "C" fn(
    data: *mut c_void,
    num_gid_entries: c_int,
    num_lid_entries: c_int,
    num_obj: c_int,
    global_ids: *mut ZoltanId,
    local_ids: *mut ZoltanId,
    num_edges: *mut c_int,
    nbor_global_id: *mut ZoltanId,
    nbor_procs: *mut c_int,
    wgt_dim: c_int,
    ewgts: *mut c_float,
    ierr: *mut c_int,
);

/// Something that accepts Zoltan graph query functions, e.g. a binding to
/// a `Zoltan_Struct`.
pub trait CallbackRegistry {
    fn set_num_obj_fn(&mut self, f: NumObjFn, data: *mut c_void);
    fn set_obj_list_fn(&mut self, f: ObjListFn, data: *mut c_void);
    fn set_num_edges_multi_fn(&mut self, f: NumEdgesMultiFn, data: *mut c_void);
    fn set_edge_list_multi_fn(&mut self, f: EdgeListMultiFn, data: *mut c_void);
}

/// Register all four graph queries for `graph`.
///
/// The registry keeps a raw pointer to `graph`: the graph must stay alive
/// and unmodified for as long as the partitioner may call back.
pub fn register_graph_callbacks<R, G>(registry: &mut R, graph: &G)
where
    R: CallbackRegistry + ?Sized,
    G: PartitionGraph,
{
    let data = graph as *const G as *mut c_void;
    registry.set_num_obj_fn(num_obj::<G>, data);
    registry.set_obj_list_fn(obj_list::<G>, data);
    registry.set_num_edges_multi_fn(num_edges_multi::<G>, data);
    registry.set_edge_list_multi_fn(edge_list_multi::<G>, data);
}

unsafe fn set_status(ierr: *mut c_int, status: CallbackStatus) {
    if !ierr.is_null() {
        unsafe { *ierr = status as c_int };
    }
}

unsafe fn graph_ref<'a, G>(data: *mut c_void) -> Option<&'a G> {
    unsafe { (data as *const G).as_ref() }
}

unsafe fn slice<'a, T>(ptr: *const T, len: usize) -> Option<&'a [T]> {
    if len == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { std::slice::from_raw_parts(ptr, len) })
}

unsafe fn slice_mut<'a, T>(ptr: *mut T, len: usize) -> Option<&'a mut [T]> {
    if len == 0 {
        return Some(Default::default());
    }
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { std::slice::from_raw_parts_mut(ptr, len) })
}

fn single_entry(query: &str, num_gid_entries: c_int, wgt_dim: c_int) -> bool {
    if num_gid_entries != 1 || wgt_dim != 1 {
        log::error!(
            "{query} error: expected single-integer ids and single-float weights, got {num_gid_entries} and {wgt_dim}"
        );
        return false;
    }
    true
}

/// Number of vertices.
///
/// # Safety
/// `data` must point to a live `G`; `ierr` must be null or writable.
pub unsafe extern "C" fn num_obj<G: PartitionGraph>(data: *mut c_void, ierr: *mut c_int) -> c_int {
    let Some(graph) = (unsafe { graph_ref::<G>(data) }) else {
        log::error!("num_obj error: null graph");
        unsafe { set_status(ierr, CallbackStatus::Fatal) };
        return 0;
    };
    let (n, status) = callbacks::num_vertices(graph);
    unsafe { set_status(ierr, status) };
    n
}

/// Vertex ids and weights. `local_ids` is never touched.
///
/// # Safety
/// `data` must point to a live `G`; `global_ids` and `obj_wgts` must hold
/// as many entries as [`num_obj`] reported.
pub unsafe extern "C" fn obj_list<G: PartitionGraph>(
    data: *mut c_void,
    num_gid_entries: c_int,
    _num_lid_entries: c_int,
    global_ids: *mut ZoltanId,
    _local_ids: *mut ZoltanId,
    wgt_dim: c_int,
    obj_wgts: *mut c_float,
    ierr: *mut c_int,
) {
    let status = (|| {
        if !single_entry("obj_list", num_gid_entries, wgt_dim) {
            return CallbackStatus::Fatal;
        }
        let Some(graph) = (unsafe { graph_ref::<G>(data) }) else {
            return CallbackStatus::Fatal;
        };
        let n = graph.vertex_count();
        let buffers = unsafe { (slice_mut(global_ids, n), slice_mut(obj_wgts, n)) };
        match buffers {
            (Some(gids), Some(wgts)) => callbacks::vertex_list(graph, gids, wgts),
            _ => {
                log::error!("obj_list error: null output buffer");
                CallbackStatus::Fatal
            }
        }
    })();
    unsafe { set_status(ierr, status) };
}

/// Degrees of `num_obj` vertices.
///
/// # Safety
/// `data` must point to a live `G`; `global_ids` and `num_edges` must hold
/// `num_obj` entries.
pub unsafe extern "C" fn num_edges_multi<G: PartitionGraph>(
    data: *mut c_void,
    num_gid_entries: c_int,
    _num_lid_entries: c_int,
    num_obj: c_int,
    global_ids: *mut ZoltanId,
    _local_ids: *mut ZoltanId,
    num_edges: *mut c_int,
    ierr: *mut c_int,
) {
    let status = (|| {
        if !single_entry("num_edges_multi", num_gid_entries, 1) {
            return CallbackStatus::Fatal;
        }
        let Some(graph) = (unsafe { graph_ref::<G>(data) }) else {
            return CallbackStatus::Fatal;
        };
        let n = usize::try_from(num_obj).unwrap_or(0);
        let buffers = unsafe { (slice(global_ids, n), slice_mut(num_edges, n)) };
        match buffers {
            (Some(gids), Some(out)) => callbacks::num_edges_multi(graph, gids, out),
            _ => {
                log::error!("num_edges_multi error: null buffer");
                CallbackStatus::Fatal
            }
        }
    })();
    unsafe { set_status(ierr, status) };
}

/// Neighbour lists of `num_obj` vertices.
///
/// # Safety
/// `data` must point to a live `G`; `global_ids` and `num_edges` must hold
/// `num_obj` entries and the three neighbour buffers the sum of
/// `num_edges`.
pub unsafe extern "C" fn edge_list_multi<G: PartitionGraph>(
    data: *mut c_void,
    num_gid_entries: c_int,
    _num_lid_entries: c_int,
    num_obj: c_int,
    global_ids: *mut ZoltanId,
    _local_ids: *mut ZoltanId,
    num_edges: *mut c_int,
    nbor_global_id: *mut ZoltanId,
    nbor_procs: *mut c_int,
    wgt_dim: c_int,
    ewgts: *mut c_float,
    ierr: *mut c_int,
) {
    let status = (|| {
        if !single_entry("edge_list_multi", num_gid_entries, wgt_dim) {
            return CallbackStatus::Fatal;
        }
        let Some(graph) = (unsafe { graph_ref::<G>(data) }) else {
            return CallbackStatus::Fatal;
        };
        let n = usize::try_from(num_obj).unwrap_or(0);
        let (Some(gids), Some(counts)) = (unsafe { (slice(global_ids, n), slice(num_edges, n)) })
        else {
            log::error!("edge_list_multi error: null input buffer");
            return CallbackStatus::Fatal;
        };
        let total: usize = counts
            .iter()
            .map(|&c| usize::try_from(c).unwrap_or(0))
            .sum();
        let outputs = unsafe {
            (
                slice_mut(nbor_global_id, total),
                slice_mut(nbor_procs, total),
                slice_mut(ewgts, total),
            )
        };
        match outputs {
            (Some(nbrs), Some(procs), Some(wgts)) => {
                callbacks::edge_list_multi(graph, gids, counts, nbrs, procs, wgts)
            }
            _ => {
                log::error!("edge_list_multi error: null output buffer");
                CallbackStatus::Fatal
            }
        }
    })();
    unsafe { set_status(ierr, status) };
}
