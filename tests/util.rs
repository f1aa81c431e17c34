#![allow(dead_code)]
use std::collections::BTreeSet;

use mesh_wellgraph::graph::{CellId, GridGraph};
use mesh_wellgraph::topology::CartesianGrid;

/// Fully active `nx × ny × nz` grid.
pub fn grid(nx: usize, ny: usize, nz: usize) -> CartesianGrid {
    CartesianGrid::new([nx, ny, nz])
}

/// Neighbours of `v` as `(id, weight)` pairs in ascending id order.
pub fn edges_of<G: mesh_wellgraph::topology::CellGrid>(
    g: &GridGraph<'_, G>,
    v: CellId,
) -> Vec<(CellId, f64)> {
    g.edge_list(v)
        .unwrap()
        .iter()
        .map(|(&id, &w)| (id, w))
        .collect()
}

/// Sum of the degrees of all vertices.
pub fn total_edges<G: mesh_wellgraph::topology::CellGrid>(g: &GridGraph<'_, G>) -> usize {
    g.graph().iter().map(|(_, v)| v.edges.len()).sum()
}

/// Wells of `g` in a canonical order.
pub fn sorted_wells<G: mesh_wellgraph::topology::CellGrid>(
    g: &GridGraph<'_, G>,
) -> Vec<BTreeSet<CellId>> {
    let mut wells: Vec<_> = g.wells().iter().cloned().collect();
    wells.sort();
    wells
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
