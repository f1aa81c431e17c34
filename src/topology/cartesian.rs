//! Structured `nx × ny × nz` grid with optional inactive cells.

use std::collections::BTreeSet;

use super::CellGrid;
use crate::graph::CellId;
use crate::mesh_error::MeshGraphError;

/// Logically cartesian grid.
///
/// Cartesian index of `(i, j, k)` is `i + nx * (j + ny * k)`. Active cells
/// are numbered in cartesian order.
#[derive(Debug, Clone)]
pub struct CartesianGrid {
    dims: [usize; 3],
    global_cell: Vec<usize>,
    compressed: Vec<Option<CellId>>,
}

impl CartesianGrid {
    /// Grid with every cell active.
    pub fn new(dims: [usize; 3]) -> Self {
        let n = dims[0] * dims[1] * dims[2];
        Self {
            dims,
            global_cell: (0..n).collect(),
            compressed: (0..n).map(Some).collect(),
        }
    }

    /// Grid where the listed cartesian cells are inactive.
    pub fn with_inactive(
        dims: [usize; 3],
        inactive: impl IntoIterator<Item = usize>,
    ) -> Result<Self, MeshGraphError> {
        let n = dims[0] * dims[1] * dims[2];
        let inactive: BTreeSet<usize> = inactive.into_iter().collect();
        if let Some(&cartesian) = inactive.range(n..).next() {
            return Err(MeshGraphError::CartesianOutOfRange {
                cartesian,
                size: dims,
            });
        }
        let mut global_cell = Vec::with_capacity(n - inactive.len());
        let mut compressed = vec![None; n];
        for cart in (0..n).filter(|c| !inactive.contains(c)) {
            compressed[cart] = Some(global_cell.len());
            global_cell.push(cart);
        }
        Ok(Self {
            dims,
            global_cell,
            compressed,
        })
    }

    /// Cartesian index of `(i, j, k)`, `None` outside the box.
    pub fn cartesian_index(&self, ijk: [usize; 3]) -> Option<usize> {
        super::cartesian_index(self.dims, ijk)
    }

    /// Logical `(i, j, k)` of a cartesian index.
    pub fn ijk(&self, cartesian: usize) -> [usize; 3] {
        let [nx, ny, _] = self.dims;
        [cartesian % nx, (cartesian / nx) % ny, cartesian / (nx * ny)]
    }

    /// Compressed id of an active cartesian cell.
    pub fn compressed(&self, cartesian: usize) -> Option<CellId> {
        self.compressed.get(cartesian).copied().flatten()
    }
}

impl CellGrid for CartesianGrid {
    fn num_cells(&self) -> usize {
        self.global_cell.len()
    }

    fn global_cell(&self, cell: CellId) -> usize {
        self.global_cell[cell]
    }

    fn logical_cartesian_size(&self) -> [usize; 3] {
        self.dims
    }

    fn face_neighbors(&self) -> impl Iterator<Item = (CellId, CellId)> + '_ {
        let [nx, ny, nz] = self.dims;
        let strides = [1, nx, nx * ny];
        self.global_cell
            .iter()
            .enumerate()
            .flat_map(move |(cell, &cart)| {
                let ijk = self.ijk(cart);
                let extent = [nx, ny, nz];
                (0..3).filter_map(move |axis| {
                    if ijk[axis] + 1 >= extent[axis] {
                        return None;
                    }
                    self.compressed(cart + strides[axis]).map(|other| (cell, other))
                })
            })
    }

    fn cartesian_to_compressed(&self) -> Vec<Option<CellId>> {
        self.compressed.clone()
    }
}
