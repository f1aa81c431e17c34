//! Grid collaborator abstractions.
//!
//! The graph never builds meshes itself. It consumes a [`CellGrid`]: the
//! number of active cells, each cell's cartesian (global) index, the logical
//! cartesian box and the list of face-adjacent cell pairs. [`CartesianGrid`]
//! is a structured reference implementation with optional inactive cells.
//!
//! [`AttributeSet`] is the ownership tag carried through partitioner
//! import/export lists.

pub mod cartesian;
pub mod ownership;

pub use cartesian::CartesianGrid;
pub use ownership::AttributeSet;

use crate::graph::CellId;
use crate::mesh_error::MeshGraphError;

/// Read-only view of a grid of cells.
///
/// Compressed cell ids run over `0..num_cells()`; each one maps to a unique
/// cartesian index inside `logical_cartesian_size()`.
pub trait CellGrid {
    /// Number of active (compressed) cells.
    fn num_cells(&self) -> usize;

    /// Cartesian index of compressed cell `cell`.
    fn global_cell(&self, cell: CellId) -> usize;

    /// Extent of the logical cartesian box `[nx, ny, nz]`.
    fn logical_cartesian_size(&self) -> [usize; 3];

    /// Every pair of cells sharing a face, each face reported once.
    fn face_neighbors(&self) -> impl Iterator<Item = (CellId, CellId)> + '_;

    /// Lookup table from cartesian index to compressed cell id.
    fn cartesian_to_compressed(&self) -> Vec<Option<CellId>> {
        let [nx, ny, nz] = self.logical_cartesian_size();
        let mut lookup = vec![None; nx * ny * nz];
        for cell in 0..self.num_cells() {
            if let Some(slot) = lookup.get_mut(self.global_cell(cell)) {
                *slot = Some(cell);
            }
        }
        lookup
    }
}

/// Cartesian index of `(i, j, k)` in a box of extent `size`, `None` outside.
pub fn cartesian_index(size: [usize; 3], [i, j, k]: [usize; 3]) -> Option<usize> {
    let [nx, ny, nz] = size;
    (i < nx && j < ny && k < nz).then(|| i + nx * (j + ny * k))
}

/// Translate a cartesian index through a table from
/// [`CellGrid::cartesian_to_compressed`].
///
/// Referencing an inactive cell is a caller error.
pub fn compressed_cell(
    lookup: &[Option<CellId>],
    cartesian: usize,
    size: [usize; 3],
) -> Result<CellId, MeshGraphError> {
    match lookup.get(cartesian) {
        Some(Some(cell)) => Ok(*cell),
        Some(None) => Err(MeshGraphError::InactiveCell { cartesian }),
        None => Err(MeshGraphError::CartesianOutOfRange { cartesian, size }),
    }
}
