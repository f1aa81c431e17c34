//! Connection-based well description.
//!
//! Each named well lists the `(i, j, k)` cells it perforates. Optional
//! future connections add cartesian cells a well may open later so that
//! those cells are kept on the well's process from the start.
//! [`WellConnections`] resolves everything to compressed cell ids, one set
//! per well, in input order.

use std::collections::BTreeSet;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::graph::CellId;
use crate::topology::{CellGrid, cartesian_index};

/// One well as read from a simulation deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellSpec {
    pub name: String,
    /// Perforated cells as logical `(i, j, k)`.
    pub connections: Vec<[usize; 3]>,
}

impl WellSpec {
    pub fn new(name: impl Into<String>, connections: impl IntoIterator<Item = [usize; 3]>) -> Self {
        Self {
            name: name.into(),
            connections: connections.into_iter().collect(),
        }
    }
}

/// Compressed cell ids of every well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellConnections {
    wells: Vec<BTreeSet<CellId>>,
}

impl WellConnections {
    /// Resolve the connections of `wells` on `grid`.
    pub fn new<G: CellGrid>(wells: &[WellSpec], grid: &G) -> Self {
        Self::with_future_connections(wells, std::iter::empty::<(&str, &BTreeSet<usize>)>(), grid)
    }

    /// Resolve the connections of `wells` plus possible future connections,
    /// given per well name as cartesian indices.
    ///
    /// Connections outside the grid or in inactive cells are skipped.
    pub fn with_future_connections<'a, G, K>(
        wells: &[WellSpec],
        future: impl IntoIterator<Item = (K, &'a BTreeSet<usize>)>,
        grid: &G,
    ) -> Self
    where
        G: CellGrid,
        K: AsRef<str>,
    {
        let size = grid.logical_cartesian_size();
        let lookup = grid.cartesian_to_compressed();
        let future: Vec<(K, &BTreeSet<usize>)> = future.into_iter().collect();

        let resolve = |name: &str, cartesian: usize, out: &mut BTreeSet<CellId>| {
            match lookup.get(cartesian) {
                Some(Some(cell)) => {
                    out.insert(*cell);
                }
                Some(None) => log::warn!(
                    "well {name}: connection in cartesian cell {cartesian} is not active, skipped"
                ),
                None => log::warn!(
                    "well {name}: connection in cartesian cell {cartesian} outside grid of size {size:?}, skipped"
                ),
            }
        };

        let wells = wells
            .iter()
            .map(|spec| {
                let mut cells = BTreeSet::new();
                for &ijk in &spec.connections {
                    match cartesian_index(size, ijk) {
                        Some(cartesian) => resolve(&spec.name, cartesian, &mut cells),
                        None => log::warn!(
                            "well {}: connection {ijk:?} outside grid of size {size:?}, skipped",
                            spec.name
                        ),
                    }
                }
                for (_, extra) in future.iter().filter(|(k, _)| k.as_ref() == spec.name) {
                    for &cartesian in extra.iter() {
                        resolve(&spec.name, cartesian, &mut cells);
                    }
                }
                cells
            })
            .collect();
        Self { wells }
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BTreeSet<CellId>> {
        self.wells.iter()
    }
}

impl Index<usize> for WellConnections {
    type Output = BTreeSet<CellId>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.wells[i]
    }
}

impl<'a> IntoIterator for &'a WellConnections {
    type Item = &'a BTreeSet<CellId>;
    type IntoIter = std::slice::Iter<'a, BTreeSet<CellId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.wells.iter()
    }
}
