//! Registry of wells contracted into a [`ContractableGraph`].
//!
//! A well is the ordered set of cells folded into one vertex; its first
//! (smallest) cell is the representative that stays in the graph. Wells in
//! the registry are pairwise disjoint: a new well that shares a cell with
//! registered wells absorbs them.

use std::collections::BTreeSet;

use crate::debug_invariants::DebugInvariants;
use crate::graph::{CellId, ContractableGraph};
use crate::mesh_error::MeshGraphError;

/// Cells of one contracted well, ordered by id.
pub type Well = BTreeSet<CellId>;

/// Ordered collection of disjoint wells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellRegistry {
    wells: Vec<Well>,
}

impl WellRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered wells.
    #[inline]
    pub fn len(&self) -> usize {
        self.wells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Well> {
        self.wells.iter()
    }

    /// Representative (smallest cell) of every well.
    pub fn representatives(&self) -> impl Iterator<Item = CellId> + '_ {
        self.wells.iter().filter_map(|w| w.first().copied())
    }

    /// The well containing `cell`, if any.
    pub fn well_of(&self, cell: CellId) -> Option<&Well> {
        self.wells.iter().find(|w| w.contains(&cell))
    }

    /// Contract `cells` into a single vertex of `graph` and record them as a well.
    ///
    /// With `check_intersections`, every registered well sharing a cell with
    /// `cells` is merged into the new well and dropped from the registry, and
    /// each new cell must either be live in the graph or belong to such a
    /// well; nothing is modified when that check fails. Without it the caller
    /// guarantees that the cells are live and disjoint from existing wells.
    ///
    /// Sets with fewer than two cells are ignored. Returns the representative
    /// of the recorded well.
    pub fn add_well(
        &mut self,
        graph: &mut ContractableGraph,
        cells: impl IntoIterator<Item = CellId>,
        check_intersections: bool,
    ) -> Result<Option<CellId>, MeshGraphError> {
        let mut well: Well = cells.into_iter().collect();

        let absorbed: Vec<usize> = if check_intersections {
            self.wells
                .iter()
                .enumerate()
                .filter(|(_, w)| !w.is_disjoint(&well))
                .map(|(i, _)| i)
                .collect()
        } else {
            Vec::new()
        };
        if check_intersections {
            for &i in &absorbed {
                well.extend(self.wells[i].iter().copied());
            }
            for &cell in &well {
                let in_absorbed = absorbed.iter().any(|&i| self.wells[i].contains(&cell));
                if !in_absorbed && !graph.contains(cell) {
                    return Err(MeshGraphError::VertexNotFound(cell));
                }
            }
        }

        if well.len() < 2 {
            log::warn!("well of {} cell(s) has nothing to contract, ignored", well.len());
            return Ok(None);
        }

        let Some(&representative) = well.first() else {
            return Ok(None);
        };
        for &cell in well.iter().skip(1) {
            // cells of absorbed wells are already folded into their representative
            if check_intersections && !graph.contains(cell) {
                continue;
            }
            graph.contract_vertices(representative, cell)?;
        }

        if !absorbed.is_empty() {
            log::debug!(
                "well {representative} absorbed {} registered well(s)",
                absorbed.len()
            );
            let mut index = 0;
            self.wells.retain(|_| {
                let keep = !absorbed.contains(&index);
                index += 1;
                keep
            });
        }
        self.wells.push(well);
        Ok(Some(representative))
    }
}

impl<'a> IntoIterator for &'a WellRegistry {
    type Item = &'a Well;
    type IntoIter = std::slice::Iter<'a, Well>;

    fn into_iter(self) -> Self::IntoIter {
        self.wells.iter()
    }
}

impl DebugInvariants for WellRegistry {
    fn validate_invariants(&self) -> Result<(), MeshGraphError> {
        let mut seen = BTreeSet::new();
        for well in &self.wells {
            if well.len() < 2 {
                let rep = well.first().copied().unwrap_or_default();
                return Err(MeshGraphError::MissingRepresentative(rep));
            }
            for &cell in well {
                if !seen.insert(cell) {
                    return Err(MeshGraphError::WellOverlap { cell });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> ContractableGraph {
        let mut g = ContractableGraph::new();
        for i in 0..n {
            g.add_vertex(i, 1.0, 0);
        }
        for i in 1..n {
            g.add_edge(i - 1, i, 1.0).unwrap();
        }
        g
    }

    #[test]
    fn singleton_is_not_recorded() {
        let mut g = line(4);
        let mut reg = WellRegistry::new();
        assert_eq!(reg.add_well(&mut g, [2], true).unwrap(), None);
        assert!(reg.is_empty());
        assert_eq!(g.size(), 4);
    }

    #[test]
    fn overlapping_wells_merge() {
        let mut g = line(8);
        let mut reg = WellRegistry::new();
        reg.add_well(&mut g, [1, 2], true).unwrap();
        reg.add_well(&mut g, [5, 6], true).unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.add_well(&mut g, [2, 3, 5], true).unwrap(), Some(1));
        assert_eq!(reg.len(), 1);
        assert_eq!(
            reg.iter().next().unwrap(),
            &BTreeSet::from([1, 2, 3, 5, 6])
        );
        assert_eq!(g.size(), 4);
        assert_eq!(g.vertex(1).unwrap().weight, 5.0);
        reg.validate_invariants().unwrap();
        g.validate_invariants().unwrap();
    }

    #[test]
    fn repeated_well_is_idempotent() {
        let mut g = line(5);
        let mut reg = WellRegistry::new();
        reg.add_well(&mut g, [0, 4], true).unwrap();
        let before = g.clone();
        reg.add_well(&mut g, [0, 4], true).unwrap();
        assert_eq!(reg.len(), 1);
        assert_eq!(g.size(), before.size());
        assert_eq!(g.edge_list(0).unwrap(), before.edge_list(0).unwrap());
    }

    #[test]
    fn missing_cell_leaves_state_untouched() {
        let mut g = line(3);
        let mut reg = WellRegistry::new();
        let err = reg.add_well(&mut g, [0, 1, 7], true).unwrap_err();
        assert_eq!(err, MeshGraphError::VertexNotFound(7));
        assert_eq!(g.size(), 3);
        assert!(reg.is_empty());
    }

    #[test]
    fn well_of_finds_members() {
        let mut g = line(6);
        let mut reg = WellRegistry::new();
        reg.add_well(&mut g, [3, 5], false).unwrap();
        assert_eq!(reg.well_of(5).and_then(|w| w.first()), Some(&3));
        assert!(reg.well_of(4).is_none());
        assert_eq!(reg.representatives().collect::<Vec<_>>(), vec![3]);
    }
}
