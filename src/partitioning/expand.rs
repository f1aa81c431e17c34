//! Re-expanding contracted wells in partitioner output.
//!
//! The partitioner only sees a well's representative, so its import and
//! export lists name just that cell. [`extend_import_export_list`] adds an
//! entry for every other cell of the well, copying the representative's
//! destination and attributes.

use hashbrown::HashMap;
use itertools::Itertools;

use crate::graph::CellId;
use crate::topology::AttributeSet;
use crate::wells::{Well, WellRegistry};

/// `(global id, local id, attribute, source rank)`
pub type ImportEntry = (CellId, i32, AttributeSet, i32);
/// `(global id, local id, attribute)`
pub type ExportEntry = (CellId, i32, AttributeSet);

/// An entry of an import or export list, keyed by its global cell id.
pub trait CellListEntry: Clone {
    fn global_id(&self) -> CellId;

    /// Copy of `self` describing cell `id` instead.
    fn with_global_id(&self, id: CellId) -> Self;
}

impl<L: Clone, A: Clone> CellListEntry for (CellId, L, A) {
    #[inline]
    fn global_id(&self) -> CellId {
        self.0
    }

    fn with_global_id(&self, id: CellId) -> Self {
        (id, self.1.clone(), self.2.clone())
    }
}

impl<L: Clone, A: Clone, R: Clone> CellListEntry for (CellId, L, A, R) {
    #[inline]
    fn global_id(&self) -> CellId {
        self.0
    }

    fn with_global_id(&self, id: CellId) -> Self {
        (id, self.1.clone(), self.2.clone(), self.3.clone())
    }
}

/// Add the omitted cells of every well whose representative is in `cell_list`.
///
/// New entries are merged in by global id; entries already in the list keep
/// their relative order and come before new entries with the same id. A
/// list sorted by global id stays sorted.
pub fn extend_import_export_list<T: CellListEntry>(wells: &WellRegistry, cell_list: &mut Vec<T>) {
    let mut well_map: HashMap<CellId, &Well> = wells
        .iter()
        .filter_map(|w| w.first().map(|&rep| (rep, w)))
        .collect();

    let mut added: Vec<T> = Vec::new();
    for entry in cell_list.iter() {
        if well_map.is_empty() {
            break;
        }
        let id = entry.global_id();
        if let Some(well) = well_map.remove(&id) {
            added.extend(
                well.iter()
                    .filter(|&&cell| cell != id)
                    .map(|&cell| entry.with_global_id(cell)),
            );
        }
    }
    if added.is_empty() {
        return;
    }
    log::debug!(
        "extending cell list of {} entries by {} well cells",
        cell_list.len(),
        added.len()
    );

    added.sort_by_key(|e| e.global_id());
    let original = std::mem::take(cell_list);
    cell_list.reserve(original.len() + added.len());
    cell_list.extend(
        original
            .into_iter()
            .merge_by(added, |a, b| a.global_id() <= b.global_id()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ContractableGraph;

    fn registry(n: usize, wells: &[&[CellId]]) -> WellRegistry {
        let mut g = ContractableGraph::new();
        for i in 0..n {
            g.add_vertex(i, 1.0, 0);
        }
        let mut reg = WellRegistry::new();
        for w in wells {
            reg.add_well(&mut g, w.iter().copied(), true).unwrap();
        }
        reg
    }

    #[test]
    fn export_list_gets_well_members() {
        let reg = registry(12, &[&[0, 1, 2], &[5, 8, 11]]);
        let mut exp: Vec<ExportEntry> = vec![
            (0, 1, AttributeSet::Owner),
            (3, 4, AttributeSet::Copy),
            (5, 0, AttributeSet::Copy),
        ];
        extend_import_export_list(&reg, &mut exp);
        let ids: Vec<_> = exp.iter().map(|e| e.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 5, 8, 11]);
        assert_eq!(exp[2], (2, 1, AttributeSet::Owner));
        assert_eq!(exp[6], (11, 0, AttributeSet::Copy));
    }

    #[test]
    fn list_without_representatives_is_untouched() {
        let reg = registry(6, &[&[1, 4]]);
        let mut imp: Vec<ImportEntry> = vec![(0, 0, AttributeSet::Owner, 2), (5, 1, AttributeSet::Copy, 1)];
        let before = imp.clone();
        extend_import_export_list(&reg, &mut imp);
        assert_eq!(imp, before);
    }

    #[test]
    fn unsorted_input_keeps_relative_order() {
        let reg = registry(10, &[&[2, 9]]);
        let mut exp: Vec<ExportEntry> = vec![
            (7, 0, AttributeSet::Owner),
            (2, 1, AttributeSet::Owner),
            (3, 2, AttributeSet::Owner),
        ];
        extend_import_export_list(&reg, &mut exp);
        let ids: Vec<_> = exp.iter().map(|e| e.0).collect();
        // originals in input order, 9 merged after every original <= 9
        assert_eq!(ids, vec![7, 2, 3, 9]);
    }
}
