use super::*;
use crate::graph::{CellId, ContractableGraph};
use crate::topology::AttributeSet;
use crate::wells::WellRegistry;


fn ring(n: usize) -> ContractableGraph {
    let mut g = ContractableGraph::new();
    for i in 0..n {
        g.add_vertex(i, 1.0, i % 2);
    }
    for i in 0..n {
        g.add_edge(i, (i + 1) % n, 1.0).unwrap();
    }
    g
}

#[test]
fn callbacks_and_csr_agree() {
    let mut g = ring(6);
    let mut wells = WellRegistry::new();
    wells.add_well(&mut g, [1, 4], true).unwrap();

    let csr = CsrGraph::from_graph(&g).unwrap();
    let (n, st) = callbacks::num_vertices(&g);
    assert!(st.is_ok());
    assert_eq!(n as usize, csr.num_vertices());

    let gids: Vec<ZoltanId> = csr.order.iter().map(|&c| c as ZoltanId).collect();
    let mut degrees = vec![0; gids.len()];
    assert!(callbacks::num_edges_multi(&g, &gids, &mut degrees).is_ok());
    for (i, &d) in degrees.iter().enumerate() {
        assert_eq!(d as usize, csr.neighbors(i).len());
    }
}

#[test]
fn part_expansion_matches_list_expansion() {
    let mut g = ring(8);
    let mut wells = WellRegistry::new();
    wells.add_well(&mut g, [2, 6], true).unwrap();
    let csr = CsrGraph::from_graph(&g).unwrap();

    // every vertex goes to part 1
    let parts = vec![1; csr.num_vertices()];
    let per_cell = csr.expand_parts(&parts, &wells).unwrap();
    assert_eq!(per_cell.len(), 8);

    let mut exports: Vec<ExportEntry> = csr
        .order
        .iter()
        .map(|&c| (c, 0, AttributeSet::Owner))
        .collect();
    extend_import_export_list(&wells, &mut exports);
    let ids: Vec<CellId> = exports.iter().map(|e| e.global_id()).collect();
    let cells: Vec<CellId> = per_cell.iter().map(|&(c, _)| c).collect();
    assert_eq!(ids, cells);
}
