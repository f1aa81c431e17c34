mod util;
use util::*;

use mesh_wellgraph::prelude::*;

fn graph_with_wells(grid: &CartesianGrid) -> GridGraph<'_, CartesianGrid> {
    let mut g = GridGraph::new(grid);
    g.add_wells([vec![0, 1, 2], vec![5, 8, 11]]).unwrap();
    g
}

#[test]
fn import_list_on_2x3x2() {
    let grid = grid(2, 3, 2);
    let g = graph_with_wells(&grid);
    assert_eq!(g.size(), 8);

    let mut imp: Vec<ImportEntry> = vec![
        (0, 1, AttributeSet::Owner, 1),
        (3, 4, AttributeSet::Copy, 2),
        (5, 0, AttributeSet::Copy, 3),
    ];
    extend_import_export_list(g.wells(), &mut imp);
    assert_eq!(imp.len(), 7);
    assert_eq!(imp[1], (1, 1, AttributeSet::Owner, 1));
    assert_eq!(imp[5], (8, 0, AttributeSet::Copy, 3));
    let ids: Vec<_> = imp.iter().map(|e| e.0).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 5, 8, 11]);
}

#[test]
fn export_list_on_2x3x2() {
    let grid = grid(2, 3, 2);
    let g = graph_with_wells(&grid);

    let mut exp: Vec<ExportEntry> = vec![
        (0, 1, AttributeSet::Owner),
        (3, 4, AttributeSet::Copy),
        (5, 0, AttributeSet::Copy),
    ];
    extend_import_export_list(g.wells(), &mut exp);
    assert_eq!(exp.len(), 7);
    assert_eq!(exp[1], (1, 1, AttributeSet::Owner));
    assert_eq!(exp[5], (8, 0, AttributeSet::Copy));
}

#[test]
fn list_without_wells_is_unchanged() {
    let grid = grid(2, 3, 2);
    let g = GridGraph::new(&grid);
    let mut exp: Vec<ExportEntry> = vec![(4, 0, AttributeSet::Owner), (1, 1, AttributeSet::Copy)];
    extend_import_export_list(g.wells(), &mut exp);
    assert_eq!(exp, vec![(4, 0, AttributeSet::Owner), (1, 1, AttributeSet::Copy)]);
}

#[test]
fn csr_parts_cover_every_cell() {
    let grid = grid(2, 3, 2);
    let g = graph_with_wells(&grid);
    let csr = CsrGraph::from_graph(&g).unwrap();
    assert_eq!(csr.num_vertices(), 8);
    assert_eq!(csr.vwgt.iter().sum::<f64>(), 12.0);

    // representatives 0 and 5 on part 1, the rest on part 0
    let parts: Vec<i32> = csr.order.iter().map(|&c| i32::from(c == 0 || c == 5)).collect();
    let per_cell = csr.expand_parts(&parts, g.wells()).unwrap();
    let on_one: Vec<_> = per_cell.iter().filter(|&&(_, p)| p == 1).map(|&(c, _)| c).collect();
    assert_permutation(&on_one, &[0, 1, 2, 5, 8, 11]);
    assert_eq!(per_cell.len(), 12);
}

#[cfg(feature = "metis-support")]
#[test]
fn metis_keeps_wells_whole() {
    let grid = grid(4, 4, 2);
    let mut g = GridGraph::new(&grid);
    g.add_well([0, 16], true).unwrap();
    let csr = CsrGraph::from_graph(&g).unwrap();
    let parts = csr.metis_partition(2).unwrap();
    assert_eq!(parts.len(), 31);
    let per_cell = csr.expand_parts(&parts, g.wells()).unwrap();
    assert_eq!(per_cell[0].1, per_cell[16].1);
}
