use super::*;
use crate::debug_invariants::DebugInvariants;
use crate::topology::CartesianGrid;


#[test]
fn grid_graph_starts_with_unit_weights() {
    let grid = CartesianGrid::new([3, 2, 2]);
    let g = GridGraph::new(&grid);
    assert_eq!(g.size(), 12);
    assert!(g.graph().iter().all(|(_, v)| v.weight == 1.0 && v.owner == 0));
    // corner, edge-adjacent and interior counts of a 3x2x2 box
    assert_eq!(g.num_edges(0), Ok(3));
    assert_eq!(g.num_edges(1), Ok(4));
    g.validate_invariants().unwrap();
}

#[test]
fn default_owner_comes_from_options() {
    let grid = CartesianGrid::new([2, 2, 1]);
    let opts = crate::config::GraphOptions {
        default_owner: 4,
        ..Default::default()
    };
    let g = GridGraph::with_options(&grid, opts);
    assert!(g.graph().iter().all(|(_, v)| v.owner == 4));
}

#[test]
fn add_wells_uses_configured_check() {
    let grid = CartesianGrid::new([4, 1, 1]);
    let mut g = GridGraph::new(&grid);
    g.add_wells([vec![0, 1], vec![1, 2]]).unwrap();
    assert_eq!(g.wells().len(), 1);
    assert_eq!(g.size(), 2);
    assert_eq!(g.vertex(0).unwrap().weight, 3.0);
}
