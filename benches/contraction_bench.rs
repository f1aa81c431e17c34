use std::collections::BTreeSet;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use mesh_wellgraph::partitioning::{CsrGraph, ExportEntry, extend_import_export_list};
use mesh_wellgraph::prelude::*;

/// Vertical wells through every `stride`-th column of the grid.
fn vertical_wells(dims: [usize; 3], stride: usize) -> Vec<BTreeSet<CellId>> {
    let [nx, ny, nz] = dims;
    (0..nx * ny)
        .step_by(stride)
        .map(|col| (0..nz).map(|k| col + nx * ny * k).collect())
        .collect()
}

fn bench_contraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("well-contraction");

    for &(n, stride) in &[(20, 7), (40, 11), (60, 13)] {
        let dims = [n, n, 10];
        let grid = CartesianGrid::new(dims);
        let wells = vertical_wells(dims, stride);

        group.bench_with_input(
            BenchmarkId::new(format!("n{}_s{}", n, stride), "add_wells"),
            &(&grid, &wells),
            |b, (grid, wells)| {
                b.iter(|| {
                    let mut g = GridGraph::new(*grid);
                    g.add_wells(wells.iter().map(|w| w.iter().copied())).unwrap();
                    g.size()
                });
            },
        );

        let mut g = GridGraph::new(&grid);
        g.add_wells(wells.iter().map(|w| w.iter().copied())).unwrap();
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_s{}", n, stride), "csr"),
            &g,
            |b, g| b.iter(|| CsrGraph::from_graph(g).unwrap()),
        );

        let exports: Vec<ExportEntry> = g
            .wells()
            .representatives()
            .map(|r| (r, 0, AttributeSet::Owner))
            .collect();
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_s{}", n, stride), "expand"),
            &exports,
            |b, exports| {
                b.iter(|| {
                    let mut list = exports.clone();
                    extend_import_export_list(g.wells(), &mut list);
                    list.len()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_contraction);
criterion_main!(benches);
