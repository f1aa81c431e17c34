//! Wells: sets of cells that must end up on one process.
//!
//! [`WellRegistry`] contracts wells into a graph. The two entry points below
//! translate external well descriptions into cell sets for it:
//! - [`add_future_connection_wells`] takes cartesian cell indices per well name,
//! - [`add_well_connections`] takes already resolved [`WellConnections`].

pub mod connections;
pub mod registry;

pub use connections::{WellConnections, WellSpec};
pub use registry::{Well, WellRegistry};

use std::collections::BTreeSet;

use crate::graph::{CellId, GridGraph};
use crate::mesh_error::MeshGraphError;
use crate::topology::{CellGrid, compressed_cell};

/// Add wells given as cartesian cell indices per well name.
///
/// Every cell must be active; an inactive or out-of-box cell is a caller
/// error and aborts before any well is added.
pub fn add_future_connection_wells<'a, G, K>(
    graph: &mut GridGraph<'_, G>,
    wells: impl IntoIterator<Item = (K, &'a BTreeSet<usize>)>,
    check_well_intersections: bool,
) -> Result<(), MeshGraphError>
where
    G: CellGrid,
    K: std::fmt::Display,
{
    let size = graph.grid().logical_cartesian_size();
    let lookup = graph.grid().cartesian_to_compressed();

    let mut resolved: Vec<BTreeSet<CellId>> = Vec::new();
    for (name, cells) in wells {
        let ids = cells
            .iter()
            .map(|&cartesian| compressed_cell(&lookup, cartesian, size))
            .collect::<Result<BTreeSet<_>, _>>()
            .inspect_err(|e| log::error!("well {name}: {e}"))?;
        resolved.push(ids);
    }
    for ids in resolved {
        graph.add_well(ids, check_well_intersections)?;
    }
    Ok(())
}

/// Add every well of `wells` to the graph.
pub fn add_well_connections<G: CellGrid>(
    graph: &mut GridGraph<'_, G>,
    wells: &WellConnections,
    check_well_intersections: bool,
) -> Result<(), MeshGraphError> {
    for well in wells {
        graph.add_well(well.iter().copied(), check_well_intersections)?;
    }
    Ok(())
}
