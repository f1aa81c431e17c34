//! Graph of a grid together with the wells contracted into it.

use crate::config::GraphOptions;
use crate::debug_invariants::DebugInvariants;
use crate::graph::{CellId, ContractableGraph, EdgeList, Vertex};
use crate::mesh_error::MeshGraphError;
use crate::topology::CellGrid;
use crate::wells::WellRegistry;

/// Cells of `grid` as graph vertices, face adjacency as edges, wells as
/// contracted vertices.
#[derive(Debug, Clone)]
pub struct GridGraph<'g, G: CellGrid> {
    grid: &'g G,
    graph: ContractableGraph,
    wells: WellRegistry,
    options: GraphOptions,
}

impl<'g, G: CellGrid> GridGraph<'g, G> {
    pub fn new(grid: &'g G) -> Self {
        Self::with_options(grid, GraphOptions::default())
    }

    pub fn with_options(grid: &'g G, options: GraphOptions) -> Self {
        Self {
            grid,
            graph: ContractableGraph::from_grid(grid, options.default_owner),
            wells: WellRegistry::new(),
            options,
        }
    }

    pub fn grid(&self) -> &'g G {
        self.grid
    }

    pub fn graph(&self) -> &ContractableGraph {
        &self.graph
    }

    pub fn wells(&self) -> &WellRegistry {
        &self.wells
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.graph.size()
    }

    pub fn num_edges(&self, id: CellId) -> Result<usize, MeshGraphError> {
        self.graph.num_edges(id)
    }

    pub fn edge_list(&self, id: CellId) -> Result<&EdgeList, MeshGraphError> {
        self.graph.edge_list(id)
    }

    pub fn vertex(&self, id: CellId) -> Result<&Vertex, MeshGraphError> {
        self.graph.vertex(id)
    }

    pub fn set_owner(&mut self, id: CellId, owner: usize) -> Result<(), MeshGraphError> {
        self.graph.set_owner(id, owner)
    }

    /// Contract two vertices directly, outside any well.
    pub fn contract_vertices(&mut self, a: CellId, b: CellId) -> Result<CellId, MeshGraphError> {
        self.graph.contract_vertices(a, b)
    }

    /// Contract `cells` into one vertex and register them as a well.
    ///
    /// See [`WellRegistry::add_well`].
    pub fn add_well(
        &mut self,
        cells: impl IntoIterator<Item = CellId>,
        check_intersections: bool,
    ) -> Result<Option<CellId>, MeshGraphError> {
        let rep = self
            .wells
            .add_well(&mut self.graph, cells, check_intersections)?;
        crate::debug_invariants!(self.validate_invariants(), "GridGraph::add_well");
        Ok(rep)
    }

    /// Add several wells using the configured intersection check.
    pub fn add_wells<I, W>(&mut self, wells: I) -> Result<(), MeshGraphError>
    where
        I: IntoIterator<Item = W>,
        W: IntoIterator<Item = CellId>,
    {
        let check = self.options.check_well_intersections;
        for well in wells {
            self.add_well(well, check)?;
        }
        Ok(())
    }
}

impl<G: CellGrid> DebugInvariants for GridGraph<'_, G> {
    fn validate_invariants(&self) -> Result<(), MeshGraphError> {
        self.graph.validate_invariants()?;
        self.wells.validate_invariants()?;
        for well in &self.wells {
            let Some(&rep) = well.first() else { continue };
            let vertex = self
                .graph
                .vertex(rep)
                .map_err(|_| MeshGraphError::MissingRepresentative(rep))?;
            if vertex.weight < well.len() as f64 {
                return Err(MeshGraphError::MissingRepresentative(rep));
            }
            if let Some(&cell) = well.iter().skip(1).find(|&&c| self.graph.contains(c)) {
                return Err(MeshGraphError::UncontractedWellCell { cell });
            }
        }
        Ok(())
    }
}
