//! Bridge between a contracted graph and an external graph partitioner.
//!
//! The partitioner pulls the graph through four queries ([`callbacks`]),
//! exposed with C linkage in [`ffi`]. Arrays-based partitioners get a
//! [`CsrGraph`] instead. Either way the partitioner only sees well
//! representatives; [`extend_import_export_list`] and
//! [`CsrGraph::expand_parts`] put the omitted well cells back.

pub mod callbacks;
pub mod csr;
pub mod expand;
pub mod ffi;
pub mod graph_traits;

#[cfg(test)]
mod tests;

pub use callbacks::{CallbackStatus, ZOLTAN_FATAL, ZOLTAN_OK, ZoltanId};
pub use csr::CsrGraph;
pub use expand::{CellListEntry, ExportEntry, ImportEntry, extend_import_export_list};
pub use ffi::{CallbackRegistry, register_graph_callbacks};
pub use graph_traits::{Neighbor, PartitionGraph};
