//! Options for building a [`GridGraph`](crate::graph::GridGraph).

use serde::{Deserialize, Serialize};

/// Construction options for a graph of grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Process hint given to every vertex when the graph is built.
    pub default_owner: usize,
    /// Whether the bulk well entry points check for intersecting wells.
    ///
    /// Disabling it is faster but leaves the caller responsible for keeping
    /// wells disjoint and their cells present in the graph.
    pub check_well_intersections: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            default_owner: 0,
            check_well_intersections: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let opts: GraphOptions = serde_json::from_str(r#"{ "default_owner": 3 }"#).unwrap();
        assert_eq!(opts.default_owner, 3);
        assert!(opts.check_well_intersections);
    }

    #[test]
    fn json_round_trip() {
        let opts = GraphOptions {
            default_owner: 1,
            check_well_intersections: false,
        };
        let s = serde_json::to_string(&opts).unwrap();
        let back: GraphOptions = serde_json::from_str(&s).unwrap();
        assert_eq!(back, opts);
    }
}
