/// Default number of node records reserved up front.
pub const DEFAULT_RECORD_CAPACITY: usize = 4096;

/// Default number of open-set slots reserved up front.
pub const DEFAULT_OPEN_CAPACITY: usize = 4096;

/// Tuning knobs for a single search.
///
/// Capacities are hints only: both tables grow on demand, so an undersized
/// value costs reallocations, never correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Initial capacity of the node record table.
    pub record_capacity: usize,
    /// Initial capacity of the open-set heap.
    pub open_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            record_capacity: DEFAULT_RECORD_CAPACITY,
            open_capacity: DEFAULT_OPEN_CAPACITY,
        }
    }
}

impl SearchConfig {
    /// Size both tables for roughly `nodes` discovered nodes.
    pub fn with_expected_nodes(nodes: usize) -> Self {
        Self {
            record_capacity: nodes,
            open_capacity: nodes.min(DEFAULT_OPEN_CAPACITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_nodes_caps_open_capacity() {
        let cfg = SearchConfig::with_expected_nodes(100_000);
        assert_eq!(cfg.record_capacity, 100_000);
        assert_eq!(cfg.open_capacity, DEFAULT_OPEN_CAPACITY);

        let small = SearchConfig::with_expected_nodes(16);
        assert_eq!(small.open_capacity, 16);
    }
}
