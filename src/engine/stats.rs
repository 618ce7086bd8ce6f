//! Counters collected during a search

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Times a node stopped early because `beta <= alpha`
    pub cutoffs: u64,
    /// Deepest ply reached below the root
    pub max_depth: usize,
}

impl SearchStats {
    pub(crate) fn record_node(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}
