//! Set search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one set search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// First picks explored.
    pub first_picks: u64,

    /// First-and-second pick pairs resolved by completion.
    pub pairs: u64,

    /// Candidates compared against a completed target card.
    pub completions: u64,

    /// First picks skipped by the visited cache.
    pub pruned: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
