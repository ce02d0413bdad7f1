//! Dealing and search configuration.
//!
//! Both configs are plain serializable structs with defaults and `with_*`
//! builder methods:
//!
//! ```
//! use set_core::core::{DealConfig, RngKind};
//!
//! let config = DealConfig::default().with_seed(7).with_rng(RngKind::ChaCha8);
//! assert_eq!(config.table_size, 12);
//! ```

use serde::{Deserialize, Serialize};

use super::rng::RngKind;

/// Cards dealt to a fresh table.
pub const TABLE_SIZE: usize = 12;

/// Cards on a table after extending it because it held no set.
pub const EXTENDED_TABLE_SIZE: usize = 15;

/// Dealer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealConfig {
    /// Seed for every deal. Each deal restarts the generator from it.
    pub seed: u32,

    /// Generator backing the deal.
    pub rng: RngKind,

    /// Cards dealt to a fresh table.
    pub table_size: usize,

    /// Target table size when the first deal holds no set.
    pub extended_table_size: usize,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rng: RngKind::Mulberry32,
            table_size: TABLE_SIZE,
            extended_table_size: EXTENDED_TABLE_SIZE,
        }
    }
}

impl DealConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Set the generator kind.
    #[must_use]
    pub fn with_rng(mut self, rng: RngKind) -> Self {
        self.rng = rng;
        self
    }

    /// Set both table sizes.
    #[must_use]
    pub fn with_table_sizes(mut self, table_size: usize, extended_table_size: usize) -> Self {
        self.table_size = table_size;
        self.extended_table_size = extended_table_size;
        self
    }
}

/// Set search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Skip first picks already proven to belong to no set.
    pub prune_first_picks: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prune_first_picks: true,
        }
    }
}

impl SearchConfig {
    /// Enable or disable first-pick pruning.
    #[must_use]
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.prune_first_picks = enabled;
        self
    }
}
