//! Set search: find a set within an arbitrary pool of cards.
//!
//! ## Key Types
//!
//! - `SetSearch`: configurable engine that records `SearchStats`
//! - `find_set` / `has_set`: one-shot helpers with the default configuration
//!
//! "No set" is an ordinary result (`None` / `false`), never an error.

pub mod engine;
pub mod stats;

pub use engine::{find_set, has_set, SetSearch};
pub use stats::SearchStats;
