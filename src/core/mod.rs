//! Core support types: deterministic RNG and configuration.

pub mod config;
pub mod rng;

pub use config::{DealConfig, SearchConfig, EXTENDED_TABLE_SIZE, TABLE_SIZE};
pub use rng::{draw_index, DealRng, Mulberry32, RngKind};
