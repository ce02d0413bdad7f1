//! Dealing: seeded removal of cards from a pool.

pub mod dealer;

pub use dealer::{deal, deal_with, Dealer};
