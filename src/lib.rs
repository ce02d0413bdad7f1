//! # set-core
//!
//! The combinatorial core of the card game Set.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation works on an in-memory pool passed
//!    by the caller. Only dealing mutates its input, by removing the cards
//!    it returns.
//!
//! 2. **Deterministic**: Decks are generated in a fixed order and deals are
//!    keyed solely by a seed, so test runs reproduce exactly.
//!
//! 3. **No Set Is Not an Error**: Searches report `None` / `false`; errors
//!    are reserved for constructing cards from out-of-domain values.
//!
//! ## Modules
//!
//! - `cards`: Attribute domains, the `Card` value type, deck generation
//! - `core`: Deterministic RNG and configuration
//! - `deal`: Seeded dealing without replacement
//! - `rules`: Set predicate and set completion
//! - `search`: Backtracking set search
//!
//! ## Example
//!
//! ```
//! use set_core::{deal, find_set, generate_deck, is_valid_set};
//!
//! let mut deck = generate_deck();
//! let table = deal(&mut deck, 12, 42);
//! if let Some(set) = find_set(&table) {
//!     assert!(is_valid_set(&set));
//! }
//! ```

pub mod cards;
pub mod core;
pub mod deal;
pub mod error;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::cards::{
    describe_cards, generate_deck, Attribute, Card, Color, Pattern, Shape, DECK_SIZE, DOMAIN_SIZE,
};

pub use crate::core::{DealConfig, DealRng, Mulberry32, RngKind, SearchConfig};

pub use crate::deal::{deal, deal_with, Dealer};

pub use crate::error::CardError;

pub use crate::rules::{complete_set, is_valid_set, SET_SIZE};

pub use crate::search::{find_set, has_set, SearchStats, SetSearch};
