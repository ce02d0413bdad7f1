//! Card system: attribute domains, the card value type, and the deck.
//!
//! ## Key Types
//!
//! - `Color`, `Shape`, `Pattern`: attribute domains (numbers are plain `u8`)
//! - `Attribute`: static enumeration of the four attributes
//! - `Card`: immutable attribute tuple with a canonical hash
//!
//! A pool is any `[Card]` slice or `Vec<Card>`; [`generate_deck`] builds the
//! full 81-card pool.

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Color, Pattern, Shape, ATTRIBUTE_COUNT, DOMAIN_SIZE};
pub use card::{Card, HASH_BASE};
pub use deck::{describe_cards, generate_deck, DECK_SIZE};
