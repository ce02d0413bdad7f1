//! The set rule.
//!
//! Three cards form a set when, for every attribute independently, their
//! values are either all equal or pairwise distinct.
//!
//! ```
//! use set_core::cards::{Card, Color, Pattern, Shape};
//! use set_core::rules::is_valid_set;
//!
//! let set = [
//!     Card::new(1, Color::Blue, Shape::Circle, Pattern::Filled).unwrap(),
//!     Card::new(2, Color::Blue, Shape::Circle, Pattern::Filled).unwrap(),
//!     Card::new(3, Color::Blue, Shape::Circle, Pattern::Filled).unwrap(),
//! ];
//! assert!(is_valid_set(&set));
//! ```

use crate::cards::{Attribute, Card, DOMAIN_SIZE};

/// Cards in a set.
pub const SET_SIZE: usize = 3;

/// Bit pattern of `1 << v` over every domain value `1..=DOMAIN_SIZE`.
const ALL_VALUES_MASK: u32 = (1 << (DOMAIN_SIZE + 1)) - 2;

/// Sum of all domain values, used to complete a distinct triple.
const DOMAIN_SUM: u8 = DOMAIN_SIZE * (DOMAIN_SIZE + 1) / 2;

/// Check whether `cards` is a set. Anything but exactly three cards is not.
#[must_use]
pub fn is_valid_set(cards: &[Card]) -> bool {
    if cards.len() != SET_SIZE {
        return false;
    }
    Attribute::ALL
        .iter()
        .all(|&attribute| attribute_matches(cards, attribute))
}

/// Check the all-same-or-all-different rule for one attribute.
fn attribute_matches(cards: &[Card], attribute: Attribute) -> bool {
    let first = attribute.of(&cards[0]);
    if first == attribute.of(&cards[1]) {
        cards.iter().all(|card| attribute.of(card) == first)
    } else {
        // A repeated value sets fewer bits than the full domain.
        let mask = cards
            .iter()
            .fold(0u32, |mask, card| mask | (1 << attribute.of(card)));
        mask == ALL_VALUES_MASK
    }
}

/// Value a third card must take given two values of the same attribute.
#[inline]
fn complete_value(a: u8, b: u8) -> u8 {
    if a == b {
        a
    } else {
        DOMAIN_SUM - a - b
    }
}

/// The unique card completing a set with `a` and `b`.
///
/// When `a` and `b` are the same card the result is that card again.
#[must_use]
pub fn complete_set(a: &Card, b: &Card) -> Card {
    let first = a.values();
    let second = b.values();
    Card::from_domain_values(std::array::from_fn(|i| complete_value(first[i], second[i])))
}
