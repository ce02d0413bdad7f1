//! The card value type.
//!
//! A [`Card`] is an immutable 4-tuple `(number, color, shape, pattern)`.
//!
//! ## Canonical Hash
//!
//! The tuple is read as a base-`B` number, `B = DOMAIN_SIZE + 1`, with the
//! number in the units place:
//!
//! ```text
//! hash = number + color * B + shape * B^2 + pattern * B^3
//! ```
//!
//! Every value is at least 1 and below `B`, so the encoding is injective over
//! valid cards and [`Card::from_hash`] inverts it.
//!
//! ```
//! use set_core::cards::{Card, Color, Pattern, Shape};
//!
//! let card = Card::new(1, Color::Blue, Shape::Circle, Pattern::Filled).unwrap();
//! assert_eq!(card.canonical_hash(), 1 + 2 * 4 + 3 * 16 + 64);
//! assert_eq!(Card::from_hash(card.canonical_hash()), Ok(card));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::attributes::{in_domain, Attribute, Color, Pattern, Shape, ATTRIBUTE_COUNT, DOMAIN_SIZE};
use crate::error::CardError;

/// Radix of the canonical hash.
pub const HASH_BASE: u32 = DOMAIN_SIZE as u32 + 1;

/// A Set card.
///
/// Values are stored in attribute order and always lie in `1..=DOMAIN_SIZE`;
/// every constructor enforces this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 4]", into = "[u8; 4]")]
pub struct Card {
    values: [u8; ATTRIBUTE_COUNT],
}

impl Card {
    /// Create a card. Fails if `number` is not in `1..=3`.
    pub fn new(
        number: u8,
        color: Color,
        shape: Shape,
        pattern: Pattern,
    ) -> Result<Self, CardError> {
        if !in_domain(number) {
            return Err(CardError::OutOfDomain {
                attribute: Attribute::Number,
                value: number,
            });
        }
        Ok(Self {
            values: [number, color.value(), shape.value(), pattern.value()],
        })
    }

    /// Create a card from raw encoded values.
    pub fn from_values(number: u8, color: u8, shape: u8, pattern: u8) -> Result<Self, CardError> {
        let values = [number, color, shape, pattern];
        for attribute in Attribute::ALL {
            let value = values[attribute.index()];
            if !in_domain(value) {
                return Err(CardError::OutOfDomain { attribute, value });
            }
        }
        Ok(Self { values })
    }

    /// Create a card from values already known to be in domain.
    pub(crate) fn from_domain_values(values: [u8; ATTRIBUTE_COUNT]) -> Self {
        debug_assert!(values.iter().all(|&v| in_domain(v)), "values {values:?} out of domain");
        Self { values }
    }

    /// Decode a canonical hash back into a card.
    pub fn from_hash(hash: u32) -> Result<Self, CardError> {
        let mut rest = hash;
        let mut values = [0u8; ATTRIBUTE_COUNT];
        for value in values.iter_mut() {
            let digit = rest % HASH_BASE;
            if !in_domain(digit as u8) {
                return Err(CardError::InvalidHash(hash));
            }
            *value = digit as u8;
            rest /= HASH_BASE;
        }
        if rest != 0 {
            return Err(CardError::InvalidHash(hash));
        }
        Ok(Self { values })
    }

    /// The card's number (1-3).
    #[must_use]
    pub fn number(&self) -> u8 {
        self.values[Attribute::Number.index()]
    }

    /// The card's color.
    #[must_use]
    pub fn color(&self) -> Color {
        match Color::from_value(self.values[Attribute::Color.index()]) {
            Some(color) => color,
            None => panic!("Invalid color value in {:?}", self.values),
        }
    }

    /// The card's shape.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match Shape::from_value(self.values[Attribute::Shape.index()]) {
            Some(shape) => shape,
            None => panic!("Invalid shape value in {:?}", self.values),
        }
    }

    /// The card's pattern.
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        match Pattern::from_value(self.values[Attribute::Pattern.index()]) {
            Some(pattern) => pattern,
            None => panic!("Invalid pattern value in {:?}", self.values),
        }
    }

    /// Encoded values in attribute order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> [u8; ATTRIBUTE_COUNT] {
        self.values
    }

    /// Attribute-wise equality.
    ///
    /// Agrees with comparing canonical hashes, but does not compute them.
    #[must_use]
    pub fn is_same(&self, other: &Card) -> bool {
        Attribute::ALL
            .iter()
            .all(|attr| attr.of(self) == attr.of(other))
    }

    /// Bijective integer encoding of this card.
    #[must_use]
    pub fn canonical_hash(&self) -> u32 {
        self.values
            .iter()
            .rev()
            .fold(0, |acc, &value| acc * HASH_BASE + u32::from(value))
    }
}

impl TryFrom<[u8; ATTRIBUTE_COUNT]> for Card {
    type Error = CardError;

    fn try_from(values: [u8; ATTRIBUTE_COUNT]) -> Result<Self, Self::Error> {
        let [number, color, shape, pattern] = values;
        Self::from_values(number, color, shape, pattern)
    }
}

impl From<Card> for [u8; ATTRIBUTE_COUNT] {
    fn from(card: Card) -> Self {
        card.values
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Card <n={}, c={}, s={}, p={}>",
            self.number(),
            self.color(),
            self.shape(),
            self.pattern()
        )
    }
}
