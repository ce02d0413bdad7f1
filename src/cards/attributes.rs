//! Card attribute domains.
//!
//! A card has four independent attributes, each taking one of
//! [`DOMAIN_SIZE`] values encoded as `1..=DOMAIN_SIZE`:
//!
//! - `Number`: 1, 2 or 3 (a plain integer)
//! - `Color`: red, blue, green
//! - `Shape`: diamond, squiggle, circle
//! - `Pattern`: filled, striped, outlined
//!
//! The `name` renderers give the display strings shown to players. Two differ
//! from the variant names: a squiggle is shown as "triangle" and a striped
//! fill as "dotted". `Debug` keeps the variant names.
//!
//! [`Attribute`] enumerates the four attributes so that rules can iterate
//! them with static dispatch instead of looking fields up by name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::Card;

/// Number of distinct values per attribute.
pub const DOMAIN_SIZE: u8 = 3;

/// Number of attributes on a card.
pub const ATTRIBUTE_COUNT: usize = 4;

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    /// Red
    Red = 1,
    /// Blue
    Blue = 2,
    /// Green
    Green = 3,
}

impl Color {
    /// All colors in encoding order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Blue, Color::Green];

    /// Get the encoded value (1-based).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Decode a color, `None` if the value is out of domain.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Color::Red),
            2 => Some(Color::Blue),
            3 => Some(Color::Green),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }
}

/// Card shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Shape {
    /// Diamond
    Diamond = 1,
    /// Squiggle
    Squiggle = 2,
    /// Circle
    Circle = 3,
}

impl Shape {
    /// All shapes in encoding order.
    pub const ALL: [Shape; 3] = [Shape::Diamond, Shape::Squiggle, Shape::Circle];

    /// Get the encoded value (1-based).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Decode a shape, `None` if the value is out of domain.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Shape::Diamond),
            2 => Some(Shape::Squiggle),
            3 => Some(Shape::Circle),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Diamond => "diamond",
            Shape::Squiggle => "triangle",
            Shape::Circle => "circle",
        }
    }
}

/// Card fill pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Pattern {
    /// Solid fill
    Filled = 1,
    /// Striped fill
    Striped = 2,
    /// Outline only
    Outlined = 3,
}

impl Pattern {
    /// All patterns in encoding order.
    pub const ALL: [Pattern; 3] = [Pattern::Filled, Pattern::Striped, Pattern::Outlined];

    /// Get the encoded value (1-based).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Decode a pattern, `None` if the value is out of domain.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Pattern::Filled),
            2 => Some(Pattern::Striped),
            3 => Some(Pattern::Outlined),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::Filled => "filled",
            Pattern::Striped => "dotted",
            Pattern::Outlined => "outlined",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four card attributes.
///
/// The discriminant is the attribute's position in a card's value tuple,
/// which is also its digit position in the canonical hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Number = 0,
    Color = 1,
    Shape = 2,
    Pattern = 3,
}

impl Attribute {
    /// All attributes, in hash digit order.
    pub const ALL: [Attribute; ATTRIBUTE_COUNT] = [
        Attribute::Number,
        Attribute::Color,
        Attribute::Shape,
        Attribute::Pattern,
    ];

    /// Position of this attribute in a card's value tuple.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Extract this attribute's encoded value from a card.
    #[inline]
    #[must_use]
    pub fn of(self, card: &Card) -> u8 {
        card.values()[self.index()]
    }

    /// Lowercase attribute name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Number => "number",
            Attribute::Color => "color",
            Attribute::Shape => "shape",
            Attribute::Pattern => "pattern",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check that `value` lies in `1..=DOMAIN_SIZE`.
#[inline]
#[must_use]
pub const fn in_domain(value: u8) -> bool {
    value >= 1 && value <= DOMAIN_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_values_are_one_based() {
        assert_eq!(Color::Red.value(), 1);
        assert_eq!(Shape::Circle.value(), 3);
        assert_eq!(Pattern::Striped.value(), 2);
    }

    #[test]
    fn test_from_value_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_value(color.value()), Some(color));
        }
        for shape in Shape::ALL {
            assert_eq!(Shape::from_value(shape.value()), Some(shape));
        }
        for pattern in Pattern::ALL {
            assert_eq!(Pattern::from_value(pattern.value()), Some(pattern));
        }
    }

    #[test]
    fn test_from_value_out_of_domain() {
        assert_eq!(Color::from_value(0), None);
        assert_eq!(Shape::from_value(4), None);
        assert_eq!(Pattern::from_value(255), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Color::Green.to_string(), "green");
        assert_eq!(Shape::Squiggle.to_string(), "triangle");
        assert_eq!(Pattern::Outlined.to_string(), "outlined");
        assert_eq!(Attribute::Pattern.to_string(), "pattern");
    }

    #[test]
    fn test_display_names_pinned() {
        assert_eq!(Color::ALL.map(Color::name), ["red", "blue", "green"]);
        assert_eq!(Shape::ALL.map(Shape::name), ["diamond", "triangle", "circle"]);
        assert_eq!(Pattern::ALL.map(Pattern::name), ["filled", "dotted", "outlined"]);
    }

    #[test]
    fn test_debug_keeps_variant_names() {
        assert_eq!(format!("{:?}", Shape::Squiggle), "Squiggle");
        assert_eq!(format!("{:?}", Pattern::Striped), "Striped");
    }

    #[test]
    fn test_attribute_indices() {
        for (i, attr) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn test_attribute_of() {
        let card = Card::new(2, Color::Green, Shape::Diamond, Pattern::Striped).unwrap();
        assert_eq!(Attribute::Number.of(&card), 2);
        assert_eq!(Attribute::Color.of(&card), 3);
        assert_eq!(Attribute::Shape.of(&card), 1);
        assert_eq!(Attribute::Pattern.of(&card), 2);
    }

    #[test]
    fn test_in_domain() {
        assert!(!in_domain(0));
        assert!(in_domain(1));
        assert!(in_domain(3));
        assert!(!in_domain(4));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Color::Blue).unwrap();
        let deserialized: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Color::Blue);
    }
}
