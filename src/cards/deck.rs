//! Full deck generation and pool rendering.

use super::attributes::{Color, Pattern, Shape, DOMAIN_SIZE};
use super::card::Card;

/// Number of cards in a full deck (`DOMAIN_SIZE ^ 4`).
pub const DECK_SIZE: usize = (DOMAIN_SIZE as usize).pow(4);

/// Generate every card exactly once.
///
/// Iteration order is color, shape, pattern, then number (innermost). The
/// order is stable so that seeded deals are reproducible, but carries no
/// game meaning.
#[must_use]
pub fn generate_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for shape in Shape::ALL {
            for pattern in Pattern::ALL {
                for number in 1..=DOMAIN_SIZE {
                    cards.push(Card::from_domain_values([
                        number,
                        color.value(),
                        shape.value(),
                        pattern.value(),
                    ]));
                }
            }
        }
    }
    cards
}

/// Render cards as a numbered list, one card per line.
///
/// ```
/// use set_core::cards::{describe_cards, generate_deck};
///
/// let deck = generate_deck();
/// assert_eq!(
///     describe_cards(&deck[..2]),
///     "1. Card <n=1, c=red, s=diamond, p=filled>\n2. Card <n=2, c=red, s=diamond, p=filled>"
/// );
/// ```
#[must_use]
pub fn describe_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}. {}", i + 1, card))
        .collect::<Vec<_>>()
        .join("\n")
}
