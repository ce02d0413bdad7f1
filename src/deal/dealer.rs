//! Seeded dealing without replacement.
//!
//! A deal removes cards from the pool one at a time: each draw picks a
//! uniform index into what is left of the pool, removes that card and
//! appends it to the result. The generator lives for a single deal, so two
//! deals with the same seed against pools of identical contents and order
//! draw identical sequences.
//!
//! ```
//! use set_core::cards::{generate_deck, DECK_SIZE};
//! use set_core::deal::deal;
//!
//! let mut deck = generate_deck();
//! let hand = deal(&mut deck, 12, 42);
//! assert_eq!(hand.len(), 12);
//! assert_eq!(deck.len(), DECK_SIZE - 12);
//! ```

use log::debug;
use rand::RngCore;

use crate::cards::Card;
use crate::core::{draw_index, DealConfig, DealRng, Mulberry32};
use crate::search::has_set;

/// Deal up to `count` cards from `pool` with the reference generator.
///
/// A `count` of zero or less deals nothing and leaves the pool untouched.
/// Asking for more cards than the pool holds drains it.
pub fn deal(pool: &mut Vec<Card>, count: i64, seed: u32) -> Vec<Card> {
    deal_with(pool, count, &mut Mulberry32::new(seed))
}

/// Deal up to `count` cards from `pool` drawing indices from `rng`.
pub fn deal_with<R: RngCore + ?Sized>(pool: &mut Vec<Card>, count: i64, rng: &mut R) -> Vec<Card> {
    if count <= 0 {
        return Vec::new();
    }
    let count = usize::try_from(count).unwrap_or(usize::MAX).min(pool.len());

    let mut dealt = Vec::with_capacity(count);
    for _ in 0..count {
        let index = draw_index(rng, pool.len());
        dealt.push(pool.remove(index));
    }

    debug!("Dealt {} cards, {} left in pool", dealt.len(), pool.len());
    dealt
}

/// Deals cards according to a [`DealConfig`].
#[derive(Clone, Debug, Default)]
pub struct Dealer {
    config: DealConfig,
}

impl Dealer {
    /// Create a dealer with the given configuration.
    #[must_use]
    pub fn new(config: DealConfig) -> Self {
        Self { config }
    }

    /// The dealer configuration.
    #[must_use]
    pub fn config(&self) -> &DealConfig {
        &self.config
    }

    /// Deal up to `count` cards with the configured seed and generator.
    pub fn deal(&self, pool: &mut Vec<Card>, count: i64) -> Vec<Card> {
        let mut rng = DealRng::new(self.config.rng, self.config.seed);
        deal_with(pool, count, &mut rng)
    }

    /// Deal a fresh table from `deck`.
    ///
    /// Deals `table_size` cards. If they hold no set, keeps dealing until
    /// the table reaches `extended_table_size` cards or the deck runs out.
    pub fn deal_table(&self, deck: &mut Vec<Card>) -> Vec<Card> {
        let mut table = self.deal(deck, clamp_count(self.config.table_size));

        if !has_set(&table) && table.len() < self.config.extended_table_size {
            let extra = self.config.extended_table_size - table.len();
            debug!("No set among {} cards, dealing {} more", table.len(), extra);
            table.extend(self.deal(deck, clamp_count(extra)));
        }

        table
    }
}

/// Convert a configured size to a deal count, saturating at `i64::MAX`.
fn clamp_count(size: usize) -> i64 {
    i64::try_from(size).unwrap_or(i64::MAX)
}
