//! Backtracking set search.
//!
//! The search grows a selection of picked cards against a list of remaining
//! candidates:
//!
//! 1. With two cards picked, the third card of a set is fully determined
//!    ([`complete_set`]), so the remaining candidates are scanned for it.
//! 2. With fewer picked, each remaining candidate is tried in turn and the
//!    first branch that finds a set wins.
//!
//! Each branch gets its own copy of the remaining candidates. Copies are
//! `im::Vector` clones, which share structure with their parent.
//!
//! First picks that lead nowhere are recorded by canonical hash and skipped
//! if they come up again as a first pick (a pool holding duplicate cards).
//!
//! Pools are expected to hold distinct cards. With duplicates the search may
//! return repeated cards, since a card completes a set with its own copy.

use im::Vector;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::SearchConfig;
use crate::rules::{complete_set, SET_SIZE};

use super::stats::SearchStats;

/// Cards picked so far in one branch.
type Selection = SmallVec<[Card; SET_SIZE]>;

/// Set search engine.
///
/// Owns the configuration and the statistics of the last search.
///
/// ```
/// use set_core::cards::generate_deck;
/// use set_core::rules::is_valid_set;
/// use set_core::search::SetSearch;
///
/// let mut search = SetSearch::default();
/// let set = search.find(&generate_deck()).unwrap();
/// assert!(is_valid_set(&set));
/// assert_eq!(search.stats().first_picks, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SetSearch {
    config: SearchConfig,
    stats: SearchStats,
}

impl SetSearch {
    /// Create a search engine with the given configuration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find one set among the cards of `pool`.
    ///
    /// Returns `None` when the pool holds no set, including every pool of
    /// fewer than three cards.
    pub fn find(&mut self, pool: &[Card]) -> Option<[Card; SET_SIZE]> {
        self.stats.reset();
        if pool.len() < SET_SIZE {
            return None;
        }

        let remaining: Vector<Card> = pool.iter().copied().collect();
        let mut dead_first_picks = FxHashSet::default();
        let found = self.extend(&Selection::new(), &remaining, &mut dead_first_picks);

        match &found {
            Some([a, b, c]) => debug!("Found set among {} cards: {a}, {b}, {c}", pool.len()),
            None => debug!("No set among {} cards", pool.len()),
        }
        found
    }

    /// Check whether `pool` holds a set.
    pub fn has(&mut self, pool: &[Card]) -> bool {
        self.find(pool).is_some()
    }

    fn extend(
        &mut self,
        selection: &Selection,
        remaining: &Vector<Card>,
        dead_first_picks: &mut FxHashSet<u32>,
    ) -> Option<[Card; SET_SIZE]> {
        if selection.len() == SET_SIZE - 1 {
            return self.complete(selection, remaining);
        }
        debug_assert!(
            selection.len() < SET_SIZE - 1,
            "recursive branch reached with {} cards picked",
            selection.len()
        );

        let first_pick = selection.is_empty();
        for (index, card) in remaining.iter().enumerate() {
            let hash = card.canonical_hash();

            // Only first picks may be skipped: a dead second pick is dead
            // only next to the current first pick.
            if first_pick && self.config.prune_first_picks && dead_first_picks.contains(&hash) {
                trace!("Skipping dead first pick {card}");
                self.stats.pruned += 1;
                continue;
            }
            if first_pick {
                self.stats.first_picks += 1;
            }

            let mut next = selection.clone();
            next.push(*card);
            let mut rest = remaining.clone();
            rest.remove(index);

            if let Some(set) = self.extend(&next, &rest, dead_first_picks) {
                return Some(set);
            }
            if first_pick {
                dead_first_picks.insert(hash);
            }
        }
        None
    }

    /// Scan `remaining` for the card completing the two picked cards.
    fn complete(
        &mut self,
        selection: &Selection,
        remaining: &Vector<Card>,
    ) -> Option<[Card; SET_SIZE]> {
        self.stats.pairs += 1;
        let (a, b) = (selection[0], selection[1]);
        let target = complete_set(&a, &b);

        for card in remaining.iter() {
            self.stats.completions += 1;
            if card.is_same(&target) {
                return Some([a, b, *card]);
            }
        }
        None
    }
}

/// Find one set in `pool` with the default configuration.
#[must_use]
pub fn find_set(pool: &[Card]) -> Option<[Card; SET_SIZE]> {
    SetSearch::default().find(pool)
}

/// Check whether `pool` holds a set.
#[must_use]
pub fn has_set(pool: &[Card]) -> bool {
    find_set(pool).is_some()
}
