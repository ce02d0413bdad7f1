//! Property tests for the card model, dealing, and set search.

use proptest::prelude::*;
use proptest::sample::subsequence;

use set_core::{
    complete_set, deal, find_set, generate_deck, has_set, is_valid_set, Card, CardError, DECK_SIZE,
};

fn any_card() -> impl Strategy<Value = Card> {
    (1u8..=3, 1u8..=3, 1u8..=3, 1u8..=3)
        .prop_map(|(n, c, s, p)| Card::from_values(n, c, s, p).unwrap())
}

/// A pool of distinct cards drawn from the deck, in deck order.
fn any_pool(max: usize) -> impl Strategy<Value = Vec<Card>> {
    subsequence(generate_deck(), 0..=max)
}

proptest! {
    #[test]
    fn prop_hash_agrees_with_is_same(a in any_card(), b in any_card()) {
        prop_assert_eq!(a.is_same(&b), a.canonical_hash() == b.canonical_hash());
        prop_assert_eq!(a.is_same(&b), a == b);
    }

    #[test]
    fn prop_hash_roundtrip(card in any_card()) {
        prop_assert_eq!(Card::from_hash(card.canonical_hash()), Ok(card));
    }

    #[test]
    fn prop_out_of_domain_rejected(value in 4u8..=255) {
        let rejected = matches!(
            Card::from_values(1, value, 1, 1),
            Err(CardError::OutOfDomain { .. })
        );
        prop_assert!(rejected);
        prop_assert!(Card::from_values(0, 1, 1, value).is_err());
    }

    #[test]
    fn prop_valid_set_permutation_invariant(a in any_card(), b in any_card(), c in any_card()) {
        let expected = is_valid_set(&[a, b, c]);
        for triple in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            prop_assert_eq!(is_valid_set(&triple), expected);
        }
    }

    #[test]
    fn prop_completion_is_unique(a in any_card(), b in any_card(), c in any_card()) {
        prop_assume!(a != b);
        prop_assert!(is_valid_set(&[a, b, complete_set(&a, &b)]));
        prop_assert_eq!(is_valid_set(&[a, b, c]), c == complete_set(&a, &b));
    }

    #[test]
    fn prop_deal_conserves_cards(
        counts in prop::collection::vec(-5i64..30, 1..8),
        seed in any::<u32>(),
    ) {
        let mut deck = generate_deck();
        let mut dealt = Vec::new();
        for count in counts {
            let before = deck.len();
            let hand = deal(&mut deck, count, seed);
            prop_assert_eq!(hand.len(), (count.max(0) as usize).min(before));
            dealt.extend(hand);
            prop_assert_eq!(dealt.len() + deck.len(), DECK_SIZE);
        }

        dealt.extend(deck);
        dealt.sort();
        let mut expected = generate_deck();
        expected.sort();
        prop_assert_eq!(dealt, expected);
    }

    #[test]
    fn prop_deal_is_deterministic(pool in any_pool(30), count in 0i64..40, seed in any::<u32>()) {
        let mut pool1 = pool.clone();
        let mut pool2 = pool;
        prop_assert_eq!(deal(&mut pool1, count, seed), deal(&mut pool2, count, seed));
        prop_assert_eq!(pool1, pool2);
    }

    #[test]
    fn prop_found_set_is_valid_and_from_pool(pool in any_pool(21)) {
        if let Some(set) = find_set(&pool) {
            prop_assert!(is_valid_set(&set));
            for card in &set {
                prop_assert!(pool.contains(card));
            }
        }
    }

    #[test]
    fn prop_search_matches_brute_force(pool in any_pool(12)) {
        let mut brute = false;
        for i in 0..pool.len() {
            for j in i + 1..pool.len() {
                for k in j + 1..pool.len() {
                    brute |= is_valid_set(&[pool[i], pool[j], pool[k]]);
                }
            }
        }
        prop_assert_eq!(has_set(&pool), brute);
    }
}
