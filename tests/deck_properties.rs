use card_deck::cards::{Card, Rank, Suit};
use card_deck::deck::{standard_cards, Deck, DECK_SIZE};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

fn full_set() -> BTreeSet<Card> {
    Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(s, r))).collect()
}

proptest! {
    #[test]
    fn seeded_deck_is_exact_cross_product(seed in any::<u64>()) {
        let deck = Deck::seeded(seed);
        prop_assert_eq!(deck.cards_remaining(), DECK_SIZE);
        let cards: BTreeSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(cards, full_set());
    }

    #[test]
    fn draws_are_distinct_until_empty(seed in any::<u64>()) {
        let mut deck = Deck::seeded(seed);
        let mut seen = BTreeSet::new();
        while let Some(card) = deck.draw_card() {
            prop_assert!(seen.insert(card));
            prop_assert_eq!(deck.cards_remaining() + seen.len(), DECK_SIZE);
        }
        prop_assert_eq!(seen.len(), DECK_SIZE);
        prop_assert_eq!(deck.cards_remaining(), 0);
    }

    #[test]
    fn reset_always_refills(seed in any::<u64>(), draws in 0usize..=60) {
        let mut deck = Deck::seeded(seed);
        for _ in 0..draws {
            let _ = deck.draw_card();
        }
        prop_assert_eq!(deck.cards_remaining(), DECK_SIZE.saturating_sub(draws));
        deck.reset();
        prop_assert_eq!(deck.cards_remaining(), DECK_SIZE);
        let cards: BTreeSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(cards, full_set());
    }
}

#[test]
fn first_draw_is_a_valid_card() {
    let mut deck = Deck::new();
    let card = deck.draw_card().expect("fresh deck has cards");
    assert!(["♥", "♦", "♣", "♠"].contains(&card.suit().to_string().as_str()));
    let labels = ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"];
    assert!(labels.contains(&card.rank().label()));
    assert_eq!(deck.cards_remaining(), 51);
}

#[test]
fn empty_deck_stays_empty() {
    let mut deck = Deck::seeded(0);
    assert_eq!(deck.draw_n(DECK_SIZE).len(), DECK_SIZE);
    assert_eq!(deck.draw_card(), None);
    assert_eq!(deck.draw_card(), None);
    assert_eq!(deck.cards_remaining(), 0);
    assert!(deck.is_empty());
}

#[test]
fn entropy_decks_differ() {
    let a = Deck::new();
    let b = Deck::new();
    assert_ne!(a.cards(), b.cards());
}

#[test]
fn top_card_is_roughly_uniform() {
    const TRIALS: u64 = 5200;
    let mut counts: HashMap<Card, u64> = HashMap::new();
    for seed in 0..TRIALS {
        let mut deck = Deck::seeded(seed);
        *counts.entry(deck.draw_card().unwrap()).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE, "every card should reach the top at least once");

    let expected = TRIALS as f64 / DECK_SIZE as f64;
    let chi2: f64 = standard_cards()
        .iter()
        .map(|c| {
            let observed = counts.get(c).copied().unwrap_or(0) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();
    // 51 degrees of freedom; a biased shuffle lands far above this
    assert!(chi2 < 120.0, "chi-square too high: {chi2}");
}

#[test]
fn position_of_one_card_is_spread_out() {
    let target = Card::new(Suit::Spades, Rank::Ace);
    let mut positions = BTreeSet::new();
    for seed in 0..500 {
        let deck = Deck::seeded(seed);
        let pos = deck.cards().iter().position(|&c| c == target).unwrap();
        positions.insert(pos);
    }
    assert!(positions.len() > 45, "only {} distinct positions", positions.len());
}
