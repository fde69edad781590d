use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// All 52 cards, suit-major and rank-minor, unshuffled.
pub fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for s in Suit::ALL {
        for r in Rank::ALL {
            cards.push(Card::new(s, r));
        }
    }
    cards
}

/// A shuffled 52-card deck that owns its random source.
///
/// Cards are drawn from the end of the internal sequence. Reset builds a fresh
/// set of 52 and shuffles it again with the same RNG stream.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    cards: Vec<Card>,
    rng: R,
}

impl Deck {
    /// Deck shuffled from OS entropy.
    ///
    /// ```
    /// use card_deck::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.cards_remaining(), 52);
    /// ```
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Deck whose shuffles are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Deck<R> {
    /// Build and shuffle a full deck using the provided RNG.
    pub fn with_rng(rng: R) -> Self {
        let mut deck = Self { cards: Vec::with_capacity(DECK_SIZE), rng };
        deck.initialize();
        deck
    }

    fn initialize(&mut self) {
        self.cards = standard_cards();
        self.cards.shuffle(&mut self.rng);
        log::debug!("deck initialized with {} cards", self.cards.len());
    }

    /// Remove the top card, or `None` once the deck is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        match card {
            Some(c) => log::trace!("drew {c}, {} left", self.cards.len()),
            None => log::debug!("draw from empty deck"),
        }
        card
    }

    /// Draw up to `n` cards; fewer are returned if the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw_card()).collect()
    }

    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards; the last element is the next one drawn.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Discard whatever is left and replace it with a freshly shuffled 52.
    pub fn reset(&mut self) {
        log::debug!("resetting deck with {} cards remaining", self.cards.len());
        self.initialize();
    }
}
