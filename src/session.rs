//! Player-side state for the interactive loop: a deck and the cards drawn from it.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::cards::Card;
use crate::deck::Deck;

/// One of the three menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Draw,
    Leave,
    Reshuffle,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [MenuChoice::Draw, MenuChoice::Leave, MenuChoice::Reshuffle];

    pub const fn key(self) -> char {
        match self {
            MenuChoice::Draw => '1',
            MenuChoice::Leave => '2',
            MenuChoice::Reshuffle => '3',
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            MenuChoice::Draw => "Draw a card",
            MenuChoice::Leave => "Leave the game",
            MenuChoice::Reshuffle => "Reshuffle deck (cards returned to deck)",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChoiceParseError {
    #[error("invalid choice: '{0}'")]
    Invalid(String),
}

impl FromStr for MenuChoice {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Draw),
            "2" => Ok(MenuChoice::Leave),
            "3" => Ok(MenuChoice::Reshuffle),
            _ => Err(ChoiceParseError::Invalid(s.to_string())),
        }
    }
}

/// Result of applying a [`MenuChoice`]. `Display` gives the player-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    Drew(Card),
    DeckEmpty,
    Left { held: usize },
    Reshuffled,
}

impl Outcome {
    pub const fn ends_session(self) -> bool {
        matches!(self, Outcome::Left { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Drew(card) => write!(f, "You drew: {card}"),
            Outcome::DeckEmpty => f.write_str("No cards left in deck!"),
            Outcome::Left { held } => {
                write!(f, "Thanks for playing! You left with {held} card(s).")
            }
            Outcome::Reshuffled => f.write_str("Deck has been reshuffled and your cards returned!"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session<R = ChaCha8Rng> {
    deck: Deck<R>,
    hand: Vec<Card>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_deck(Deck::new())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_deck(Deck::seeded(seed))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    pub fn with_deck(deck: Deck<R>) -> Self {
        Self { deck, hand: Vec::new() }
    }

    pub fn deck(&self) -> &Deck<R> {
        &self.deck
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn apply(&mut self, choice: MenuChoice) -> Outcome {
        let outcome = match choice {
            MenuChoice::Draw => match self.deck.draw_card() {
                Some(card) => {
                    self.hand.push(card);
                    Outcome::Drew(card)
                }
                None => Outcome::DeckEmpty,
            },
            MenuChoice::Leave => Outcome::Left { held: self.hand.len() },
            MenuChoice::Reshuffle => {
                self.deck.reset();
                self.hand.clear();
                Outcome::Reshuffled
            }
        };
        log::debug!("{choice:?} -> {outcome:?}");
        outcome
    }

    /// Held cards as `[A♠, 10♥]`, or `None` when the hand is empty.
    pub fn hand_display(&self) -> String {
        if self.hand.is_empty() {
            return "None".to_string();
        }
        let cards: Vec<String> = self.hand.iter().map(Card::to_string).collect();
        format!("[{}]", cards.join(", "))
    }
}
