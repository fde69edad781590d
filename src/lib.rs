//! card-deck: a shuffled 52-card deck and a small menu loop around it
//!
//! Goals:
//! - Closed `Suit`/`Rank` enums; `Card` is an immutable `Copy` value
//! - The deck owns an injected RNG so shuffles are reproducible when seeded
//! - Drawing from an empty deck is `None`, never an error
//!
//! ## Quick start
//! ```
//! use card_deck::deck::Deck;
//!
//! let mut deck = Deck::seeded(42);
//! let card = deck.draw_card().unwrap();
//! assert_eq!(deck.cards_remaining(), 51);
//! println!("drew {card}");
//!
//! deck.reset();
//! assert_eq!(deck.cards_remaining(), 52);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin card-deck            # line menu
//! cargo run --bin card-deck -- --tui   # terminal UI
//! ```

pub mod cards;
pub mod deck;
pub mod options;
pub mod repl;
pub mod session;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
