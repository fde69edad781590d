//! Runtime options for the `card-deck` binary.

use clap::Parser;

use crate::session::Session;

/// Which front end drives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontEnd {
    /// Line-oriented menu on stdin/stdout.
    #[default]
    Line,
    /// Ratatui terminal UI; needs a TTY.
    Tui,
}

/// Draw cards from a shuffled 52-card deck.
///
/// ```
/// use card_deck::options::{FrontEnd, Options};
/// use clap::Parser;
///
/// let opts = Options::try_parse_from(["card-deck", "--seed", "7", "--tui"]).unwrap();
/// assert_eq!(opts.seed, Some(7));
/// assert_eq!(opts.front_end(), FrontEnd::Tui);
/// ```
#[derive(Parser, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[command(name = "card-deck", version, about, long_about = None)]
pub struct Options {
    /// Fixed shuffle seed; OS entropy when absent
    #[arg(long)]
    pub seed: Option<u64>,
    /// Use the terminal UI instead of the line menu
    #[arg(long)]
    pub tui: bool,
}

impl Options {
    pub fn front_end(&self) -> FrontEnd {
        if self.tui {
            FrontEnd::Tui
        } else {
            FrontEnd::Line
        }
    }

    pub fn session(&self) -> Session {
        match self.seed {
            Some(seed) => Session::seeded(seed),
            None => Session::new(),
        }
    }
}
