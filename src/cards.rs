use std::fmt;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Display label, one per rank: `2`..`10`, `J`, `Q`, `K`, `A`.
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Four suits in deck-building order: hearts, diamonds, clubs, spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card: suit + rank. Immutable once built.
///
/// ```
/// use card_deck::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Spades, Rank::Ace);
/// assert_eq!(card.to_string(), "A♠");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rank_labels_are_conventional_and_distinct() {
        assert_eq!(Rank::Four.to_string(), "4");
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::Ace.to_string(), "A");
        let labels: HashSet<&str> = Rank::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels.len(), 13);
    }

    #[test]
    fn suit_symbols_and_colours() {
        assert_eq!(Suit::Hearts.to_string(), "♥");
        assert_eq!(Suit::Spades.to_string(), "♠");
        let symbols: Vec<char> = Suit::ALL.iter().map(|s| s.symbol()).collect();
        assert_eq!(symbols, vec!['♥', '♦', '♣', '♠']);
        assert!(Suit::Hearts.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn card_display_is_rank_then_suit() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
        assert_eq!(Card::new(Suit::Clubs, Rank::Two).to_string(), "2♣");
    }

    #[test]
    fn every_card_has_a_distinct_display() {
        let shown: HashSet<String> = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(s, r).to_string()))
            .collect();
        assert_eq!(shown.len(), 52);
    }

    #[test]
    fn accessors_return_construction_values() {
        let c = Card::new(Suit::Diamonds, Rank::Queen);
        assert_eq!(c.suit(), Suit::Diamonds);
        assert_eq!(c.rank(), Rank::Queen);
    }
}
