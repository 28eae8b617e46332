//! Card representation.
//!
//! This module provides the value types every other module builds on:
//! - `Rank`: one of 13 ranks, with ace-high and ace-low numeric values
//! - `Suit`: one of 4 suits, with a fixed precedence used for ordering
//! - `Card`: an immutable (rank, suit) pair with a total order

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rank characters for display, indexed by `Rank::index`.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display, indexed by `Suit::index`.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Rank of a card, declared from lowest to highest.
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
    /// All ranks in ascending order.
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

    /// Get the rank index (0-12: 2-A).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the rank from its index (0-12).
    pub fn from_index(index: usize) -> Option<Rank> {
        Self::ALL.get(index).copied()
    }

    /// Numeric value with the ace counted high (2-14).
    #[inline]
    pub const fn ace_high_value(self) -> u8 {
        self as u8 + 2
    }

    /// Numeric value with the ace counted low.
    ///
    /// Only the ace differs from `ace_high_value`: it becomes 1, which is what
    /// lets A-2-3-4-5 form a run.
    #[inline]
    pub const fn ace_low_value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            _ => self.ace_high_value(),
        }
    }

    /// Get rank character for display.
    pub fn to_char(self) -> char {
        RANK_CHARS[self.index()]
    }

    /// Parse a rank character (`2`-`9`, `T`, `J`, `Q`, `K`, `A`).
    pub fn from_char(c: char) -> Option<Rank> {
        RANK_CHARS
            .iter()
            .position(|&r| r == c.to_ascii_uppercase())
            .and_then(Self::from_index)
    }
}

/// Suit of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, clubs first.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Get the suit index (0-3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the suit from its index (0-3).
    pub fn from_index(index: usize) -> Option<Suit> {
        Self::ALL.get(index).copied()
    }

    /// Tie-break precedence: spades 4, hearts 3, diamonds 2, clubs 1.
    ///
    /// Only used to order cards of equal rank. Hand categories never look at it.
    #[inline]
    pub const fn precedence(self) -> u8 {
        match self {
            Suit::Spades => 4,
            Suit::Hearts => 3,
            Suit::Diamonds => 2,
            Suit::Clubs => 1,
        }
    }

    /// Get suit character for display.
    pub fn to_char(self) -> char {
        SUIT_CHARS[self.index()]
    }

    /// Parse a suit character (`c`, `d`, `h`, `s`).
    pub fn from_char(c: char) -> Option<Suit> {
        SUIT_CHARS
            .iter()
            .position(|&s| s == c.to_ascii_lowercase())
            .and_then(Self::from_index)
    }
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Number of distinct cards in a deck.
    pub const COUNT: usize = 52;

    /// Create a new card.
    #[inline]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Get the card's rank.
    #[inline]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Get the card's suit.
    #[inline]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Card number 0-51: suit * 13 + rank.
    ///
    /// Clubs occupy 0-12 (2c..Ac), then diamonds, hearts and spades.
    #[inline]
    pub const fn index(&self) -> usize {
        self.suit.index() * 13 + self.rank.index()
    }

    /// Create a card from its number (0-51).
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        let rank = Rank::from_index(index % 13)?;
        let suit = Suit::from_index(index / 13)?;
        Some(Self::new(rank, suit))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .ace_high_value()
            .cmp(&other.rank.ace_high_value())
            .then_with(|| self.suit.precedence().cmp(&other.suit.precedence()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Errors from parsing a two-character card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// Token is not exactly two characters.
    #[error("card token {0:?} must be exactly two characters")]
    Length(String),
    /// First character is not a rank.
    #[error("invalid rank {rank:?} in card token {token:?}")]
    Rank { token: String, rank: char },
    /// Second character is not a suit.
    #[error("invalid suit {suit:?} in card token {token:?}")]
    Suit { token: String, suit: char },
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parse a card from a string like "As", "Kh", "2c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (r, su) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => (r, su),
            _ => return Err(CardParseError::Length(s.to_string())),
        };
        let rank = Rank::from_char(r).ok_or_else(|| CardParseError::Rank {
            token: s.to_string(),
            rank: r,
        })?;
        let suit = Suit::from_char(su).ok_or_else(|| CardParseError::Suit {
            token: s.to_string(),
            suit: su,
        })?;
        Ok(Self::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_card_creation() {
        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(ace_spades.rank(), Rank::Ace);
        assert_eq!(ace_spades.suit(), Suit::Spades);
        assert_eq!(ace_spades.to_string(), "As");

        let two_clubs = Card::new(Rank::Two, Suit::Clubs);
        assert_eq!(two_clubs.to_string(), "2c");
    }

    #[test]
    fn test_card_parsing() {
        assert_eq!(card("As").to_string(), "As");
        assert_eq!(card("Kh").to_string(), "Kh");
        assert_eq!(card("Td").to_string(), "Td");
        assert_eq!(card("tD").to_string(), "Td");
        assert!(matches!("XX".parse::<Card>(), Err(CardParseError::Rank { .. })));
        assert!(matches!("Ax".parse::<Card>(), Err(CardParseError::Suit { .. })));
        assert!(matches!("A".parse::<Card>(), Err(CardParseError::Length(_))));
        assert!(matches!("10s".parse::<Card>(), Err(CardParseError::Length(_))));
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.ace_high_value(), 2);
        assert_eq!(Rank::Ten.ace_high_value(), 10);
        assert_eq!(Rank::Ace.ace_high_value(), 14);
        assert_eq!(Rank::Ace.ace_low_value(), 1);
        assert_eq!(Rank::King.ace_low_value(), 13);
    }

    #[test]
    fn test_card_numbering() {
        for i in 0..Card::COUNT {
            let c = Card::from_index(i).unwrap();
            assert_eq!(c.index(), i);
        }
        assert!(Card::from_index(52).is_none());
        assert_eq!(Card::from_index(0).unwrap(), card("2c"));
        assert_eq!(Card::from_index(51).unwrap(), card("As"));
    }

    #[test]
    fn test_order_rank_first() {
        assert!(card("As") > card("Ks"));
        assert!(card("2s") < card("3c"));
        assert!(card("Ac") > card("Kc"));
    }

    #[test]
    fn test_order_suit_breaks_ties() {
        assert!(card("As") > card("Ah"));
        assert!(card("Ah") > card("Ad"));
        assert!(card("Ad") > card("Ac"));
        assert_eq!(card("Qd").cmp(&card("Qd")), Ordering::Equal);

        let mut cards = vec![card("Ac"), card("2s"), card("Ah"), card("Ks")];
        cards.sort();
        assert_eq!(cards, vec![card("2s"), card("Ks"), card("Ac"), card("Ah")]);
    }
}
