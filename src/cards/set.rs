//! Bitmask set of cards.
//!
//! One bit per `Card::index`, so union/difference/membership are single
//! word operations and a suit's ranks can be read with a shift.

use std::fmt;

use super::card::{Card, Suit};

/// Bits covering the 13 ranks of one suit.
pub const SUIT_RANKS: u16 = (1 << 13) - 1;

/// An unordered set of distinct cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSet {
    bits: u64,
}

impl CardSet {
    const FULL: u64 = (1u64 << Card::COUNT) - 1;

    /// Create an empty set.
    #[inline]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// All 52 cards.
    #[inline]
    pub const fn full_deck() -> Self {
        Self { bits: Self::FULL }
    }

    /// Create a set from raw bits; bits above 51 are dropped.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits: bits & Self::FULL }
    }

    /// Raw bits.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Create a set from a slice of cards.
    pub fn from_cards(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }

    /// Add a card. Returns false if it was already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    /// Check if the set contains a card.
    #[inline]
    pub const fn contains(&self, card: Card) -> bool {
        self.bits & (1u64 << card.index()) != 0
    }

    /// Cards in either set.
    #[inline]
    pub const fn union(self, other: CardSet) -> CardSet {
        Self { bits: self.bits | other.bits }
    }

    /// Cards in `self` but not in `other`.
    #[inline]
    pub const fn difference(self, other: CardSet) -> CardSet {
        Self { bits: self.bits & !other.bits }
    }

    /// Check if the sets share a card.
    #[inline]
    pub const fn intersects(&self, other: CardSet) -> bool {
        self.bits & other.bits != 0
    }

    /// Number of cards.
    #[inline]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Check if the set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// 13-bit mask of the ranks held in one suit (bit = `Rank::index`).
    #[inline]
    pub const fn suit_ranks(&self, suit: Suit) -> u16 {
        (self.bits >> (suit.index() * 13)) as u16 & SUIT_RANKS
    }

    /// Iterate cards in ascending card number.
    pub fn iter(&self) -> impl Iterator<Item = Card> {
        let mut bits = self.bits;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Card::from_index(index)
        })
    }

    /// Collect the cards into a vector, ascending card number.
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = Self::empty();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl<'a> FromIterator<&'a Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = &'a Card>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        Self { bits: 1u64 << card.index() }
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}
