//! Hand-category classification.
//!
//! `HandClassifier` answers, for an arbitrary set of cards, which of the nine
//! categories the set *contains*. The set may be larger than a final hand
//! (board plus pocket is 5-7 cards); nothing here picks a best five.
//!
//! Everything is computed from bit masks: four 13-bit rank masks (one per
//! suit) give rank multiplicities through pairwise/triple intersections, and
//! runs are detected by and-ing shifted copies of a value mask.

use crate::cards::{Card, CardSet, Rank, Suit};

use super::category::Category;

/// Fewest cards that can hold a five-card category.
const FIVE: usize = 5;

/// Rank mask of T-J-Q-K-A.
const ROYAL_RANKS: u16 = (1 << Rank::Ten.index())
    | (1 << Rank::Jack.index())
    | (1 << Rank::Queen.index())
    | (1 << Rank::King.index())
    | (1 << Rank::Ace.index());

/// Map a rank mask to a mask over numeric values.
///
/// Each rank sets the bit of its ace-high value (2-14); the ace additionally
/// sets its ace-low value (1) so the wheel is found by the same scan.
#[inline]
fn value_mask(ranks: u16) -> u32 {
    let mut values = (ranks as u32) << Rank::Two.ace_high_value();
    if ranks & (1 << Rank::Ace.index()) != 0 {
        values |= 1 << Rank::Ace.ace_low_value();
    }
    values
}

/// Check whether five consecutive values are present.
#[inline]
fn has_run(ranks: u16) -> bool {
    let v = value_mask(ranks);
    v & (v >> 1) & (v >> 2) & (v >> 3) & (v >> 4) != 0
}

/// Snapshot of a card set with the rank and suit statistics precomputed.
///
/// Construction copies the input, so later changes to the caller's
/// collection do not affect any answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandClassifier {
    cards: CardSet,
    /// Rank mask per suit, indexed by `Suit::index`.
    suits: [u16; 4],
    /// Ranks held at least twice.
    pairs: u16,
    /// Ranks held at least three times.
    trips: u16,
    /// Ranks held four times.
    quads: u16,
}

impl HandClassifier {
    /// Classify a collection of cards. Duplicates are counted once.
    pub fn new(cards: &[Card]) -> Self {
        Self::from_set(CardSet::from_cards(cards))
    }

    /// Classify a card set.
    #[inline]
    pub fn from_set(cards: CardSet) -> Self {
        let [c, d, h, s] = Suit::ALL.map(|suit| cards.suit_ranks(suit));

        let pairs = (c & d) | (c & h) | (c & s) | (d & h) | (d & s) | (h & s);
        let trips = (c & d & h) | (c & d & s) | (c & h & s) | (d & h & s);
        let quads = c & d & h & s;

        Self {
            cards,
            suits: [c, d, h, s],
            pairs,
            trips,
            quads,
        }
    }

    /// The snapshotted cards.
    pub fn cards(&self) -> CardSet {
        self.cards
    }

    /// Number of cards in the snapshot.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Some rank appears at least twice.
    pub fn has_two_of_a_kind(&self) -> bool {
        self.pairs != 0
    }

    /// Some rank appears at least three times.
    pub fn has_three_of_a_kind(&self) -> bool {
        self.trips != 0
    }

    /// Some rank appears four times.
    pub fn has_four_of_a_kind(&self) -> bool {
        self.quads != 0
    }

    /// Two distinct ranks each appear at least twice.
    pub fn has_two_pair(&self) -> bool {
        self.len() >= 4 && self.pairs.count_ones() >= 2
    }

    /// Some suit appears at least five times.
    pub fn has_flush(&self) -> bool {
        self.suits.iter().any(|m| m.count_ones() as usize >= FIVE)
    }

    /// A rank appears three times and a different rank at least twice.
    pub fn has_full_house(&self) -> bool {
        // trips is a subset of pairs, so a second pair bit is always a different rank.
        self.len() >= FIVE && self.trips != 0 && self.pairs.count_ones() >= 2
    }

    /// Five consecutive ranks in any suits, ace high or low.
    pub fn has_straight(&self) -> bool {
        self.len() >= FIVE && has_run(self.rank_mask())
    }

    /// Five consecutive ranks within one suit, ace high or low.
    pub fn has_straight_flush(&self) -> bool {
        self.len() >= FIVE
            && self
                .suits
                .iter()
                .any(|&m| m.count_ones() as usize >= FIVE && has_run(m))
    }

    /// T-J-Q-K-A within one suit.
    pub fn has_royal_flush(&self) -> bool {
        self.suits.iter().any(|&m| m & ROYAL_RANKS == ROYAL_RANKS)
    }

    /// Evaluate one category.
    pub fn satisfies(&self, category: Category) -> bool {
        match category {
            Category::TwoOfAKind => self.has_two_of_a_kind(),
            Category::ThreeOfAKind => self.has_three_of_a_kind(),
            Category::FourOfAKind => self.has_four_of_a_kind(),
            Category::TwoPair => self.has_two_pair(),
            Category::Flush => self.has_flush(),
            Category::FullHouse => self.has_full_house(),
            Category::Straight => self.has_straight(),
            Category::StraightFlush => self.has_straight_flush(),
            Category::RoyalFlush => self.has_royal_flush(),
        }
    }

    /// Every category the snapshot satisfies, in `Category::ALL` order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.satisfies(c))
            .collect()
    }

    /// Ranks present in any suit.
    #[inline]
    fn rank_mask(&self) -> u16 {
        self.suits.iter().fold(0, |acc, m| acc | m)
    }
}

impl From<CardSet> for HandClassifier {
    fn from(cards: CardSet) -> Self {
        Self::from_set(cards)
    }
}
