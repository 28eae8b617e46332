//! Hand categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the nine standard hand categories.
///
/// Categories are independent predicates, not ranks: a full house also
/// counts as three of a kind and as two of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TwoOfAKind,
    ThreeOfAKind,
    FourOfAKind,
    TwoPair,
    Flush,
    FullHouse,
    Straight,
    StraightFlush,
    RoyalFlush,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 9;

    /// All categories, in report order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::TwoOfAKind,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::TwoPair,
        Category::Flush,
        Category::FullHouse,
        Category::Straight,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Position in `Category::ALL`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::TwoOfAKind => "Two of a Kind",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::TwoPair => "Two Pair",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::Straight => "Straight",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    /// Machine-readable name, matching the serde form.
    pub fn key(&self) -> &'static str {
        match self {
            Category::TwoOfAKind => "two_of_a_kind",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FourOfAKind => "four_of_a_kind",
            Category::TwoPair => "two_pair",
            Category::Flush => "flush",
            Category::FullHouse => "full_house",
            Category::Straight => "straight",
            Category::StraightFlush => "straight_flush",
            Category::RoyalFlush => "royal_flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hand category {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(&['-', ' '][..], "_");
        Category::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("full_house".parse::<Category>(), Ok(Category::FullHouse));
        assert_eq!("Royal Flush".parse::<Category>(), Ok(Category::RoyalFlush));
        assert_eq!("two-pair".parse::<Category>(), Ok(Category::TwoPair));
        assert!("high_card".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_form() {
        let json = serde_json::to_string(&Category::StraightFlush).unwrap();
        assert_eq!(json, "\"straight_flush\"");
        let back: Category = serde_json::from_str("\"two_of_a_kind\"").unwrap();
        assert_eq!(back, Category::TwoOfAKind);
        for c in Category::ALL {
            assert_eq!(serde_json::to_string(&c).unwrap(), format!("\"{}\"", c.key()));
        }
    }
}
