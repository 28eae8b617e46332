//! Exact hand-category probabilities.
//!
//! For a player and a category, the engine counts how many ways of
//! completing the board produce a hand containing that category:
//!
//! ```text
//! evaluation set = board + player's pocket   (board alone if the seat is undealt)
//! unseen pool    = deck - board - every dealt pocket
//! k              = 5 - |board|
//! P(category)    = #{ k-subsets S of pool : classify(evaluation set + S) } / C(|pool|, k)
//! ```
//!
//! Every completion is equally likely, so this ratio is the exact
//! probability. With `k = 0` there is a single (empty) completion and the
//! answer is 0.0 or 1.0.
//!
//! Completions are card bit masks and classification is a handful of mask
//! operations, so even the pre-flop case (C(50, 5) = 2,118,760 completions)
//! is enumerated in full rather than sampled.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::subsets::Subsets;
use crate::cards::{Card, CardSet};
use crate::outcome::{Category, HandClassifier};
use crate::state::{GameState, BOARD_SIZE, MAX_PLAYERS};

/// Errors from probability queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProbabilityError {
    /// Player index is not a seat at the table.
    #[error("player index {player} is out of range, must be below {max}")]
    InvalidPlayer { player: usize, max: usize },
}

/// Favorable and total completion counts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outcomes {
    /// Completions whose hand contains the category.
    pub favorable: u64,
    /// All completions considered.
    pub total: u64,
}

impl Outcomes {
    /// Create a new count pair.
    pub fn new(favorable: u64, total: u64) -> Self {
        Self { favorable, total }
    }

    /// `favorable / total`, or 0.0 when nothing was counted.
    pub fn probability(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.favorable as f64 / self.total as f64
        }
    }
}

/// Completion counts for all nine categories from a single enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandOdds {
    favorable: [u64; Category::COUNT],
    total: u64,
}

impl HandOdds {
    /// Counts for one category.
    pub fn outcomes(&self, category: Category) -> Outcomes {
        Outcomes::new(self.favorable[category.index()], self.total)
    }

    /// Probability of one category.
    pub fn probability(&self, category: Category) -> f64 {
        self.outcomes(category).probability()
    }

    /// Number of completions enumerated.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate categories with their counts, in `Category::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Outcomes)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.outcomes(c)))
    }
}

/// Number of board cards still to come.
fn missing_cards(board_len: usize) -> usize {
    BOARD_SIZE.saturating_sub(board_len)
}

/// Classify `fixed` plus every `k`-subset of `pool`, calling `visit` for each.
/// Returns the number of subsets visited.
fn enumerate<F>(fixed: CardSet, pool: CardSet, k: usize, mut visit: F) -> u64
where
    F: FnMut(&HandClassifier),
{
    let singles: Vec<u64> = pool.iter().map(|c| CardSet::from(c).bits()).collect();
    debug!(
        "enumerating: {} fixed cards, pool of {}, {} to draw",
        fixed.len(),
        singles.len(),
        k
    );

    let mut visited = 0u64;
    for positions in Subsets::new(singles.len(), k) {
        let mut bits = fixed.bits();
        let mut rest = positions;
        while rest != 0 {
            bits |= singles[rest.trailing_zeros() as usize];
            rest &= rest - 1;
        }
        visit(&HandClassifier::from_set(CardSet::from_bits(bits)));
        visited += 1;
    }
    visited
}

fn count_category(fixed: CardSet, pool: CardSet, k: usize, category: Category) -> Outcomes {
    let mut favorable = 0u64;
    let total = enumerate(fixed, pool, k, |hand| {
        if hand.satisfies(category) {
            favorable += 1;
        }
    });
    trace!("{}: {}/{}", category, favorable, total);
    Outcomes::new(favorable, total)
}

fn count_all(fixed: CardSet, pool: CardSet, k: usize) -> HandOdds {
    let mut favorable = [0u64; Category::COUNT];
    let total = enumerate(fixed, pool, k, |hand| {
        for category in Category::ALL {
            if hand.satisfies(category) {
                favorable[category.index()] += 1;
            }
        }
    });
    trace!("all categories: {:?} of {}", favorable, total);
    HandOdds { favorable, total }
}

/// Count completions of `board` + `pocket` drawn from `unseen` that contain `category`.
///
/// Draws `5 - |board|` cards. `unseen` must not share cards with `board` or `pocket`.
pub fn count_outcomes(board: &[Card], pocket: &[Card], unseen: &[Card], category: Category) -> Outcomes {
    let fixed = board.iter().chain(pocket).collect();
    count_category(fixed, CardSet::from_cards(unseen), missing_cards(board.len()), category)
}

/// Count completions that contain two of a kind.
pub fn count_two_of_a_kind_outcomes(board: &[Card], pocket: &[Card], unseen: &[Card]) -> Outcomes {
    count_outcomes(board, pocket, unseen, Category::TwoOfAKind)
}

/// Count completions for all categories in one pass.
pub fn count_all_outcomes(board: &[Card], pocket: &[Card], unseen: &[Card]) -> HandOdds {
    let fixed = board.iter().chain(pocket).collect();
    count_all(fixed, CardSet::from_cards(unseen), missing_cards(board.len()))
}

/// Check whether `board` + `pocket` already contains `category`.
pub fn contains_category(board: &[Card], pocket: &[Card], category: Category) -> bool {
    HandClassifier::from_set(board.iter().chain(pocket).collect()).satisfies(category)
}

/// Check whether `board` + `pocket` contains two of a kind.
pub fn has_two_of_a_kind(board: &[Card], pocket: &[Card]) -> bool {
    contains_category(board, pocket, Category::TwoOfAKind)
}

/// Check whether `board` + `pocket` contains three of a kind.
pub fn has_three_of_a_kind(board: &[Card], pocket: &[Card]) -> bool {
    contains_category(board, pocket, Category::ThreeOfAKind)
}

/// Probability calculator over a borrowed game snapshot.
///
/// The engine never mutates the state; any number of engines (on any
/// number of threads) can share one `GameState`.
#[derive(Debug, Clone, Copy)]
pub struct ProbabilityEngine<'a> {
    state: &'a GameState,
}

impl<'a> ProbabilityEngine<'a> {
    /// Create an engine for a snapshot.
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// The snapshot being evaluated.
    pub fn state(&self) -> &'a GameState {
        self.state
    }

    /// Board cards still to be dealt.
    pub fn missing_cards(&self) -> usize {
        missing_cards(self.state.board().len())
    }

    /// Deck minus the board and every dealt pocket.
    pub fn unseen_pool(&self) -> CardSet {
        CardSet::full_deck().difference(self.state.visible_cards())
    }

    /// Board cards only.
    pub fn community_set(&self) -> CardSet {
        CardSet::from_cards(self.state.board())
    }

    /// Cards the player's final hand is tested against.
    ///
    /// Board plus pocket for a dealt seat; the board alone for an undealt one.
    pub fn evaluation_set(&self, player: usize) -> Result<CardSet, ProbabilityError> {
        Self::check_player(player)?;
        let board = self.community_set();
        Ok(match self.state.pocket(player) {
            Some(pocket) => board.union(pocket.cards().iter().collect()),
            None => board,
        })
    }

    /// Completion counts for one category.
    pub fn outcomes(&self, player: usize, category: Category) -> Result<Outcomes, ProbabilityError> {
        let fixed = self.evaluation_set(player)?;
        Ok(count_category(fixed, self.unseen_pool(), self.missing_cards(), category))
    }

    /// Probability that the player's final hand contains `category`.
    pub fn probability(&self, player: usize, category: Category) -> Result<f64, ProbabilityError> {
        Ok(self.outcomes(player, category)?.probability())
    }

    /// Counts for every category in a single enumeration.
    pub fn odds_for_player(&self, player: usize) -> Result<HandOdds, ProbabilityError> {
        let fixed = self.evaluation_set(player)?;
        Ok(count_all(fixed, self.unseen_pool(), self.missing_cards()))
    }

    /// Counts for every category using the board alone.
    pub fn community_odds(&self) -> HandOdds {
        count_all(self.community_set(), self.unseen_pool(), self.missing_cards())
    }

    /// Probability of two of a kind.
    pub fn two_of_a_kind_for_player(&self, player: usize) -> Result<f64, ProbabilityError> {
        self.probability(player, Category::TwoOfAKind)
    }

    /// Probability of three of a kind.
    pub fn three_of_a_kind_for_player(&self, player: usize) -> Result<f64, ProbabilityError> {
        self.probability(player, Category::ThreeOfAKind)
    }

    /// Probability of four of a kind.
    pub fn four_of_a_kind_for_player(&self, player: usize) -> Result<f64, ProbabilityError> {
        self.probability(player, Category::FourOfAKind)
    }

    /// Probability of two pair.
    pub fn two_pair_for_player(&self, player: usize) -> Result<f64, ProbabilityError> {
        self.probability(player, Category::TwoPair)
    }

    /// Probability of a flush.
    pub fn flush_for_player(&self, player: usize) -> Result<f64, ProbabilityError> {
        self.probability(player, Category::Flush)
    }

    /// Probability of a full house.
    pub fn full_house_for_player(&self, player: usize) -> Result<f64, ProbabilityError> {
        self.probability(player, Category::FullHouse)
    }

    /// Probability of a straight.
    pub fn straight_for_player(&self, player: usize) -> Result<f64, ProbabilityError> {
        self.probability(player, Category::Straight)
    }

    /// Probability of a straight flush.
    pub fn straight_flush_for_player(&self, player: usize) -> Result<f64, ProbabilityError> {
        self.probability(player, Category::StraightFlush)
    }

    /// Probability of a royal flush.
    pub fn royal_flush_for_player(&self, player: usize) -> Result<f64, ProbabilityError> {
        self.probability(player, Category::RoyalFlush)
    }

    fn check_player(player: usize) -> Result<(), ProbabilityError> {
        if player >= MAX_PLAYERS {
            return Err(ProbabilityError::InvalidPlayer {
                player,
                max: MAX_PLAYERS,
            });
        }
        Ok(())
    }
}
