//! Game snapshot: community board plus each seat's pocket.

use std::fmt;

use thiserror::Error;

use crate::cards::{Card, CardSet};

/// Number of seats at the table. Valid player indices are `0..MAX_PLAYERS`.
pub const MAX_PLAYERS: usize = 10;

/// Maximum number of community cards.
pub const BOARD_SIZE: usize = 5;

/// A seat's two private cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pocket([Card; 2]);

impl Pocket {
    /// Create a pocket from two cards.
    pub fn new(card1: Card, card2: Card) -> Self {
        Self([card1, card2])
    }

    /// Get both cards.
    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }

    /// Check if a card is in this pocket.
    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}

impl fmt::Debug for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Stage of board revelation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Street for a board of `n` cards, if it is one of 0, 3, 4 or 5.
    pub fn from_board_len(n: usize) -> Option<Street> {
        match n {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
        }
    }
}

/// Violations of the snapshot invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// More than five community cards.
    #[error("board has {0} cards, at most {max} allowed", max = BOARD_SIZE)]
    BoardTooLarge(usize),
    /// More seats than the table holds.
    #[error("{0} seats given, at most {max} allowed", max = MAX_PLAYERS)]
    TooManySeats(usize),
    /// The same card is visible twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// A read-only snapshot of the visible cards.
///
/// Every card appears at most once across the board and all pockets; the
/// constructor rejects anything else, so the probability engine never
/// re-validates.
#[derive(Clone, PartialEq, Eq)]
pub struct GameState {
    board: Vec<Card>,
    pockets: [Option<Pocket>; MAX_PLAYERS],
    visible: CardSet,
}

impl GameState {
    /// Build a snapshot. `pockets[i]` is seat `i`; seats past the end are undealt.
    pub fn new(board: Vec<Card>, pockets: Vec<Option<Pocket>>) -> Result<Self, StateError> {
        if board.len() > BOARD_SIZE {
            return Err(StateError::BoardTooLarge(board.len()));
        }
        if pockets.len() > MAX_PLAYERS {
            return Err(StateError::TooManySeats(pockets.len()));
        }

        let mut visible = CardSet::empty();
        let dealt = pockets.iter().flatten().flat_map(|p| p.cards().iter());
        for &card in board.iter().chain(dealt) {
            if !visible.insert(card) {
                return Err(StateError::DuplicateCard(card));
            }
        }

        let mut seats = [None; MAX_PLAYERS];
        for (seat, pocket) in seats.iter_mut().zip(pockets) {
            *seat = pocket;
        }

        Ok(Self {
            board,
            pockets: seats,
            visible,
        })
    }

    /// Community cards in dealing order.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Pocket for a seat, `None` if undealt or out of range.
    pub fn pocket(&self, seat: usize) -> Option<&Pocket> {
        self.pockets.get(seat).and_then(Option::as_ref)
    }

    /// All seats, dealt or not.
    pub fn pockets(&self) -> &[Option<Pocket>; MAX_PLAYERS] {
        &self.pockets
    }

    /// Indices of seats holding a pocket.
    pub fn dealt_seats(&self) -> Vec<usize> {
        self.pockets
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|_| i))
            .collect()
    }

    /// Board plus every dealt pocket.
    pub fn visible_cards(&self) -> CardSet {
        self.visible
    }

    /// Current street, if the board size maps to one.
    pub fn street(&self) -> Option<Street> {
        Street::from_board_len(self.board.len())
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dealt: Vec<(usize, Pocket)> = self
            .pockets
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (i, p)))
            .collect();
        f.debug_struct("GameState")
            .field("board", &self.board)
            .field("pockets", &dealt)
            .finish()
    }
}
