//! Text format for game snapshots.
//!
//! ```text
//! Ah Kh Qh        <- board: 0-5 card tokens
//! 2d 7c           <- seat 0: 0 or 2 card tokens
//!                 <- seat 1: undealt
//! 8c 8d           <- seat 2
//! ```

use std::str::FromStr;

use thiserror::Error;

use super::game::{GameState, Pocket, StateError, BOARD_SIZE, MAX_PLAYERS};
use crate::cards::{Card, CardParseError};

/// Errors from parsing a game snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token is not a card.
    #[error(transparent)]
    Card(#[from] CardParseError),
    /// The first line holds too many cards.
    #[error("board line has {0} cards, at most {max} allowed", max = BOARD_SIZE)]
    Board(usize),
    /// A seat line holds something other than 0 or 2 cards.
    #[error("pocket for seat {seat} has {count} cards, expected 0 or 2")]
    Pocket { seat: usize, count: usize },
    /// More seat lines than seats.
    #[error("{0} pocket lines given, at most {max} allowed", max = MAX_PLAYERS)]
    TooManyPockets(usize),
    /// Parsed cards violate the snapshot invariants.
    #[error(transparent)]
    State(#[from] StateError),
}

/// Parse a whitespace-separated list of card tokens.
pub fn parse_cards(line: &str) -> Result<Vec<Card>, ParseError> {
    line.split_whitespace()
        .map(|token| token.parse::<Card>().map_err(ParseError::from))
        .collect()
}

/// Parse a full snapshot: board line first, then one line per seat.
pub fn parse_game_state(input: &str) -> Result<GameState, ParseError> {
    let mut lines: Vec<&str> = input.lines().collect();
    // Blank lines after the last seat carry no information.
    while lines.len() > 1 && lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let board_line = lines.first().copied().unwrap_or("");
    let board = parse_cards(board_line)?;
    if board.len() > BOARD_SIZE {
        return Err(ParseError::Board(board.len()));
    }

    let seat_lines = lines.get(1..).unwrap_or(&[]);
    if seat_lines.len() > MAX_PLAYERS {
        return Err(ParseError::TooManyPockets(seat_lines.len()));
    }

    let pockets = seat_lines
        .iter()
        .enumerate()
        .map(|(seat, line)| parse_pocket(seat, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GameState::new(board, pockets)?)
}

fn parse_pocket(seat: usize, line: &str) -> Result<Option<Pocket>, ParseError> {
    match parse_cards(line)?.as_slice() {
        [] => Ok(None),
        [a, b] => Ok(Some(Pocket::new(*a, *b))),
        other => Err(ParseError::Pocket {
            seat,
            count: other.len(),
        }),
    }
}

impl FromStr for GameState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_game_state(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_board_and_pocket() {
        let state: GameState = "Ah Kh Qh Jh\n2d 7c".parse().unwrap();
        assert_eq!(state.board(), &[card("Ah"), card("Kh"), card("Qh"), card("Jh")]);
        assert_eq!(state.pocket(0), Some(&Pocket::new(card("2d"), card("7c"))));
        assert_eq!(state.dealt_seats(), vec![0]);
    }

    #[test]
    fn test_empty_board() {
        let state: GameState = "\n2d 7c".parse().unwrap();
        assert!(state.board().is_empty());
        assert_eq!(state.dealt_seats(), vec![0]);
    }

    #[test]
    fn test_leading_space_on_pocket_line() {
        let state: GameState = "As Ac Ah Kh\n Ts Js".parse().unwrap();
        assert_eq!(state.pocket(0), Some(&Pocket::new(card("Ts"), card("Js"))));
    }

    #[test]
    fn test_multiple_seats_with_gap() {
        let state: GameState = "Ah Kh Qh\n2d 7c\n\n8c 8d\n".parse().unwrap();
        assert_eq!(state.dealt_seats(), vec![0, 2]);
    }

    #[test]
    fn test_board_only() {
        let state: GameState = "Ah Kh Qh".parse().unwrap();
        assert!(state.dealt_seats().is_empty());
        let state: GameState = "".parse().unwrap();
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            "Ah Kh Qh Jh Th 9h".parse::<GameState>(),
            Err(ParseError::Board(6))
        ));
        assert!(matches!(
            "Ah Kh Qh\n2d".parse::<GameState>(),
            Err(ParseError::Pocket { seat: 0, count: 1 })
        ));
        assert!(matches!(
            "Ah Kh Qh\n2d 3d\n4d 5d 6d".parse::<GameState>(),
            Err(ParseError::Pocket { seat: 1, count: 3 })
        ));
        assert!(matches!(
            "Ah Zh".parse::<GameState>(),
            Err(ParseError::Card(CardParseError::Rank { .. }))
        ));
        assert!(matches!(
            "Ah Kh\nAh 2c".parse::<GameState>(),
            Err(ParseError::State(StateError::DuplicateCard(_)))
        ));

        let too_many = format!("\n{}", vec!["2c 3c"; MAX_PLAYERS + 1].join("\n"));
        assert!(matches!(
            too_many.parse::<GameState>(),
            Err(ParseError::TooManyPockets(11))
        ));
    }
}
