//! Game snapshots.
//!
//! ## Modules
//!
//! - `game`: `GameState`, `Pocket` and the table limits
//! - `parse`: text format for building a `GameState`

pub mod game;
pub mod parse;

pub use game::{GameState, Pocket, StateError, Street, BOARD_SIZE, MAX_PLAYERS};
pub use parse::{parse_cards, parse_game_state, ParseError};
