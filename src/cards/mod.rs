//! Playing cards and card sets.
//!
//! ## Modules
//!
//! - `card`: `Rank`, `Suit` and `Card` value types
//! - `set`: `CardSet`, a 52-bit set of cards

pub mod card;
pub mod set;

pub use card::{Card, CardParseError, Rank, Suit};
pub use set::CardSet;
