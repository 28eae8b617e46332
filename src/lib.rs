//! # Poker Odds
//!
//! Exact probabilities that a hold'em player's final seven-card hand
//! contains each of nine hand categories, given a partially dealt table.
//!
//! ## Features
//!
//! - **Exact enumeration**: every completion of the board is classified, no sampling
//! - **Category predicates**: pair, trips, quads, two pair, flush, full house,
//!   straight, straight flush and royal flush, each tested independently
//! - **Table reports**: odds for every seat computed in parallel with rayon
//!
//! ## Quick Start
//!
//! ```
//! use poker_odds::{GameState, ProbabilityEngine};
//!
//! // Board on the first line, one seat per following line.
//! let state: GameState = "As 2s Kh\n4s 5s".parse().unwrap();
//! let engine = ProbabilityEngine::new(&state);
//!
//! assert_eq!(engine.flush_for_player(0).unwrap(), 378.0 / 1081.0);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: cards and card sets
//! - [`state`]: game snapshots and their text format
//! - [`outcome`]: hand categories and the classifier
//! - [`probability`]: the enumeration engine and table reports
//!
//! ## Architecture
//!
//! ```text
//!   text ──parse──▶ GameState ──borrow──▶ ProbabilityEngine ──▶ Outcomes / HandOdds
//!                                              │
//!                          unseen pool ─▶ Subsets ─▶ HandClassifier
//!                                              │
//!                  ReportConfig ──▶ OddsReport (rayon over seats)
//! ```

#![warn(missing_docs)]

/// Cards, ranks, suits and card sets.
pub mod cards;

/// Hand categories and the hand classifier.
pub mod outcome;

/// Probability engine, reports and their configuration.
pub mod probability;

/// Game snapshots.
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use cards::{Card, CardSet, Rank, Suit};
pub use outcome::{Category, HandClassifier};
pub use probability::{HandOdds, OddsReport, Outcomes, ProbabilityEngine, ProbabilityError, ReportConfig};
pub use state::{GameState, Pocket, MAX_PLAYERS};
