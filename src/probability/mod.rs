//! Exact probability computation.
//!
//! ## Modules
//!
//! - `subsets`: binomial coefficients and the k-subset iterator
//! - `engine`: `ProbabilityEngine` and the raw counting functions
//! - `config`: `ReportConfig`, what a table report covers
//! - `report`: `OddsReport`, per-seat odds for a whole table

pub mod config;
pub mod engine;
pub mod report;
pub mod subsets;

pub use config::{ConfigError, ReportConfig};
pub use engine::{
    contains_category, count_all_outcomes, count_outcomes, count_two_of_a_kind_outcomes,
    has_three_of_a_kind, has_two_of_a_kind, HandOdds, Outcomes, ProbabilityEngine,
    ProbabilityError,
};
pub use report::{CategoryOdds, OddsReport, ReportError, SeatOdds};
pub use subsets::{binomial, Subsets};
