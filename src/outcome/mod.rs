//! Hand categories and the classifier that tests a card set against them.
//!
//! ## Modules
//!
//! - `category`: the nine `Category` values
//! - `classifier`: `HandClassifier`, the per-category predicates

pub mod category;
pub mod classifier;

pub use category::{Category, UnknownCategory};
pub use classifier::HandClassifier;
