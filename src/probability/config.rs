//! Configuration for odds reports.
//!
//! A `ReportConfig` selects which categories and seats a report covers and
//! whether rows are computed on the rayon pool. It can be built in code or
//! loaded from JSON:
//!
//! ```json
//! { "categories": ["flush", "full_house"], "seats": [0, 2], "community": false, "parallel": true }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::outcome::Category;
use crate::state::MAX_PLAYERS;

/// Which rows and columns an odds report contains.
///
/// # Example
/// ```
/// use poker_odds::probability::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.categories.len(), 9);
/// assert!(config.seats.is_none()); // every dealt seat
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Categories to report, in column order.
    pub categories: Vec<Category>,

    /// Seats to report, in row order.
    ///
    /// `None` means every dealt seat. An explicitly listed undealt seat is
    /// evaluated against the board alone.
    pub seats: Option<Vec<usize>>,

    /// Append a row for the board alone.
    pub community: bool,

    /// Compute rows on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
            seats: None,
            community: true,
            parallel: true,
        }
    }
}

impl ReportConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the reported categories.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Builder method: report only these seats.
    pub fn with_seats(mut self, seats: Vec<usize>) -> Self {
        self.seats = Some(seats);
        self
    }

    /// Builder method: include or drop the community row.
    pub fn with_community(mut self, enable: bool) -> Self {
        self.community = enable;
        self
    }

    /// Builder method: compute rows in parallel or sequentially.
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ReportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        if let Some(seats) = &self.seats {
            for (i, &seat) in seats.iter().enumerate() {
                if seat >= MAX_PLAYERS {
                    return Err(ConfigError::SeatOutOfRange(seat));
                }
                if seats[..i].contains(&seat) {
                    return Err(ConfigError::DuplicateSeat(seat));
                }
            }
        }

        Ok(())
    }
}

/// Errors that can occur when loading or validating a report config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The category list is empty.
    #[error("at least one category must be reported")]
    NoCategories,
    /// A listed seat is not at the table.
    #[error("seat {0} is out of range, must be below {max}", max = MAX_PLAYERS)]
    SeatOutOfRange(usize),
    /// A seat is listed twice.
    #[error("seat {0} is listed more than once")]
    DuplicateSeat(usize),
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for a `ReportConfig`.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ReportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.categories, Category::ALL.to_vec());
        assert!(config.community);
        assert!(config.parallel);
    }

    #[test]
    fn test_builders() {
        let config = ReportConfig::new()
            .with_categories(vec![Category::Flush])
            .with_seats(vec![3, 1])
            .with_community(false)
            .with_parallel(false);

        assert_eq!(config.categories, vec![Category::Flush]);
        assert_eq!(config.seats, Some(vec![3, 1]));
        assert!(!config.community);
        assert!(!config.parallel);
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let empty = ReportConfig::new().with_categories(Vec::new());
        assert!(matches!(empty.validate(), Err(ConfigError::NoCategories)));

        let far = ReportConfig::new().with_seats(vec![0, MAX_PLAYERS]);
        assert!(matches!(far.validate(), Err(ConfigError::SeatOutOfRange(s)) if s == MAX_PLAYERS));

        let twice = ReportConfig::new().with_seats(vec![2, 4, 2]);
        assert!(matches!(twice.validate(), Err(ConfigError::DuplicateSeat(2))));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ReportConfig::from_json(r#"{ "categories": ["flush", "full_house"], "seats": [1] }"#).unwrap();
        assert_eq!(config.categories, vec![Category::Flush, Category::FullHouse]);
        assert_eq!(config.seats, Some(vec![1]));
        assert!(config.community);
        assert!(config.parallel);

        assert_eq!(ReportConfig::from_json("{}").unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(ReportConfig::from_json("{ not json"), Err(ConfigError::Json(_))));
        assert!(matches!(
            ReportConfig::from_json(r#"{ "categories": ["high_card"] }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            ReportConfig::from_json(r#"{ "seats": [12] }"#),
            Err(ConfigError::SeatOutOfRange(12))
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("poker_odds_config_{}.json", std::process::id()));
        fs::write(&path, r#"{ "community": false }"#).unwrap();
        let config = ReportConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(!config.community);

        assert!(matches!(ReportConfig::load(&path), Err(ConfigError::Io(_))));
    }
}
