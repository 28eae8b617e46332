//! Odds reports over a whole table.
//!
//! A report holds one row per requested seat, plus an optional row for the
//! board alone. Each row holds one column per configured category. Rows are
//! independent computations over the same read-only `GameState`, so they
//! fan out across the rayon pool.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{ConfigError, ReportConfig};
use super::engine::{HandOdds, ProbabilityEngine, ProbabilityError};
use crate::outcome::Category;
use crate::state::GameState;

/// Errors from building or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report config is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A probability query failed.
    #[error(transparent)]
    Probability(#[from] ProbabilityError),
    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    /// The report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// One category column of a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOdds {
    /// Hand category.
    pub category: Category,
    /// Completions containing the category.
    pub favorable: u64,
    /// Completions enumerated.
    pub total: u64,
    /// `favorable / total`.
    pub probability: f64,
}

/// One row of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatOdds {
    /// Seat index, or `None` for the board-only row.
    pub seat: Option<usize>,
    /// Pocket cards as text, `None` when the seat is undealt.
    pub pocket: Option<String>,
    /// One entry per configured category.
    pub odds: Vec<CategoryOdds>,
}

impl SeatOdds {
    fn from_odds(seat: Option<usize>, pocket: Option<String>, odds: &HandOdds, categories: &[Category]) -> Self {
        let odds = categories
            .iter()
            .map(|&category| {
                let outcomes = odds.outcomes(category);
                CategoryOdds {
                    category,
                    favorable: outcomes.favorable,
                    total: outcomes.total,
                    probability: outcomes.probability(),
                }
            })
            .collect();
        Self { seat, pocket, odds }
    }

    /// Probability of a category, if the row reports it.
    pub fn probability(&self, category: Category) -> Option<f64> {
        self.odds.iter().find(|o| o.category == category).map(|o| o.probability)
    }

    /// Row label: the seat number, or `board`.
    pub fn label(&self) -> String {
        match self.seat {
            Some(seat) => format!("seat {}", seat),
            None => "board".to_string(),
        }
    }
}

/// Category probabilities for every requested seat at a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsReport {
    /// Board cards as text.
    pub board: String,
    /// Report rows, in configured order.
    pub rows: Vec<SeatOdds>,
}

impl OddsReport {
    /// Compute a report.
    pub fn compute(state: &GameState, config: &ReportConfig) -> Result<Self, ReportError> {
        Self::compute_with_progress(state, config, |_| {})
    }

    /// Compute a report, calling `on_row` as each row completes.
    ///
    /// With `parallel` set, rows complete in any order and `on_row` may be
    /// called from several threads; the returned rows keep configured order.
    pub fn compute_with_progress<F>(state: &GameState, config: &ReportConfig, on_row: F) -> Result<Self, ReportError>
    where
        F: Fn(&SeatOdds) + Sync,
    {
        config.validate()?;

        let mut targets: Vec<Option<usize>> = match &config.seats {
            Some(seats) => seats.iter().copied().map(Some).collect(),
            None => state.dealt_seats().into_iter().map(Some).collect(),
        };
        if config.community {
            targets.push(None);
        }
        debug!(
            "computing {} rows x {} categories ({})",
            targets.len(),
            config.categories.len(),
            if config.parallel { "parallel" } else { "sequential" }
        );

        let engine = ProbabilityEngine::new(state);
        let row = |target: &Option<usize>| -> Result<SeatOdds, ProbabilityError> {
            let row = match *target {
                Some(seat) => {
                    let odds = engine.odds_for_player(seat)?;
                    let pocket = state.pocket(seat).map(|p| p.to_string());
                    SeatOdds::from_odds(Some(seat), pocket, &odds, &config.categories)
                }
                None => SeatOdds::from_odds(None, None, &engine.community_odds(), &config.categories),
            };
            on_row(&row);
            Ok(row)
        };

        let rows = if config.parallel {
            targets.par_iter().map(row).collect::<Result<Vec<_>, _>>()?
        } else {
            targets.iter().map(row).collect::<Result<Vec<_>, _>>()?
        };

        let board = state.board().iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ");
        Ok(Self { board, rows })
    }

    /// Find the row for a seat.
    pub fn seat(&self, seat: usize) -> Option<&SeatOdds> {
        self.rows.iter().find(|r| r.seat == Some(seat))
    }

    /// The board-only row, if computed.
    pub fn community(&self) -> Option<&SeatOdds> {
        self.rows.iter().find(|r| r.seat.is_none())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let mut file = File::create(path)?;
        file.write_all(self.to_json()?.as_bytes())?;
        Ok(())
    }
}

impl fmt::Display for OddsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = if self.board.is_empty() { "-" } else { &self.board };
        writeln!(f, "Board: {}", board)?;

        let Some(first) = self.rows.first() else {
            return Ok(());
        };
        let widths: Vec<usize> = first.odds.iter().map(|o| o.category.name().len().max(8)).collect();

        write!(f, "{:<8} {:<6}", "", "pocket")?;
        for (o, w) in first.odds.iter().zip(&widths) {
            write!(f, "  {:>w$}", o.category.name(), w = w)?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{:<8} {:<6}", row.label(), row.pocket.as_deref().unwrap_or("-"))?;
            for (o, w) in row.odds.iter().zip(&widths) {
                let percent = format!("{:.2}%", o.probability * 100.0);
                write!(f, "  {:>w$}", percent, w = w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn state(s: &str) -> GameState {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_rows() {
        let game = state("Ah Kh Qh\n2d 7c\n\nKc Qc");
        let report = OddsReport::compute(&game, &ReportConfig::default()).unwrap();

        let seats: Vec<Option<usize>> = report.rows.iter().map(|r| r.seat).collect();
        assert_eq!(seats, vec![Some(0), Some(2), None]);
        assert_eq!(report.board, "Ah Kh Qh");
        assert_eq!(report.seat(0).unwrap().pocket.as_deref(), Some("2d 7c"));
        assert_eq!(report.seat(0).unwrap().odds.len(), Category::COUNT);
    }

    #[test]
    fn test_rows_match_engine() {
        let game = state("Ah Kh Qh\n2d 7c\n7h 7d\nAd Kc\n8c 8d");
        let report = OddsReport::compute(&game, &ReportConfig::default()).unwrap();

        let seat = report.seat(0).unwrap();
        assert_eq!(seat.probability(Category::TwoOfAKind), Some(428.0 / 820.0));
        let pair = &seat.odds[Category::TwoOfAKind.index()];
        assert_eq!((pair.favorable, pair.total), (428, 820));

        let engine = ProbabilityEngine::new(&game);
        let board = report.community().unwrap();
        for category in Category::ALL {
            assert_eq!(board.probability(category), Some(engine.community_odds().probability(category)));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let game = state("9h Th Jc\nQh Kh\n2c 2d\nAs 5s\n9c 9d");
        let parallel = OddsReport::compute(&game, &ReportConfig::default()).unwrap();
        let sequential = OddsReport::compute(&game, &ReportConfig::default().with_parallel(false)).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_configured_seats_and_categories() {
        let game = state("As 2s Kh\n4s 5s");
        let config = ReportConfig::new()
            .with_categories(vec![Category::Flush, Category::FullHouse])
            .with_seats(vec![4, 0])
            .with_community(false);
        let report = OddsReport::compute(&game, &config).unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].seat, Some(4));
        assert_eq!(report.rows[0].pocket, None);
        assert_eq!(report.rows[1].probability(Category::Flush), Some(378.0 / 1081.0));
        assert_eq!(report.rows[1].probability(Category::Straight), None);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let game = state("As 2s Kh\n4s 5s");
        let config = ReportConfig::new().with_seats(vec![1, 1]);
        assert!(matches!(
            OddsReport::compute(&game, &config),
            Err(ReportError::Config(ConfigError::DuplicateSeat(1)))
        ));
    }

    #[test]
    fn test_progress_called_per_row() {
        let game = state("Ah Kh Qh Jh\n2d 7c\nTs 9s");
        let calls = AtomicUsize::new(0);
        let report = OddsReport::compute_with_progress(&game, &ReportConfig::default(), |_| {
            calls.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), report.rows.len());
        assert_eq!(report.rows.len(), 3);
    }

    #[test]
    fn test_json_output() {
        let game = state("Ah Kh Qh Jh\n2d 7c");
        let report = OddsReport::compute(&game, &ReportConfig::default()).unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"two_of_a_kind\""));
        assert!(json.contains("\"pocket\": \"2d 7c\""));

        let back: OddsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);

        let path = std::env::temp_dir().join(format!("poker_odds_report_{}.json", std::process::id()));
        report.save_json(&path).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(saved, json);
    }

    #[test]
    fn test_text_table() {
        let game = state("Ah Kh Qh Jh\n2d 7c");
        let text = OddsReport::compute(&game, &ReportConfig::default()).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Board: Ah Kh Qh Jh");
        assert!(lines[1].contains("Royal Flush"));
        assert!(lines[2].starts_with("seat 0"));
        assert!(lines[2].contains("2d 7c"));
        assert!(lines[2].contains("39.13%")); // 18/46
        assert!(lines[3].starts_with("board"));
    }
}
