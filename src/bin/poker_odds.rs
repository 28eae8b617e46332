//! Table odds calculator.
//!
//! Reads a game snapshot (board on the first line, one seat per following
//! line) and prints the probability of each hand category for every seat.
//!
//! ```text
//! poker-odds table.txt
//! poker-odds table.txt --json --seat 0 --seat 3
//! RUST_LOG=debug poker-odds table.txt --config report.json
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{info, warn};

use poker_odds::probability::{OddsReport, ReportConfig};
use poker_odds::state::{parse_game_state, GameState};

/// Exact hand-category probabilities for a partially dealt hold'em table.
#[derive(Parser, Debug)]
#[command(name = "poker-odds", version, about)]
struct Args {
    /// Game snapshot: board on the first line, one seat per following line.
    file: PathBuf,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// JSON report config (categories, seats, community, parallel).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seat to report; repeat for several. Overrides configured seats.
    #[arg(long = "seat", value_name = "N")]
    seats: Vec<usize>,

    /// Compute rows one at a time instead of in parallel.
    #[arg(long)]
    sequential: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;

    let text = fs::read_to_string(&args.file)
        .map_err(|e| format!("cannot read {}: {}", args.file.display(), e))?;
    let state = parse_game_state(&text)?;
    describe(&state);

    let rows = config.seats.as_ref().map_or(state.dealt_seats().len(), Vec::len) + usize::from(config.community);
    let progress = progress_bar(rows as u64);

    let start = Instant::now();
    let report = OddsReport::compute_with_progress(&state, &config, |row| {
        progress.set_message(row.label());
        progress.inc(1);
    })?;
    progress.finish_and_clear();
    info!("computed {} rows in {:.2}s", report.rows.len(), start.elapsed().as_secs_f64());

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<ReportConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            ReportConfig::load(path)?
        }
        None => ReportConfig::default(),
    };
    if !args.seats.is_empty() {
        config = config.with_seats(args.seats.clone());
    }
    if args.sequential {
        config = config.with_parallel(false);
    }
    config.validate()?;
    Ok(config)
}

fn describe(state: &GameState) {
    let street = state
        .street()
        .map_or_else(|| format!("{} board cards", state.board().len()), |s| s.to_string());
    info!("{}, {} dealt seats", street, state.dealt_seats().len());
    if state.board().is_empty() {
        warn!("pre-flop boards enumerate about 2.1 million completions per row");
    }
}

fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stderr());
    let style = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar
}
