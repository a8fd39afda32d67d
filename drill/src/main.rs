//! Driver for the exercises in `katas`.
//!
//! Runs every exercise against its literal samples and any TOML case files,
//! solves ad-hoc inputs, prints patterns and replays book-stall scripts.

mod case;
mod cli;
mod config;
mod exit_codes;
mod inventory_script;
mod judge;
mod logging;
mod outcome;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::{PatternKind, RunOptions};
use crate::config::{DEFAULT_CONFIG_FILE, load_config};

#[derive(Parser)]
#[command(
    name = "drill",
    version,
    about = "Run and check small algorithm exercises"
)]
struct Cli {
    /// Config file to read instead of `./drill.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every exercise id with a one-line summary.
    List,
    /// Check exercises against built-in samples and case files.
    Run {
        /// Only run this exercise.
        exercise: Option<String>,
        /// Directory of `*.toml` case files (overrides `cases_dir`).
        #[arg(long)]
        cases: Option<PathBuf>,
        /// Print one JSON object per case instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Solve a single JSON input and print the JSON result.
    Solve { exercise: String, input: String },
    /// Print a text pattern.
    Pattern {
        #[arg(value_enum)]
        kind: PatternKind,
        /// Number of rows (defaults to `pattern.default_rows`).
        #[arg(long, allow_negative_numbers = true)]
        rows: Option<i64>,
    },
    /// Replay a TOML inventory script, or the built-in demo.
    Inventory { script: Option<PathBuf> },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let cfg = load_config(&config_path)?;

    match cli.command {
        Command::List => cli::list_exercises(),
        Command::Run {
            exercise,
            cases,
            json,
        } => {
            let cases_dir = cases.as_deref().unwrap_or(cfg.cases_dir.as_path());
            let summary = cli::run_cases(
                &cfg,
                &RunOptions {
                    exercise: exercise.as_deref(),
                    cases_dir,
                    json,
                },
            )?;
            if !summary.all_passed() {
                return Ok(exit_codes::FAILED);
            }
        }
        Command::Solve { exercise, input } => cli::solve(&exercise, &input)?,
        Command::Pattern { kind, rows } => {
            cli::print_pattern(kind, rows.unwrap_or(cfg.pattern.default_rows));
        }
        Command::Inventory { script } => cli::run_inventory(script.as_deref())?,
    }
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_with_filter() {
        let cli = Cli::parse_from(["drill", "run", "two-sum", "--json"]);
        assert!(matches!(
            cli.command,
            Command::Run { exercise: Some(ref id), cases: None, json: true } if id == "two-sum"
        ));
    }

    #[test]
    fn parse_pattern_with_negative_rows() {
        let cli = Cli::parse_from(["drill", "pattern", "asterisk", "--rows", "-2"]);
        assert!(matches!(
            cli.command,
            Command::Pattern {
                kind: PatternKind::Asterisk,
                rows: Some(-2)
            }
        ));
    }

    #[test]
    fn parse_global_config() {
        let cli = Cli::parse_from(["drill", "list", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn parse_solve() {
        let cli = Cli::parse_from(["drill", "solve", "roman-to-int", "\"MCMXC\""]);
        assert!(matches!(
            cli.command,
            Command::Solve { ref exercise, ref input } if exercise == "roman-to-int" && input == "\"MCMXC\""
        ));
    }
}
