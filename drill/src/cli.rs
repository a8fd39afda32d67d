//! CLI command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use katas::catalog::{self, Exercise};
use katas::inventory::replay;
use katas::patterns;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::case::{CaseFile, discover_cases};
use crate::config::DrillConfig;
use crate::inventory_script::InventoryScript;
use crate::judge::{CheckOutcome, Judgment, run_checks};
use crate::outcome::classify_outcome;
use crate::report::{ReportSummary, aggregate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PatternKind {
    /// Rows of 1..=n asterisks.
    Asterisk,
    /// Rows of mirrored digit runs.
    Palindrome,
}

/// List all exercises.
pub fn list_exercises() {
    for exercise in catalog::catalog() {
        println!("{}\t{}", exercise.id, exercise.summary);
    }
}

/// Options for `drill run`.
#[derive(Debug)]
pub struct RunOptions<'a> {
    /// Restrict to one exercise; `None` runs everything.
    pub exercise: Option<&'a str>,
    pub cases_dir: &'a Path,
    pub json: bool,
}

/// Run built-in samples plus case files, print results, return the summary.
pub fn run_cases(cfg: &DrillConfig, options: &RunOptions<'_>) -> Result<ReportSummary> {
    let selected: Vec<&'static Exercise> = match options.exercise {
        Some(id) => vec![catalog::lookup(id)?],
        None => catalog::catalog().iter().collect(),
    };

    let mut cases: Vec<CaseFile> = selected
        .iter()
        .map(|exercise| CaseFile::from_samples(exercise))
        .collect();
    let discovered = discover_cases(options.cases_dir)
        .with_context(|| format!("load cases from {}", options.cases_dir.display()))?;
    debug!(count = discovered.len(), dir = %options.cases_dir.display(), "case files loaded");
    cases.extend(
        discovered
            .into_iter()
            .filter(|case| options.exercise.is_none_or(|id| case.case.exercise == id)),
    );

    info!(cases = cases.len(), "running cases");
    let mut judgments = Vec::with_capacity(cases.len());
    for case in &cases {
        let exercise = case.exercise()?;
        let judgment = run_checks(case, exercise, cfg.float_tolerance);
        if options.json {
            print_json_line(&judgment)?;
        } else {
            print_judgment(&judgment);
        }
        judgments.push(judgment);
    }

    let summary = aggregate(&judgments);
    if !options.json {
        print_summary(&summary);
    }
    Ok(summary)
}

fn print_judgment(judgment: &Judgment) {
    for check in &judgment.checks {
        match check {
            CheckOutcome::Passed { .. } => {}
            CheckOutcome::Failed {
                label,
                expected,
                actual,
            } => println!(
                "fail: case={} check={} expected={} actual={}",
                judgment.case_id, label, expected, actual
            ),
            CheckOutcome::Errored { label, error } => println!(
                "error: case={} check={} {}",
                judgment.case_id, label, error
            ),
        }
    }
    let passed = judgment.checks.iter().filter(|check| check.passed()).count();
    println!(
        "case: id={} exercise={} outcome={:?} checks={}/{}",
        judgment.case_id,
        judgment.exercise,
        classify_outcome(judgment),
        passed,
        judgment.checks.len()
    );
}

fn print_json_line(judgment: &Judgment) -> Result<()> {
    let line = serde_json::to_string(&json!({
        "outcome": classify_outcome(judgment),
        "judgment": judgment,
    }))
    .context("serialize judgment")?;
    println!("{line}");
    Ok(())
}

fn print_summary(summary: &ReportSummary) {
    println!(
        "report: cases={} pass={} fail={} error={}",
        summary.cases, summary.pass, summary.fail, summary.error
    );
    for (exercise, (passed, total)) in &summary.check_pass_rates {
        println!("report: check {} {}/{}", exercise, passed, total);
    }
}

/// Solve one input and print the JSON result.
///
/// Input that is not valid JSON is taken as a plain string, so
/// `drill solve shortest-word "Hello world"` needs no extra quoting.
pub fn solve(exercise_id: &str, raw_input: &str) -> Result<()> {
    let exercise = catalog::lookup(exercise_id)?;
    let input = match serde_json::from_str::<Value>(raw_input) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "input is not json, using it as a string");
            Value::String(raw_input.to_string())
        }
    };
    let output = exercise
        .solve(&input)
        .with_context(|| format!("solve {exercise_id}"))?;
    println!("{output}");
    Ok(())
}

/// Print a pattern, one line per row, as each row is generated.
pub fn print_pattern(kind: PatternKind, rows: i64) {
    debug!(?kind, rows, "printing pattern");
    match kind {
        PatternKind::Asterisk => print_lines(patterns::asterisk_triangle(rows)),
        PatternKind::Palindrome => print_lines(patterns::palindromic_triangle(rows)),
    }
}

fn print_lines(lines: impl Iterator<Item = String>) {
    for line in lines {
        println!("{line}");
    }
}

/// Replay an inventory script (or the demo) and print the final stall.
///
/// Rejected operations are reported on stderr and do not stop the replay.
pub fn run_inventory(script_path: Option<&Path>) -> Result<()> {
    let script = match script_path {
        Some(path) => InventoryScript::load(path)?,
        None => InventoryScript::demo(),
    };
    let replayed = replay(&script.operations);
    for rejection in &replayed.rejections {
        eprintln!("rejected: {rejection}");
    }
    for line in &replayed.details {
        println!("{line}");
    }
    Ok(())
}
