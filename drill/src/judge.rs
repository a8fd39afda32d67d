//! Check execution and outcome recording.
//!
//! Feeds every check's input to the target exercise and compares the result
//! with the expected value.

use katas::catalog::{Exercise, values_match};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::case::{CaseFile, Check};

/// Collected check outcomes for one case.
#[derive(Debug, Serialize)]
pub struct Judgment {
    pub case_id: String,
    pub exercise: String,
    pub checks: Vec<CheckOutcome>,
}

/// Result of running a single check.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Passed {
        label: String,
    },
    Failed {
        label: String,
        expected: Value,
        actual: Value,
    },
    /// The input could not be dispatched to the exercise.
    Errored {
        label: String,
        error: String,
    },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed { .. })
    }
}

/// Run all checks of a case and collect outcomes.
#[instrument(skip_all, fields(case_id = %case.case.id, check_count = case.checks.len()))]
pub fn run_checks(case: &CaseFile, exercise: &Exercise, tolerance: f64) -> Judgment {
    let checks = case
        .checks
        .iter()
        .map(|check| judge_check(exercise, check, tolerance))
        .collect();
    Judgment {
        case_id: case.case.id.clone(),
        exercise: exercise.id.to_string(),
        checks,
    }
}

fn judge_check(exercise: &Exercise, check: &Check, tolerance: f64) -> CheckOutcome {
    let label = check.label();
    let expected = check.expected_value();
    match exercise.solve(&check.input) {
        Ok(actual) if values_match(&actual, &expected, tolerance) => {
            debug!(check = %label, "check passed");
            CheckOutcome::Passed { label }
        }
        Ok(actual) => {
            debug!(check = %label, %expected, %actual, "check failed");
            CheckOutcome::Failed {
                label,
                expected,
                actual,
            }
        }
        Err(err) => {
            warn!(check = %label, error = %err, "check errored");
            CheckOutcome::Errored {
                label,
                error: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katas::catalog;
    use serde_json::json;

    fn case(exercise: &str, checks: Vec<Check>) -> CaseFile {
        CaseFile {
            case: crate::case::CaseMeta {
                id: "case".to_string(),
                exercise: exercise.to_string(),
            },
            checks,
        }
    }

    fn check(input: Value, expected: Value) -> Check {
        Check {
            name: None,
            input,
            expected: Some(expected),
            no_result: false,
        }
    }

    #[test]
    fn classifies_pass_fail_and_error() {
        let exercise = catalog::lookup("roman-to-int").expect("roman-to-int");
        let case = case(
            "roman-to-int",
            vec![
                check(json!("MCMXC"), json!(1990)),
                check(json!("IV"), json!(6)),
                check(json!(42), json!(42)),
            ],
        );
        let judgment = run_checks(&case, exercise, 1e-9);
        assert!(judgment.checks[0].passed());
        assert!(matches!(
            &judgment.checks[1],
            CheckOutcome::Failed { actual, .. } if *actual == json!(4)
        ));
        assert!(matches!(&judgment.checks[2], CheckOutcome::Errored { .. }));
    }

    #[test]
    fn sentinel_checks_expect_null() {
        let exercise = catalog::lookup("median").expect("median");
        let case = case(
            "median",
            vec![Check {
                name: Some("empty".to_string()),
                input: json!([]),
                expected: None,
                no_result: true,
            }],
        );
        let judgment = run_checks(&case, exercise, 1e-9);
        assert!(matches!(
            &judgment.checks[0],
            CheckOutcome::Passed { label } if label == "empty"
        ));
    }

    #[test]
    fn tolerance_applies_to_fractional_results() {
        let exercise = catalog::lookup("strike-rate").expect("strike-rate");
        let case = case(
            "strike-rate",
            vec![check(json!({"runs": 100, "balls": 60}), json!(166.6))],
        );
        assert!(!run_checks(&case, exercise, 1e-9).checks[0].passed());
        assert!(run_checks(&case, exercise, 0.1).checks[0].passed());
    }
}
