use serde::Serialize;

use crate::judge::{CheckOutcome, Judgment};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

/// A case errors if any input could not be dispatched, fails if any result
/// differs, and passes otherwise.
pub fn classify_outcome(judgment: &Judgment) -> Outcome {
    let errored = judgment
        .checks
        .iter()
        .any(|check| matches!(check, CheckOutcome::Errored { .. }));
    if errored {
        return Outcome::Error;
    }
    if judgment.checks.iter().all(CheckOutcome::passed) {
        Outcome::Pass
    } else {
        Outcome::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn judgment(checks: Vec<CheckOutcome>) -> Judgment {
        Judgment {
            case_id: "case".to_string(),
            exercise: "median".to_string(),
            checks,
        }
    }

    fn passed() -> CheckOutcome {
        CheckOutcome::Passed {
            label: "ok".to_string(),
        }
    }

    fn failed() -> CheckOutcome {
        CheckOutcome::Failed {
            label: "bad".to_string(),
            expected: json!(1),
            actual: json!(2),
        }
    }

    fn errored() -> CheckOutcome {
        CheckOutcome::Errored {
            label: "boom".to_string(),
            error: "invalid input".to_string(),
        }
    }

    #[test]
    fn pass_when_every_check_passes() {
        assert_eq!(classify_outcome(&judgment(vec![passed(), passed()])), Outcome::Pass);
    }

    #[test]
    fn fail_when_any_check_fails() {
        assert_eq!(classify_outcome(&judgment(vec![passed(), failed()])), Outcome::Fail);
    }

    #[test]
    fn error_outranks_failure() {
        assert_eq!(
            classify_outcome(&judgment(vec![failed(), errored()])),
            Outcome::Error
        );
    }
}
