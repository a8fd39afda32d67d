use std::collections::BTreeMap;

use crate::judge::Judgment;
use crate::outcome::{Outcome, classify_outcome};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub cases: usize,
    pub pass: usize,
    pub fail: usize,
    pub error: usize,
    /// Exercise id -> (passed checks, total checks).
    pub check_pass_rates: BTreeMap<String, (usize, usize)>,
}

impl ReportSummary {
    pub fn all_passed(&self) -> bool {
        self.fail == 0 && self.error == 0
    }
}

pub fn aggregate(judgments: &[Judgment]) -> ReportSummary {
    let mut summary = ReportSummary::default();
    for judgment in judgments {
        summary.cases += 1;
        match classify_outcome(judgment) {
            Outcome::Pass => summary.pass += 1,
            Outcome::Fail => summary.fail += 1,
            Outcome::Error => summary.error += 1,
        }

        let entry = summary
            .check_pass_rates
            .entry(judgment.exercise.clone())
            .or_insert((0, 0));
        entry.0 += judgment.checks.iter().filter(|check| check.passed()).count();
        entry.1 += judgment.checks.len();
    }
    summary
}
