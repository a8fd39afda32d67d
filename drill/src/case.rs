//! Case file parsing and validation.
//!
//! Cases are TOML files pairing literal inputs with the output an exercise
//! must produce. See `drill/cases/` for examples.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use katas::catalog::{self, Exercise};
use serde::Deserialize;
use serde_json::Value;

/// A parsed case file: which exercise to run and what to check.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CaseFile {
    pub case: CaseMeta,
    #[serde(default)]
    pub checks: Vec<Check>,
}

/// Case metadata: identifier and target exercise.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    /// Catalog id of the exercise under test.
    pub exercise: String,
}

/// One literal input and its expected output.
///
/// TOML has no `null`, so a check expecting the "no result" sentinel sets
/// `no_result = true` instead of `expected`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Check {
    #[serde(default)]
    pub name: Option<String>,
    pub input: Value,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(default)]
    pub no_result: bool,
}

impl Check {
    /// The value the exercise must return, `null` for the sentinel.
    pub fn expected_value(&self) -> Value {
        self.expected.clone().unwrap_or(Value::Null)
    }

    /// Short label used in reports: the name, or the compact input.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.input.to_string(),
        }
    }

    fn validate(&self) -> Result<()> {
        match (&self.expected, self.no_result) {
            (Some(_), true) => bail!("set either expected or no_result, not both"),
            (None, false) => bail!("expected is required unless no_result = true"),
            _ => {}
        }
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            bail!("name must be non-empty when present");
        }
        Ok(())
    }
}

impl CaseFile {
    /// Load and validate a case file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read case {}", path.display()))?;
        let case: CaseFile =
            toml::from_str(&contents).with_context(|| format!("parse case {}", path.display()))?;
        case.validate()
            .with_context(|| format!("validate case {}", path.display()))?;
        Ok(case)
    }

    #[cfg(test)]
    pub fn parse_str(contents: &str) -> Result<Self> {
        let case: CaseFile = toml::from_str(contents).context("parse case")?;
        case.validate()?;
        Ok(case)
    }

    /// Built-in case made of an exercise's literal samples.
    pub fn from_samples(exercise: &Exercise) -> Self {
        let checks = exercise
            .samples()
            .into_iter()
            .map(|sample| {
                let no_result = sample.expected.is_null();
                Check {
                    name: None,
                    input: sample.input,
                    expected: (!no_result).then_some(sample.expected),
                    no_result,
                }
            })
            .collect();
        Self {
            case: CaseMeta {
                id: format!("samples-{}", exercise.id),
                exercise: exercise.id.to_string(),
            },
            checks,
        }
    }

    /// Resolve the exercise this case targets.
    pub fn exercise(&self) -> Result<&'static Exercise> {
        Ok(catalog::lookup(&self.case.exercise)?)
    }

    fn validate(&self) -> Result<()> {
        validate_case_id(&self.case.id)?;
        self.exercise()?;
        if self.checks.is_empty() {
            bail!("checks must be a non-empty array");
        }
        for (index, check) in self.checks.iter().enumerate() {
            check
                .validate()
                .with_context(|| format!("checks[{}] invalid", index))?;
        }
        Ok(())
    }
}

/// Discover and load all case files from a directory.
///
/// Returns cases sorted by id. Errors if duplicate ids are found.
pub fn discover_cases(dir: &Path) -> Result<Vec<CaseFile>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut cases = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read cases dir {}", dir.display()))? {
        let entry = entry.context("read case entry")?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        cases.push(CaseFile::load(&path)?);
    }
    cases.sort_by(|left, right| left.case.id.cmp(&right.case.id));
    for pair in cases.windows(2) {
        if pair[0].case.id == pair[1].case.id {
            return Err(anyhow!("duplicate case.id {}", pair[0].case.id));
        }
    }
    Ok(cases)
}

fn validate_case_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("case.id must be non-empty");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("case.id must use [a-z0-9_-] only");
    }
    Ok(())
}
