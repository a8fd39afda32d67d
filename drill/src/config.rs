//! Drill configuration stored in `drill.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "drill.toml";

/// Drill configuration (TOML).
///
/// Meant to be edited by hand. Missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DrillConfig {
    /// Directory scanned for `*.toml` case files by `drill run`.
    pub cases_dir: PathBuf,

    /// Largest absolute difference at which two fractional numbers are equal.
    pub float_tolerance: f64,

    pub pattern: PatternConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PatternConfig {
    /// Rows printed by `drill pattern` when `--rows` is not given.
    pub default_rows: i64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self { default_rows: 5 }
    }
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            cases_dir: PathBuf::from("drill/cases"),
            float_tolerance: 1e-9,
            pattern: PatternConfig::default(),
        }
    }
}

impl DrillConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cases_dir.as_os_str().is_empty() {
            return Err(anyhow!("cases_dir must be non-empty"));
        }
        if !self.float_tolerance.is_finite() || self.float_tolerance < 0.0 {
            return Err(anyhow!("float_tolerance must be a finite number >= 0"));
        }
        if self.pattern.default_rows <= 0 {
            return Err(anyhow!("pattern.default_rows must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DrillConfig::default()`.
pub fn load_config(path: &Path) -> Result<DrillConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = DrillConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DrillConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, DrillConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("drill.toml");
        fs::write(&path, "float_tolerance = 0.01\n\n[pattern]\ndefault_rows = 3\n")
            .expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.float_tolerance, 0.01);
        assert_eq!(cfg.pattern.default_rows, 3);
        assert_eq!(cfg.cases_dir, PathBuf::from("drill/cases"));
    }

    #[test]
    fn serialized_default_loads_back() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("drill.toml");
        let contents = toml::to_string_pretty(&DrillConfig::default()).expect("serialize");
        fs::write(&path, contents).expect("write");
        assert_eq!(load_config(&path).expect("load"), DrillConfig::default());
    }

    #[test]
    fn rejects_negative_tolerance() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("drill.toml");
        fs::write(&path, "float_tolerance = -1.0\n").expect("write");
        let err = load_config(&path).expect_err("invalid tolerance");
        assert!(format!("{err:#}").contains("float_tolerance"));
    }

    #[test]
    fn rejects_non_positive_rows() {
        let cfg = DrillConfig {
            pattern: PatternConfig { default_rows: 0 },
            ..DrillConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
