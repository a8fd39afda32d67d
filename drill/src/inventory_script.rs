//! Inventory scripts: TOML lists of book-stall operations.
//!
//! ```toml
//! [[operations]]
//! op = "create"
//! title = "Bohubrihi"
//! author = "Humayun Ahmed"
//! copies = 10
//!
//! [[operations]]
//! op = "sell"
//! title = "Bohubrihi"
//! copies = 3
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use katas::inventory::Operation;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InventoryScript {
    pub operations: Vec<Operation>,
}

impl InventoryScript {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read inventory script {}", path.display()))?;
        Self::parse_str(&contents)
            .with_context(|| format!("parse inventory script {}", path.display()))
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let script: InventoryScript = toml::from_str(contents).context("parse toml")?;
        if script.operations.is_empty() {
            bail!("operations must be a non-empty array");
        }
        Ok(script)
    }

    /// Create one title with 10 copies, add 5, sell 3.
    pub fn demo() -> Self {
        let title = "Bohubrihi".to_string();
        Self {
            operations: vec![
                Operation::Create {
                    title: title.clone(),
                    author: "Humayun Ahmed".to_string(),
                    copies: 10,
                },
                Operation::Add {
                    title: title.clone(),
                    copies: 5,
                },
                Operation::Sell { title, copies: 3 },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katas::inventory::replay;

    #[test]
    fn parses_tagged_operations() {
        let input = r#"
[[operations]]
op = "create"
title = "Himu"
author = "Humayun Ahmed"
copies = 2

[[operations]]
op = "sell"
title = "Himu"
copies = 5
"#;
        let script = InventoryScript::parse_str(input).expect("script parses");
        assert_eq!(script.operations.len(), 2);
        let replayed = replay(&script.operations);
        assert_eq!(
            replayed.details,
            vec!["\"Himu\" by Humayun Ahmed - Copies Available: 2"]
        );
        assert_eq!(replayed.rejections.len(), 1);
    }

    #[test]
    fn rejects_unknown_operation() {
        let input = r#"
[[operations]]
op = "burn"
title = "Himu"
"#;
        assert!(InventoryScript::parse_str(input).is_err());
    }

    #[test]
    fn rejects_empty_script() {
        let err = InventoryScript::parse_str("operations = []\n").expect_err("empty");
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn demo_leaves_twelve_copies() {
        let replayed = replay(&InventoryScript::demo().operations);
        assert_eq!(
            replayed.details,
            vec!["\"Bohubrihi\" by Humayun Ahmed - Copies Available: 12"]
        );
        assert!(replayed.rejections.is_empty());
    }
}
