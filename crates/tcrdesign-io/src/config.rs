//! Design configuration file.
//!
//! A JSON object mapping structure names to design residues:
//!
//! ```json
//! {
//!     "6ZKW": ["110D", "111D", "112D", "134D", "135D"],
//!     "6ZKW_DE": ["113E", "114E", "133E"]
//! }
//! ```
//!
//! Structures are processed in file order.
use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tcrdesign_core::DesignResidue;

#[derive(Debug, Clone, PartialEq)]
pub struct DesignTarget {
    pub name: String,
    pub design: Vec<DesignResidue>,
}

pub fn read_config(path: &Path) -> Result<Vec<DesignTarget>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&content).with_context(|| format!("invalid config {}", path.display()))
}

fn parse_config(content: &str) -> Result<Vec<DesignTarget>> {
    let entries: Map<String, Value> = serde_json::from_str(content)?;
    entries
        .into_iter()
        .map(|(name, value)| {
            let residues: Vec<String> = serde_json::from_value(value)
                .map_err(|e| anyhow!("{}: expected a list of residues ({})", name, e))?;
            if residues.is_empty() {
                return Err(anyhow!("{}: no design residues", name));
            }
            let design = residues
                .iter()
                .map(|r| r.parse::<DesignResidue>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(DesignTarget { name, design })
        })
        .collect()
}
