//! JSON-based rule set loader
//!
//! A rule year is stored as one JSON document mirroring `RuleSet`.
//! `income_crediting` may be omitted and then takes the statutory defaults;
//! every other section is required.

use super::RuleSet;
use crate::error::LoadError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default directory holding one JSON file per rule year
pub const DEFAULT_RULES_DIR: &str = "data/rules";

/// Load and validate a rule set from a JSON file
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<RuleSet, LoadError> {
    let file = File::open(path.as_ref())?;
    let rules = load_rules_from_reader(BufReader::new(file))?;
    log::info!(
        "Loaded rule set '{}' from {}",
        rules.label,
        path.as_ref().display()
    );
    Ok(rules)
}

/// Load and validate a rule set from any reader
pub fn load_rules_from_reader<R: Read>(reader: R) -> Result<RuleSet, LoadError> {
    let rules: RuleSet = serde_json::from_reader(reader)?;
    rules.validate()?;
    Ok(rules)
}

impl RuleSet {
    /// Load a rule set from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self, LoadError> {
        load_rules(path)
    }

    /// Load a rule set from a JSON reader
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        load_rules_from_reader(reader)
    }
}
