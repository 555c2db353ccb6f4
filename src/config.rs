use crate::error::{Error, Result};
use crate::utils::ReplacePattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How values are rendered to text before indexing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringifyMode {
    /// Full JSON, field names included
    #[default]
    Json,
    /// JSON leaf values only, field names dropped
    JsonValuesOnly,
}

/// Engine configuration.
///
/// Every field is optional in the serialized form; missing fields take their
/// defaults. Closures (custom stringifier or tokenizer) cannot be expressed
/// here and go through [`crate::TrieSearchBuilder`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Keep case when normalizing
    pub case_sensitive: bool,

    /// Only exact-token matches; prefixes match nothing
    pub exclude_partial: bool,

    pub stringify: StringifyMode,

    /// Replaces the built-in diacritic rules when set
    pub replace_patterns: Option<Vec<ReplacePattern>>,

    /// Regex whose matches are the tokens. Letter/mark/number runs when unset
    pub word_pattern: Option<String>,
}

impl SearchOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save options as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
