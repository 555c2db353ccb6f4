//! Text normalization applied to both indexed text and queries.
//!
//! Two steps, always in this order:
//!
//! 1. replacement patterns, applied one after another to the running output
//!    (a later pattern sees the result of the earlier ones)
//! 2. lowercase folding, unless the index is case sensitive
//!
//! The built-in pattern list folds common Latin diacritics to their base
//! letter. A custom list replaces it entirely.

use crate::error::{Error, Result};
use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Built-in diacritic folding rules as `(pattern, alternate)` pairs.
pub const DEFAULT_REPLACE_PATTERNS: &[(&str, &str)] = &[
    ("[åäàáâã]", "a"),
    ("[èéêë]", "e"),
    ("[ìíîï]", "i"),
    ("[òóôõö]", "o"),
    ("[ùúûü]", "u"),
    ("[æ]", "ae"),
];

static DEFAULT_COMPILED: LazyLock<Vec<CompiledPattern>> = LazyLock::new(|| {
    DEFAULT_REPLACE_PATTERNS
        .iter()
        .map(|&(pattern, alternate)| CompiledPattern {
            regex: build_regex(pattern).expect("Invalid built-in replace pattern"),
            alternate: alternate.to_string(),
        })
        .collect()
});

/// A user-supplied replacement rule.
///
/// `pattern` is a regular expression matched case-insensitively; every match
/// is replaced by the literal `alternate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacePattern {
    pub pattern: String,
    pub alternate: String,
}

impl ReplacePattern {
    pub fn new(pattern: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            alternate: alternate.into(),
        }
    }

    /// The built-in diacritic rules in their uncompiled form.
    pub fn defaults() -> Vec<ReplacePattern> {
        DEFAULT_REPLACE_PATTERNS
            .iter()
            .map(|&(p, a)| ReplacePattern::new(p, a))
            .collect()
    }
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    regex: Regex,
    alternate: String,
}

/// Compiled normalization pipeline.
#[derive(Debug, Clone)]
pub struct Normalizer {
    patterns: Vec<CompiledPattern>,
    case_sensitive: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_COMPILED.clone(),
            case_sensitive: false,
        }
    }
}

impl Normalizer {
    /// Compile a custom pattern list. Fails on the first invalid pattern.
    pub fn new(patterns: &[ReplacePattern], case_sensitive: bool) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let regex = build_regex(&p.pattern).map_err(|source| Error::InvalidPattern {
                    pattern: p.pattern.clone(),
                    source,
                })?;
                Ok(CompiledPattern {
                    regex,
                    alternate: p.alternate.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            case_sensitive,
        })
    }

    /// Built-in patterns with the given case sensitivity.
    pub fn with_case_sensitivity(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            ..Self::default()
        }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn normalize(&self, text: &str) -> String {
        let replaced = apply_replace_patterns(text, &self.patterns);
        apply_case_sensitivity(replaced, self.case_sensitive)
    }
}

fn build_regex(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

fn apply_replace_patterns(text: &str, patterns: &[CompiledPattern]) -> String {
    let mut output = text.to_string();
    for p in patterns {
        if p.regex.is_match(&output) {
            output = p
                .regex
                .replace_all(&output, NoExpand(p.alternate.as_str()))
                .into_owned();
        }
    }
    output
}

/// Lowercase `text` unless case sensitivity is requested.
pub fn apply_case_sensitivity(text: String, case_sensitive: bool) -> String {
    if case_sensitive { text } else { text.to_lowercase() }
}
