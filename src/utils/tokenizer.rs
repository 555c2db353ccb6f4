use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Default word pattern: maximal runs of Unicode letters, marks and numbers.
pub const DEFAULT_WORD_PATTERN: &str = r"[\p{L}\p{M}\p{N}]+";

static DEFAULT_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_WORD_PATTERN).expect("Invalid default word pattern"));

type TokenizeFn = dyn Fn(&str) -> Vec<String> + Send + Sync;

/// Splits normalized text into ordered tokens.
///
/// Tokens are emitted in text order and may repeat. Empty strings are never
/// emitted, even when a custom function returns them.
#[derive(Clone)]
pub struct Tokenizer {
    kind: TokenizerKind,
}

#[derive(Clone)]
enum TokenizerKind {
    Words(Regex),
    Custom(Arc<TokenizeFn>),
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            kind: TokenizerKind::Words(DEFAULT_WORDS.clone()),
        }
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenizerKind::Words(re) => f.debug_tuple("Tokenizer::Words").field(&re.as_str()).finish(),
            TokenizerKind::Custom(_) => f.write_str("Tokenizer::Custom(..)"),
        }
    }
}

impl Tokenizer {
    /// Tokens are the matches of `pattern`.
    pub fn regex(pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|source| Error::InvalidWordPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            kind: TokenizerKind::Words(re),
        })
    }

    /// Tokens are whatever `f` returns.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            kind: TokenizerKind::Custom(Arc::new(f)),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match &self.kind {
            TokenizerKind::Words(re) => match_words(re, text),
            TokenizerKind::Custom(f) => {
                let mut tokens = f(text);
                tokens.retain(|t| !t.is_empty());
                tokens
            }
        }
    }
}

/// Collect every non-empty match of `re` in `text`.
pub fn match_words(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
