//! The search engine: ingestion pipeline plus query execution.

use crate::config::{SearchOptions, StringifyMode};
use crate::error::Result;
use crate::index::{IndexStats, Trie, ValueId, ValueStore};
use crate::query::{QueryExecutor, parse_query};
use crate::utils::{Normalizer, ReplacePattern, Stringifier, Tokenizer};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

/// In-memory text index over arbitrary values.
///
/// Values are rendered to text, normalized, split into tokens and indexed
/// per token. [`search`](Self::search) matches every query token as an
/// exact token or, unless disabled, as a prefix of one, and returns the
/// values matching all of them.
///
/// Values are identified by their `Arc` allocation. Adding a clone of an
/// `Arc` already in the index is a no-op for search results; adding an equal
/// value in a fresh allocation stores a second value.
///
/// Not internally synchronized: wrap it in a lock to share across threads.
#[derive(Debug)]
pub struct TrieSearch<V> {
    trie: Trie<ValueId>,
    store: ValueStore<V>,
    normalizer: Normalizer,
    tokenizer: Tokenizer,
    stringifier: Stringifier<V>,
    exclude_partial: bool,
}

impl<V: Serialize> Default for TrieSearch<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> TrieSearch<V> {
    /// Engine with default settings: JSON stringify, built-in diacritic
    /// folding, case-insensitive, prefix matching on.
    pub fn new() -> Self {
        Self::from_parts(
            Normalizer::default(),
            Tokenizer::default(),
            Stringifier::json(),
            false,
        )
    }

    /// Engine configured from serializable options.
    pub fn with_options(options: SearchOptions) -> Result<Self> {
        TrieSearchBuilder::from_options(options).build()
    }

    pub fn builder() -> TrieSearchBuilder<V> {
        TrieSearchBuilder::new()
    }
}

impl<V> TrieSearch<V> {
    fn from_parts(
        normalizer: Normalizer,
        tokenizer: Tokenizer,
        stringifier: Stringifier<V>,
        exclude_partial: bool,
    ) -> Self {
        debug!(
            case_sensitive = normalizer.case_sensitive(),
            exclude_partial,
            replace_patterns = normalizer.pattern_count(),
            "trie search engine created"
        );
        Self {
            trie: Trie::new(),
            store: ValueStore::new(),
            normalizer,
            tokenizer,
            stringifier,
            exclude_partial,
        }
    }

    /// Index one value and return the handle it is stored under.
    ///
    /// Rendering happens before any mutation: if the stringifier fails the
    /// index is left untouched.
    pub fn add(&mut self, value: impl Into<Arc<V>>) -> Result<Arc<V>> {
        let value = value.into();
        let text = self.stringifier.stringify(&value)?;
        let tokens = self.tokens_for(&text);

        let id = self.store.intern(&value)?;
        self.trie.insert_many(&tokens, id);
        trace!(id, tokens = tokens.len(), "value indexed");

        Ok(value)
    }

    /// Index values in order. Stops at the first failure; values before it
    /// stay indexed.
    pub fn add_many<I>(&mut self, values: I) -> Result<Vec<Arc<V>>>
    where
        I: IntoIterator,
        I::Item: Into<Arc<V>>,
    {
        values.into_iter().map(|v| self.add(v)).collect()
    }

    /// Values matching every found query token.
    ///
    /// Query tokens absent from the index are ignored. A token that reaches
    /// a node with no qualifying values makes the whole result empty.
    pub fn search(&self, query: &str) -> Vec<Arc<V>> {
        let query = parse_query(query, &self.normalizer, &self.tokenizer);
        if query.is_empty() {
            return Vec::new();
        }

        QueryExecutor::new(&self.trie)
            .exclude_partial(self.exclude_partial)
            .execute(&query)
            .into_iter()
            .filter_map(|id| self.store.get(id).cloned())
            .collect()
    }

    /// Drop every value and node.
    pub fn clear(&mut self) {
        debug!(values = self.store.len(), "clearing index");
        self.trie.clear();
        self.store.clear();
    }

    /// Tokens `text` would be indexed or queried under.
    pub fn tokens_for(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(&self.normalizer.normalize(text))
    }

    /// Number of distinct values added, including values that produced no
    /// tokens.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Stored values in first-insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Arc<V>> {
        self.store.iter()
    }

    pub fn contains(&self, value: &Arc<V>) -> bool {
        self.store.id_of(value).is_some()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            values: self.store.len(),
            nodes: self.trie.node_count(),
        }
    }
}

/// Builder for [`TrieSearch`].
///
/// Configuration is validated in `build`: invalid patterns are reported
/// there rather than at first use.
#[derive(Debug)]
pub struct TrieSearchBuilder<V> {
    options: SearchOptions,
    stringifier: Option<Stringifier<V>>,
    tokenizer: Option<Tokenizer>,
}

impl<V> Default for TrieSearchBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieSearchBuilder<V> {
    pub fn new() -> Self {
        Self::from_options(SearchOptions::default())
    }

    pub fn from_options(options: SearchOptions) -> Self {
        Self {
            options,
            stringifier: None,
            tokenizer: None,
        }
    }

    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.options.case_sensitive = yes;
        self
    }

    pub fn exclude_partial(mut self, yes: bool) -> Self {
        self.options.exclude_partial = yes;
        self
    }

    pub fn stringify_mode(mut self, mode: StringifyMode) -> Self {
        self.options.stringify = mode;
        self
    }

    /// Replace the built-in diacritic rules.
    pub fn replace_patterns(mut self, patterns: Vec<ReplacePattern>) -> Self {
        self.options.replace_patterns = Some(patterns);
        self
    }

    pub fn word_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.options.word_pattern = Some(pattern.into());
        self
    }

    /// Custom tokenizer; takes precedence over `word_pattern`.
    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Custom stringifier; takes precedence over the stringify mode.
    pub fn stringifier(mut self, stringifier: Stringifier<V>) -> Self {
        self.stringifier = Some(stringifier);
        self
    }

    /// Build with `stringifier`, for value types that are not `Serialize`.
    pub fn build_with_stringifier(self, stringifier: Stringifier<V>) -> Result<TrieSearch<V>> {
        let Self {
            options, tokenizer, ..
        } = self;

        let normalizer = match &options.replace_patterns {
            Some(patterns) => Normalizer::new(patterns, options.case_sensitive)?,
            None => Normalizer::with_case_sensitivity(options.case_sensitive),
        };
        let tokenizer = match (tokenizer, &options.word_pattern) {
            (Some(t), _) => t,
            (None, Some(pattern)) => Tokenizer::regex(pattern)?,
            (None, None) => Tokenizer::default(),
        };

        Ok(TrieSearch::from_parts(
            normalizer,
            tokenizer,
            stringifier,
            options.exclude_partial,
        ))
    }
}

impl<V: Serialize> TrieSearchBuilder<V> {
    pub fn build(mut self) -> Result<TrieSearch<V>> {
        let stringifier = match self.stringifier.take() {
            Some(s) => s,
            None => match self.options.stringify {
                StringifyMode::Json => Stringifier::json(),
                StringifyMode::JsonValuesOnly => Stringifier::json_values_only(),
            },
        };
        self.build_with_stringifier(stringifier)
    }
}
