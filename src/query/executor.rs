use crate::index::{Trie, ValueId, ValueSet};
use crate::query::intersect::intersect;
use crate::query::parser::Query;
use tracing::{debug, trace};

/// Query executor
pub struct QueryExecutor<'a> {
    trie: &'a Trie<ValueId>,
    exclude_partial: bool,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(trie: &'a Trie<ValueId>) -> Self {
        Self {
            trie,
            exclude_partial: false,
        }
    }

    /// Restrict every token to exact matches.
    pub fn exclude_partial(mut self, exclude: bool) -> Self {
        self.exclude_partial = exclude;
        self
    }

    /// Execute a query and return matching ids.
    ///
    /// Tokens whose path is missing from the trie are skipped. A token whose
    /// node exists but yields no candidates empties the whole result.
    pub fn execute(&self, query: &Query) -> Vec<ValueId> {
        let Some(sets) = self.candidate_sets(query) else {
            return Vec::new();
        };
        if sets.is_empty() {
            return Vec::new();
        }

        let results = intersect(&sets);
        trace!(
            tokens = query.tokens.len(),
            sets = sets.len(),
            results = results.len(),
            "query executed"
        );
        results
    }

    /// One candidate set per found token, or `None` on a found-but-empty node.
    fn candidate_sets(&self, query: &Query) -> Option<Vec<ValueSet<ValueId>>> {
        let mut sets = Vec::with_capacity(query.tokens.len());

        for token in &query.tokens {
            let Some(node) = self.trie.lookup(token) else {
                trace!(token = %token, "token path not found, skipping");
                continue;
            };

            let mut set: ValueSet<ValueId> = node.complete().iter().copied().collect();
            if !self.exclude_partial {
                set.extend(node.partial().iter().copied());
            }

            if set.is_empty() {
                debug!(token = %token, "token matched a node with no candidates");
                return None;
            }
            sets.push(set);
        }

        Some(sets)
    }
}
