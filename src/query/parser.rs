use crate::utils::{Normalizer, Tokenizer};

/// A query after normalization and tokenization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Tokens in query order; duplicates are kept
    pub tokens: Vec<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Run raw query text through the same pipeline as indexed text.
///
/// No stringify step: the query is already text.
pub fn parse_query(input: &str, normalizer: &Normalizer, tokenizer: &Tokenizer) -> Query {
    let normalized = normalizer.normalize(input);
    Query {
        tokens: tokenizer.tokenize(&normalized),
    }
}
