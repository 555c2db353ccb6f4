//! Error types for trie-search.
//!
//! Matching never fails: "no match" is an empty result. Errors only come from
//! building an engine with a malformed configuration, from a stringifier
//! that cannot render a value, or from adding to a full index.

use crate::utils::stringify::StringifyError;
use thiserror::Error;

/// Result type alias for trie-search operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A replacement pattern did not compile.
    #[error("invalid replace pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A custom word pattern did not compile.
    #[error("invalid word pattern '{pattern}': {source}")]
    InvalidWordPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("stringify error: {0}")]
    Stringify(#[from] StringifyError),

    /// The index already holds as many values as it can address.
    #[error("index is full: cannot store more than {limit} values")]
    Capacity { limit: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
