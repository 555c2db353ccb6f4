//! # trie-search - In-memory prefix search over arbitrary values
//!
//! trie-search indexes any value by the words of its textual form and answers
//! multi-word queries where every word must match, either exactly or as a
//! prefix of an indexed word. It is meant for autocomplete and client-side
//! filtering over a corpus that fits in memory.
//!
//! ## Architecture
//!
//! - [`utils`] - Text pipeline: normalizer, tokenizer, stringifier
//! - [`index`] - Character trie, identity-based value store, stats
//! - [`query`] - Query preparation, execution, set intersection
//! - [`engine`] - [`TrieSearch`], tying ingestion and querying together
//! - [`config`] - Serializable engine options
//!
//! ## Quick Start
//!
//! ```
//! use serde::Serialize;
//! use trie_search::TrieSearch;
//!
//! #[derive(Serialize)]
//! struct Item {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let mut engine: TrieSearch<Item> = TrieSearch::new();
//! engine.add(Item { id: 1, name: "Apple pie" }).unwrap();
//! engine.add(Item { id: 2, name: "Chips & apple" }).unwrap();
//!
//! let hits: Vec<u32> = engine.search("appl chip").iter().map(|i| i.id).collect();
//! assert_eq!(hits, vec![2]);
//! ```
//!
//! ## Matching rules
//!
//! 1. Text is folded (Latin diacritics, then lowercase unless case
//!    sensitive) and split into letter/mark/number runs.
//! 2. Each query token selects the values indexed under it exactly, plus
//!    values under longer tokens it prefixes (unless partial matches are
//!    excluded).
//! 3. Results are the intersection across query tokens. A query token with
//!    no trie path at all is ignored; one whose node has no candidates
//!    empties the result.

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod utils;

pub use config::{SearchOptions, StringifyMode};
pub use engine::{TrieSearch, TrieSearchBuilder};
pub use error::{Error, Result};
pub use index::IndexStats;
pub use utils::{ReplacePattern, Stringifier, StringifyError, Tokenizer};
