//! Text pipeline stages.
//!
//! ## Modules
//!
//! - [`normalize`] - Diacritic folding via replacement patterns, case folding
//! - [`tokenizer`] - Word extraction (letter/mark/number runs by default)
//! - [`stringify`] - Value-to-text rendering for ingestion
//!
//! ```
//! use trie_search::utils::{Normalizer, Tokenizer};
//!
//! let normalized = Normalizer::default().normalize("Crème BRÛLÉE");
//! let tokens = Tokenizer::default().tokenize(&normalized);
//! assert_eq!(tokens, vec!["creme", "brulee"]);
//! ```

pub mod normalize;
pub mod stringify;
pub mod tokenizer;

pub use normalize::*;
pub use stringify::*;
pub use tokenizer::*;
