pub mod stats;
pub mod store;
pub mod trie;

pub use stats::IndexStats;
pub use store::{ValueId, ValueStore};
pub use trie::{NodeView, Trie, TrieNode, ValueSet};
