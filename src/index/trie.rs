//! Character trie mapping tokens to the values they were indexed for.
//!
//! Each node tracks two insertion-ordered sets:
//!
//! - `complete`: values whose token ends exactly at this node
//! - `partial`: values whose token continues past this node
//!
//! One node per character; no path compression.

use ahash::{AHashMap, RandomState};
use indexmap::IndexSet;
use std::hash::Hash;

/// Insertion-ordered set used for per-node value bookkeeping.
pub type ValueSet<T> = IndexSet<T, RandomState>;

#[derive(Debug, Clone)]
pub struct TrieNode<T> {
    children: AHashMap<char, TrieNode<T>>,
    complete: ValueSet<T>,
    partial: ValueSet<T>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            children: AHashMap::new(),
            complete: ValueSet::default(),
            partial: ValueSet::default(),
        }
    }
}

impl<T> TrieNode<T> {
    fn count_nodes(&self) -> usize {
        1 + self.children.values().map(TrieNode::count_nodes).sum::<usize>()
    }
}

/// Read-only view of the node reached by a successful lookup.
///
/// Borrows the trie, so it cannot outlive a later insertion or `clear`.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a, T> {
    node: &'a TrieNode<T>,
}

impl<'a, T> NodeView<'a, T> {
    /// Values whose token is exactly the looked-up token.
    pub fn complete(&self) -> &'a ValueSet<T> {
        &self.node.complete
    }

    /// Values whose token has the looked-up token as a proper prefix.
    pub fn partial(&self) -> &'a ValueSet<T> {
        &self.node.partial
    }

    pub fn is_terminal(&self) -> bool {
        !self.node.complete.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Trie<T> {
    root: TrieNode<T>,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self {
            root: TrieNode::default(),
        }
    }
}

impl<T: Copy + Eq + Hash> Trie<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `value` under `token`.
    ///
    /// `value` joins the partial set of every node before the last character
    /// and the complete set of the last one. Repeating an insertion changes
    /// nothing. An empty token is ignored.
    pub fn insert(&mut self, token: &str, value: T) {
        let mut chars = token.chars().peekable();
        let mut node = &mut self.root;

        while let Some(ch) = chars.next() {
            node = node.children.entry(ch).or_default();
            if chars.peek().is_some() {
                node.partial.insert(value);
            } else {
                node.complete.insert(value);
            }
        }
    }

    /// Index `value` under each of `tokens`.
    pub fn insert_many<I, S>(&mut self, tokens: I, value: T)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.insert(token.as_ref(), value);
        }
    }

    /// Walk to the node for `token`.
    ///
    /// `None` means some character has no child: the path does not exist.
    /// That is different from `Some` with empty sets.
    pub fn lookup(&self, token: &str) -> Option<NodeView<'_, T>> {
        let mut node = &self.root;
        for ch in token.chars() {
            node = node.children.get(&ch)?;
        }
        Some(NodeView { node })
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(set: &ValueSet<u32>) -> Vec<u32> {
        set.iter().copied().collect()
    }

    #[test]
    fn test_insert_marks_partial_and_complete() {
        let mut trie = Trie::new();
        trie.insert("apple", 1u32);

        for prefix in ["a", "ap", "app", "appl"] {
            let view = trie.lookup(prefix).unwrap();
            assert_eq!(collect(view.partial()), vec![1], "prefix {prefix}");
            assert!(view.complete().is_empty(), "prefix {prefix}");
        }

        let view = trie.lookup("apple").unwrap();
        assert_eq!(collect(view.complete()), vec![1]);
        assert!(view.partial().is_empty());
        assert!(view.is_terminal());
    }

    #[test]
    fn test_shorter_token_is_not_partial_for_itself() {
        let mut trie = Trie::new();
        trie.insert("apple", 1u32);
        trie.insert("applesauce", 2u32);

        let apple = trie.lookup("apple").unwrap();
        assert_eq!(collect(apple.complete()), vec![1]);
        assert_eq!(collect(apple.partial()), vec![2]);

        let app = trie.lookup("app").unwrap();
        assert_eq!(collect(app.partial()), vec![1, 2]);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("pie", 3u32);
        let nodes = trie.node_count();
        trie.insert("pie", 3u32);

        assert_eq!(trie.node_count(), nodes);
        assert_eq!(collect(trie.lookup("pi").unwrap().partial()), vec![3]);
        assert_eq!(collect(trie.lookup("pie").unwrap().complete()), vec![3]);
    }

    #[test]
    fn test_sets_keep_insertion_order() {
        let mut trie = Trie::new();
        for v in [5u32, 2, 9, 2, 1] {
            trie.insert("oil", v);
        }
        assert_eq!(collect(trie.lookup("oil").unwrap().complete()), vec![5, 2, 9, 1]);
    }

    #[test]
    fn test_lookup_missing_path() {
        let mut trie = Trie::new();
        trie.insert("apple", 1u32);
        assert!(trie.lookup("aple").is_none());
        assert!(trie.lookup("apples").is_none());
        assert!(trie.lookup("b").is_none());
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let mut trie = Trie::new();
        trie.insert("", 1u32);
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn test_single_char_token() {
        let mut trie = Trie::new();
        trie.insert("1", 1u32);
        let view = trie.lookup("1").unwrap();
        assert_eq!(collect(view.complete()), vec![1]);
        assert!(view.partial().is_empty());
    }

    #[test]
    fn test_multibyte_characters() {
        let mut trie = Trie::new();
        trie.insert("東京", 1u32);
        assert_eq!(trie.node_count(), 2);
        assert_eq!(collect(trie.lookup("東").unwrap().partial()), vec![1]);
        assert_eq!(collect(trie.lookup("東京").unwrap().complete()), vec![1]);
    }

    #[test]
    fn test_insert_many() {
        let mut trie = Trie::new();
        trie.insert_many(["chips", "apple"], 6u32);
        assert_eq!(collect(trie.lookup("chips").unwrap().complete()), vec![6]);
        assert_eq!(collect(trie.lookup("apple").unwrap().complete()), vec![6]);
    }

    #[test]
    fn test_clear() {
        let mut trie = Trie::new();
        trie.insert("apple", 1u32);
        trie.clear();
        assert!(trie.is_empty());
        assert!(trie.lookup("a").is_none());
    }

    #[test]
    fn test_node_count_shares_prefixes() {
        let mut trie = Trie::new();
        trie.insert("app", 1u32);
        trie.insert("apple", 2u32);
        trie.insert("bat", 3u32);
        // a-p-p-l-e + b-a-t
        assert_eq!(trie.node_count(), 8);
    }
}
