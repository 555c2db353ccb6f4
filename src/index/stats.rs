use serde::Serialize;
use std::fmt;

/// Size summary of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IndexStats {
    /// Distinct values stored
    pub values: usize,
    /// Trie nodes (one per distinct character position)
    pub nodes: usize,
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index Statistics")?;
        writeln!(f, "================")?;
        writeln!(f)?;
        writeln!(f, "Values:           {}", self.values)?;
        write!(f, "Trie nodes:       {}", self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let stats = IndexStats { values: 3, nodes: 12 };
        let text = stats.to_string();
        assert!(text.contains("Values:           3"));
        assert!(text.ends_with("Trie nodes:       12"));
    }
}
