//! Key enumeration: flattens a [`CandidateTree`] into candidate keys.

use std::fmt;

use serde::Serialize;

use crate::tree::{CandidateTree, NodeId};

/// One hypothesised key, as the ciphertext letters that won the frequency
/// count of each column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct CandidateKey(Vec<char>);

impl CandidateKey {
    /// Wraps key letters taken from one root-to-leaf path.
    pub fn new(letters: Vec<char>) -> Self {
        CandidateKey(letters)
    }

    /// Key letters in position order.
    pub fn letters(&self) -> &[char] {
        &self.0
    }

    /// Number of key positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the key has no letters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CandidateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl From<CandidateKey> for String {
    fn from(key: CandidateKey) -> Self {
        key.0.into_iter().collect()
    }
}

/// Collects every root-to-leaf path of `tree`, depth-first, visiting
/// branches in creation order.
///
/// Traversal uses an explicit stack, so arbitrarily long keys are safe.
pub fn enumerate_keys(tree: &CandidateTree) -> Vec<CandidateKey> {
    let mut keys = Vec::new();
    let mut path: Vec<char> = Vec::with_capacity(tree.key_length());
    let mut stack: Vec<NodeId> = tree.roots().iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        path.truncate(node.depth());
        path.push(node.letter());
        if node.is_leaf() {
            keys.push(CandidateKey::new(path.clone()));
        } else {
            stack.extend(node.children().iter().rev().copied());
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn build(columns: &[&str]) -> CandidateTree {
        let tables: Vec<FrequencyTable> = columns
            .iter()
            .map(|c| FrequencyTable::from_category(&c.chars().collect::<Vec<_>>()))
            .collect();
        CandidateTree::build(&tables, None).unwrap()
    }

    fn rendered(keys: &[CandidateKey]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_single_key() {
        let keys = enumerate_keys(&build(&["AAB", "CCD"]));
        assert_eq!(rendered(&keys), vec!["AC"]);
    }

    #[test]
    fn test_depth_first_creation_order() {
        let keys = enumerate_keys(&build(&["AB", "X", "CD"]));
        assert_eq!(rendered(&keys), vec!["AXC", "AXD", "BXC", "BXD"]);
    }

    #[test]
    fn test_keys_match_leaves_and_length() {
        let tree = build(&["ABC", "DD", "EF", "G"]);
        let keys = enumerate_keys(&tree);
        assert_eq!(keys.len(), tree.leaf_count());
        assert_eq!(keys.len(), 6);
        assert!(keys.iter().all(|k| k.len() == 4));
    }

    #[test]
    fn test_key_length_one() {
        let keys = enumerate_keys(&build(&["QRQR"]));
        assert_eq!(rendered(&keys), vec!["Q", "R"]);
    }

    #[test]
    fn test_candidate_key_serializes_as_string() {
        let key = CandidateKey::new(vec!['K', 'E', 'Y']);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"KEY\"");
        assert!(!key.is_empty());
        assert_eq!(key.letters(), &['K', 'E', 'Y']);
    }
}
