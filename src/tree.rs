//! Candidate key tree: every combination of per-column frequency winners.
//!
//! Level `c` of the tree holds one node per letter tied for the highest
//! count in column `c`, under every node of level `c - 1`. A column with a
//! two-way tie therefore doubles the number of root-to-leaf paths below it.
//!
//! Nodes live in a flat arena and refer to their children by [`NodeId`],
//! so the tree has no owning pointers between nodes. Construction expands
//! one level at a time from the current frontier, which keeps the stack
//! depth independent of the key length.

use tracing::debug;

use crate::error::VigenereError;
use crate::frequency::FrequencyTable;

/// Index of a node within a [`CandidateTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// One letter choice for one key position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    letter: char,
    depth: usize,
    children: Vec<NodeId>,
}

impl TreeNode {
    /// Ciphertext letter chosen for this position.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Column index of this node (0 for roots).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Children in creation order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed tree of candidate key letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTree {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
    key_length: usize,
}

impl CandidateTree {
    /// Builds the tree from one frequency table per key position.
    ///
    /// # Parameters
    /// - `tables`: Frequency tables of the columns, in key order.
    /// - `limit`: Optional maximum number of root-to-leaf paths.
    ///
    /// # Errors
    /// - [`VigenereError::InvalidKeyLength`] if `tables` is empty.
    /// - [`VigenereError::EmptyInput`] if every column is empty.
    /// - [`VigenereError::EmptyCategory`] if some column is empty.
    /// - [`VigenereError::CandidateLimitExceeded`] if the tree would have
    ///   more leaves than `limit`.
    pub fn build(tables: &[FrequencyTable], limit: Option<usize>) -> Result<Self, VigenereError> {
        let key_length = tables.len();
        if key_length < 1 {
            return Err(VigenereError::InvalidKeyLength(key_length));
        }
        if tables.iter().all(FrequencyTable::is_empty) {
            return Err(VigenereError::EmptyInput);
        }
        if let Some(index) = tables.iter().position(FrequencyTable::is_empty) {
            return Err(VigenereError::EmptyCategory { index, key_length });
        }

        let required = Self::count_leaves(tables);
        if let Some(limit) = limit {
            if required > limit {
                return Err(VigenereError::CandidateLimitExceeded { limit, required });
            }
        }

        let mut tree = CandidateTree {
            nodes: Vec::new(),
            roots: Vec::new(),
            key_length,
        };

        for &letter in tables[0].most_frequent() {
            let id = tree.push_node(letter, 0);
            tree.roots.push(id);
        }
        let mut frontier = tree.roots.clone();
        for (depth, table) in tables.iter().enumerate().skip(1) {
            debug!(
                column = depth,
                ties = table.most_frequent().len(),
                frontier = frontier.len(),
                "expanding candidate tree level"
            );
            let mut next = Vec::with_capacity(frontier.len() * table.most_frequent().len());
            for parent in frontier {
                for &letter in table.most_frequent() {
                    let child = tree.push_node(letter, depth);
                    tree.nodes[parent.0].children.push(child);
                    next.push(child);
                }
            }
            frontier = next;
        }

        debug!(
            nodes = tree.nodes.len(),
            leaves = frontier.len(),
            "candidate tree built"
        );
        Ok(tree)
    }

    /// Number of root-to-leaf paths the tables produce: the product of
    /// their tie-set sizes, saturating at `usize::MAX`.
    pub fn count_leaves(tables: &[FrequencyTable]) -> usize {
        if tables.is_empty() {
            return 0;
        }
        tables
            .iter()
            .fold(1usize, |acc, t| acc.saturating_mul(t.most_frequent().len()))
    }

    fn push_node(&mut self, letter: char, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            letter,
            depth,
            children: Vec::new(),
        });
        id
    }

    /// Root nodes in creation order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns the node stored at `id`.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Total number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Key length the tree was built for.
    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Number of levels, measured along the deepest path.
    pub fn depth(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| n.depth + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(columns: &[&str]) -> Vec<FrequencyTable> {
        columns
            .iter()
            .map(|c| FrequencyTable::from_category(&c.chars().collect::<Vec<_>>()))
            .collect()
    }

    #[test]
    fn test_single_path_tree() {
        let tree = CandidateTree::build(&tables(&["AAB", "CCD", "EEF"]), None).unwrap();
        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.depth(), 3);
        let root = tree.node(tree.roots()[0]);
        assert_eq!(root.letter(), 'A');
        assert_eq!(root.depth(), 0);
        let child = tree.node(root.children()[0]);
        assert_eq!(child.letter(), 'C');
        assert_eq!(child.depth(), 1);
    }

    #[test]
    fn test_ties_multiply_branches() {
        // 2 roots x 1 x 3 = 6 leaves.
        let t = tables(&["AB", "CC", "XYZ"]);
        assert_eq!(CandidateTree::count_leaves(&t), 6);
        let tree = CandidateTree::build(&t, None).unwrap();
        assert_eq!(tree.roots().len(), 2);
        assert_eq!(tree.leaf_count(), 6);
        assert_eq!(tree.node_count(), 2 + 2 + 6);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.key_length(), 3);
    }

    #[test]
    fn test_children_follow_tie_order() {
        let tree = CandidateTree::build(&tables(&["A", "BCCB"]), None).unwrap();
        let root = tree.node(tree.roots()[0]);
        let letters: Vec<char> = root
            .children()
            .iter()
            .map(|&id| tree.node(id).letter())
            .collect();
        assert_eq!(letters, vec!['C', 'B']);
    }

    #[test]
    fn test_no_columns_rejected() {
        assert_eq!(
            CandidateTree::build(&[], None),
            Err(VigenereError::InvalidKeyLength(0))
        );
    }

    #[test]
    fn test_all_empty_is_empty_input() {
        assert_eq!(
            CandidateTree::build(&tables(&["", ""]), None),
            Err(VigenereError::EmptyInput)
        );
    }

    #[test]
    fn test_trailing_empty_column_rejected() {
        assert_eq!(
            CandidateTree::build(&tables(&["A", "B", ""]), None),
            Err(VigenereError::EmptyCategory {
                index: 2,
                key_length: 3
            })
        );
    }

    #[test]
    fn test_limit_exceeded() {
        let t = tables(&["AB", "CD", "EF"]);
        assert_eq!(
            CandidateTree::build(&t, Some(7)),
            Err(VigenereError::CandidateLimitExceeded {
                limit: 7,
                required: 8
            })
        );
        assert!(CandidateTree::build(&t, Some(8)).is_ok());
    }

    #[test]
    fn test_count_leaves_saturates() {
        let wide = tables(&["ABCDEFGHIJKLMNOPQRSTUVWXYZ"; 20]);
        assert_eq!(CandidateTree::count_leaves(&wide), usize::MAX);
    }

    #[test]
    fn test_long_key_builds_without_recursion() {
        let columns = vec!["Q"; 5000];
        let tree = CandidateTree::build(&tables(&columns), None).unwrap();
        assert_eq!(tree.depth(), 5000);
        assert_eq!(tree.leaf_count(), 1);
    }
}
