//! Root-to-leaf path search

use super::MerkleNode;
use crate::model::Hash;
use std::collections::HashSet;

impl MerkleNode {
    /// Find the nodes from this root down to the leaf with the given hash
    ///
    /// The path includes both the root and the leaf. A tree that is a single
    /// leaf yields an empty path when the hash matches. Returns `None` when no
    /// leaf has the hash.
    ///
    /// Nodes have no parent links, so the search keeps the current candidate
    /// path on an explicit stack and remembers fully explored subtrees by hash.
    pub fn path(&self, target: &Hash) -> Option<Vec<&MerkleNode>> {
        if self.is_leaf() {
            return (self.hash == *target).then(Vec::new);
        }

        let mut stack: Vec<&MerkleNode> = vec![self];
        let mut visited: HashSet<Hash> = HashSet::new();

        while let Some(&node) = stack.last() {
            if node.is_leaf() {
                if node.hash == *target {
                    return Some(stack);
                }
                visited.insert(node.hash);
                stack.pop();
            } else if let Some(left) = node.left().filter(|n| !visited.contains(&n.hash)) {
                stack.push(left);
            } else if let Some(right) = node.right().filter(|n| !visited.contains(&n.hash)) {
                stack.push(right);
            } else {
                // both sides exhausted
                visited.insert(node.hash);
                stack.pop();
            }
        }

        None
    }
}
