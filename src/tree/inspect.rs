//! Completeness checks and leaf population

use super::MerkleNode;
use crate::model::{Hash, Transaction};
use tracing::debug;

impl MerkleNode {
    /// Check whether every leaf below this node holds a transaction
    pub fn is_complete(&self) -> bool {
        match (self.left(), self.right()) {
            (Some(left), Some(right)) => left.is_complete() && right.is_complete(),
            (Some(only), None) | (None, Some(only)) => only.is_complete(),
            (None, None) => self.transaction.is_some(),
        }
    }

    /// Attach a transaction to the leaf whose hash matches its content hash
    ///
    /// Returns `false`, leaving the tree untouched, when no leaf matches.
    pub fn load(&mut self, transaction: Transaction) -> bool {
        let hash = transaction.hash();
        match self.find_leaf_mut(&hash) {
            Some(leaf) => {
                leaf.transaction = Some(transaction);
                debug!(leaf = %hash, "loaded transaction into leaf");
                true
            }
            None => {
                debug!(leaf = %hash, "no leaf for transaction");
                false
            }
        }
    }

    /// Children-first search, left subtree before right
    fn find_leaf_mut(&mut self, hash: &Hash) -> Option<&mut MerkleNode> {
        if self.is_leaf() {
            return (self.hash == *hash).then_some(self);
        }
        if let Some(found) = self.left.as_deref_mut().and_then(|l| l.find_leaf_mut(hash)) {
            return Some(found);
        }
        self.right.as_deref_mut().and_then(|r| r.find_leaf_mut(hash))
    }
}
