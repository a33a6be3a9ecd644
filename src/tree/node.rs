//! Tree node type

use crate::model::{Hash, Transaction};

/// A node in a transaction merkle tree
///
/// Every node exclusively owns its children, so a tree has no sharing and no
/// cycles. Internal nodes carry `combine(left.hash, right.hash)`; leaves
/// carry a transaction hash and, once known, the transaction itself.
///
/// Nodes are only created by the builder functions in [`crate::tree`], which
/// always give a node zero or two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleNode {
    pub(crate) left: Option<Box<MerkleNode>>,
    pub(crate) right: Option<Box<MerkleNode>>,
    pub(crate) hash: Hash,
    pub(crate) transaction: Option<Transaction>,
}

impl MerkleNode {
    /// A leaf holding a transaction, hashed from its content
    pub(crate) fn with_transaction(transaction: Transaction) -> Self {
        MerkleNode {
            left: None,
            right: None,
            hash: transaction.hash(),
            transaction: Some(transaction),
        }
    }

    /// A leaf holding only a hash, waiting to be populated
    pub(crate) fn with_hash(hash: Hash) -> Self {
        MerkleNode {
            left: None,
            right: None,
            hash,
            transaction: None,
        }
    }

    /// A parent owning both children
    pub(crate) fn branch(left: MerkleNode, right: MerkleNode) -> Self {
        MerkleNode {
            hash: Hash::combine(&left.hash, &right.hash),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            transaction: None,
        }
    }

    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    pub fn left(&self) -> Option<&MerkleNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&MerkleNode> {
        self.right.as_deref()
    }

    /// The attached transaction, if this is a populated leaf
    pub fn transaction(&self) -> Option<&Transaction> {
        self.transaction.as_ref()
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels in the tree rooted here (a lone leaf has depth 1)
    pub fn depth(&self) -> usize {
        let below = self
            .left()
            .map(MerkleNode::depth)
            .max(self.right().map(MerkleNode::depth))
            .unwrap_or(0);
        below + 1
    }

    /// Leaf hashes in left-to-right order
    pub fn leaves(&self) -> Vec<Hash> {
        let mut out = Vec::new();
        self.collect_leaves(&mut |leaf| out.push(leaf.hash));
        out
    }

    /// Attached transactions in left-to-right leaf order
    pub fn transactions(&self) -> Vec<&Transaction> {
        let mut out = Vec::new();
        self.collect_leaves(&mut |leaf| out.extend(leaf.transaction()));
        out
    }

    fn collect_leaves<'a>(&'a self, visit: &mut impl FnMut(&'a MerkleNode)) {
        if self.is_leaf() {
            visit(self);
            return;
        }
        if let Some(left) = self.left() {
            left.collect_leaves(visit);
        }
        if let Some(right) = self.right() {
            right.collect_leaves(visit);
        }
    }
}
