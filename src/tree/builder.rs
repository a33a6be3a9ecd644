//! Bottom-up construction of balanced merkle trees

use super::MerkleNode;
use crate::model::{Hash, Transaction};
use crate::{Error, Result};
use tracing::{debug, trace};

/// What a leaf slot starts out holding
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Leaf {
    /// A known transaction; the leaf hash is derived from it
    Transaction(Transaction),
    /// Only the transaction hash; the transaction can be loaded later
    Hash(Hash),
}

impl From<Transaction> for Leaf {
    fn from(transaction: Transaction) -> Self {
        Leaf::Transaction(transaction)
    }
}

impl From<Hash> for Leaf {
    fn from(hash: Hash) -> Self {
        Leaf::Hash(hash)
    }
}

impl Leaf {
    fn into_node(self) -> MerkleNode {
        match self {
            Leaf::Transaction(tx) => MerkleNode::with_transaction(tx),
            Leaf::Hash(hash) => MerkleNode::with_hash(hash),
        }
    }
}

/// Build a tree whose leaves hold the given transactions, in order
pub fn build_full_tree(transactions: Vec<Transaction>) -> Result<MerkleNode> {
    build_from_leaves(transactions.into_iter().map(Leaf::from).collect())
}

/// Build a skeleton tree from leaf hashes alone
///
/// Leaves start without transactions; populate them with
/// [`MerkleNode::load`].
pub fn build_skeleton_tree(hashes: &[Hash]) -> Result<MerkleNode> {
    build_from_leaves(hashes.iter().copied().map(Leaf::from).collect())
}

/// Build a tree from any mix of transaction and hash leaves
///
/// The leaf count must be a power of two (1 included).
pub fn build_from_leaves(leaves: Vec<Leaf>) -> Result<MerkleNode> {
    let count = leaves.len();
    if count == 0 || count & (count - 1) != 0 {
        return Err(Error::InvalidLeafCount(count));
    }

    let root = build_tree(leaves.into_iter().map(Leaf::into_node).collect())?;
    debug!(leaves = count, root = %root.hash(), "built merkle tree");
    Ok(root)
}

/// Pair up each level until one node remains.
///
/// An unpaired trailing node is combined with a fresh placeholder carrying
/// its own hash. The placeholder has no transaction and no children.
pub(crate) fn build_tree(mut level: Vec<MerkleNode>) -> Result<MerkleNode> {
    while level.len() > 1 {
        trace!(width = level.len(), "combining level");
        let mut parents = Vec::with_capacity(level.len().div_ceil(2));
        let mut nodes = level.into_iter();
        while let Some(left) = nodes.next() {
            let right = match nodes.next() {
                Some(right) => right,
                None => MerkleNode::with_hash(left.hash),
            };
            parents.push(MerkleNode::branch(left, right));
        }
        level = parents;
    }
    level.pop().ok_or(Error::InvalidLeafCount(0))
}
