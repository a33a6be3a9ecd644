//! Binary merkle trees over ordered transactions
//!
//! - Leaves hold a transaction hash, plus the transaction once it is known
//! - Each internal node's hash is `combine(left, right)`
//! - The leaf count is always a power of two
//!
//! A "full" tree is built with its transactions in place. A "skeleton" tree is
//! built from leaf hashes alone and populated later with [`MerkleNode::load`].
//! Because leaf hashes are fixed before the tree is built, populating a leaf
//! never changes any node hash.

mod builder;
mod inspect;
mod node;
mod path;

pub use builder::{build_from_leaves, build_full_tree, build_skeleton_tree, Leaf};
pub use node::MerkleNode;
