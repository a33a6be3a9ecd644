//! # txmerkle
//!
//! Merkle trees over ordered transaction sequences, with compact membership
//! proofs that can be checked against a root hash alone.
//!
//! ## Core Concepts
//!
//! - **Full trees**: built from transactions, stored at the leaves
//! - **Skeleton trees**: built from leaf hashes, populated later with `load`
//! - **Audit proofs**: sibling hashes from a leaf up to the root
//! - **Verification**: needs only the proof, the leaf hash and the root hash
//!
//! ## Example
//!
//! ```
//! use txmerkle::{build_full_tree, AuditProof, PublicKey, Transaction};
//!
//! let txs: Vec<Transaction> = (0..4)
//!     .map(|i| Transaction::new(PublicKey::from_bytes([1; 32]), PublicKey::from_bytes([2; 32]), i, 0, vec![]))
//!     .collect();
//! let leaf = txs[2].hash();
//!
//! let root = build_full_tree(txs)?;
//! let proof = AuditProof::generate(&root, &leaf)?;
//! assert!(proof.verify(root.hash(), &leaf));
//! # Ok::<(), txmerkle::Error>(())
//! ```

pub mod cache;
pub mod config;
pub mod model;
pub mod proof;
pub mod tree;

mod error;

pub use cache::MessageCache;
pub use config::Config;
pub use error::{Error, Result};
pub use model::{Hash, PublicKey, StakingConfig, Transaction};
pub use proof::{AuditProof, ProofBundle, ProofStep, Side};
pub use tree::{build_from_leaves, build_full_tree, build_skeleton_tree, Leaf, MerkleNode};
