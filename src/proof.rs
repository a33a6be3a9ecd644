//! Membership (audit) proofs
//!
//! A proof is the list of sibling hashes met on the way from a leaf up to the
//! root, each tagged with the side it sits on. A verifier needs only the
//! proof, the leaf hash and the trusted root hash; no tree access.

use crate::model::Hash;
use crate::tree::MerkleNode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which side of the running hash a sibling sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Sibling is the left child: `combine(sibling, current)`
    Left,
    /// Sibling is the right child: `combine(current, sibling)`
    Right,
}

/// One level of a proof
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub sibling: Hash,
    pub side: Side,
}

impl ProofStep {
    /// Fold this step into the running hash
    pub fn apply(&self, current: &Hash) -> Hash {
        match self.side {
            Side::Left => Hash::combine(&self.sibling, current),
            Side::Right => Hash::combine(current, &self.sibling),
        }
    }
}

/// Sibling hashes from a leaf's immediate sibling up to the level below the root
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditProof {
    steps: Vec<ProofStep>,
}

impl AuditProof {
    pub fn new(steps: Vec<ProofStep>) -> Self {
        AuditProof { steps }
    }

    /// Build the proof for the leaf with hash `leaf` in the tree at `root`
    pub fn generate(root: &MerkleNode, leaf: &Hash) -> Result<Self> {
        let path = root.path(leaf).ok_or(Error::LeafNotFound(*leaf))?;

        let mut steps = Vec::with_capacity(path.len().saturating_sub(1));
        let mut current = *leaf;

        // walk parents from the leaf's up to the root
        for node in path.iter().rev().skip(1) {
            let (Some(left), Some(right)) = (node.left(), node.right()) else {
                return Err(Error::LeafNotFound(*leaf));
            };
            let step = if *left.hash() == current {
                ProofStep {
                    sibling: *right.hash(),
                    side: Side::Right,
                }
            } else {
                ProofStep {
                    sibling: *left.hash(),
                    side: Side::Left,
                }
            };
            steps.push(step);
            current = *node.hash();
        }

        debug!(leaf = %leaf, steps = steps.len(), "generated audit proof");
        Ok(AuditProof { steps })
    }

    /// Recompute the root from `leaf` and compare with `root`
    pub fn verify(&self, root: &Hash, leaf: &Hash) -> bool {
        let computed = self
            .steps
            .iter()
            .fold(*leaf, |current, step| step.apply(&current));
        computed == *root
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Generate a proof; see [`AuditProof::generate`]
pub fn generate(root: &MerkleNode, leaf: &Hash) -> Result<AuditProof> {
    AuditProof::generate(root, leaf)
}

/// Verify a proof; see [`AuditProof::verify`]
pub fn verify(proof: &AuditProof, root: &Hash, leaf: &Hash) -> bool {
    proof.verify(root, leaf)
}

/// Everything a remote verifier needs: claimed root, leaf and proof
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBundle {
    pub root: Hash,
    pub leaf: Hash,
    pub proof: AuditProof,
}

impl ProofBundle {
    /// Generate a bundle proving `leaf` against the tree at `root`
    pub fn generate(root: &MerkleNode, leaf: &Hash) -> Result<Self> {
        Ok(ProofBundle {
            root: *root.hash(),
            leaf: *leaf,
            proof: AuditProof::generate(root, leaf)?,
        })
    }

    pub fn verify(&self) -> bool {
        self.proof.verify(&self.root, &self.leaf)
    }

    /// Content hash over root, leaf and every proof step
    pub fn id(&self) -> Result<Hash> {
        let data = bincode::serialize(self)?;
        Ok(Hash::digest(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PublicKey, Transaction};
    use crate::tree::{build_full_tree, build_skeleton_tree};

    fn txs(n: u64) -> Vec<Transaction> {
        (0..n)
            .map(|i| {
                Transaction::new(
                    PublicKey::from_bytes([5; 32]),
                    PublicKey::from_bytes([6; 32]),
                    i,
                    0,
                    vec![],
                )
            })
            .collect()
    }

    #[test]
    fn test_four_leaf_proof_shape() {
        let t = txs(4);
        let h: Vec<Hash> = t.iter().map(Transaction::hash).collect();
        let root = build_full_tree(t).unwrap();
        let n1 = Hash::combine(&h[0], &h[1]);

        let proof = AuditProof::generate(&root, &h[2]).unwrap();
        assert_eq!(
            proof.steps(),
            &[
                ProofStep {
                    sibling: h[3],
                    side: Side::Right
                },
                ProofStep {
                    sibling: n1,
                    side: Side::Left
                },
            ]
        );
        assert!(proof.verify(root.hash(), &h[2]));
    }

    #[test]
    fn test_roundtrip_all_sizes() {
        for n in [1u64, 2, 4, 8, 16] {
            let t = txs(n);
            let root = build_full_tree(t.clone()).unwrap();
            for tx in &t {
                let leaf = tx.hash();
                let proof = generate(&root, &leaf).unwrap();
                assert_eq!(proof.len(), root.depth() - 1);
                assert!(verify(&proof, root.hash(), &leaf));
            }
        }
    }

    #[test]
    fn test_single_leaf_proof_is_empty() {
        let t = txs(1);
        let root = build_full_tree(t.clone()).unwrap();
        let proof = AuditProof::generate(&root, &t[0].hash()).unwrap();

        assert!(proof.is_empty());
        assert!(proof.verify(root.hash(), &t[0].hash()));
        assert!(!proof.verify(root.hash(), &Hash::digest(b"other")));
    }

    #[test]
    fn test_unknown_leaf() {
        let root = build_full_tree(txs(4)).unwrap();
        let missing = Hash::digest(b"missing");
        let err = AuditProof::generate(&root, &missing).unwrap_err();
        assert!(matches!(err, Error::LeafNotFound(h) if h == missing));
    }

    #[test]
    fn test_wrong_leaf_or_root_rejected() {
        let t = txs(8);
        let root = build_full_tree(t.clone()).unwrap();
        let proof = AuditProof::generate(&root, &t[3].hash()).unwrap();

        assert!(!proof.verify(root.hash(), &t[4].hash()));
        assert!(!proof.verify(&Hash::digest(b"root"), &t[3].hash()));
    }

    #[test]
    fn test_flipped_side_rejected() {
        let t = txs(4);
        let root = build_full_tree(t.clone()).unwrap();
        let leaf = t[1].hash();
        let mut steps = AuditProof::generate(&root, &leaf).unwrap().steps().to_vec();
        steps[0].side = Side::Right;

        assert!(!AuditProof::new(steps).verify(root.hash(), &leaf));
    }

    #[test]
    fn test_skeleton_proofs_match_full_tree() {
        let t = txs(8);
        let hashes: Vec<Hash> = t.iter().map(Transaction::hash).collect();
        let full = build_full_tree(t).unwrap();
        let skeleton = build_skeleton_tree(&hashes).unwrap();

        for h in &hashes {
            assert_eq!(
                AuditProof::generate(&full, h).unwrap(),
                AuditProof::generate(&skeleton, h).unwrap()
            );
        }
    }

    #[test]
    fn test_bundle_json() {
        let t = txs(4);
        let root = build_full_tree(t.clone()).unwrap();
        let bundle = ProofBundle::generate(&root, &t[0].hash()).unwrap();

        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["proof"][0]["side"], "right");
        assert_eq!(json["root"], root.hash().to_hex());

        let back: ProofBundle = serde_json::from_value(json).unwrap();
        assert!(back.verify());
    }

    #[test]
    fn test_bundle_id_covers_proof_steps() {
        let t = txs(4);
        let root = build_full_tree(t.clone()).unwrap();
        let bundle = ProofBundle::generate(&root, &t[0].hash()).unwrap();

        let mut forged = bundle.clone();
        let mut steps = forged.proof.steps().to_vec();
        steps[0].sibling = Hash::digest(b"forged");
        forged.proof = AuditProof::new(steps);

        assert_eq!(bundle.id().unwrap(), bundle.clone().id().unwrap());
        assert_ne!(bundle.id().unwrap(), forged.id().unwrap());
        assert!(!forged.verify());
    }
}
