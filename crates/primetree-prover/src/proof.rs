//! Inclusion proofs.
//!
//! A proof is the list of sibling digests from the leaf level up to the
//! level just below the root. Verification folds the hashed leaf encoding
//! with each sibling through the sort-before-hash [`combine`] rule, exactly
//! as an OpenZeppelin-style `MerkleProof.verify` does on-chain.

use log::debug;
use primetree_core::digest::hash_leaf_bytes;
use primetree_core::{combine, Hash256, LeafBytes, ProofConfig};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tree::MerkleTree;

/// Sibling digests for one leaf, ordered leaf-to-root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InclusionProof {
    siblings: Vec<Hash256>,
}

impl InclusionProof {
    pub fn new(siblings: Vec<Hash256>) -> Self {
        Self { siblings }
    }

    pub fn siblings(&self) -> &[Hash256] {
        &self.siblings
    }

    pub fn into_siblings(self) -> Vec<Hash256> {
        self.siblings
    }

    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Root reached by hashing `leaf` and folding in every sibling.
    pub fn root_from(&self, leaf: &LeafBytes) -> Hash256 {
        self.siblings
            .iter()
            .fold(hash_leaf_bytes(leaf), |node, sibling| combine(&node, sibling))
    }

    /// Check that `leaf` is committed to by `root`.
    pub fn verify(&self, root: &Hash256, leaf: &LeafBytes) -> bool {
        self.root_from(leaf) == *root
    }
}

/// Build an inclusion proof for `selected` over `leaves`.
///
/// The tree is rebuilt from scratch on every call; use [`MerkleTree`]
/// directly to serve several proofs from one build. Returns the proof and
/// the leaf encoding the verifier expects (the raw `uint256` bytes).
pub fn build_proof(
    selected: u64,
    leaves: &[u64],
    config: &ProofConfig,
) -> Result<(InclusionProof, LeafBytes)> {
    let tree = MerkleTree::from_leaves(leaves, config)?;
    let (proof, leaf) = tree.proof(selected)?;
    debug!(
        "proof for {} over {} leaves: {} siblings, root {}",
        selected,
        leaves.len(),
        proof.len(),
        tree.root()
    );
    Ok((proof, leaf))
}

/// Root of the tree built over `leaves`.
pub fn compute_root(leaves: &[u64], config: &ProofConfig) -> Result<Hash256> {
    Ok(MerkleTree::from_leaves(leaves, config)?.root())
}

/// Verify a proof against a root and a leaf encoding.
pub fn verify_proof(root: &Hash256, proof: &InclusionProof, leaf: &LeafBytes) -> bool {
    proof.verify(root, leaf)
}
