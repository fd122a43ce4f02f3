//! Sorted-pair keccak Merkle tree.
//!
//! The tree is materialized level by level from the leaf digests. Sibling
//! pairs are combined with [`combine`], which orders the two digests before
//! hashing, so a verifier never needs to know whether a node was a left or
//! right child. A trailing node without a sibling is carried to the next
//! level unchanged and contributes nothing to proofs at that level.

use itertools::Itertools;
use log::{debug, trace};
use primetree_core::{
    combine, encode_leaf, leaf_digest, Hash256, LeafBytes, LeafOrdering, ProofConfig,
};

use crate::error::{ProofError, Result};
use crate::proof::InclusionProof;

/// A fully built Merkle tree over a leaf set.
///
/// Holding on to a tree lets callers produce many proofs from one build;
/// [`crate::build_proof`] builds a fresh one per request instead.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// `levels[0]` holds the leaf digests, the last level holds only the root.
    levels: Vec<Vec<Hash256>>,
    ordering: LeafOrdering,
}

impl MerkleTree {
    /// Build the tree for `leaves` under the given configuration.
    ///
    /// Fails with `DegenerateTree` for fewer than two leaves, with
    /// `InvalidLeafCount` in strict mode when the count is not a power of
    /// two, and with `DuplicateLeaf` if a value occurs twice.
    pub fn from_leaves(leaves: &[u64], config: &ProofConfig) -> Result<Self> {
        if leaves.len() < 2 {
            return Err(ProofError::DegenerateTree {
                leaves: leaves.len(),
            });
        }
        if config.strict && !leaves.len().is_power_of_two() {
            return Err(ProofError::InvalidLeafCount {
                count: leaves.len(),
            });
        }

        let digests: Vec<Hash256> = leaves.iter().map(|value| leaf_digest(*value)).collect();

        let mut sorted: Vec<(Hash256, u64)> =
            digests.iter().copied().zip(leaves.iter().copied()).collect();
        sorted.sort_unstable();
        if let Some((_, (_, value))) = sorted
            .iter()
            .tuple_windows::<(_, _)>()
            .find(|(a, b)| a.0 == b.0)
        {
            return Err(ProofError::DuplicateLeaf { value: *value });
        }

        let bottom = match config.ordering {
            LeafOrdering::SortedDigest => sorted.into_iter().map(|(digest, _)| digest).collect(),
            LeafOrdering::Generation => digests,
        };

        let mut levels = vec![bottom];
        loop {
            let current = &levels[levels.len() - 1];
            if current.len() <= 1 {
                break;
            }
            let next = parent_level(current);
            trace!("level {}: {} -> {} nodes", levels.len() - 1, current.len(), next.len());
            levels.push(next);
        }

        let tree = Self {
            levels,
            ordering: config.ordering,
        };
        debug!(
            "built tree: {} leaves, depth {}, ordering {}, root {}",
            tree.len(),
            tree.depth(),
            tree.ordering,
            tree.root()
        );

        Ok(tree)
    }

    /// The root digest.
    pub fn root(&self) -> Hash256 {
        // Construction guarantees at least two levels and a single-node top level.
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of levels above the leaves; `log2(N)` for balanced trees.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    /// Always false; trees have at least two leaves.
    pub fn is_empty(&self) -> bool {
        self.levels[0].is_empty()
    }

    pub fn ordering(&self) -> LeafOrdering {
        self.ordering
    }

    /// True when every level pairs up evenly.
    pub fn is_balanced(&self) -> bool {
        self.len().is_power_of_two()
    }

    /// Leaf digests in bottom-level order.
    pub fn leaf_digests(&self) -> &[Hash256] {
        &self.levels[0]
    }

    /// Bottom-level index of `value`'s digest.
    pub fn position(&self, value: u64) -> Result<usize> {
        let digest = leaf_digest(value);
        let bottom = &self.levels[0];

        let found = match self.ordering {
            LeafOrdering::SortedDigest => bottom.binary_search(&digest).ok(),
            LeafOrdering::Generation => bottom.iter().position(|d| *d == digest),
        };

        found.ok_or(ProofError::NotAMember { value })
    }

    /// Inclusion proof for the leaf at `index`.
    ///
    /// One sibling per level, leaf level first. Levels where the node has no
    /// sibling are skipped.
    pub fn proof_at(&self, index: usize) -> Result<InclusionProof> {
        if index >= self.len() {
            return Err(ProofError::IndexOutOfBounds {
                index,
                max: self.len(),
            });
        }

        let mut siblings = Vec::with_capacity(self.depth());
        let mut node = index;
        for level in &self.levels[..self.depth()] {
            if let Some(sibling) = level.get(node ^ 1) {
                siblings.push(*sibling);
            }
            node /= 2;
        }

        let proof = InclusionProof::new(siblings);
        if self.is_balanced() && proof.len() != self.depth() {
            return Err(ProofError::ProofLength {
                expected: self.depth(),
                actual: proof.len(),
            });
        }

        Ok(proof)
    }

    /// Inclusion proof for `value` along with its canonical leaf encoding.
    pub fn proof(&self, value: u64) -> Result<(InclusionProof, LeafBytes)> {
        let index = self.position(value)?;
        let proof = self.proof_at(index)?;
        trace!("proof for {} at index {}: {} siblings", value, index, proof.len());
        Ok((proof, encode_leaf(value)))
    }
}

/// Combine consecutive pairs; an unpaired trailing node moves up as is.
fn parent_level(level: &[Hash256]) -> Vec<Hash256> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => combine(left, right),
            _ => pair[0],
        })
        .collect()
}
