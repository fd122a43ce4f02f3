//! Proof payloads for the verifier contract.
//!
//! A [`ProofBundle`] carries everything the submission side needs to call
//! `submit(bytes32[] proof, bytes32 leaf)`: the sibling path, the raw leaf
//! encoding and, for reference, the root it folds to. Digests and the leaf
//! are serialized as `0x`-prefixed hex so the JSON form can be pasted into a
//! transaction builder without further conversion.

use primetree_core::digest::parse_bytes32;
use primetree_core::{decode_leaf, Hash256, LeafBytes, LeafOrdering, ProofConfig};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ProofError, Result};
use crate::proof::InclusionProof;

/// A proof for one leaf, ready to hand to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBundle {
    /// The selected leaf value.
    pub prime: u64,
    /// Raw `uint256` encoding of `prime`.
    #[serde(serialize_with = "serialize_leaf", deserialize_with = "deserialize_leaf")]
    pub leaf: LeafBytes,
    /// Sibling path, leaf-to-root.
    pub proof: InclusionProof,
    /// Root the proof folds to.
    pub root: Hash256,
    /// Number of leaves of the tree the proof was taken from.
    pub leaf_count: usize,
    /// Leaf ordering of the tree the proof was taken from.
    pub ordering: LeafOrdering,
    /// Whether that tree was built in strict power-of-two mode.
    pub strict: bool,
}

impl ProofBundle {
    pub fn new(
        prime: u64,
        proof: InclusionProof,
        leaf: LeafBytes,
        root: Hash256,
        config: &ProofConfig,
    ) -> Self {
        Self {
            prime,
            leaf,
            proof,
            root,
            leaf_count: config.leaf_count,
            ordering: config.ordering,
            strict: config.strict,
        }
    }

    /// Configuration that regenerates the tree this proof belongs to.
    pub fn config(&self) -> ProofConfig {
        ProofConfig::new(self.leaf_count)
            .with_ordering(self.ordering)
            .with_strict(self.strict)
    }

    /// Check that the leaf encodes `prime` and the proof folds to `root`.
    pub fn verify(&self) -> Result<bool> {
        let decoded = decode_leaf(&self.leaf)?;
        if decoded != self.prime {
            return Ok(false);
        }
        Ok(self.proof.verify(&self.root, &self.leaf))
    }

    /// Proof and leaf as the hex strings passed to the contract call.
    pub fn call_arguments(&self) -> (Vec<String>, String) {
        let proof = self.proof.siblings().iter().map(Hash256::to_hex).collect();
        (proof, leaf_hex(&self.leaf))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ProofError::SerializationError(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ProofError::SerializationError(e.to_string()))
    }

    /// Serialize to bytes using bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ProofError::SerializationError(e.to_string()))
    }

    /// Deserialize from bytes using bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| ProofError::SerializationError(e.to_string()))
    }
}

fn leaf_hex(leaf: &LeafBytes) -> String {
    Hash256(*leaf).to_hex()
}

fn serialize_leaf<S: Serializer>(
    leaf: &LeafBytes,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&leaf_hex(leaf))
}

fn deserialize_leaf<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<LeafBytes, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse_bytes32(&s).map_err(serde::de::Error::custom)
}
