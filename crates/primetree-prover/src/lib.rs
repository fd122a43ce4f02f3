//! Merkle proof engine for prime leaf sets.
//!
//! Builds a keccak Merkle tree over leaf digests and produces inclusion
//! proofs compatible with a sort-before-hash on-chain verifier.
//!
//! # Main Components
//!
//! - [`tree::MerkleTree`] - Level-by-level tree over a leaf set
//! - [`proof::InclusionProof`] - Sibling path and root recomputation
//! - [`proof::build_proof`] - Stateless proof construction
//! - [`submission::ProofBundle`] - Payload for the verifier contract call
//! - [`precomputed`] - Roots of the 8192-leaf reference tree
//! - [`error`] - Error types for the library

pub mod error;
pub mod precomputed;
pub mod proof;
pub mod submission;
pub mod tree;

pub use error::{ProofError, Result};
pub use proof::{build_proof, compute_root, verify_proof, InclusionProof};
pub use submission::ProofBundle;
pub use tree::MerkleTree;
