//! primetree: Merkle inclusion proofs over the first N primes.
//!
//! This is the main entry point for applications. It re-exports the leaf
//! generator, hashing rules and proof engine from the other primetree crates.

pub use primetree_core as core;
pub use primetree_prover as prover;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        combine, decode_leaf, encode_leaf, generate_leaves, is_prime, keccak256, leaf_digest,
        Hash256, LeafBytes, LeafOrdering, Primes, ProofConfig,
    };

    pub use crate::prover::{
        build_proof, compute_root, verify_proof,
        precomputed::{
            reference_root, REFERENCE_DEPTH, REFERENCE_LAST_LEAF, REFERENCE_LEAF_COUNT,
        },
        InclusionProof, MerkleTree, ProofBundle, ProofError,
    };
}
