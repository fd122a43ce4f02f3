//! Precomputed constants for the reference tree.
//!
//! The reference deployment commits to the first 8192 primes. Its roots are
//! fixed here for both leaf orderings so that a rebuilt tree can be checked
//! against the value held by the verifier without recomputing anything else.

use hex_literal::hex;
use primetree_core::{Hash256, LeafOrdering};

/// Number of leaves in the reference tree.
pub const REFERENCE_LEAF_COUNT: usize = 8192;

/// Number of levels (and proof entries) in the reference tree.
pub const REFERENCE_DEPTH: usize = 13;

/// Largest leaf of the reference tree (the 8192nd prime).
pub const REFERENCE_LAST_LEAF: u64 = 84017;

/// Root of the reference tree with digest-sorted leaves.
pub const SORTED_DIGEST_ROOT: Hash256 = Hash256(hex!(
    "5130c5802ccabaec9291bc80c79f972f06aba296f3ef59fd88631a0211608f76"
));

/// Root of the reference tree with leaves in generation order.
pub const GENERATION_ORDER_ROOT: Hash256 = Hash256(hex!(
    "2cdafc972991287efd8baf8efe8ff2d509f2ec00ddd5b5d4aa7f23292533b478"
));

/// Reference root for the given leaf ordering.
pub fn reference_root(ordering: LeafOrdering) -> Hash256 {
    match ordering {
        LeafOrdering::SortedDigest => SORTED_DIGEST_ROOT,
        LeafOrdering::Generation => GENERATION_ORDER_ROOT,
    }
}
