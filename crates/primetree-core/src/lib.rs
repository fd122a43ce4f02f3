//! Core types for the primetree toolchain.
//!
//! This crate defines the pieces shared by every other primetree crate:
//! the 32-byte digest type and its keccak-based hashing rules, the canonical
//! leaf encoding, the prime leaf-set generator, and the proof configuration.
//! It performs no I/O apart from loading configuration files.

pub mod config;
pub mod digest;
pub mod error;
pub mod leaves;

pub use config::{LeafOrdering, ProofConfig};
pub use digest::{combine, decode_leaf, encode_leaf, keccak256, leaf_digest, Hash256, LeafBytes};
pub use error::{Error, Result};
pub use leaves::{generate_leaves, is_prime, Primes, MAX_LEAF_COUNT};
