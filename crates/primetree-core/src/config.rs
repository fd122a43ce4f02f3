//! Proof configuration.
//!
//! The leaf ordering is a protocol parameter: the tree a proof is built
//! from and the tree whose root the verifier holds must use the same one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::Result;

/// Size of the reference leaf set (2^13 primes).
pub const DEFAULT_LEAF_COUNT: usize = 8192;

/// How leaf digests are laid out along the bottom level of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafOrdering {
    /// Leaf digests sorted ascending by byte value.
    #[default]
    SortedDigest,
    /// Leaf digests in generation order (ascending leaf value).
    Generation,
}

impl fmt::Display for LeafOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafOrdering::SortedDigest => write!(f, "sorted-digest"),
            LeafOrdering::Generation => write!(f, "generation"),
        }
    }
}

/// Parameters shared by proof construction and root computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofConfig {
    /// Number of leaves to generate.
    pub leaf_count: usize,
    /// Bottom-level layout of the leaf digests.
    pub ordering: LeafOrdering,
    /// Reject leaf sets whose size is not a power of two.
    pub strict: bool,
}

impl Default for ProofConfig {
    fn default() -> Self {
        Self {
            leaf_count: DEFAULT_LEAF_COUNT,
            ordering: LeafOrdering::default(),
            strict: true,
        }
    }
}

impl ProofConfig {
    pub fn new(leaf_count: usize) -> Self {
        Self {
            leaf_count,
            ..Self::default()
        }
    }

    pub fn with_ordering(mut self, ordering: LeafOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
