use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// The selected value is not in the leaf set.
    NotAMember { value: u64 },
    /// Fewer than two leaves; there is nothing to prove.
    DegenerateTree { leaves: usize },
    /// Strict mode requires a power-of-two leaf count.
    InvalidLeafCount { count: usize },
    /// A value occurs more than once in the leaf set.
    DuplicateLeaf { value: u64 },
    /// Leaf index is outside the bottom level.
    IndexOutOfBounds { index: usize, max: usize },
    /// A balanced tree produced a path of the wrong length.
    ProofLength { expected: usize, actual: usize },
    /// Failed to encode or decode a proof payload.
    SerializationError(String),
    /// Error raised by the core crate (leaf generation, encodings).
    Core(String),
}

impl fmt::Display for ProofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofError::NotAMember { value } => {
                write!(f, "Value {} is not a member of the leaf set", value)
            }
            ProofError::DegenerateTree { leaves } => {
                write!(f, "Degenerate tree: {} leaf(s), at least 2 required", leaves)
            }
            ProofError::InvalidLeafCount { count } => {
                write!(f, "Invalid leaf count {}: expected a power of two", count)
            }
            ProofError::DuplicateLeaf { value } => {
                write!(f, "Value {} appears more than once in the leaf set", value)
            }
            ProofError::IndexOutOfBounds { index, max } => {
                write!(f, "Index {} out of bounds (max: {})", index, max)
            }
            ProofError::ProofLength { expected, actual } => {
                write!(f, "Proof length mismatch: expected {}, got {}", expected, actual)
            }
            ProofError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            ProofError::Core(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

impl std::error::Error for ProofError {}

impl From<primetree_core::Error> for ProofError {
    fn from(err: primetree_core::Error) -> Self {
        ProofError::Core(err.to_string())
    }
}

/// Result type for proof operations.
pub type Result<T> = std::result::Result<T, ProofError>;
