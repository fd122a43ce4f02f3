use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Leaf count {count} exceeds the supported maximum of {max}")]
    LeafCountTooLarge { count: usize, max: usize },

    #[error("Invalid leaf encoding: {0}")]
    InvalidLeafEncoding(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
