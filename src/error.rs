//! Error types for txmerkle

use crate::model::Hash;
use thiserror::Error;

/// Result type alias for txmerkle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in txmerkle operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Leaf count must be a non-zero power of two, got {0}")]
    InvalidLeafCount(usize),

    #[error("No leaf with hash {0}")]
    LeafNotFound(Hash),

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Invalid public key: {0}")]
    InvalidKey(String),

    #[error("Config error: {0}")]
    Config(String),
}
