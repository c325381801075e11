//! Error types for the glowworm swarm

use thiserror::Error;

/// Result alias used across the crate
pub type GsoResult<T> = Result<T, GsoError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GsoError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
