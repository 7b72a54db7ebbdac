use thiserror::Error;

/// Errors produced by chunking operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// The requested chunk size was zero.
    #[error("invalid chunk size {size}: must be at least 1")]
    InvalidSize { size: usize },

    /// A chunk size could not be parsed from text.
    #[error("invalid chunk size: {0}")]
    Parse(String),
}

/// Result alias for chunking operations.
pub type ChunkResult<T> = Result<T, ChunkError>;
