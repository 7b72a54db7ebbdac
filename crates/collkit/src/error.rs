use thiserror::Error;

use collkit_chunk::ChunkError;
use collkit_merge::MergeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("chunk error: {0}")]
    Chunk(#[from] ChunkError),

    #[error("merge error: {0}")]
    Merge(#[from] MergeError),
}

impl Error {
    /// Whether the caller passed an invalid argument.
    ///
    /// Every current failure is argument validation; nothing is retried and
    /// no partial result is ever produced.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::Chunk(ChunkError::InvalidSize { .. } | ChunkError::Parse(_)) => true,
            Self::Merge(MergeError::NoMappings | MergeError::NotAnObject { .. }) => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
