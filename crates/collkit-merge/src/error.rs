//! Error types for the merge crate.

/// Errors that can occur during merge operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// The merge was called without any mapping.
    #[error("merge requires at least one mapping")]
    NoMappings,

    /// A JSON input was not an object.
    #[error("input {index} is a JSON {kind}, expected an object")]
    NotAnObject { index: usize, kind: &'static str },
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
