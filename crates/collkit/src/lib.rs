//! Sequence chunking and right-biased mapping merge.
//!
//! This is the main entry point for applications using collkit. It
//! re-exports the chunker and merger crates and adds a single [`Error`] type
//! covering both.

pub mod error;

pub use error::{Error, Result};

pub use collkit_chunk::{
    chunk, chunk_by, chunk_slice, chunk_slice_by, ChunkError, ChunkResult, ChunkSize, Chunks,
};
pub use collkit_merge::{
    merge, merge_objects, merge_owned, merge_with, Mapping, MergeError, MergeResult,
};
