//! Chunker for collkit.
//!
//! Splits an ordered sequence into consecutive sub-sequences of a fixed
//! maximum length. Every element lands in exactly one chunk, in its original
//! order. All chunks are full except possibly the last one.
//!
//! # Key Types
//!
//! - [`ChunkSize`] -- Validated, non-zero chunk size (serde-aware)
//! - [`Chunks`] -- Borrowing, lazy view over a slice's chunks
//! - [`ChunkError`] -- Argument validation failures
//!
//! # Materialization
//!
//! [`chunk`] accepts any `IntoIterator` and collects it into a `Vec` before
//! splitting, so one-pass iterators are consumed exactly once and elements
//! are moved rather than cloned. Callers that already hold a slice can use
//! [`chunk_slice`] to get sub-slices without copying anything.

pub mod chunk;
pub mod error;
pub mod size;

pub use chunk::{chunk, chunk_by, chunk_slice, chunk_slice_by, Chunks};
pub use error::{ChunkError, ChunkResult};
pub use size::ChunkSize;
