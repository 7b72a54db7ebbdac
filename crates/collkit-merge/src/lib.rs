//! Merger for collkit.
//!
//! Combines an ordered list of key-value mappings into a single new mapping.
//! The merge is right-biased and shallow: when several inputs share a key,
//! the value from the input nearest the end wins, and nested mapping values
//! are replaced wholesale rather than merged.
//!
//! # Key Types
//!
//! - [`Mapping`] -- The map abstraction the merge folds over
//!   (`HashMap`, `BTreeMap`, `serde_json::Map`)
//! - [`MergeError`] -- Argument validation failures
//!
//! # Entry Points
//!
//! - [`merge_with`] -- `first` plus any number of further mappings; cannot fail
//! - [`merge`] -- any sequence of borrowed mappings; fails when it is empty
//! - [`merge_owned`] -- consumes its inputs instead of cloning them
//! - [`merge_objects`] -- JSON objects with heterogeneous values

pub mod error;
pub mod json;
pub mod mapping;
pub mod merge;

pub use error::{MergeError, MergeResult};
pub use json::merge_objects;
pub use mapping::Mapping;
pub use merge::{merge, merge_owned, merge_with};
