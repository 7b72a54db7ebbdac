use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChunkError, ChunkResult};

/// A validated chunk size. Always at least 1.
///
/// Serializes as a bare integer. Deserialization rejects `0`, so a
/// `ChunkSize` field in a JSON or TOML config is validated at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    /// Validate `size`, returning [`ChunkError::InvalidSize`] for `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use collkit_chunk::ChunkSize;
    ///
    /// assert_eq!(ChunkSize::new(3).unwrap().get(), 3);
    /// assert!(ChunkSize::new(0).is_err());
    /// ```
    pub fn new(size: usize) -> ChunkResult<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(ChunkError::InvalidSize { size })
    }

    /// The size as a plain integer.
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Number of chunks a sequence of `len` elements splits into.
    pub const fn chunk_count(self, len: usize) -> usize {
        len.div_ceil(self.0.get())
    }
}

impl TryFrom<usize> for ChunkSize {
    type Error = ChunkError;

    fn try_from(size: usize) -> ChunkResult<Self> {
        Self::new(size)
    }
}

impl From<NonZeroUsize> for ChunkSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl From<ChunkSize> for usize {
    fn from(size: ChunkSize) -> Self {
        size.get()
    }
}

impl FromStr for ChunkSize {
    type Err = ChunkError;

    fn from_str(s: &str) -> ChunkResult<Self> {
        let size = s
            .trim()
            .parse::<usize>()
            .map_err(|e| ChunkError::Parse(format!("{s:?}: {e}")))?;
        Self::new(size)
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
