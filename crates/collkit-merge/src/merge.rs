//! Right-biased shallow merge over any [`Mapping`].
//!
//! Every entry point folds its inputs left to right into a fresh mapping,
//! overwriting keys as it goes, so the last mapping to mention a key decides
//! its value. The result never aliases an input.

use tracing::trace;

use crate::error::{MergeError, MergeResult};
use crate::mapping::Mapping;

/// Merge `first` with every mapping in `rest`, later mappings winning.
///
/// Always returns a new mapping, even when `rest` is empty.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use collkit_merge::merge_with;
///
/// let base = HashMap::from([("a", 1), ("b", 2)]);
/// let patch = HashMap::from([("b", 3), ("c", 4)]);
///
/// let merged = merge_with(&base, [&patch]);
/// assert_eq!(merged, HashMap::from([("a", 1), ("b", 3), ("c", 4)]));
/// ```
pub fn merge_with<'a, M, I>(first: &'a M, rest: I) -> M
where
    M: Mapping + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut merged = M::empty();
    merged.overwrite(first);

    let mut inputs = 1usize;
    for map in rest {
        merged.overwrite(map);
        inputs += 1;
    }

    trace!(inputs, keys = merged.entry_count(), "merged mappings");
    merged
}

/// Merge a sequence of mappings, later mappings winning.
///
/// Fails with [`MergeError::NoMappings`] when `maps` is empty.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use collkit_merge::{merge, MergeError};
///
/// let a = BTreeMap::from([("a", 1)]);
/// let b = BTreeMap::from([("a", 2)]);
/// assert_eq!(merge([&a, &b]).unwrap(), BTreeMap::from([("a", 2)]));
///
/// let none: Vec<BTreeMap<&str, i32>> = Vec::new();
/// assert_eq!(merge(&none), Err(MergeError::NoMappings));
/// ```
pub fn merge<'a, M, I>(maps: I) -> MergeResult<M>
where
    M: Mapping + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut maps = maps.into_iter();
    let first = maps.next().ok_or(MergeError::NoMappings)?;
    Ok(merge_with(first, maps))
}

/// Merge a sequence of owned mappings, later mappings winning.
///
/// Entries are moved out of the inputs instead of cloned. Fails with
/// [`MergeError::NoMappings`] when `maps` is empty.
pub fn merge_owned<M, I>(maps: I) -> MergeResult<M>
where
    M: Mapping,
    I: IntoIterator<Item = M>,
{
    let mut maps = maps.into_iter();
    let mut merged = maps.next().ok_or(MergeError::NoMappings)?;

    let mut inputs = 1usize;
    for map in maps {
        merged.absorb(map);
        inputs += 1;
    }

    trace!(inputs, keys = merged.entry_count(), "merged owned mappings");
    Ok(merged)
}
