use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value};

/// A key-value mapping that can take part in a right-biased merge.
///
/// All implementations must satisfy these invariants:
/// - `overwrite` and `absorb` insert every entry of `other`, replacing the
///   value of any key already present. Keys only in `self` are kept.
/// - Values are replaced as a whole. Nested mappings are never merged.
/// - `other` is never modified by `overwrite`.
pub trait Mapping: Sized {
    /// A new mapping with no entries.
    fn empty() -> Self;

    /// Copy every entry of `other` into `self`, later values winning.
    fn overwrite(&mut self, other: &Self);

    /// Move every entry of `other` into `self`, later values winning.
    ///
    /// Default implementation clones through `overwrite()`. Implementations
    /// override it to move entries instead.
    fn absorb(&mut self, other: Self) {
        self.overwrite(&other);
    }

    /// Number of entries.
    fn entry_count(&self) -> usize;
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    fn empty() -> Self {
        HashMap::default()
    }

    fn overwrite(&mut self, other: &Self) {
        self.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    fn absorb(&mut self, other: Self) {
        self.extend(other);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn empty() -> Self {
        BTreeMap::new()
    }

    fn overwrite(&mut self, other: &Self) {
        self.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    fn absorb(&mut self, other: Self) {
        self.extend(other);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl Mapping for Map<String, Value> {
    fn empty() -> Self {
        Map::new()
    }

    fn overwrite(&mut self, other: &Self) {
        self.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    fn absorb(&mut self, other: Self) {
        self.extend(other);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}
