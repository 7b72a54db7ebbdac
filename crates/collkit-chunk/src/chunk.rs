//! Splitting sequences into consecutive fixed-size chunks.
//!
//! Chunks are cut at every `size`-th index starting from 0. An empty input
//! yields no chunks at all (not one empty chunk), and a size larger than the
//! input yields a single chunk holding everything.

use std::iter::FusedIterator;
use std::slice;

use tracing::trace;

use crate::error::ChunkResult;
use crate::size::ChunkSize;

/// Split `sequence` into consecutive chunks of `size` elements.
///
/// The input is collected in full before splitting. Fails with
/// [`ChunkError::InvalidSize`](crate::ChunkError::InvalidSize) when `size`
/// is zero.
///
/// # Examples
///
/// ```
/// use collkit_chunk::chunk;
///
/// assert_eq!(chunk([1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk(Vec::<u8>::new(), 3).unwrap().is_empty());
/// assert!(chunk([1, 2], 0).is_err());
/// ```
pub fn chunk<I>(sequence: I, size: usize) -> ChunkResult<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
{
    let size = ChunkSize::new(size)?;
    Ok(chunk_by(sequence, size))
}

/// Like [`chunk`], with a size that has already been validated.
pub fn chunk_by<I>(sequence: I, size: ChunkSize) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
{
    let items: Vec<I::Item> = sequence.into_iter().collect();
    let len = items.len();
    let n = size.get();

    let mut chunks = Vec::with_capacity(size.chunk_count(len));
    let mut rest = items.into_iter();
    loop {
        let group: Vec<I::Item> = rest.by_ref().take(n).collect();
        if group.is_empty() {
            break;
        }
        chunks.push(group);
    }

    trace!(len, size = n, chunks = chunks.len(), "chunked sequence");
    chunks
}

/// Borrowing, lazy view of `items` split into chunks of `size` elements.
///
/// Produces the same partition as [`chunk`] without copying.
///
/// # Examples
///
/// ```
/// use collkit_chunk::chunk_slice;
///
/// let data = [1, 2, 3, 4, 5];
/// let chunks: Vec<&[i32]> = chunk_slice(&data, 2).unwrap().collect();
/// assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
/// ```
pub fn chunk_slice<T>(items: &[T], size: usize) -> ChunkResult<Chunks<'_, T>> {
    let size = ChunkSize::new(size)?;
    Ok(chunk_slice_by(items, size))
}

/// Like [`chunk_slice`], with a size that has already been validated.
pub fn chunk_slice_by<T>(items: &[T], size: ChunkSize) -> Chunks<'_, T> {
    trace!(len = items.len(), size = size.get(), "chunking slice");
    Chunks {
        inner: items.chunks(size.get()),
        size,
        remainder_len: items.len() % size.get(),
    }
}

/// Iterator over the chunks of a slice. Created by [`chunk_slice`].
#[derive(Clone, Debug)]
pub struct Chunks<'a, T> {
    inner: slice::Chunks<'a, T>,
    size: ChunkSize,
    remainder_len: usize,
}

impl<'a, T> Chunks<'a, T> {
    /// The chunk size this view splits by.
    pub fn size(&self) -> ChunkSize {
        self.size
    }

    /// Length of the trailing short chunk, or 0 if every chunk is full.
    pub fn remainder_len(&self) -> usize {
        self.remainder_len
    }
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Chunks<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}

impl<T> FusedIterator for Chunks<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChunkError;

    use proptest::prelude::*;

    #[test]
    fn uneven_split_leaves_short_tail() {
        let chunks = chunk(vec![1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn even_split_has_no_tail() {
        let chunks = chunk(vec![1, 2, 3, 4], 2).unwrap();
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        let chunks = chunk(Vec::<i32>::new(), 3).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn oversized_chunk_holds_everything() {
        let chunks = chunk(vec!['a', 'b', 'c'], 10).unwrap();
        assert_eq!(chunks, vec![vec!['a', 'b', 'c']]);
    }

    #[test]
    fn size_one_isolates_each_element() {
        let chunks = chunk("abc".chars(), 1).unwrap();
        assert_eq!(chunks, vec![vec!['a'], vec!['b'], vec!['c']]);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            chunk(vec![1, 2, 3], 0),
            Err(ChunkError::InvalidSize { size: 0 })
        );
        assert_eq!(
            chunk(Vec::<i32>::new(), 0),
            Err(ChunkError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn one_pass_iterator_is_materialized() {
        let source = (0..7).map(|i| i * 10);
        let chunks = chunk(source, 3).unwrap();
        assert_eq!(chunks, vec![vec![0, 10, 20], vec![30, 40, 50], vec![60]]);
    }

    #[test]
    fn non_clone_elements_are_moved() {
        struct Token(u32);

        let chunks = chunk((0..5).map(Token), 2).unwrap();
        let ids: Vec<Vec<u32>> = chunks
            .iter()
            .map(|c| c.iter().map(|t| t.0).collect())
            .collect();
        assert_eq!(ids, vec![vec![0, 1], vec![2, 3], vec![4]]);
    }

    #[test]
    fn slice_view_matches_eager_chunks() {
        let data = [1, 2, 3, 4, 5];
        let view: Vec<Vec<i32>> = chunk_slice(&data, 2)
            .unwrap()
            .map(|c| c.to_vec())
            .collect();
        assert_eq!(view, chunk(data, 2).unwrap());
    }

    #[test]
    fn slice_view_reports_shape() {
        let data = [0u8; 7];
        let chunks = chunk_slice(&data, 3).unwrap();
        assert_eq!(chunks.size().get(), 3);
        assert_eq!(chunks.remainder_len(), 1);
        assert_eq!(chunks.len(), 3);

        let even = chunk_slice(&data[..6], 3).unwrap();
        assert_eq!(even.remainder_len(), 0);
        assert_eq!(even.len(), 2);
    }

    #[test]
    fn slice_view_iterates_backwards() {
        let data = [1, 2, 3, 4, 5];
        let mut chunks = chunk_slice(&data, 2).unwrap();
        assert_eq!(chunks.next_back(), Some(&[5][..]));
        assert_eq!(chunks.next(), Some(&[1, 2][..]));
        assert_eq!(chunks.next(), Some(&[3, 4][..]));
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn slice_view_rejects_zero_size() {
        let data = [1, 2, 3];
        assert!(matches!(
            chunk_slice(&data, 0),
            Err(ChunkError::InvalidSize { size: 0 })
        ));
    }

    #[test]
    fn empty_slice_view_is_empty() {
        let data: [u8; 0] = [];
        let mut chunks = chunk_slice(&data, 4).unwrap();
        assert_eq!(chunks.len(), 0);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn input_is_left_untouched() {
        let data = vec![String::from("x"), String::from("y"), String::from("z")];
        let chunks = chunk(data.iter().cloned(), 2).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(data, vec!["x", "y", "z"]);
    }

    #[test]
    fn chunks_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Chunks<'static, u64>>();
        assert_send_sync::<ChunkSize>();
        assert_send_sync::<ChunkError>();
    }

    proptest! {
        #[test]
        fn concatenation_reproduces_input(items in prop::collection::vec(any::<i32>(), 0..200), size in 1usize..50) {
            let chunks = chunk(items.clone(), size).unwrap();
            let flat: Vec<i32> = chunks.into_iter().flatten().collect();
            prop_assert_eq!(flat, items);
        }

        #[test]
        fn only_the_last_chunk_may_be_short(items in prop::collection::vec(any::<u8>(), 0..200), size in 1usize..50) {
            let chunks = chunk(items.clone(), size).unwrap();
            for c in &chunks {
                prop_assert!(!c.is_empty());
                prop_assert!(c.len() <= size);
            }
            if let Some((_, full)) = chunks.split_last() {
                prop_assert!(full.iter().all(|c| c.len() == size));
            }
            if let Some(last) = chunks.last() {
                let expected = match items.len() % size {
                    0 => size,
                    rem => rem,
                };
                prop_assert_eq!(last.len(), expected);
            }
        }

        #[test]
        fn chunk_count_matches_size_helper(items in prop::collection::vec(any::<u8>(), 0..200), size in 1usize..50) {
            let size = ChunkSize::new(size).unwrap();
            prop_assert_eq!(chunk_by(items.clone(), size).len(), size.chunk_count(items.len()));
            prop_assert_eq!(chunk_slice_by(&items, size).len(), size.chunk_count(items.len()));
        }

        #[test]
        fn slice_view_agrees_with_eager(items in prop::collection::vec(any::<i64>(), 0..200), size in 1usize..50) {
            let eager = chunk(items.clone(), size).unwrap();
            let lazy: Vec<Vec<i64>> = chunk_slice(&items, size).unwrap().map(<[i64]>::to_vec).collect();
            prop_assert_eq!(eager, lazy);
        }
    }
}
