//! Splitting a sequence into consecutive groups.

use super::error::ChunkSizeError;

/// Returns how many chunks of up to `size` elements a sequence of `length`
/// elements splits into.
///
/// This is `ceil(length / size)`, or `0` when `size` is zero.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::chunk_count;
///
/// assert_eq!(chunk_count(5, 2), 3);
/// assert_eq!(chunk_count(4, 2), 2);
/// assert_eq!(chunk_count(0, 3), 0);
/// assert_eq!(chunk_count(3, 0), 0);
/// ```
pub const fn chunk_count(length: usize, size: usize) -> usize {
    if size == 0 {
        0
    } else {
        length.div_ceil(size)
    }
}

/// Splits `sequence` into consecutive chunks of `size` elements.
///
/// The last chunk may be shorter. Order is preserved within and across
/// chunks. A zero `size` or an empty `sequence` yields no chunks.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk(&Vec::<i32>::new(), 3).is_empty());
/// assert!(chunk(&[1, 2, 3], 0).is_empty());
/// ```
pub fn chunk<T>(sequence: &[T], size: usize) -> Vec<Vec<T>>
where
    T: Clone,
{
    if size == 0 {
        return Vec::new();
    }

    let mut output = Vec::with_capacity(chunk_count(sequence.len(), size));
    for group in sequence.chunks(size) {
        output.push(group.to_vec());
    }
    output
}

/// Like [`chunk`], but rejects a zero `size` instead of returning no chunks.
///
/// # Errors
///
/// Returns [`ChunkSizeError::Zero`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::{checked_chunk, ChunkSizeError};
///
/// assert_eq!(checked_chunk(&['a', 'b', 'c'], 2), Ok(vec![vec!['a', 'b'], vec!['c']]));
/// assert_eq!(checked_chunk(&['a'], 0), Err(ChunkSizeError::Zero));
/// ```
pub fn checked_chunk<T>(sequence: &[T], size: usize) -> Result<Vec<Vec<T>>, ChunkSizeError>
where
    T: Clone,
{
    if size == 0 {
        return Err(ChunkSizeError::Zero);
    }
    Ok(chunk(sequence, size))
}
