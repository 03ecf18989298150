//! Error types for the fallible sequence operations.
//!
//! The core operations are total and never fail. Only the `checked_*`
//! variants report invalid arguments, using the types in this module.

/// Represents an invalid chunk size passed to
/// [`checked_chunk`](super::checked_chunk).
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::ChunkSizeError;
///
/// let error = ChunkSizeError::Zero;
/// assert_eq!(
///     format!("{}", error),
///     "chunk size must be greater than zero"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkSizeError {
    /// The requested chunk size was zero.
    Zero,
}

impl std::fmt::Display for ChunkSizeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zero => write!(formatter, "chunk size must be greater than zero"),
        }
    }
}

impl std::error::Error for ChunkSizeError {}

/// Represents errors that can occur in the sequence operations.
///
/// This enum provides a unified error type so callers mixing several
/// `checked_*` operations can use `?` with a single error type.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::{checked_chunk, SequenceError};
///
/// fn pages(items: &[u32], per_page: usize) -> Result<usize, SequenceError> {
///     Ok(checked_chunk(items, per_page)?.len())
/// }
///
/// assert_eq!(pages(&[1, 2, 3], 2), Ok(2));
/// assert!(pages(&[1, 2, 3], 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// An invalid chunk size was requested.
    ChunkSize(ChunkSizeError),
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChunkSize(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ChunkSize(error) => Some(error),
        }
    }
}

impl From<ChunkSizeError> for SequenceError {
    fn from(error: ChunkSizeError) -> Self {
        Self::ChunkSize(error)
    }
}

static_assertions::assert_impl_all!(ChunkSizeError: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(SequenceError: Send, Sync, std::error::Error);
