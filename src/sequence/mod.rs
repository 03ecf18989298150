//! Higher-order functions over slices.
//!
//! Every function in this module takes the sequence as a borrowed slice
//! (`&[T]`), so it works with `Vec<T>`, arrays and sub-slices alike. The
//! input is never mutated; transforming operations allocate a fresh `Vec`.
//!
//! - **Predicates**: [`all`], [`any`], [`count`]
//! - **Transformation**: [`map`], [`filter`]
//! - **Folding**: [`reduce`], [`reduce_from`], [`map_reduce`], [`map_reduce_from`]
//! - **Consecutive deduplication**: [`dedup`], [`dedup_func`], [`dedup_by_key`]
//! - **Global deduplication**: [`uniq`], [`uniq_by_key`], [`uniq_func`]
//! - **Chunking**: [`chunk`], [`checked_chunk`], [`chunk_count`]
//!
//! ## Evaluation Order
//!
//! Caller-supplied functions are always invoked left to right, at most once
//! per element. The exceptions worth knowing:
//!
//! - [`all`] evaluates the predicate for every element, it does not stop at
//!   the first failure.
//! - [`any`] stops at the first element that satisfies the predicate.
//! - [`reduce`] and [`map_reduce`] pass the element **before** the
//!   accumulator: `accumulator = function(element, accumulator)`.
//!
//! # Examples
//!
//! ```rust
//! use slicetools::sequence::{chunk, dedup, filter, map, reduce, uniq};
//!
//! let readings = vec![3, 3, 7, 1, 7, 7, 2];
//!
//! assert_eq!(dedup(&readings), vec![3, 7, 1, 7, 2]);
//! assert_eq!(uniq(&readings), vec![3, 7, 1, 2]);
//!
//! let doubled = map(&readings, |reading| reading * 2);
//! let large = filter(&doubled, |reading| *reading > 5);
//! assert_eq!(large, vec![6, 6, 14, 14, 14]);
//!
//! let total = reduce(&large, |reading, accumulator: i32| accumulator + reading);
//! assert_eq!(total, 54);
//!
//! assert_eq!(chunk(&large, 2).len(), 3);
//! ```

mod chunk;
mod dedup;
mod error;
mod fold;
mod predicate;
mod transform;
mod uniq;

pub use chunk::{checked_chunk, chunk, chunk_count};
pub use dedup::{dedup, dedup_by_key, dedup_func};
pub use error::{ChunkSizeError, SequenceError};
pub use fold::{map_reduce, map_reduce_from, reduce, reduce_from};
pub use predicate::{all, any, count};
pub use transform::{filter, map};
pub use uniq::{MembershipState, uniq, uniq_by_key, uniq_func};
