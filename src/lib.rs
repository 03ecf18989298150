//! # slicetools
//!
//! Generic higher-order functions over slices.
//!
//! ## Overview
//!
//! This library covers the sequence-processing idioms that otherwise end up
//! as hand-written loops:
//!
//! - **Predicates**: `all`, `any`, `count`
//! - **Transformation**: `map`, `filter`
//! - **Folding**: `reduce`, `map_reduce` and their seeded `_from` variants
//! - **Deduplication**: consecutive (`dedup`) and global (`uniq`)
//! - **Chunking**: `chunk`, `checked_chunk`
//!
//! Every function is pure and synchronous. Inputs are borrowed and never
//! mutated, and results are freshly allocated.
//!
//! ## Feature Flags
//!
//! - `fxhash`: Use `rustc-hash` for the `uniq` membership set
//! - `ahash`: Use `ahash` for the `uniq` membership set
//!
//! ## Example
//!
//! ```rust
//! use slicetools::prelude::*;
//!
//! let words = ["apple", "avocado", "banana", "apple", "cherry"];
//!
//! assert!(any(&words, |word| word.starts_with('b')));
//! assert!(!all(&words, |word| word.len() > 5));
//! assert_eq!(uniq(&words), vec!["apple", "avocado", "banana", "cherry"]);
//! assert_eq!(count(&words, |word| word.starts_with('a')), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every sequence operation and error type.
///
/// # Usage
///
/// ```rust
/// use slicetools::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;
}

pub mod sequence;

pub use sequence::*;
