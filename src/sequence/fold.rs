//! Folding a sequence into a single value.
//!
//! All functions in this module share one association order: the combining
//! function receives the **element first and the accumulator second**, and
//! elements are visited left to right.
//!
//! ```text
//! reduce([a, b, c], f) == f(c, f(b, f(a, zero)))
//! ```
//!
//! This differs from [`Iterator::fold`] (accumulator first) and from a
//! classic right fold (`f(a, f(b, f(c, zero)))`). The two only agree when
//! `f` is commutative, so the order is part of the contract.
//!
//! # Examples
//!
//! ```rust
//! use slicetools::sequence::reduce;
//!
//! let letters = ["a", "b", "c"];
//!
//! // Prepending each element to the accumulator reverses the input
//! let prepended = reduce(&letters, |element, accumulator: String| {
//!     format!("{element}{accumulator}")
//! });
//! assert_eq!(prepended, "cba");
//!
//! // Appending keeps input order
//! let appended = reduce(&letters, |element, accumulator: String| {
//!     accumulator + *element
//! });
//! assert_eq!(appended, "abc");
//! ```

/// Folds `sequence` into a value starting from the zero value of `U`.
///
/// For each element in input order, computes
/// `accumulator = function(element, accumulator)`. An empty sequence yields
/// `U::default()`.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::reduce;
///
/// let total = reduce(&[1, 2, 3], |element, accumulator: i32| accumulator + element);
/// assert_eq!(total, 6);
///
/// let empty: Vec<i32> = vec![];
/// assert_eq!(reduce(&empty, |element, accumulator: i32| accumulator + element), 0);
/// ```
pub fn reduce<T, U, F>(sequence: &[T], function: F) -> U
where
    U: Default,
    F: FnMut(&T, U) -> U,
{
    reduce_from(sequence, function, U::default())
}

/// Folds `sequence` into a value starting from `init`.
///
/// Same association order as [`reduce`]; `reduce(s, f)` is
/// `reduce_from(s, f, U::default())`. The seed comes last, after the
/// combining function.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::reduce_from;
///
/// let product = reduce_from(&[2, 3, 4], |element, accumulator| accumulator * element, 1_i32);
/// assert_eq!(product, 24);
/// ```
pub fn reduce_from<T, U, F>(sequence: &[T], mut function: F, init: U) -> U
where
    F: FnMut(&T, U) -> U,
{
    let mut accumulator = init;
    for element in sequence {
        accumulator = function(element, accumulator);
    }
    accumulator
}

/// Maps each element and folds the mapped values, starting from the zero
/// value of `V`.
///
/// For each element in input order, computes
/// `accumulator = reducer(mapper(element), accumulator)`. Equivalent to
/// [`map`](super::map) followed by [`reduce`] without the intermediate
/// `Vec`.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::map_reduce;
///
/// let words = ["alpha", "be", "gamma"];
/// let total_length = map_reduce(
///     &words,
///     |word| word.len(),
///     |length, accumulator: usize| accumulator + length,
/// );
/// assert_eq!(total_length, 12);
/// ```
pub fn map_reduce<T, U, V, M, R>(sequence: &[T], mapper: M, reducer: R) -> V
where
    V: Default,
    M: FnMut(&T) -> U,
    R: FnMut(U, V) -> V,
{
    map_reduce_from(sequence, mapper, reducer, V::default())
}

/// Maps each element and folds the mapped values, starting from `init`.
///
/// `map_reduce(s, m, r)` is `map_reduce_from(s, m, r, V::default())`.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::map_reduce_from;
///
/// let longest = map_reduce_from(
///     &["a", "abcd", "ab"],
///     |word| word.len(),
///     |length, accumulator: usize| accumulator.max(length),
///     0,
/// );
/// assert_eq!(longest, 4);
/// ```
pub fn map_reduce_from<T, U, V, M, R>(sequence: &[T], mut mapper: M, mut reducer: R, init: V) -> V
where
    M: FnMut(&T) -> U,
    R: FnMut(U, V) -> V,
{
    let mut accumulator = init;
    for element in sequence {
        accumulator = reducer(mapper(element), accumulator);
    }
    accumulator
}
