//! Global deduplication in first-occurrence order.
//!
//! [`uniq`] and [`uniq_by_key`] track already emitted values in a hash
//! membership set and run in amortized O(n). [`uniq_func`] covers element
//! types that are neither `Eq` nor `Hash` by comparing each candidate
//! against every kept element, which is O(n * k) for k distinct elements.
//!
//! # Hashing
//!
//! The membership set is built with [`MembershipState`]. Its concrete type
//! depends on the enabled Cargo features:
//!
//! | Feature  | `MembershipState`                          |
//! |----------|--------------------------------------------|
//! | `fxhash` | `rustc_hash::FxBuildHasher`                |
//! | `ahash`  | `ahash::RandomState`                       |
//! | (none)   | `std::collections::hash_map::RandomState`  |
//!
//! `fxhash` takes precedence when both are enabled. The hasher never affects
//! the output: element order comes from the input, not from the set.

use std::collections::HashSet;
use std::hash::Hash;

/// The `BuildHasher` used for membership sets.
#[cfg(feature = "fxhash")]
pub type MembershipState = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used for membership sets.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type MembershipState = ahash::RandomState;

/// The `BuildHasher` used for membership sets.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type MembershipState = std::collections::hash_map::RandomState;

// Grows with the distinct values actually seen, not with the input length.
fn membership_set<K>() -> HashSet<K, MembershipState> {
    HashSet::with_hasher(MembershipState::default())
}

/// Returns the distinct elements of `sequence` in first-occurrence order.
///
/// Duplicates are removed globally, not only when adjacent.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::uniq;
///
/// assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// assert_eq!(uniq(&["x", "x"]), vec!["x"]);
/// assert!(uniq(&Vec::<i32>::new()).is_empty());
/// ```
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = membership_set();
    sequence
        .iter()
        .filter(|&element| seen.insert(element))
        .cloned()
        .collect()
}

/// Returns the elements of `sequence` whose derived key has not been seen
/// before, in first-occurrence order.
///
/// `key` is called exactly once per element.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::uniq_by_key;
///
/// let users = [("ann", 31), ("bob", 25), ("ann", 40)];
/// let first_per_name = uniq_by_key(&users, |(name, _)| *name);
/// assert_eq!(first_per_name, vec![("ann", 31), ("bob", 25)]);
/// ```
pub fn uniq_by_key<T, K, F>(sequence: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = membership_set();
    sequence
        .iter()
        .filter(|&element| seen.insert(key(element)))
        .cloned()
        .collect()
}

/// Returns the distinct elements of `sequence` in first-occurrence order,
/// using `equal(candidate, kept)` to decide equality.
///
/// For element types without `Eq` or `Hash`, such as floating point values
/// or types holding closures.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::uniq_func;
///
/// let readings = [1.0_f64, 1.05, 2.0, 0.98, 2.01];
/// let clustered = uniq_func(&readings, |candidate, kept| (candidate - kept).abs() < 0.1);
/// assert_eq!(clustered, vec![1.0, 2.0]);
/// ```
pub fn uniq_func<T, F>(sequence: &[T], mut equal: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut output: Vec<T> = Vec::new();
    for element in sequence {
        if !output.iter().any(|kept| equal(element, kept)) {
            output.push(element.clone());
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(&[], &[])]
    #[case::already_unique(&[1, 2, 3], &[1, 2, 3])]
    #[case::first_occurrence_order(&[3, 1, 3, 2, 1], &[3, 1, 2])]
    #[case::non_adjacent(&[1, 2, 2, 3, 2], &[1, 2, 3])]
    #[case::all_same(&[9, 9, 9], &[9])]
    fn test_uniq(#[case] input: &[i32], #[case] expected: &[i32]) {
        assert_eq!(uniq(input), expected);
    }

    #[rstest]
    fn test_membership_set_starts_unallocated() {
        let seen: HashSet<i32, MembershipState> = membership_set();
        assert_eq!(seen.capacity(), 0);
    }

    #[rstest]
    fn test_uniq_few_distinct_values_in_long_input() {
        let input: Vec<u8> = (0..10_000).map(|index| (index % 3) as u8).collect();
        assert_eq!(uniq(&input), vec![0, 1, 2]);
        assert_eq!(uniq_by_key(&input, |element| element % 2), vec![0, 1]);
    }

    #[rstest]
    fn test_uniq_strings() {
        let input = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(uniq(&input), vec!["b".to_string(), "a".to_string()]);
    }

    #[rstest]
    fn test_uniq_by_key_keeps_first_of_each_key() {
        let input = [10, 21, 12, 33, 44];
        let result = uniq_by_key(&input, |element| element % 2);
        assert_eq!(result, vec![10, 21]);
    }

    #[rstest]
    fn test_uniq_by_key_calls_key_once_per_element() {
        let mut calls = 0;
        let _ = uniq_by_key(&[1, 1, 2, 2, 3], |element| {
            calls += 1;
            *element
        });
        assert_eq!(calls, 5);
    }

    #[rstest]
    fn test_uniq_func_matches_uniq_for_native_equality() {
        let input = [5, 3, 5, 1, 3, 5];
        assert_eq!(uniq_func(&input, |candidate, kept| candidate == kept), uniq(&input));
    }

    #[rstest]
    fn test_uniq_func_passes_candidate_first() {
        let mut calls = Vec::new();
        let _ = uniq_func(&[1, 2], |candidate, kept| {
            calls.push((*candidate, *kept));
            false
        });
        assert_eq!(calls, vec![(2, 1)]);
    }

    #[rstest]
    fn test_uniq_func_empty() {
        assert!(uniq_func(&[] as &[f64], |candidate, kept| candidate == kept).is_empty());
    }
}
