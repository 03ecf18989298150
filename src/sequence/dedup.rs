//! Consecutive deduplication.
//!
//! Only **adjacent** repeats are collapsed; a value that reappears after a
//! different value is kept. Use [`uniq`](super::uniq) for global
//! deduplication.
//!
//! ```text
//! dedup([1, 2, 2, 3, 2]) == [1, 2, 3, 2]
//! uniq ([1, 2, 2, 3, 2]) == [1, 2, 3]
//! ```
//!
//! Each element is compared with the element immediately before it **in the
//! input**, not with the last element kept. For transitive equalities the
//! two are the same; for a custom [`dedup_func`] comparison they may not be.

/// Collapses each run of consecutive equal elements into its first element.
///
/// Always returns a new `Vec`; an empty input yields an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::dedup;
///
/// assert_eq!(dedup(&[1, 2, 2, 3, 2]), vec![1, 2, 3, 2]);
/// assert_eq!(dedup(&["a", "a", "a"]), vec!["a"]);
/// assert!(dedup(&Vec::<u8>::new()).is_empty());
/// ```
pub fn dedup<T>(sequence: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    dedup_func(sequence, |current, previous| current == previous)
}

/// Like [`dedup`], but equality is decided by `equal(current, previous)`.
///
/// Intended for element types without `PartialEq`, or for looser notions of
/// equality. `equal` is called once for every element after the first.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::dedup_func;
///
/// let words = ["Apple", "apple", "Banana", "APPLE"];
/// let result = dedup_func(&words, |current, previous| current.eq_ignore_ascii_case(previous));
/// assert_eq!(result, vec!["Apple", "Banana", "APPLE"]);
/// ```
pub fn dedup_func<T, F>(sequence: &[T], mut equal: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let Some(first) = sequence.first() else {
        return Vec::new();
    };

    let mut output = vec![first.clone()];
    for pair in sequence.windows(2) {
        if !equal(&pair[1], &pair[0]) {
            output.push(pair[1].clone());
        }
    }
    output
}

/// Collapses runs of consecutive elements whose derived keys are equal.
///
/// `key` is called exactly once per element.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::dedup_by_key;
///
/// let readings = [(1, "ok"), (2, "ok"), (3, "fail"), (4, "ok")];
/// let transitions = dedup_by_key(&readings, |(_, status)| *status);
/// assert_eq!(transitions, vec![(1, "ok"), (3, "fail"), (4, "ok")]);
/// ```
pub fn dedup_by_key<T, K, F>(sequence: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut output = Vec::new();
    let mut previous_key: Option<K> = None;

    for element in sequence {
        let current_key = key(element);
        if previous_key.as_ref() != Some(&current_key) {
            output.push(element.clone());
        }
        previous_key = Some(current_key);
    }
    output
}
