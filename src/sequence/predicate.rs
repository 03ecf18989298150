//! Predicate checks over a sequence: [`all`], [`any`] and [`count`].
//!
//! The three functions differ in how many times they call the predicate:
//!
//! | Function | Calls to `predicate`                          |
//! |----------|-----------------------------------------------|
//! | `all`    | exactly once per element, never stops early   |
//! | `any`    | in order, up to and including the first `true` |
//! | `count`  | exactly once per element                      |
//!
//! Callers may rely on these call counts when the predicate has observable
//! side effects (counting, logging, recording).

/// Returns `true` if every element of `sequence` satisfies `predicate`.
///
/// The predicate is evaluated for **every** element, in order, even after an
/// element has already failed it. An empty sequence yields `true`.
///
/// # Arguments
///
/// * `sequence` - The elements to test
/// * `predicate` - A function that returns true for matching elements
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::all;
///
/// assert!(all(&[2, 4, 6], |element| element % 2 == 0));
/// assert!(!all(&[2, 3, 6], |element| element % 2 == 0));
///
/// // Every element is visited, even after the first failure
/// let mut calls = 0;
/// let result = all(&[1, 2, 3], |_| {
///     calls += 1;
///     false
/// });
/// assert!(!result);
/// assert_eq!(calls, 3);
///
/// let empty: [i32; 0] = [];
/// assert!(all(&empty, |_| false));
/// ```
pub fn all<T, P>(sequence: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .fold(true, |accumulator, element| predicate(element) & accumulator)
}

/// Returns `true` if at least one element of `sequence` satisfies `predicate`.
///
/// Evaluation stops at the first element for which the predicate returns
/// `true`; later elements are never passed to it. An empty sequence yields
/// `false`.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::any;
///
/// assert!(any(&[1, 2, 3], |element| *element == 2));
/// assert!(!any(&[1, 2, 3], |element| *element > 10));
///
/// let mut visited = Vec::new();
/// assert!(any(&[1, 2, 3, 4], |element| {
///     visited.push(*element);
///     *element == 2
/// }));
/// assert_eq!(visited, vec![1, 2]);
/// ```
pub fn any<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().any(predicate)
}

/// Returns the number of elements of `sequence` that satisfy `predicate`.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::count;
///
/// assert_eq!(count(&[1, 2, 3, 4, 5], |element| element % 2 == 1), 3);
/// assert_eq!(count(&Vec::<i32>::new(), |_| true), 0);
/// ```
pub fn count<T, P>(sequence: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .fold(0, |total, element| total + usize::from(predicate(element)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(&[], true)]
    #[case::all_even(&[2, 4, 6], true)]
    #[case::one_odd_at_start(&[1, 4, 6], false)]
    #[case::one_odd_at_end(&[2, 4, 7], false)]
    fn test_all_even(#[case] input: &[i32], #[case] expected: bool) {
        assert_eq!(all(input, |element| element % 2 == 0), expected);
    }

    #[rstest]
    fn test_all_does_not_short_circuit() {
        let mut visited = Vec::new();
        let result = all(&[1, 2, 3, 4], |element| {
            visited.push(*element);
            *element > 10
        });

        assert!(!result);
        assert_eq!(visited, vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case::empty(&[], false)]
    #[case::no_match(&[1, 3, 5], false)]
    #[case::first_matches(&[2, 3, 5], true)]
    #[case::last_matches(&[1, 3, 6], true)]
    fn test_any_even(#[case] input: &[i32], #[case] expected: bool) {
        assert_eq!(any(input, |element| element % 2 == 0), expected);
    }

    #[rstest]
    fn test_any_stops_at_first_match() {
        let mut calls = 0;
        let result = any(&[5, 6, 7, 8], |element| {
            calls += 1;
            element % 2 == 0
        });

        assert!(result);
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn test_any_visits_everything_without_match() {
        let mut calls = 0;
        let result = any(&[1, 3, 5], |_| {
            calls += 1;
            false
        });

        assert!(!result);
        assert_eq!(calls, 3);
    }

    #[rstest]
    #[case::empty(&[], 0)]
    #[case::none(&[1, 3], 0)]
    #[case::some(&[1, 2, 3, 4], 2)]
    #[case::every(&[2, 4, 6], 3)]
    fn test_count_even(#[case] input: &[i32], #[case] expected: usize) {
        assert_eq!(count(input, |element| element % 2 == 0), expected);
    }
}
