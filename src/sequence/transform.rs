//! Element-wise transformation and selection: [`map`] and [`filter`].

/// Applies `function` to every element of `sequence` and collects the results.
///
/// The result always has the same length as the input and preserves order.
/// The input is left untouched.
///
/// # Arguments
///
/// * `sequence` - The elements to transform
/// * `function` - A function from a borrowed element to the output value
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::map;
///
/// let words = ["one", "three", "five"];
/// let lengths = map(&words, |word| word.len());
/// assert_eq!(lengths, vec![3, 5, 4]);
/// ```
pub fn map<T, U, F>(sequence: &[T], mut function: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut output = Vec::with_capacity(sequence.len());
    for element in sequence {
        output.push(function(element));
    }
    output
}

/// Returns a new `Vec` holding, in their original order, the elements of
/// `sequence` that satisfy `predicate`.
///
/// The result is always a fresh container, even when every element is kept.
///
/// # Examples
///
/// ```rust
/// use slicetools::sequence::filter;
///
/// let numbers = vec![1, 2, 3, 4, 5, 6];
/// assert_eq!(filter(&numbers, |element| element % 3 == 0), vec![3, 6]);
/// assert!(filter(&numbers, |element| *element > 10).is_empty());
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .filter(|element| predicate(element))
        .cloned()
        .collect()
}
