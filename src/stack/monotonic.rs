use super::{ArrayStack, Stack};
use alloc::vec::Vec;

/// Returns, for each element, the first strictly greater element to its right; or None if
/// there is no such element.
///
/// The slice is scanned from right to left while a stack keeps the candidates in decreasing
/// order from bottom to top. Before answering for an element, candidates which are less than
/// or equal to it are discarded since the element shadows them for everything further left.
/// Each element is pushed and popped at most once; hence, the scan is O(n).
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::stack::next_greater_element;
///
/// let next = next_greater_element(&[4, 5, 2, 25]);
/// assert_eq!(next, vec![Some(5), Some(25), Some(25), None]);
///
/// let next = next_greater_element(&[13, 7, 6, 12]);
/// assert_eq!(next, vec![None, Some(12), Some(12), None]);
/// ```
pub fn next_greater_element<T: PartialOrd + Clone>(values: &[T]) -> Vec<Option<T>> {
    let mut result = Vec::with_capacity(values.len());
    result.resize(values.len(), None);

    let mut candidates = ArrayStack::new();

    for (i, value) in values.iter().enumerate().rev() {
        while candidates.peek().is_ok_and(|top: &T| top <= value) {
            _ = candidates.pop();
        }

        result[i] = candidates.peek().ok().cloned();
        candidates.push(value.clone());
    }

    result
}
