use core::cmp::Ordering;

/// Returns the position of the first element equal to `value`; None if there is none.
///
/// O(n) time and O(1) space.
pub fn linear_search<T: PartialEq>(values: &[T], value: &T) -> Option<usize> {
    values.iter().position(|x| x == value)
}

/// Returns the position of an element equal to `value` in the `sorted` slice; None if there is
/// none.
///
/// O(log n) time and O(1) space.
/// The result is unspecified if `sorted` is not sorted in ascending order.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::algorithms::binary_search;
///
/// let sorted = [2, 3, 4, 10, 40];
/// assert_eq!(binary_search(&sorted, &10), Some(3));
/// assert_eq!(binary_search(&sorted, &5), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], value: &T) -> Option<usize> {
    let (mut low, mut high) = (0, sorted.len());

    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(value) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

/// Recursive version of [`binary_search`] with the same result.
///
/// Each halving of the range is a nested call; therefore, in addition to O(log n) time, this
/// version uses O(log n) call stack depth, unlike the O(1) space of the iterative version.
pub fn binary_search_recursive<T: Ord>(sorted: &[T], value: &T) -> Option<usize> {
    search_in(sorted, value, 0, sorted.len())
}

fn search_in<T: Ord>(sorted: &[T], value: &T, low: usize, high: usize) -> Option<usize> {
    if low >= high {
        return None;
    }

    let mid = low + (high - low) / 2;
    match sorted[mid].cmp(value) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_in(sorted, value, mid + 1, high),
        Ordering::Greater => search_in(sorted, value, low, mid),
    }
}
