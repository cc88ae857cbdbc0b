use crate::DsaError;
use hashbrown::HashMap;
use num_traits::{CheckedAdd, Zero};

/// Returns the positions `(i, j)` with `i < j` of two elements summing up to `target`, or None
/// if no such pair exists.
///
/// Elements are visited in order while a map from value to its latest position is built
/// incrementally; the first `j` whose complement has already been seen determines the result.
/// Pairs whose complement cannot be represented in `i64` are skipped.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::algorithms::two_sum;
///
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
/// assert_eq!(two_sum(&[1, 2], 7), None);
/// ```
pub fn two_sum(values: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen = HashMap::with_capacity(values.len());

    for (j, &value) in values.iter().enumerate() {
        if let Some(&i) = target.checked_sub(value).and_then(|c| seen.get(&c)) {
            return Some((i, j));
        }
        seen.insert(value, j);
    }

    None
}

/// Reverses the slice in place by swapping from both ends towards the middle.
pub fn reverse_array<T>(values: &mut [T]) {
    let (mut left, mut right) = (0, values.len());
    while left + 1 < right {
        right -= 1;
        values.swap(left, right);
        left += 1;
    }
}

/// Rotates the slice in place `k` positions to the right.
///
/// `k` is taken modulo the length; hence rotating by a multiple of the length, or rotating an
/// empty slice, leaves it unchanged.
///
/// The rotation is three in-place reversals: of the whole slice, then of the first `k` and of
/// the remaining elements. The partial reversals are applied on sub-slices borrowed from the
/// same buffer; nothing is copied and no memory is allocated.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::algorithms::rotate_array;
///
/// let mut values = [1, 2, 3, 4, 5];
/// rotate_array(&mut values, 2);
/// assert_eq!(values, [4, 5, 1, 2, 3]);
///
/// rotate_array(&mut values, 5);
/// assert_eq!(values, [4, 5, 1, 2, 3]);
/// ```
pub fn rotate_array<T>(values: &mut [T], k: usize) {
    if values.is_empty() {
        return;
    }

    let k = k % values.len();
    if k == 0 {
        return;
    }

    reverse_array(values);
    let (first, rest) = values.split_at_mut(k);
    reverse_array(first);
    reverse_array(rest);
}

/// Compacts the `sorted` slice in place so that its prefix holds each distinct value once,
/// in order; and returns the length of this prefix.
///
/// Duplicates are moved behind the prefix by swapping; the order of the elements after the
/// prefix is unspecified.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::algorithms::remove_duplicates;
///
/// let mut values = [1, 1, 2, 3, 3, 3, 4];
/// let len = remove_duplicates(&mut values);
/// assert_eq!(&values[..len], &[1, 2, 3, 4]);
/// ```
pub fn remove_duplicates<T: PartialEq>(sorted: &mut [T]) -> usize {
    if sorted.is_empty() {
        return 0;
    }

    let mut write = 1;
    for read in 1..sorted.len() {
        if sorted[read] != sorted[write - 1] {
            sorted.swap(read, write);
            write += 1;
        }
    }

    write
}

/// Returns the maximum sum of a non-empty contiguous sub-slice; None if `values` is empty.
///
/// Kadane's algorithm: the running sum restarts from the current element whenever the previous
/// run is negative. Fails with `ArithmeticOverflow` if the sum of a run does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::{algorithms::max_subarray_sum, DsaError};
///
/// assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Ok(Some(6)));
/// assert_eq!(max_subarray_sum(&[-3, -1, -2]), Ok(Some(-1)));
/// assert_eq!(max_subarray_sum::<i32>(&[]), Ok(None));
/// assert_eq!(max_subarray_sum(&[i64::MAX, 1]), Err(DsaError::ArithmeticOverflow));
/// ```
pub fn max_subarray_sum<T>(values: &[T]) -> Result<Option<T>, DsaError>
where
    T: Copy + Ord + Zero + CheckedAdd,
{
    let Some((&first, rest)) = values.split_first() else {
        return Ok(None);
    };

    let mut current = first;
    let mut best = first;
    for &value in rest {
        current = match current < T::zero() {
            true => value,
            false => current.checked_add(&value).ok_or(DsaError::ArithmeticOverflow)?,
        };
        best = best.max(current);
    }

    Ok(Some(best))
}
