//! Search, array and pointer-chasing algorithms.

mod array;
mod chain;
mod search;

pub use array::{max_subarray_sum, remove_duplicates, reverse_array, rotate_array, two_sum};
pub use chain::{find_intersection, find_middle, has_cycle};
pub use search::{binary_search, binary_search_recursive, linear_search};
