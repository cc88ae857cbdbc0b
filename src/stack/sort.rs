use super::{ArrayStack, Stack};
use alloc::string::String;

/// Sorts the stack in place using a single auxiliary stack, without any other container.
///
/// After the call, successive pops yield the elements in ascending order; i.e., the smallest
/// element is on top.
///
/// Elements are moved one at a time onto the auxiliary stack which is kept in ascending order
/// from bottom to top. Auxiliary elements greater than the incoming one are moved back to the
/// input before the insertion. Finally, the auxiliary stack is poured back into the input which
/// reverses it. This is O(n^2) in the worst case.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::stack::{sort_stack, ArrayStack, Stack};
///
/// let mut stack = ArrayStack::new();
/// for x in [34, 3, 31, 98, 92, 23] {
///     stack.push(x);
/// }
///
/// sort_stack(&mut stack);
///
/// let popped: Vec<_> = core::iter::from_fn(|| stack.pop().ok()).collect();
/// assert_eq!(popped, [3, 23, 31, 34, 92, 98]);
/// ```
pub fn sort_stack<S>(stack: &mut S)
where
    S: Stack,
    S::Item: PartialOrd,
{
    let mut sorted = ArrayStack::new();

    while let Ok(value) = stack.pop() {
        while sorted.peek().is_ok_and(|top: &S::Item| *top > value) {
            if let Ok(top) = sorted.pop() {
                stack.push(top);
            }
        }
        sorted.push(value);
    }

    while let Ok(value) = sorted.pop() {
        stack.push(value);
    }
}

/// Reverses the characters of `text` by pushing them all onto a stack and popping them back.
///
/// Reversal is by `char`, not by grapheme cluster.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::stack::reverse_str;
///
/// assert_eq!(reverse_str("hello"), "olleh");
/// assert_eq!(reverse_str(""), "");
/// ```
pub fn reverse_str(text: &str) -> String {
    let mut stack = ArrayStack::new();
    for c in text.chars() {
        stack.push(c);
    }

    let mut reversed = String::with_capacity(text.len());
    while let Ok(c) = stack.pop() {
        reversed.push(c);
    }
    reversed
}
