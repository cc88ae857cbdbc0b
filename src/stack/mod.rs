//! LIFO stacks: one capability, [`Stack`], realized over several backings, plus the
//! specialized stacks and algorithms built on top of it.

mod array;
mod deque;
mod linked;
mod min_stack;
mod monotonic;
mod queue_stack;
mod sort;

pub use array::ArrayStack;
pub use deque::DequeStack;
pub use linked::LinkedStack;
pub use min_stack::MinStack;
pub use monotonic::next_greater_element;
pub use queue_stack::StackViaQueue;
pub use sort::{reverse_str, sort_stack};

use crate::DsaError;

/// Capability contract of a last-in-first-out sequence.
///
/// Implementations differ only in representation and in the cost of `push`/`pop`;
/// through this trait they are indistinguishable:
/// * `pop` returns the most recently pushed element which has not been popped yet;
/// * `peek` returns the same element without removing it and never mutates;
/// * `pop` and `peek` fail with [`DsaError::EmptyContainer`] on an empty stack.
pub trait Stack {
    /// Elements of the stack.
    type Item;

    /// Pushes `value` on top of the stack.
    fn push(&mut self, value: Self::Item);

    /// Removes and returns the top of the stack.
    fn pop(&mut self) -> Result<Self::Item, DsaError>;

    /// Returns a reference to the top of the stack.
    fn peek(&self) -> Result<&Self::Item, DsaError>;

    /// Number of elements in the stack.
    fn size(&self) -> usize;

    /// Returns true if the stack has no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
