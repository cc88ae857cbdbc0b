use super::Stack;
use crate::DsaError;
use alloc::collections::VecDeque;

/// Stack over a double-ended queue; the top is the back of the queue.
#[derive(Debug)]
pub struct DequeStack<T> {
    items: VecDeque<T>,
}

impl<T> Default for DequeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DequeStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Iterates from the bottom to the top of the stack.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Stack for DequeStack<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    fn pop(&mut self) -> Result<T, DsaError> {
        self.items.pop_back().ok_or(DsaError::EmptyContainer)
    }

    fn peek(&self) -> Result<&T, DsaError> {
        self.items.back().ok_or(DsaError::EmptyContainer)
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}
