use super::Stack;
use crate::{DsaError, DynamicArray};

/// Stack over a [`DynamicArray`]; the top is the last element of the array.
///
/// `push` is amortized O(1) due to the occasional buffer growth.
#[derive(Debug)]
pub struct ArrayStack<T> {
    items: DynamicArray<T>,
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            items: DynamicArray::new(),
        }
    }

    /// Iterates from the bottom to the top of the stack.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Stack for ArrayStack<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        self.items.append(value);
    }

    fn pop(&mut self) -> Result<T, DsaError> {
        self.items.pop()
    }

    fn peek(&self) -> Result<&T, DsaError> {
        self.items.last()
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}
