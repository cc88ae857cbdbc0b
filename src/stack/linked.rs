use super::Stack;
use crate::{DsaError, SinglyLinkedList};

/// Stack over a [`SinglyLinkedList`]; the top is the front of the list.
#[derive(Debug)]
pub struct LinkedStack<T> {
    items: SinglyLinkedList<T>,
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            items: SinglyLinkedList::new(),
        }
    }

    /// Iterates from the top to the bottom of the stack.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Stack for LinkedStack<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        self.items.insert_at_beginning(value);
    }

    fn pop(&mut self) -> Result<T, DsaError> {
        self.items.delete_at_beginning()
    }

    fn peek(&self) -> Result<&T, DsaError> {
        self.items.front()
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}
