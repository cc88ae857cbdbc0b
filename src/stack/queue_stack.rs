use super::Stack;
use crate::DsaError;
use alloc::collections::VecDeque;

/// Stack emulated with the primitives of a single FIFO queue.
///
/// `push` enqueues the value and then rotates the queue, dequeuing and re-enqueuing
/// `size - 1` times, so that the newest element is at the front. `pop` and `peek` are
/// then plain operations on the front of the queue.
///
/// This trades an O(n) `push` for O(1) `pop` and `peek`.
#[derive(Debug)]
pub struct StackViaQueue<T> {
    queue: VecDeque<T>,
}

impl<T> Default for StackViaQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StackViaQueue<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Stack for StackViaQueue<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        self.queue.push_back(value);
        for _ in 1..self.queue.len() {
            if let Some(x) = self.queue.pop_front() {
                self.queue.push_back(x);
            }
        }
    }

    fn pop(&mut self) -> Result<T, DsaError> {
        self.queue.pop_front().ok_or(DsaError::EmptyContainer)
    }

    fn peek(&self) -> Result<&T, DsaError> {
        self.queue.front().ok_or(DsaError::EmptyContainer)
    }

    fn size(&self) -> usize {
        self.queue.len()
    }
}
