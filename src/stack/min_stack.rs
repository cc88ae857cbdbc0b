use super::{ArrayStack, Stack};
use crate::DsaError;

/// Stack answering the minimum of its elements in constant time.
///
/// Next to the value stack, an auxiliary stack holds the running minimums:
/// * a pushed value also goes onto the auxiliary stack iff it is less than or equal to
///   the auxiliary top, or the auxiliary stack is empty;
/// * a popped value also pops the auxiliary stack iff it equals the auxiliary top.
///
/// Hence, the auxiliary top is always the minimum of the stored values. Equal minimums are
/// pushed repeatedly so that popping one of them keeps the others.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::stack::{MinStack, Stack};
///
/// let mut stack = MinStack::new();
/// stack.push(-2);
/// stack.push(0);
/// stack.push(-3);
/// assert_eq!(stack.get_min(), Ok(&-3));
///
/// assert_eq!(stack.pop(), Ok(-3));
/// assert_eq!(stack.top(), Ok(&0));
/// assert_eq!(stack.get_min(), Ok(&-2));
/// ```
#[derive(Debug)]
pub struct MinStack<T> {
    values: ArrayStack<T>,
    minimums: ArrayStack<T>,
}

impl<T> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            values: ArrayStack::new(),
            minimums: ArrayStack::new(),
        }
    }

    /// Returns a reference to the top of the stack; same as [`Stack::peek`].
    pub fn top(&self) -> Result<&T, DsaError> {
        self.values.peek()
    }

    /// Returns the minimum of the stored values; fails with `EmptyContainer` if the stack is empty.
    pub fn get_min(&self) -> Result<&T, DsaError> {
        self.minimums.peek()
    }
}

impl<T: PartialOrd + Clone> Stack for MinStack<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        let is_new_min = match self.minimums.peek() {
            Ok(min) => value <= *min,
            Err(_) => true,
        };

        if is_new_min {
            self.minimums.push(value.clone());
        }
        self.values.push(value);
    }

    fn pop(&mut self) -> Result<T, DsaError> {
        let value = self.values.pop()?;

        if self.minimums.peek().is_ok_and(|min| *min == value) {
            _ = self.minimums.pop();
        }

        Ok(value)
    }

    fn peek(&self) -> Result<&T, DsaError> {
        self.values.peek()
    }

    fn size(&self) -> usize {
        self.values.size()
    }
}
