use crate::DsaError;
use alloc::boxed::Box;
use core::fmt::{Debug, Display};

/// A contiguous buffer with amortized growth and shrink.
///
/// * The buffer starts with capacity 1.
/// * It doubles when an element is added while the buffer is full.
/// * It halves when a removal leaves it less than a quarter full, but never below capacity 1.
///
/// Every resize allocates a fresh buffer of the new capacity and moves the live
/// elements into it in order. `len() <= capacity()` holds at all times.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// for i in 0..5 {
///     array.append(i);
/// }
/// assert_eq!(array.len(), 5);
/// assert_eq!(array.capacity(), 8);
///
/// array.insert(2, 42).unwrap();
/// assert_eq!(array.get(2), Ok(&42));
///
/// assert_eq!(array.remove(0), Ok(0));
/// assert_eq!(array.to_string(), "[1, 42, 2, 3, 4]");
/// ```
pub struct DynamicArray<T> {
    buffer: Box<[Option<T>]>,
    len: usize,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with capacity 1.
    pub fn new() -> Self {
        Self {
            buffer: allocate(1),
            len: 0,
        }
    }

    /// Number of elements in the array.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the array has no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots of the current buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Fails with [`DsaError::IndexOutOfRange`] unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&T, DsaError> {
        self.check_index(index)?;
        Ok(self.slot(index))
    }

    /// Replaces the element at `index` with `value` and returns the previous element.
    ///
    /// Fails with [`DsaError::IndexOutOfRange`] unless `index < len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, DsaError> {
        self.check_index(index)?;
        let old = self.buffer[index].replace(value);
        Ok(old.expect("slots below len are occupied"))
    }

    /// Appends `value` to the end of the array; amortized O(1).
    pub fn append(&mut self, value: T) {
        if self.len == self.capacity() {
            self.resize(2 * self.capacity());
        }

        self.buffer[self.len] = Some(value);
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting the elements at `[index, len)` one slot to the right.
    ///
    /// `index == len()` is allowed and is equivalent to [`append`](Self::append).
    /// Fails with [`DsaError::IndexOutOfRange`] if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DsaError> {
        if index > self.len {
            return Err(DsaError::out_of_range(index, self.len));
        }

        if self.len == self.capacity() {
            self.resize(2 * self.capacity());
        }

        self.buffer[self.len] = Some(value);
        self.buffer[index..=self.len].rotate_right(1);
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the following elements one slot to the left.
    ///
    /// The vacated slot is cleared; the buffer is halved if the array is left less than a quarter full.
    /// Fails with [`DsaError::IndexOutOfRange`] unless `index < len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, DsaError> {
        self.check_index(index)?;

        let value = self.buffer[index].take();
        self.buffer[index..self.len].rotate_left(1);
        self.len -= 1;

        if 0 < self.len && self.len < self.capacity() / 4 {
            self.resize(self.capacity() / 2);
        }

        Ok(value.expect("slots below len are occupied"))
    }

    /// Removes and returns the last element.
    ///
    /// Fails with [`DsaError::EmptyContainer`] if the array is empty.
    pub fn pop(&mut self) -> Result<T, DsaError> {
        match self.len {
            0 => Err(DsaError::EmptyContainer),
            len => self.remove(len - 1),
        }
    }

    /// Returns a reference to the last element.
    ///
    /// Fails with [`DsaError::EmptyContainer`] if the array is empty.
    pub fn last(&self) -> Result<&T, DsaError> {
        match self.len {
            0 => Err(DsaError::EmptyContainer),
            len => Ok(self.slot(len - 1)),
        }
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer[..self.len].iter().filter_map(Option::as_ref)
    }

    fn check_index(&self, index: usize) -> Result<(), DsaError> {
        match index < self.len {
            true => Ok(()),
            false => Err(DsaError::out_of_range(index, self.len)),
        }
    }

    fn slot(&self, index: usize) -> &T {
        self.buffer[index]
            .as_ref()
            .expect("slots below len are occupied")
    }

    fn resize(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(1);
        debug_assert!(new_capacity >= self.len);

        let mut new_buffer = allocate(new_capacity);
        for (new_slot, old_slot) in new_buffer.iter_mut().zip(&mut self.buffer[..self.len]) {
            *new_slot = old_slot.take();
        }

        log::trace!(
            "dynamic array resized from {} to {new_capacity} slots holding {} elements",
            self.capacity(),
            self.len
        );

        self.buffer = new_buffer;
    }
}

fn allocate<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T>(&'a DynamicArray<T>);

impl<T: Debug> Debug for DebugElements<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
