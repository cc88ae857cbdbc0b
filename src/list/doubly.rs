use super::{
    iter::{Iter, IterRev},
    reclaimer::DoublyReclaimer,
    variants::{BACK, Doubly, FRONT},
};
use crate::{
    DsaError, MemoryPolicy, MemoryReclaimOnThreshold, NodeIdx, NodeIdxError, NodePtr, SelfRefCol,
    Utilization, algorithms,
};

/// Default memory policy of the doubly linked list: closed nodes are reclaimed once
/// they exceed a quarter of the storage.
pub type DoublyDefaultPolicy<T> = MemoryReclaimOnThreshold<2, Doubly<T>, DoublyReclaimer>;

/// A doubly linked list built on a self referential collection.
///
/// Every node links forward to its successor and backward to its predecessor; the backward
/// link is a relation only and is used for O(1) deletion at the back and for walking
/// from the back. Random access walks from whichever end is closer.
///
/// Every mutation re-establishes the backward links of the neighbours of the changed
/// node before returning.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::DoublyLinkedList;
///
/// let mut list: DoublyLinkedList<_> = [1, 2, 3, 4, 5].into_iter().collect();
/// assert_eq!(list.delete_at_end(), Ok(5));
/// assert_eq!(list.delete_at_position(1), Ok(2));
/// assert_eq!(list.to_string(), "[1 <-> 3 <-> 4]");
///
/// list.reverse();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [4, 3, 1]);
/// assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), [1, 3, 4]);
/// ```
pub struct DoublyLinkedList<T, M = DoublyDefaultPolicy<T>>
where
    M: MemoryPolicy<Doubly<T>>,
{
    col: SelfRefCol<Doubly<T>, M>,
}

impl<T, M> Default for DoublyLinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M> DoublyLinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            col: SelfRefCol::new(),
        }
    }

    // get

    /// Number of elements in the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.col.len()
    }

    /// Returns true if the list has no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.col.is_empty()
    }

    /// Node utilization of the underlying storage.
    pub fn utilization(&self) -> Utilization {
        self.col.utilization()
    }

    /// Returns a reference to the first element; fails with `EmptyContainer` if the list is empty.
    pub fn front(&self) -> Result<&T, DsaError> {
        self.front_ptr()
            .map(|x| self.col.data(x))
            .ok_or(DsaError::EmptyContainer)
    }

    /// Returns a reference to the last element; fails with `EmptyContainer` if the list is empty.
    pub fn back(&self) -> Result<&T, DsaError> {
        self.back_ptr()
            .map(|x| self.col.data(x))
            .ok_or(DsaError::EmptyContainer)
    }

    /// Returns a reference to the element at `position` in O(min(position, len - position)).
    ///
    /// Fails with `IndexOutOfRange` unless `position < len()`.
    pub fn get(&self, position: usize) -> Result<&T, DsaError> {
        self.check_position(position)?;
        Ok(self.col.data(self.ptr_at(position)))
    }

    /// Returns the position of the first element equal to `value`; None if there is none.
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value)
    }

    /// Returns an iterator over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, Doubly<T>, M> {
        Iter::new(&self.col, self.front_ptr())
    }

    /// Returns an iterator over the elements from back to front following the backward links.
    pub fn iter_rev(&self) -> IterRev<'_, Doubly<T>, M> {
        IterRev::new(&self.col, self.back_ptr())
    }

    /// Returns an index to the node at `position` which allows constant time access
    /// to it through [`get_by_idx`](Self::get_by_idx) until the list is reorganized.
    pub fn idx_at(&self, position: usize) -> Result<NodeIdx<Doubly<T>>, DsaError> {
        self.check_position(position)?;
        Ok(self.col.node_idx(self.ptr_at(position)))
    }

    /// Returns the element that the `idx` refers to in constant time.
    ///
    /// Fails with `InvalidNodeIdx` if the node is removed or the list has been reorganized
    /// since the index was created.
    pub fn get_by_idx(&self, idx: &NodeIdx<Doubly<T>>) -> Result<&T, DsaError> {
        let node = self.col.node_from_idx(idx)?;
        node.data().ok_or(NodeIdxError::RemovedNode.into())
    }

    /// Returns true if the forward chain starting at the front revisits a node.
    ///
    /// The forward links of a doubly linked list never form a cycle through its public
    /// methods; the check is still carried out with Floyd's slow and fast pointers.
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(self.front_ptr(), |x: NodePtr<Doubly<T>>| {
            self.col.node(x).next().get()
        })
    }

    /// Returns the middle element; the second of the two middle elements if the length is even.
    ///
    /// Fails with `EmptyContainer` if the list is empty.
    pub fn find_middle(&self) -> Result<&T, DsaError> {
        let next = |x: NodePtr<Doubly<T>>| self.col.node(x).next().get();
        algorithms::find_middle(self.front_ptr(), next)
            .map(|x| self.col.data(x))
            .ok_or(DsaError::EmptyContainer)
    }

    // mut

    /// Inserts `value` at the front of the list in O(1).
    pub fn insert_at_beginning(&mut self, value: T) {
        let ptr = self.col.push(value);
        match self.front_ptr() {
            Some(old_front) => {
                self.col.node_mut(ptr).next_mut().set_some(old_front);
                self.col.node_mut(old_front).prev_mut().set_some(ptr);
            }
            None => self.col.ends_mut().set(BACK, Some(ptr)),
        }
        self.col.ends_mut().set(FRONT, Some(ptr));
    }

    /// Inserts `value` at the back of the list in O(1).
    pub fn insert_at_end(&mut self, value: T) {
        let ptr = self.col.push(value);
        match self.back_ptr() {
            Some(old_back) => {
                self.col.node_mut(ptr).prev_mut().set_some(old_back);
                self.col.node_mut(old_back).next_mut().set_some(ptr);
            }
            None => self.col.ends_mut().set(FRONT, Some(ptr)),
        }
        self.col.ends_mut().set(BACK, Some(ptr));
    }

    /// Inserts `value` so that it ends up at `position`.
    ///
    /// Fails with `IndexOutOfRange` unless `position <= len()`.
    pub fn insert_at_position(&mut self, value: T, position: usize) -> Result<(), DsaError> {
        match position {
            0 => self.insert_at_beginning(value),
            x if x == self.len() => self.insert_at_end(value),
            x if x < self.len() => {
                let next = self.ptr_at(position);
                let prev = self.col.node(next).prev().get().expect("not the front");

                let ptr = self.col.push(value);
                let node = self.col.node_mut(ptr);
                node.prev_mut().set_some(prev);
                node.next_mut().set_some(next);

                self.col.node_mut(prev).next_mut().set_some(ptr);
                self.col.node_mut(next).prev_mut().set_some(ptr);
            }
            _ => return Err(DsaError::out_of_range(position, self.len())),
        }

        Ok(())
    }

    /// Removes and returns the first element in O(1).
    ///
    /// Fails with `EmptyContainer` if the list is empty.
    pub fn delete_at_beginning(&mut self) -> Result<T, DsaError> {
        let front = self.front_ptr().ok_or(DsaError::EmptyContainer)?;
        Ok(self.unlink(front))
    }

    /// Removes and returns the last element in O(1) using the backward link of the back.
    ///
    /// Fails with `EmptyContainer` if the list is empty.
    pub fn delete_at_end(&mut self) -> Result<T, DsaError> {
        let back = self.back_ptr().ok_or(DsaError::EmptyContainer)?;
        Ok(self.unlink(back))
    }

    /// Removes and returns the element at `position`.
    ///
    /// Fails with `EmptyContainer` if the list is empty and with `IndexOutOfRange`
    /// unless `position < len()`.
    pub fn delete_at_position(&mut self, position: usize) -> Result<T, DsaError> {
        if self.is_empty() {
            return Err(DsaError::EmptyContainer);
        }
        self.check_position(position)?;

        let ptr = self.ptr_at(position);
        Ok(self.unlink(ptr))
    }

    /// Reverses the list in place by swapping the links of every node and swapping the ends.
    pub fn reverse(&mut self) {
        let mut current = self.front_ptr();

        while let Some(ptr) = current {
            let node = self.col.node_mut(ptr);
            let (prev, next) = (node.prev().get(), node.next().get());
            node.prev_mut().set(next);
            node.next_mut().set(prev);
            current = next;
        }

        self.col.ends_mut().swap(FRONT, BACK);
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.col.clear();
    }

    /// Merges two sorted lists into a new sorted list; ties are taken from `a` first.
    pub fn merge_sorted(mut a: Self, mut b: Self) -> Self
    where
        T: PartialOrd,
    {
        let mut merged = Self::new();

        loop {
            let take_a = match (a.front(), b.front()) {
                (Ok(x), Ok(y)) => x <= y,
                (Ok(_), Err(_)) => true,
                (Err(_), Ok(_)) => false,
                (Err(_), Err(_)) => break,
            };

            let source = match take_a {
                true => &mut a,
                false => &mut b,
            };
            if let Ok(value) = source.delete_at_beginning() {
                merged.insert_at_end(value);
            }
        }

        merged
    }

    // helpers

    fn front_ptr(&self) -> Option<NodePtr<Doubly<T>>> {
        self.col.ends().get(FRONT)
    }

    fn back_ptr(&self) -> Option<NodePtr<Doubly<T>>> {
        self.col.ends().get(BACK)
    }

    fn check_position(&self, position: usize) -> Result<(), DsaError> {
        match position < self.len() {
            true => Ok(()),
            false => Err(DsaError::out_of_range(position, self.len())),
        }
    }

    /// Walks from the closer end; `position` must be less than `len()`.
    fn ptr_at(&self, position: usize) -> NodePtr<Doubly<T>> {
        let [len, half_len] = [self.len(), self.len() / 2];
        debug_assert!(position < len);

        match position < half_len {
            true => {
                let mut current = self.front_ptr().expect("non-empty list");
                for _ in 0..position {
                    current = self.col.node(current).next().get().expect("must exist");
                }
                current
            }
            false => {
                let mut current = self.back_ptr().expect("non-empty list");
                for _ in 0..(len - position - 1) {
                    current = self.col.node(current).prev().get().expect("must exist");
                }
                current
            }
        }
    }

    /// Repairs the links of both neighbours of the node at `ptr`, then closes it.
    fn unlink(&mut self, ptr: NodePtr<Doubly<T>>) -> T {
        let (prev, next) = {
            let node = self.col.node(ptr);
            (node.prev().get(), node.next().get())
        };

        match prev {
            Some(prev) => self.col.node_mut(prev).next_mut().set(next),
            None => self.col.ends_mut().set(FRONT, next),
        }

        match next {
            Some(next) => self.col.node_mut(next).prev_mut().set(prev),
            None => self.col.ends_mut().set(BACK, prev),
        }

        self.col.close_and_reclaim(ptr)
    }
}
