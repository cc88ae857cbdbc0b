use super::{
    iter::Iter,
    reclaimer::SinglyReclaimer,
    variants::{BACK, FRONT, Singly},
};
use crate::{
    DsaError, MemoryPolicy, MemoryReclaimOnThreshold, NodeIdx, NodeIdxError, NodePtr, Refs,
    SelfRefCol, Utilization, algorithms,
    stack::{ArrayStack, Stack},
};

/// Default memory policy of the singly linked list: closed nodes are reclaimed once
/// they exceed a quarter of the storage.
pub type SinglyDefaultPolicy<T> = MemoryReclaimOnThreshold<2, Singly<T>, SinglyReclaimer>;

/// A singly linked list built on a self referential collection.
///
/// The list keeps both its front and its back; hence, insertion at either end is O(1).
/// Deleting the back is O(n) since the predecessor of the back has to be found by
/// walking from the front.
///
/// A cycle can deliberately be installed with [`close_cycle_at`](Self::close_cycle_at)
/// to exercise [`has_cycle`](Self::has_cycle). Every mutating method breaks such a cycle
/// before changing the list.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::SinglyLinkedList;
///
/// let mut list: SinglyLinkedList<_> = SinglyLinkedList::new();
/// list.insert_at_beginning(2);
/// list.insert_at_beginning(1);
/// list.insert_at_end(4);
/// list.insert_at_position(3, 2).unwrap();
/// assert_eq!(list.to_string(), "[1 -> 2 -> 3 -> 4]");
///
/// list.reverse();
/// assert_eq!(list.search(&1), Some(3));
/// assert_eq!(list.find_middle(), Ok(&2));
/// assert!(!list.has_cycle());
///
/// list.close_cycle_at(1).unwrap();
/// assert!(list.has_cycle());
/// ```
pub struct SinglyLinkedList<T, M = SinglyDefaultPolicy<T>>
where
    M: MemoryPolicy<Singly<T>>,
{
    col: SelfRefCol<Singly<T>, M>,
}

impl<T, M> Default for SinglyLinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M> SinglyLinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
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

    /// Returns a reference to the element at `position`.
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
    pub fn iter(&self) -> Iter<'_, Singly<T>, M> {
        Iter::new(&self.col, self.front_ptr())
    }

    /// Returns an index to the node at `position` which allows constant time access
    /// to it through [`get_by_idx`](Self::get_by_idx) until the list is reorganized.
    pub fn idx_at(&self, position: usize) -> Result<NodeIdx<Singly<T>>, DsaError> {
        self.check_position(position)?;
        Ok(self.col.node_idx(self.ptr_at(position)))
    }

    /// Returns the element that the `idx` refers to in constant time.
    ///
    /// Fails with `InvalidNodeIdx` if the node is removed or the list has been reorganized
    /// since the index was created.
    pub fn get_by_idx(&self, idx: &NodeIdx<Singly<T>>) -> Result<&T, DsaError> {
        let node = self.col.node_from_idx(idx)?;
        node.data().ok_or(NodeIdxError::RemovedNode.into())
    }

    /// Returns true if the chain of nodes starting at the front revisits a node.
    ///
    /// Uses Floyd's slow and fast pointers; false for the empty and single-node lists
    /// unless a cycle has been installed.
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(self.front_ptr(), |x: NodePtr<Singly<T>>| {
            self.col.node(x).next().get()
        })
    }

    /// Returns the middle element; the second of the two middle elements if the length is even.
    ///
    /// Fails with `EmptyContainer` if the list is empty.
    pub fn find_middle(&self) -> Result<&T, DsaError> {
        let back = self.back_ptr();
        let next = |x: NodePtr<Singly<T>>| match Some(x) == back {
            true => None,
            false => self.col.node(x).next().get(),
        };

        algorithms::find_middle(self.front_ptr(), next)
            .map(|x| self.col.data(x))
            .ok_or(DsaError::EmptyContainer)
    }

    /// Returns true if the sequence of elements reads the same forwards and backwards.
    ///
    /// The first half is pushed to a stack while the slow and fast pointers walk the list;
    /// the second half is then compared against the elements popped from the stack.
    pub fn is_palindrome(&self) -> bool
    where
        T: PartialEq,
    {
        let mut first_half = ArrayStack::new();
        let mut iter = self.iter();

        for _ in 0..(self.len() / 2) {
            if let Some(x) = iter.next() {
                first_half.push(x);
            }
        }

        if self.len() % 2 == 1 {
            _ = iter.next();
        }

        iter.all(|x| first_half.pop().is_ok_and(|y| x == y))
    }

    // mut

    /// Inserts `value` at the front of the list in O(1).
    pub fn insert_at_beginning(&mut self, value: T) {
        self.break_cycle();

        let ptr = self.col.push(value);
        match self.front_ptr() {
            Some(old_front) => self.col.node_mut(ptr).next_mut().set_some(old_front),
            None => self.col.ends_mut().set(BACK, Some(ptr)),
        }
        self.col.ends_mut().set(FRONT, Some(ptr));
    }

    /// Inserts `value` at the back of the list in O(1).
    pub fn insert_at_end(&mut self, value: T) {
        self.break_cycle();

        let ptr = self.col.push(value);
        match self.back_ptr() {
            Some(old_back) => self.col.node_mut(old_back).next_mut().set_some(ptr),
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
                self.break_cycle();

                let prev = self.ptr_at(position - 1);
                let next = self.col.node(prev).next().get();

                let ptr = self.col.push(value);
                self.col.node_mut(ptr).next_mut().set(next);
                self.col.node_mut(prev).next_mut().set_some(ptr);
            }
            _ => return Err(DsaError::out_of_range(position, self.len())),
        }

        Ok(())
    }

    /// Removes and returns the first element in O(1).
    ///
    /// Fails with `EmptyContainer` if the list is empty.
    pub fn delete_at_beginning(&mut self) -> Result<T, DsaError> {
        self.break_cycle();
        match self.is_empty() {
            true => Err(DsaError::EmptyContainer),
            false => Ok(self.unlink_after(None)),
        }
    }

    /// Removes and returns the last element in O(n).
    ///
    /// Fails with `EmptyContainer` if the list is empty.
    pub fn delete_at_end(&mut self) -> Result<T, DsaError> {
        self.break_cycle();
        match self.len() {
            0 => Err(DsaError::EmptyContainer),
            1 => Ok(self.unlink_after(None)),
            len => {
                let prev = self.ptr_at(len - 2);
                Ok(self.unlink_after(Some(prev)))
            }
        }
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
        self.break_cycle();

        let prev = match position {
            0 => None,
            x => Some(self.ptr_at(x - 1)),
        };
        Ok(self.unlink_after(prev))
    }

    /// Removes and returns the `n`-th element counted from the back, `n = 1` being the back.
    ///
    /// A lead pointer is first moved `n` nodes ahead; then the lead and a trailing pointer
    /// advance together until the lead runs off the end, leaving the trailing pointer at the
    /// predecessor of the element to remove.
    ///
    /// Fails with `EmptyContainer` if the list is empty and with `IndexOutOfRange`
    /// unless `1 <= n <= len()`.
    pub fn remove_nth_from_end(&mut self, n: usize) -> Result<T, DsaError> {
        if self.is_empty() {
            return Err(DsaError::EmptyContainer);
        }
        if n == 0 || n > self.len() {
            return Err(DsaError::out_of_range(n, self.len()));
        }
        self.break_cycle();

        let next = |x: NodePtr<Singly<T>>| self.col.node(x).next().get();

        let mut lead = self.front_ptr();
        for _ in 0..n {
            lead = lead.and_then(next);
        }

        let mut trail: Option<NodePtr<Singly<T>>> = None;
        while let Some(x) = lead {
            lead = next(x);
            trail = match trail {
                None => self.front_ptr(),
                Some(t) => next(t),
            };
        }

        Ok(self.unlink_after(trail))
    }

    /// Removes consecutive duplicates of a sorted list so that every value appears once;
    /// returns the number of removed elements.
    pub fn delete_duplicates(&mut self) -> usize
    where
        T: PartialEq,
    {
        self.break_cycle();

        let mut num_removed = 0;
        let mut current = self.front_ptr();

        while let Some(ptr) = current {
            match self.col.node(ptr).next().get() {
                Some(next) if self.col.data(ptr) == self.col.data(next) => {
                    let after = self.col.node(next).next().get();
                    self.col.node_mut(ptr).next_mut().set(after);
                    if after.is_none() {
                        self.col.ends_mut().set(BACK, Some(ptr));
                    }
                    // reclaimed once at the end so that `ptr` stays valid
                    _ = self.col.close(next);
                    num_removed += 1;
                }
                next => current = next,
            }
        }

        if num_removed > 0 {
            self.col.reclaim_closed_nodes();
        }

        num_removed
    }

    /// Reverses the list in place by redirecting every `next` link to the predecessor.
    pub fn reverse(&mut self) {
        self.break_cycle();

        let mut prev: Option<NodePtr<Singly<T>>> = None;
        let mut current = self.front_ptr();

        while let Some(ptr) = current {
            let next = self.col.node(ptr).next().get();
            self.col.node_mut(ptr).next_mut().set(prev);
            prev = Some(ptr);
            current = next;
        }

        self.col.ends_mut().swap(FRONT, BACK);
    }

    /// Links the back of the list to the node at `position`, installing a cycle.
    ///
    /// The list keeps its length and its ends; [`iter`](Self::iter) still yields `len()` elements.
    /// The cycle is removed by [`break_cycle`](Self::break_cycle) or by any mutating method.
    ///
    /// Fails with `EmptyContainer` if the list is empty and with `IndexOutOfRange`
    /// unless `position < len()`.
    pub fn close_cycle_at(&mut self, position: usize) -> Result<(), DsaError> {
        let back = self.back_ptr().ok_or(DsaError::EmptyContainer)?;
        self.check_position(position)?;

        let target = self.ptr_at(position);
        self.col.node_mut(back).next_mut().set_some(target);
        log::trace!("cycle installed from the back to position {position}");

        Ok(())
    }

    /// Removes the cycle installed by [`close_cycle_at`](Self::close_cycle_at), if any.
    pub fn break_cycle(&mut self) {
        if let Some(back) = self.back_ptr() {
            let next = self.col.node_mut(back).next_mut();
            if !next.is_empty() {
                next.set_none();
                log::trace!("cycle at the back of the list is broken");
            }
        }
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

    fn front_ptr(&self) -> Option<NodePtr<Singly<T>>> {
        self.col.ends().get(FRONT)
    }

    fn back_ptr(&self) -> Option<NodePtr<Singly<T>>> {
        self.col.ends().get(BACK)
    }

    fn check_position(&self, position: usize) -> Result<(), DsaError> {
        match position < self.len() {
            true => Ok(()),
            false => Err(DsaError::out_of_range(position, self.len())),
        }
    }

    /// Walks from the front; `position` must be less than `len()`.
    fn ptr_at(&self, position: usize) -> NodePtr<Singly<T>> {
        debug_assert!(position < self.len());

        let mut current = self.front_ptr().expect("non-empty list");
        for _ in 0..position {
            current = self.col.node(current).next().get().expect("must exist");
        }
        current
    }

    /// Unlinks and returns the successor of `prev`, or the front if `prev` is None.
    /// The list must be non-empty and acyclic, and `prev` must not be the back.
    fn unlink_after(&mut self, prev: Option<NodePtr<Singly<T>>>) -> T {
        let target = match prev {
            Some(prev) => self.col.node(prev).next().get(),
            None => self.front_ptr(),
        }
        .expect("target node must exist");

        let next = self.col.node(target).next().get();

        match prev {
            Some(prev) => self.col.node_mut(prev).next_mut().set(next),
            None => self.col.ends_mut().set(FRONT, next),
        }

        if next.is_none() {
            self.col.ends_mut().set(BACK, prev);
        }

        self.col.close_and_reclaim(target)
    }
}
