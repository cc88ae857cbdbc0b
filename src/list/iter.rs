use crate::{MemoryPolicy, NodePtr, RefsSingle, SelfRefCol, Variant};
use core::iter::FusedIterator;

/// Iterator over the elements of a list from front to back.
///
/// The iterator yields at most `len` elements; hence, it terminates even when a
/// cycle is installed on the list.
pub struct Iter<'a, V, M>
where
    V: Variant<Next = RefsSingle<V>>,
    M: MemoryPolicy<V>,
{
    col: &'a SelfRefCol<V, M>,
    current: Option<NodePtr<V>>,
    remaining: usize,
}

impl<'a, V, M> Iter<'a, V, M>
where
    V: Variant<Next = RefsSingle<V>>,
    M: MemoryPolicy<V>,
{
    pub(crate) fn new(col: &'a SelfRefCol<V, M>, front: Option<NodePtr<V>>) -> Self {
        Self {
            col,
            current: front,
            remaining: col.len(),
        }
    }
}

impl<'a, V, M> Iterator for Iter<'a, V, M>
where
    V: Variant<Next = RefsSingle<V>>,
    M: MemoryPolicy<V>,
{
    type Item = &'a V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let ptr = self.current?;
        let node = self.col.node(ptr);
        self.current = node.next().get();
        self.remaining -= 1;
        node.data()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, M> ExactSizeIterator for Iter<'_, V, M>
where
    V: Variant<Next = RefsSingle<V>>,
    M: MemoryPolicy<V>,
{
}

impl<V, M> FusedIterator for Iter<'_, V, M>
where
    V: Variant<Next = RefsSingle<V>>,
    M: MemoryPolicy<V>,
{
}

/// Iterator over the elements of a doubly linked list from back to front.
pub struct IterRev<'a, V, M>
where
    V: Variant<Prev = RefsSingle<V>>,
    M: MemoryPolicy<V>,
{
    col: &'a SelfRefCol<V, M>,
    current: Option<NodePtr<V>>,
    remaining: usize,
}

impl<'a, V, M> IterRev<'a, V, M>
where
    V: Variant<Prev = RefsSingle<V>>,
    M: MemoryPolicy<V>,
{
    pub(crate) fn new(col: &'a SelfRefCol<V, M>, back: Option<NodePtr<V>>) -> Self {
        Self {
            col,
            current: back,
            remaining: col.len(),
        }
    }
}

impl<'a, V, M> Iterator for IterRev<'a, V, M>
where
    V: Variant<Prev = RefsSingle<V>>,
    M: MemoryPolicy<V>,
{
    type Item = &'a V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let ptr = self.current?;
        let node = self.col.node(ptr);
        self.current = node.prev().get();
        self.remaining -= 1;
        node.data()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, M> ExactSizeIterator for IterRev<'_, V, M>
where
    V: Variant<Prev = RefsSingle<V>>,
    M: MemoryPolicy<V>,
{
}
