use super::{NodePtr, refs::Refs};
use crate::variant::Variant;
use core::fmt::Debug;

/// A constant number of references.
///
/// Linked lists keep their ends in a `RefsArray<2, _>`: position 0 is the front,
/// position 1 is the back.
pub struct RefsArray<const N: usize, V>([Option<NodePtr<V>>; N])
where
    V: Variant;

impl<const N: usize, V: Variant> Clone for RefsArray<N, V> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<const N: usize, V: Variant> Debug for RefsArray<N, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RefsArray").field(&self.0).finish()
    }
}

impl<const N: usize, V: Variant> Refs for RefsArray<N, V> {
    #[inline(always)]
    fn empty() -> Self {
        Self([None; N])
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.iter().all(|x| x.is_none())
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.0.iter_mut().for_each(|x| _ = x.take());
    }

    fn redirect(&mut self, old: usize, new: usize) {
        for ptr in self.0.iter_mut().flatten() {
            if ptr.pos() == old {
                *ptr = NodePtr::new(new);
            }
        }
    }
}

impl<const N: usize, V: Variant> RefsArray<N, V> {
    /// Returns the node pointer at the `ref_idx` position of the references array.
    ///
    /// # Panics
    ///
    /// Panics if `ref_idx` is not less than `N`.
    pub fn get(&self, ref_idx: usize) -> Option<NodePtr<V>> {
        self.0[ref_idx]
    }

    /// Sets the the node pointer at the `ref_idx` position of the references array to the given `node_ptr`.
    ///
    /// # Panics
    ///
    /// Panics if `ref_idx` is not less than `N`.
    pub fn set(&mut self, ref_idx: usize, node_ptr: Option<NodePtr<V>>) {
        self.0[ref_idx] = node_ptr;
    }

    /// Swaps the references at the two positions; e.g., front and back of a list.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    /// Returns an iterator over the references which are set.
    pub fn iter(&self) -> impl Iterator<Item = NodePtr<V>> + '_ {
        self.0.iter().flatten().copied()
    }
}
