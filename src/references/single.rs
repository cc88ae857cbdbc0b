use super::{NodePtr, refs::Refs};
use crate::variant::Variant;
use core::fmt::Debug;

/// A single node reference.
pub struct RefsSingle<V>(Option<NodePtr<V>>)
where
    V: Variant;

impl<V: Variant> Clone for RefsSingle<V> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<V: Variant> Debug for RefsSingle<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RefsSingle").field(&self.0).finish()
    }
}

impl<V: Variant> Refs for RefsSingle<V> {
    #[inline(always)]
    fn empty() -> Self {
        Self(None)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline(always)]
    fn clear(&mut self) {
        _ = self.0.take();
    }

    #[inline(always)]
    fn redirect(&mut self, old: usize, new: usize) {
        if let Some(ptr) = &mut self.0 {
            if ptr.pos() == old {
                *ptr = NodePtr::new(new);
            }
        }
    }
}

impl<V: Variant> RefsSingle<V> {
    /// Returns the pointer to the referenced node.
    #[inline(always)]
    pub fn get(&self) -> Option<NodePtr<V>> {
        self.0
    }

    /// Sets the pointer to the referenced node with the given `node_ptr`.
    #[inline(always)]
    pub fn set(&mut self, node_ptr: Option<NodePtr<V>>) {
        self.0 = node_ptr
    }

    /// Sets the pointer to the referenced node with the given `node_ptr`.
    pub fn set_some(&mut self, node_ptr: NodePtr<V>) {
        self.0 = Some(node_ptr)
    }

    /// Un-sets the reference.
    pub fn set_none(&mut self) {
        self.0 = None
    }
}
