use crate::{MemoryPolicy, SelfRefCol, Variant};
use core::{fmt::Debug, marker::PhantomData};

/// Position of a node in the arena of a self referential collection.
///
/// A node pointer is a relation only; it never owns or keeps alive the node it points to.
/// It is copied into `prev`/`next` references and into the ends of the collection.
pub struct NodePtr<V: Variant> {
    pos: usize,
    phantom: PhantomData<fn() -> V>,
}

impl<V: Variant> PartialEq for NodePtr<V> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<V: Variant> Eq for NodePtr<V> {}

impl<V: Variant> Debug for NodePtr<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodePtr").field("pos", &self.pos).finish()
    }
}

impl<V: Variant> Copy for NodePtr<V> {}

impl<V: Variant> Clone for NodePtr<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> NodePtr<V> {
    /// Creates a new node pointer to the node at the given `pos` of the arena.
    #[inline(always)]
    pub fn new(pos: usize) -> Self {
        Self {
            pos,
            phantom: PhantomData,
        }
    }

    /// Position of the node in the underlying storage.
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns true if the pointer is within the storage of the `collection` and
    /// the node it points to is still active; false otherwise.
    pub fn is_valid_for<M>(&self, collection: &SelfRefCol<V, M>) -> bool
    where
        M: MemoryPolicy<V>,
    {
        collection
            .node_at_pos(self.pos)
            .map(|node| node.is_active())
            .unwrap_or(false)
    }
}
