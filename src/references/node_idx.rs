use super::{NodeIdxError, NodePtr};
use crate::{MemoryPolicy, MemoryState, SelfRefCol, Variant};
use core::fmt::Debug;

/// A node index providing safe and constant time access to elements
/// of the self referential collection.
///
/// Unlike a [`NodePtr`], an index remembers the memory state of the collection at
/// the time it was created. Since memory states are never shared between collections, the
/// index is rejected by any other collection and is invalidated once its own collection is
/// reorganized.
pub struct NodeIdx<V: Variant> {
    ptr: NodePtr<V>,
    state: MemoryState,
}

impl<V: Variant> core::hash::Hash for NodeIdx<V> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.ptr.pos().hash(state);
        self.state.hash(state);
    }
}

// Only the position is copied, so "V" does not need to be copy itself.
impl<V: Variant> Copy for NodeIdx<V> {}

impl<V: Variant> Clone for NodeIdx<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> Debug for NodeIdx<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeIdx")
            .field("pos", &self.ptr.pos())
            .field("state", &self.state)
            .finish()
    }
}

impl<V: Variant> PartialEq for NodeIdx<V> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.state == other.state
    }
}

impl<V: Variant> Eq for NodeIdx<V> {}

impl<V> NodeIdx<V>
where
    V: Variant,
{
    /// Creates a new index for the element at the given `node_ptr`
    /// and the collection with the given `state`.
    #[inline(always)]
    pub fn new(state: MemoryState, node_ptr: NodePtr<V>) -> Self {
        Self {
            ptr: node_ptr,
            state,
        }
    }

    /// Converts the node index into a node pointer without any validation.
    #[inline(always)]
    pub fn node_ptr(&self) -> NodePtr<V> {
        self.ptr
    }

    /// Returns the pointer to the node this index refers to, provided that the index
    /// is still valid for the `collection`.
    pub fn validate<M>(&self, collection: &SelfRefCol<V, M>) -> Result<NodePtr<V>, NodeIdxError>
    where
        M: MemoryPolicy<V>,
    {
        if self.state != collection.memory_state() {
            return Err(NodeIdxError::ReorganizedCollection);
        }

        match collection.node_at_pos(self.ptr.pos()) {
            None => Err(NodeIdxError::OutOfBounds),
            Some(node) if node.is_closed() => Err(NodeIdxError::RemovedNode),
            Some(_) => Ok(self.ptr),
        }
    }

    /// Returns true only if this index is valid for the given `collection`.
    ///
    /// A node index is valid iff it satisfies the following two conditions:
    ///
    /// * It is created from the given `collection`.
    /// * Memory state of the `collection` has not changed since this index was created.
    #[inline(always)]
    pub fn is_valid_for<M>(&self, collection: &SelfRefCol<V, M>) -> bool
    where
        M: MemoryPolicy<V>,
    {
        self.validate(collection).is_ok()
    }
}
