use crate::{CoreCol, MemoryPolicy, MemoryState, Node, NodeIdx, NodeIdxError, NodePtr, Variant};
use core::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

/// `SelfRefCol` is the core data structure the linked lists of this crate are built on.
///
/// * Nodes are stored in an index-addressed arena, [`CoreCol`].
/// * Relations among nodes, such as `next` and `prev`, are [`NodePtr`] positions; they never
///   own nor extend the lifetime of the node they point to.
/// * Removing an element closes its node; the memory policy `M` decides when the holes
///   are reclaimed by moving active nodes and repairing their relations.
pub struct SelfRefCol<V, M>
where
    V: Variant,
    M: MemoryPolicy<V>,
{
    core: CoreCol<V>,
    policy: PhantomData<fn() -> M>,
    state: MemoryState,
}

impl<V, M> Default for SelfRefCol<V, M>
where
    V: Variant,
    M: MemoryPolicy<V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, M> Deref for SelfRefCol<V, M>
where
    V: Variant,
    M: MemoryPolicy<V>,
{
    type Target = CoreCol<V>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<V, M> DerefMut for SelfRefCol<V, M>
where
    V: Variant,
    M: MemoryPolicy<V>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

impl<V, M> SelfRefCol<V, M>
where
    V: Variant,
    M: MemoryPolicy<V>,
{
    /// Creates a new empty self referential collection.
    pub fn new() -> Self {
        Self {
            core: CoreCol::new(),
            policy: PhantomData,
            state: MemoryState::fresh(),
        }
    }

    /// Memory state of the collection; indices created in another state are invalid.
    #[inline(always)]
    pub fn memory_state(&self) -> MemoryState {
        self.state
    }

    /// Creates an index for the node at the given `node_ptr` in the current memory state.
    pub fn node_idx(&self, node_ptr: NodePtr<V>) -> NodeIdx<V> {
        NodeIdx::new(self.state, node_ptr)
    }

    /// Returns the node that the `idx` refers to if the index is still valid for this collection.
    pub fn node_from_idx(&self, idx: &NodeIdx<V>) -> Result<&Node<V>, NodeIdxError> {
        idx.validate(self).map(|ptr| self.core.node(ptr))
    }

    /// Closes the node at the given `node_ptr`, returns its data and lets the memory policy
    /// reclaim closed nodes.
    ///
    /// All references to the node must have been removed before calling this method.
    /// Any node pointer kept by the caller must be considered stale afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    pub fn close_and_reclaim(&mut self, node_ptr: NodePtr<V>) -> V::Item {
        let data = self.core.close(node_ptr);
        self.reclaim_closed_nodes();
        data
    }

    /// Lets the memory policy reclaim closed nodes; advances the memory state if any active
    /// node has been moved or any slot has been released.
    ///
    /// Useful after closing several nodes with [`CoreCol::close`] in a single pass.
    pub fn reclaim_closed_nodes(&mut self) {
        let num_slots = self.core.num_nodes();
        let nodes_moved = M::reclaim_closed_nodes(&mut self.core);
        if nodes_moved || self.core.num_nodes() < num_slots {
            self.state = MemoryState::fresh();
        }
    }

    /// Clears the collection: clears all elements and the ends of the collection.
    ///
    /// Memory state advances since all previously created indices become invalid.
    pub fn clear(&mut self) {
        self.core.clear_core();
        self.state = MemoryState::fresh();
    }
}
