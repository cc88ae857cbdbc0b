use crate::{NodePtr, Refs, Utilization, Variant, node::Node};
use orx_pinned_vec::PinnedVec;
use orx_split_vec::SplitVec;

/// Core collection of the self referential collection.
///
/// Nodes live in an index-addressed arena; the relations among them are positions
/// into this arena rather than owning pointers.
pub struct CoreCol<V>
where
    V: Variant,
{
    nodes: SplitVec<Node<V>>,
    ends: V::Ends,
    len: usize,
}

impl<V> Default for CoreCol<V>
where
    V: Variant,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CoreCol<V>
where
    V: Variant,
{
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self {
            nodes: SplitVec::new(),
            ends: Refs::empty(),
            len: 0,
        }
    }

    // get

    /// Returns current node utilization of the collection.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: self.nodes.len() - self.len,
        }
    }

    /// Returns length of the self referential collection.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not the self referential collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the underlying storage, active or closed.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the node at the given position of the storage; None if out of bounds.
    pub fn node_at_pos(&self, node_position: usize) -> Option<&Node<V>> {
        self.nodes.get(node_position)
    }

    /// Returns a reference to the node with the given `node_ptr`.
    ///
    /// # Panics
    ///
    /// Panics if the pointer is out of bounds of the storage.
    #[inline(always)]
    pub fn node(&self, node_ptr: NodePtr<V>) -> &Node<V> {
        &self.nodes[node_ptr.pos()]
    }

    /// Returns a reference to the data of the node with the given `node_ptr`.
    ///
    /// # Panics
    ///
    /// Panics if the pointer is out of bounds or if the node is already closed.
    #[inline(always)]
    pub fn data(&self, node_ptr: NodePtr<V>) -> &V::Item {
        self.node(node_ptr).data().expect("node is closed")
    }

    /// Returns a reference to the ends of the collection.
    #[inline(always)]
    pub fn ends(&self) -> &V::Ends {
        &self.ends
    }

    // mut

    pub(crate) fn clear_core(&mut self) {
        self.len = 0;
        self.ends.clear();
        self.nodes.clear();
    }

    pub(crate) fn truncate_nodes(&mut self, len: usize) {
        debug_assert!(len >= self.len);
        self.nodes.truncate(len);
    }

    /// Pushes the element with the given `data` and returns its pointer.
    pub fn push(&mut self, data: V::Item) -> NodePtr<V> {
        self.len += 1;
        self.nodes.push(Node::new_free_node(data));
        NodePtr::new(self.nodes.len() - 1)
    }

    /// Closes the node at the given `node_ptr` and returns its data.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    #[inline(always)]
    pub fn close(&mut self, node_ptr: NodePtr<V>) -> V::Item {
        self.len -= 1;
        self.node_mut(node_ptr).close()
    }

    /// Returns a mutable reference to the ends of the collection.
    pub fn ends_mut(&mut self) -> &mut V::Ends {
        &mut self.ends
    }

    /// Returns a mutable reference to the node with the given `node_ptr`.
    #[inline(always)]
    pub fn node_mut(&mut self, node_ptr: NodePtr<V>) -> &mut Node<V> {
        &mut self.nodes[node_ptr.pos()]
    }

    /// Swaps the closed node at the `closed_position` with the active node
    /// at the `active_position`.
    ///
    /// The caller is responsible for redirecting the references to the moved node.
    pub fn move_node(&mut self, closed_position: usize, active_position: usize) {
        debug_assert!(closed_position < active_position);
        debug_assert!(self.nodes[closed_position].is_closed());
        debug_assert!(self.nodes[active_position].is_active());

        self.nodes.swap(active_position, closed_position);
    }
}
