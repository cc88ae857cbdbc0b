use core::fmt::Debug;

/// References among nodes.
pub trait Refs: Clone + Debug {
    /// Creates an empty references.
    fn empty() -> Self;

    /// Returns true if the references collection is empty.
    fn is_empty(&self) -> bool;

    /// Clears the references.
    fn clear(&mut self);

    /// Replaces every reference to the node at position `old` with a reference to `new`.
    ///
    /// Used by reclaimers when a node is moved to another slot of the arena.
    fn redirect(&mut self, old: usize, new: usize);
}
