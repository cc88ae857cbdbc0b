use thiserror::Error;

/// Error cases of an invalid node index.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdxError {
    /// Referenced node is removed from the collection.
    /// Node index can only be used if the corresponding node still belongs to the collection.
    #[error("node index refers to a removed node")]
    RemovedNode,
    /// Node index does not point to the current nodes of the collection.
    /// Only possible for an index built by hand with [`crate::NodeIdx::new`] since the
    /// collection moves to a new memory state whenever it releases a slot.
    #[error("node index is out of bounds of the node storage")]
    OutOfBounds,
    /// Memory state of the index does not match that of the collection.
    /// Either the index was created by another collection, or the nodes of its collection were
    /// re-organized in order to reclaim memory of closed nodes. Such a reorganization happens
    /// after a node removal if the utilization level drops below a threshold on
    /// self-reorganizing memory policies, and on every clear.
    #[error("node index belongs to another collection or was created before the collection was reorganized")]
    ReorganizedCollection,
}
