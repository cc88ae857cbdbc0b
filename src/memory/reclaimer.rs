use crate::{CoreCol, Variant};

/// Memory reclaimer which reorganizes the collection nodes and brings node utilization to 100%.
pub trait MemoryReclaimer<V>: Default
where
    V: Variant,
{
    /// Moves every active node into the first `col.len()` positions of the storage,
    /// repairing all references to the moved nodes.
    ///
    /// Returns whether or not any node has been moved.
    fn reclaim_nodes(col: &mut CoreCol<V>) -> bool;
}
