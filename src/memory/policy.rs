use crate::{CoreCol, Variant};

/// Policy which determines how the memory of closed nodes will be reclaimed and made useful.
///
/// Two main implementors are:
/// * [`MemoryReclaimOnThreshold::<D>`] reclaims unused holes whenever the utilization of the memory falls below a constant threshold determined by `D`.
/// * [`MemoryReclaimNever`] which never reclaims the holes left by removed; i.e., closed, nodes.
///   A `NodeIdx` is then never invalidated by a reorganization.
///
/// [`MemoryReclaimOnThreshold::<D>`]: crate::MemoryReclaimOnThreshold
/// [`MemoryReclaimNever`]: crate::MemoryReclaimNever
pub trait MemoryPolicy<V: Variant>: Default {
    /// Reclaims closed nodes.
    ///
    /// Assume that **A** below stands for active nodes and **x** designates a closed node.
    /// If the underlying storage has the following layout at a certain stage:
    /// * `[ x, x, A, x, A, A, A, x, A, x ]`
    ///
    /// the reclaimer first reorganizes the nodes so that we have:
    /// * `[ A, A, A, A, A, x, x, x, x, x ]`
    ///
    /// and next trims the storage to reclaim memory
    /// * `[ A, A, A, A, A ]`
    ///
    /// Order of the **A**s might change; the order of the collection is defined by the links among nodes.
    ///
    /// Returns whether or not any active node has been moved to another position.
    fn reclaim_closed_nodes(col: &mut CoreCol<V>) -> bool;
}
