use super::policy::MemoryPolicy;
use crate::{CoreCol, Variant};

/// A do-nothing `MemoryPolicy` which would never reclaim the memory of the closed nodes, leaving them as holes in the underlying storage.
///
/// This approach has the advantage that a `NodeIdx` is never invalidated due to an automatic memory reorganization.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimNever;

impl<V: Variant> MemoryPolicy<V> for MemoryReclaimNever {
    #[inline(always)]
    fn reclaim_closed_nodes(_col: &mut CoreCol<V>) -> bool {
        false
    }
}
