use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_STATE_ID: AtomicUsize = AtomicUsize::new(0);

/// Memory state of a self referential collection.
///
/// Every state is unique across all collections of the program. A collection starts in a
/// fresh state and moves to another fresh state every time it reorganizes its storage,
/// either by moving active nodes or by releasing slots. Hence, a `NodeIdx` is valid only
/// for the collection that created it and only until that collection is reorganized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemoryState {
    id: usize,
}

impl MemoryState {
    /// Creates a state which has never been used before.
    pub(crate) fn fresh() -> Self {
        Self {
            id: NEXT_STATE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}
