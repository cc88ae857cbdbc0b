use crate::{
    CoreCol, DoublyLinkedList, MemoryPolicy, SelfRefCol, SinglyLinkedList, Variant,
    list::{Doubly, Singly},
};
use core::fmt::Debug;

impl<V> Debug for CoreCol<V>
where
    V: Variant,
    V::Item: Debug,
    V::Ends: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CoreCol")
            .field("len", &self.len())
            .field("num_nodes", &self.num_nodes())
            .field("ends", self.ends())
            .field("nodes", &DebugNodes(self))
            .finish()
    }
}

struct DebugNodes<'a, V: Variant>(&'a CoreCol<V>);

impl<V> Debug for DebugNodes<'_, V>
where
    V: Variant,
    V::Item: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries((0..self.0.num_nodes()).filter_map(|i| self.0.node_at_pos(i)))
            .finish()
    }
}

impl<V, M> Debug for SelfRefCol<V, M>
where
    V: Variant,
    V::Item: Debug,
    M: MemoryPolicy<V>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelfRefCol")
            .field("memory_state", &self.memory_state())
            .field("core", &**self)
            .finish()
    }
}

impl<T: Debug, M> Debug for SinglyLinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug, M> Debug for DoublyLinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use alloc::format;

    #[test]
    fn debug_lists() {
        let singly: SinglyLinkedList<_> = ['a', 'b'].into_iter().collect();
        assert_eq!(format!("{singly:?}"), "['a', 'b']");

        let doubly: DoublyLinkedList<u32> = DoublyLinkedList::new();
        assert_eq!(format!("{doubly:?}"), "[]");
    }
}
