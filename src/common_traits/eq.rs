use crate::{
    DoublyLinkedList, MemoryPolicy, SinglyLinkedList,
    list::{Doubly, Singly},
};

impl<T: PartialEq, M> PartialEq for SinglyLinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, M> Eq for SinglyLinkedList<T, M> where M: MemoryPolicy<Singly<T>> {}

impl<T: PartialEq, M> PartialEq for DoublyLinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, M> Eq for DoublyLinkedList<T, M> where M: MemoryPolicy<Doubly<T>> {}

impl<T: Clone, M> Clone for SinglyLinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Clone, M> Clone for DoublyLinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}
