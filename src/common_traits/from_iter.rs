use crate::{
    DoublyLinkedList, MemoryPolicy, SinglyLinkedList,
    list::{Doubly, Singly},
};

impl<T, M> FromIterator<T> for SinglyLinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, M> Extend<T> for SinglyLinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_at_end(value);
        }
    }
}

impl<T, M> FromIterator<T> for DoublyLinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, M> Extend<T> for DoublyLinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_at_end(value);
        }
    }
}
