use crate::{
    DoublyLinkedList, MemoryPolicy, SinglyLinkedList,
    list::{Doubly, Singly},
};
use core::fmt::{Display, Formatter, Result};

fn fmt_chain<'a, T, I>(f: &mut Formatter<'_>, iter: I, separator: &str) -> Result
where
    T: Display + 'a,
    I: Iterator<Item = &'a T>,
{
    write!(f, "[")?;
    for (i, value) in iter.enumerate() {
        if i > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{value}")?;
    }
    write!(f, "]")
}

impl<T: Display, M> Display for SinglyLinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        fmt_chain(f, self.iter(), " -> ")
    }
}

impl<T: Display, M> Display for DoublyLinkedList<T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        fmt_chain(f, self.iter(), " <-> ")
    }
}
