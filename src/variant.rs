use crate::Refs;

/// Variant defining `SelfRefCol` specifications.
pub trait Variant: Sized {
    /// Elements of the collection.
    type Item;

    /// The way the previous node references will be stored.
    /// * `RefsNone` if there is no reference.
    /// * `RefsSingle` if there is zero or one reference.
    /// * `RefsArray` if there is a constant number of references.
    type Prev: Refs;

    /// The way the next node references will be stored.
    /// * `RefsNone` if there is no reference.
    /// * `RefsSingle` if there is zero or one reference.
    /// * `RefsArray` if there is a constant number of references.
    type Next: Refs;

    /// The way the ends of the collection will be stored,
    /// such as the front and back of a linked list.
    /// * `RefsNone` if there is no reference.
    /// * `RefsSingle` if there is zero or one reference.
    /// * `RefsArray` if there is a constant number of references.
    type Ends: Refs;
}
