use crate::{RefsArray, RefsNone, RefsSingle, Variant};
use core::marker::PhantomData;

/// Position of the front of a list among its ends.
pub(crate) const FRONT: usize = 0;
/// Position of the back of a list among its ends.
pub(crate) const BACK: usize = 1;

/// Variant of a singly linked list: forward links only, front and back as ends.
pub struct Singly<T>(PhantomData<T>);

impl<T> Variant for Singly<T> {
    type Item = T;

    type Prev = RefsNone;

    type Next = RefsSingle<Self>;

    type Ends = RefsArray<2, Self>;
}

/// Variant of a doubly linked list: forward links plus non-owning backward links,
/// front and back as ends.
pub struct Doubly<T>(PhantomData<T>);

impl<T> Variant for Doubly<T> {
    type Item = T;

    type Prev = RefsSingle<Self>;

    type Next = RefsSingle<Self>;

    type Ends = RefsArray<2, Self>;
}
