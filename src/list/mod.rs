mod doubly;
mod iter;
mod reclaimer;
mod singly;
mod variants;

pub use doubly::{DoublyDefaultPolicy, DoublyLinkedList};
pub use iter::{Iter, IterRev};
pub use reclaimer::{DoublyReclaimer, SinglyReclaimer};
pub use singly::{SinglyDefaultPolicy, SinglyLinkedList};
pub use variants::{Doubly, Singly};
