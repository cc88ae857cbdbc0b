use super::variants::{BACK, Doubly, FRONT, Singly};
use crate::{CoreCol, MemoryReclaimer, NodePtr, Refs};

/// Reclaimer of singly linked lists.
///
/// Nodes have no backward links; hence, the chain is walked from the front while the
/// predecessor of the current node is tracked. Every node found beyond the first
/// `len` positions is moved into the lowest hole and its predecessor is redirected.
#[derive(Clone, Copy, Default, Debug)]
pub struct SinglyReclaimer;

impl<T> MemoryReclaimer<Singly<T>> for SinglyReclaimer {
    fn reclaim_nodes(col: &mut CoreCol<Singly<T>>) -> bool {
        let num_active = col.len();
        let mut nodes_moved = false;
        let mut vacant = 0;
        let mut prev: Option<NodePtr<Singly<T>>> = None;
        let mut current = col.ends().get(FRONT);

        for _ in 0..num_active {
            let Some(occupied) = current else {
                break;
            };
            let next = col.node(occupied).next().get();

            let placed = match occupied.pos() >= num_active {
                false => occupied,
                true => {
                    while col.node_at_pos(vacant).is_some_and(|x| x.is_active()) {
                        vacant += 1;
                    }
                    debug_assert!(vacant < num_active);

                    col.move_node(vacant, occupied.pos());
                    let moved = NodePtr::new(vacant);

                    if let Some(prev) = prev {
                        col.node_mut(prev).next_mut().set_some(moved);
                    }
                    col.ends_mut().redirect(occupied.pos(), vacant);

                    nodes_moved = true;
                    moved
                }
            };

            prev = Some(placed);
            if Some(placed) == col.ends().get(BACK) {
                break;
            }
            current = next;
        }

        nodes_moved
    }
}

/// Reclaimer of doubly linked lists.
///
/// Holes are filled from the left with the right-most active nodes; both neighbours of
/// a moved node and the ends are redirected to its new position.
#[derive(Clone, Copy, Default, Debug)]
pub struct DoublyReclaimer;

impl<T> MemoryReclaimer<Doubly<T>> for DoublyReclaimer {
    fn reclaim_nodes(col: &mut CoreCol<Doubly<T>>) -> bool {
        let mut any_swapped = false;
        let mut right_bound = col.num_nodes();

        for vacant in 0..col.num_nodes() {
            if vacant >= right_bound {
                break;
            }

            if is_closed_at(col, vacant) {
                for occupied in ((vacant + 1)..right_bound).rev() {
                    if !is_closed_at(col, occupied) {
                        right_bound = occupied;
                        swap(col, vacant, occupied);
                        any_swapped = true;
                        break;
                    }
                }
            }
        }

        any_swapped
    }
}

fn swap<T>(col: &mut CoreCol<Doubly<T>>, vacant: usize, occupied: usize) {
    let new_ptr = NodePtr::new(vacant);
    let old_ptr = NodePtr::new(occupied);

    let (prev, next) = {
        let node = col.node(old_ptr);
        (node.prev().get(), node.next().get())
    };

    if let Some(prev) = prev {
        col.node_mut(prev).next_mut().set_some(new_ptr);
    }

    if let Some(next) = next {
        col.node_mut(next).prev_mut().set_some(new_ptr);
    }

    col.move_node(vacant, occupied);
    col.ends_mut().redirect(occupied, vacant);
}

fn is_closed_at<T>(col: &CoreCol<Doubly<T>>, pos: usize) -> bool {
    col.node_at_pos(pos).is_none_or(|x| x.is_closed())
}
