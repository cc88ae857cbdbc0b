//! Pointer-chasing algorithms over chains of nodes.
//!
//! A chain is described by its `head` and a successor function `next`; the node handle `P`
//! can be anything that can be copied and compared, such as a [`NodePtr`](crate::NodePtr)
//! or a plain position into a successor table.

/// Returns true if following `next` from `head` revisits a node.
///
/// Floyd's algorithm: a fast pointer advances two nodes per step, a slow one a single node.
/// They meet iff the chain contains a cycle; the fast pointer reaching the end of the chain
/// proves there is none. Empty and single-node acyclic chains return false.
///
/// # Examples
///
/// ```rust
/// use dsa_selfref::algorithms::has_cycle;
///
/// // 0 -> 1 -> 2 -> 3 -> 1
/// let successors = [Some(1), Some(2), Some(3), Some(1)];
/// assert!(has_cycle(Some(0), |i: usize| successors[i]));
///
/// // 0 -> 1 -> 2 -> 3
/// let successors = [Some(1), Some(2), Some(3), None];
/// assert!(!has_cycle(Some(0), |i: usize| successors[i]));
/// ```
pub fn has_cycle<P, F>(head: Option<P>, next: F) -> bool
where
    P: Copy + PartialEq,
    F: Fn(P) -> Option<P>,
{
    let Some(head) = head else {
        return false;
    };

    let mut slow = head;
    let mut fast = head;

    loop {
        let Some(fast_next) = next(fast) else {
            return false;
        };
        let Some(fast_next_next) = next(fast_next) else {
            return false;
        };
        fast = fast_next_next;

        slow = match next(slow) {
            Some(x) => x,
            None => return false,
        };

        if slow == fast {
            return true;
        }
    }
}

/// Returns the middle node of the acyclic chain starting at `head`; None if the chain is empty.
///
/// The slow pointer advances while the fast pointer and its successor exist; hence, the
/// second of the two middle nodes is returned for chains of even length.
pub fn find_middle<P, F>(head: Option<P>, next: F) -> Option<P>
where
    P: Copy + PartialEq,
    F: Fn(P) -> Option<P>,
{
    let mut slow = head?;
    let mut fast = Some(slow);

    while let Some(f) = fast {
        let Some(f_next) = next(f) else {
            break;
        };
        slow = next(slow)?;
        fast = next(f_next);
    }

    Some(slow)
}

/// Returns the first node shared by the two acyclic chains starting at `head_a` and `head_b`;
/// None if the chains are disjoint.
///
/// Each pointer walks its own chain and continues with the other chain's head once it
/// runs off the end. Both pointers have then walked the same distance when they meet,
/// either at the intersection or past both ends.
pub fn find_intersection<P, F>(head_a: Option<P>, head_b: Option<P>, next: F) -> Option<P>
where
    P: Copy + PartialEq,
    F: Fn(P) -> Option<P>,
{
    if head_a.is_none() || head_b.is_none() {
        return None;
    }

    let mut a = head_a;
    let mut b = head_b;

    while a != b {
        a = match a {
            None => head_b,
            Some(x) => next(x),
        };
        b = match b {
            None => head_a,
            Some(x) => next(x),
        };
    }

    a
}
