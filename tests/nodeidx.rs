use dsa_selfref::*;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::marker::PhantomData;

/// Unordered collection of values; nodes hold no references.
struct Bag<T>(PhantomData<T>);

impl<T> Variant for Bag<T> {
    type Item = T;

    type Prev = RefsNone;

    type Next = RefsNone;

    type Ends = RefsNone;
}

#[derive(Clone, Default)]
struct BagReclaimer;
impl<T> MemoryReclaimer<Bag<T>> for BagReclaimer {
    fn reclaim_nodes(col: &mut CoreCol<Bag<T>>) -> bool {
        let mut nodes_moved = false;
        let mut right_bound = col.num_nodes();

        for vacant in 0..col.len() {
            if col.node_at_pos(vacant).is_some_and(|x| x.is_closed()) {
                loop {
                    right_bound -= 1;
                    if col.node_at_pos(right_bound).is_some_and(|x| x.is_active()) {
                        break;
                    }
                }
                col.move_node(vacant, right_bound);
                nodes_moved = true;
            }
        }

        nodes_moved
    }
}

type Col<M> = SelfRefCol<Bag<String>, M>;
type PolicyOnThreshold<const D: usize> = MemoryReclaimOnThreshold<D, Bag<String>, BagReclaimer>;

fn push<M>(col: &mut Col<M>, value: usize) -> NodeIdx<Bag<String>>
where
    M: MemoryPolicy<Bag<String>>,
{
    let ptr = col.push(value.to_string());
    col.node_idx(ptr)
}

fn hash_single<H: Hash>(val: H) -> u64 {
    let mut hasher = DefaultHasher::new();
    val.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn clone() {
    let mut col: Col<MemoryReclaimNever> = SelfRefCol::new();

    let idx1 = push(&mut col, 0);
    let idx2 = push(&mut col, 1);

    assert_ne!(idx1, idx2);

    let cloned = idx1;

    assert_eq!(idx1, cloned);
    assert_ne!(idx2, cloned);
}

#[test]
fn hash() {
    let mut col: Col<MemoryReclaimNever> = SelfRefCol::new();

    let idx1 = push(&mut col, 0);
    let idx2 = push(&mut col, 1);

    assert_ne!(hash_single(idx1), hash_single(idx2));
    assert_eq!(hash_single(idx1), hash_single(col.node_idx(idx1.node_ptr())));
}

#[test]
fn valid_idx_gives_node() {
    let mut col: Col<MemoryReclaimNever> = SelfRefCol::new();

    let indices: Vec<_> = (0..10).map(|i| push(&mut col, i)).collect();

    for (i, idx) in indices.iter().enumerate() {
        assert!(idx.is_valid_for(&col));
        let node = col.node_from_idx(idx).unwrap();
        assert_eq!(node.data(), Some(&i.to_string()));
    }
}

#[test]
fn removed_node() {
    let mut col: Col<MemoryReclaimNever> = SelfRefCol::new();

    let idx0 = push(&mut col, 0);
    let idx1 = push(&mut col, 1);

    let removed = col.close_and_reclaim(idx0.node_ptr());
    assert_eq!(removed, "0");

    assert_eq!(col.node_from_idx(&idx0).err(), Some(NodeIdxError::RemovedNode));
    assert!(col.node_from_idx(&idx1).is_ok());

    // never policy keeps the hole
    let utilization = col.utilization();
    assert_eq!(utilization.num_active_nodes, 1);
    assert_eq!(utilization.num_closed_nodes, 1);
}

#[test]
fn out_of_bounds() {
    let mut col: Col<MemoryReclaimNever> = SelfRefCol::new();

    _ = push(&mut col, 0);
    let idx = NodeIdx::new(col.memory_state(), NodePtr::new(5));

    assert_eq!(idx.validate(&col), Err(NodeIdxError::OutOfBounds));
    assert!(!idx.node_ptr().is_valid_for(&col));
}

#[test]
fn idx_of_another_collection() {
    let mut col: Col<MemoryReclaimNever> = SelfRefCol::new();
    let mut other: Col<MemoryReclaimNever> = SelfRefCol::new();

    _ = push(&mut col, 0);
    let idx = push(&mut col, 1);
    _ = push(&mut other, 7);
    _ = push(&mut other, 8);

    assert_ne!(col.memory_state(), other.memory_state());
    assert!(idx.node_ptr().is_valid_for(&other));
    assert_eq!(idx.validate(&other), Err(NodeIdxError::ReorganizedCollection));
    assert!(!idx.is_valid_for(&other));
}

#[test]
fn truncation_invalidates_indices() {
    let mut col: Col<PolicyOnThreshold<2>> = SelfRefCol::new();

    let idx = push(&mut col, 0);
    let state = col.memory_state();

    // the only node is closed and its slot released without moving any node
    _ = col.close_and_reclaim(idx.node_ptr());
    assert_eq!(col.num_nodes(), 0);
    assert_ne!(col.memory_state(), state);

    // the new node takes over the released slot
    let new_idx = push(&mut col, 1);
    assert_eq!(new_idx.node_ptr(), idx.node_ptr());
    assert_eq!(col.node_from_idx(&idx).err(), Some(NodeIdxError::ReorganizedCollection));
    assert_eq!(col.node_from_idx(&new_idx).map(|x| x.data()), Ok(Some(&1.to_string())));
}

#[test]
fn reorganized_collection() {
    let mut col: Col<PolicyOnThreshold<1>> = SelfRefCol::new();

    let indices: Vec<_> = (0..4).map(|i| push(&mut col, i)).collect();
    let state = col.memory_state();

    _ = col.close_and_reclaim(indices[0].node_ptr());
    _ = col.close_and_reclaim(indices[1].node_ptr());
    assert_eq!(col.memory_state(), state);
    assert!(indices[3].is_valid_for(&col));

    // 3 closed out of 4 exceeds half of the nodes
    _ = col.close_and_reclaim(indices[2].node_ptr());
    assert_ne!(col.memory_state(), state);
    assert_eq!(col.num_nodes(), 1);
    assert_eq!(col.node_at_pos(0).and_then(|x| x.data()), Some(&3.to_string()));

    assert_eq!(
        col.node_from_idx(&indices[3]).err(),
        Some(NodeIdxError::ReorganizedCollection)
    );
    assert!(!indices[3].is_valid_for(&col));

    let idx = col.node_idx(NodePtr::new(0));
    assert_eq!(col.node_from_idx(&idx).map(|x| x.data()), Ok(Some(&3.to_string())));
}

#[test]
fn clear_invalidates_all_indices() {
    let mut col: Col<MemoryReclaimNever> = SelfRefCol::new();

    let idx = push(&mut col, 0);
    col.clear();

    assert!(col.is_empty());
    assert_eq!(col.node_from_idx(&idx).err(), Some(NodeIdxError::ReorganizedCollection));

    let idx = push(&mut col, 1);
    assert!(idx.is_valid_for(&col));
}

#[test]
fn list_idx_after_removals() {
    let mut list: SinglyLinkedList<usize> = (0..8).collect();

    let idx = list.idx_at(6).unwrap();
    assert_eq!(list.get_by_idx(&idx), Ok(&6));

    // two holes out of eight nodes stay within the threshold
    assert_eq!(list.delete_at_beginning(), Ok(0));
    assert_eq!(list.delete_at_beginning(), Ok(1));
    assert_eq!(list.utilization().num_closed_nodes, 2);
    assert_eq!(list.get_by_idx(&idx), Ok(&6));

    // the third hole triggers a reorganization
    assert_eq!(list.delete_at_beginning(), Ok(2));
    assert_eq!(list.utilization().num_closed_nodes, 0);
    assert_eq!(
        list.get_by_idx(&idx),
        Err(DsaError::InvalidNodeIdx(NodeIdxError::ReorganizedCollection))
    );

    let idx = list.idx_at(3).unwrap();
    assert_eq!(list.get_by_idx(&idx), Ok(&6));
}

#[test]
fn list_idx_of_another_list() {
    let first: SinglyLinkedList<usize> = (0..4).collect();
    let second: SinglyLinkedList<usize> = (10..14).collect();

    let idx = first.idx_at(1).unwrap();
    assert_eq!(first.get_by_idx(&idx), Ok(&1));
    assert_eq!(
        second.get_by_idx(&idx),
        Err(DsaError::InvalidNodeIdx(NodeIdxError::ReorganizedCollection))
    );
}

#[test]
fn list_idx_after_emptied_and_refilled() {
    let mut list: SinglyLinkedList<usize> = SinglyLinkedList::new();
    list.insert_at_end(7);

    let idx = list.idx_at(0).unwrap();
    assert_eq!(list.delete_at_beginning(), Ok(7));
    list.insert_at_end(99);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [99]);
    assert_eq!(
        list.get_by_idx(&idx),
        Err(DsaError::InvalidNodeIdx(NodeIdxError::ReorganizedCollection))
    );
}

#[test]
fn list_idx_never_invalidated_by_never_policy() {
    let mut list: DoublyLinkedList<usize, MemoryReclaimNever> = (0..8).collect();

    let idx = list.idx_at(6).unwrap();
    for i in 0..5 {
        assert_eq!(list.delete_at_beginning(), Ok(i));
    }

    assert_eq!(list.get_by_idx(&idx), Ok(&6));
    assert_eq!(list.utilization().num_closed_nodes, 5);

    assert_eq!(list.delete_at_position(1), Ok(6));
    assert_eq!(
        list.get_by_idx(&idx),
        Err(DsaError::InvalidNodeIdx(NodeIdxError::RemovedNode))
    );
}
