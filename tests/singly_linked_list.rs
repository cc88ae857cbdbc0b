use dsa_selfref::*;

type PolicyNever<T> = SinglyLinkedList<T, MemoryReclaimNever>;
type PolicyOnThreshold<const D: usize, T> =
    SinglyLinkedList<T, MemoryReclaimOnThreshold<D, Singly<T>, SinglyReclaimer>>;

fn to_str(numbers: &[usize]) -> Vec<String> {
    numbers.iter().map(|x| x.to_string()).collect()
}

fn forward<T: Clone, M>(list: &SinglyLinkedList<T, M>) -> Vec<T>
where
    M: MemoryPolicy<Singly<T>>,
{
    let vec: Vec<_> = list.iter().cloned().collect();

    assert_eq!(vec.len(), list.len());
    match vec.first() {
        Some(_) => assert!(list.front().is_ok() && list.back().is_ok()),
        None => assert_eq!(list.front().err(), Some(DsaError::EmptyContainer)),
    }
    vec
}

fn assert_back<M>(list: &SinglyLinkedList<String, M>)
where
    M: MemoryPolicy<Singly<String>>,
{
    let vec = forward(list);
    assert_eq!(list.back().ok(), vec.last());
}

#[test]
fn new_list_is_empty() {
    let list: SinglyLinkedList<String> = SinglyLinkedList::new();

    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(forward(&list).is_empty());
    assert_eq!(list.to_string(), "[]");
    assert!(!list.has_cycle());
}

#[test]
fn insert_at_both_ends() {
    let mut list: SinglyLinkedList<_> = SinglyLinkedList::new();

    for i in 0..5 {
        list.insert_at_end(i.to_string());
        assert_back(&list);
    }
    for i in 5..10 {
        list.insert_at_beginning(i.to_string());
        assert_back(&list);
    }

    assert_eq!(forward(&list), to_str(&[9, 8, 7, 6, 5, 0, 1, 2, 3, 4]));
    assert_eq!(list.front(), Ok(&9.to_string()));
    assert_eq!(list.back(), Ok(&4.to_string()));
}

#[test]
fn insert_at_position() {
    let mut list: SinglyLinkedList<_> = SinglyLinkedList::new();

    list.insert_at_position(1, 0).unwrap();
    list.insert_at_position(3, 1).unwrap();
    list.insert_at_position(2, 1).unwrap();
    list.insert_at_position(0, 0).unwrap();
    list.insert_at_position(4, 4).unwrap();

    assert_eq!(forward(&list), [0, 1, 2, 3, 4]);
    assert_eq!(list.back(), Ok(&4));

    assert_eq!(
        list.insert_at_position(42, 6),
        Err(DsaError::IndexOutOfRange { index: 6, len: 5 })
    );
    assert_eq!(forward(&list), [0, 1, 2, 3, 4]);
}

#[test]
fn get_and_search() {
    let list: SinglyLinkedList<_> = [10, 20, 30, 20].into_iter().collect();

    assert_eq!(list.get(0), Ok(&10));
    assert_eq!(list.get(3), Ok(&20));
    assert_eq!(list.get(4), Err(DsaError::IndexOutOfRange { index: 4, len: 4 }));

    assert_eq!(list.search(&20), Some(1));
    assert_eq!(list.search(&30), Some(2));
    assert_eq!(list.search(&40), None);
}

#[test]
fn delete_on_empty_list() {
    let mut list: SinglyLinkedList<usize> = SinglyLinkedList::new();

    assert_eq!(list.delete_at_beginning(), Err(DsaError::EmptyContainer));
    assert_eq!(list.delete_at_end(), Err(DsaError::EmptyContainer));
    assert_eq!(list.delete_at_position(0), Err(DsaError::EmptyContainer));
    assert_eq!(list.remove_nth_from_end(1), Err(DsaError::EmptyContainer));
    assert_eq!(list.find_middle(), Err(DsaError::EmptyContainer));
}

#[test]
fn delete_at_ends() {
    let mut list: SinglyLinkedList<_> = to_str(&[0, 1, 2, 3, 4]).into_iter().collect();

    assert_eq!(list.delete_at_end(), Ok(4.to_string()));
    assert_back(&list);
    assert_eq!(list.delete_at_beginning(), Ok(0.to_string()));
    assert_back(&list);
    assert_eq!(forward(&list), to_str(&[1, 2, 3]));

    assert_eq!(list.delete_at_end(), Ok(3.to_string()));
    assert_eq!(list.delete_at_end(), Ok(2.to_string()));
    assert_eq!(list.delete_at_end(), Ok(1.to_string()));
    assert!(list.is_empty());
    assert_back(&list);

    list.insert_at_end(7.to_string());
    assert_eq!(forward(&list), to_str(&[7]));
}

#[test]
fn delete_at_position() {
    let mut list: SinglyLinkedList<_> = (0..6).collect();

    assert_eq!(
        list.delete_at_position(6),
        Err(DsaError::IndexOutOfRange { index: 6, len: 6 })
    );

    assert_eq!(list.delete_at_position(2), Ok(2));
    assert_eq!(list.delete_at_position(4), Ok(5));
    assert_eq!(list.delete_at_position(0), Ok(0));
    assert_eq!(forward(&list), [1, 3, 4]);
    assert_eq!(list.back(), Ok(&4));
}

#[test]
fn remove_nth_from_end() {
    let mut list: SinglyLinkedList<_> = (1..=5).collect();

    assert_eq!(list.remove_nth_from_end(2), Ok(4));
    assert_eq!(forward(&list), [1, 2, 3, 5]);

    assert_eq!(list.remove_nth_from_end(1), Ok(5));
    assert_eq!(list.back(), Ok(&3));

    assert_eq!(list.remove_nth_from_end(3), Ok(1));
    assert_eq!(forward(&list), [2, 3]);

    assert_eq!(
        list.remove_nth_from_end(0),
        Err(DsaError::IndexOutOfRange { index: 0, len: 2 })
    );
    assert_eq!(
        list.remove_nth_from_end(3),
        Err(DsaError::IndexOutOfRange { index: 3, len: 2 })
    );
}

#[test]
fn reverse() {
    let mut list: SinglyLinkedList<_> = to_str(&[0, 1, 2, 3]).into_iter().collect();

    list.reverse();
    assert_eq!(forward(&list), to_str(&[3, 2, 1, 0]));
    assert_back(&list);

    list.insert_at_end(9.to_string());
    assert_eq!(forward(&list), to_str(&[3, 2, 1, 0, 9]));

    list.reverse();
    assert_eq!(forward(&list), to_str(&[9, 0, 1, 2, 3]));

    let mut single: SinglyLinkedList<_> = [1].into_iter().collect();
    single.reverse();
    assert_eq!(forward(&single), [1]);

    let mut empty: SinglyLinkedList<usize> = SinglyLinkedList::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn find_middle() {
    let list: SinglyLinkedList<_> = (1..=5).collect();
    assert_eq!(list.find_middle(), Ok(&3));

    // second of the two middle elements
    let list: SinglyLinkedList<_> = (1..=6).collect();
    assert_eq!(list.find_middle(), Ok(&4));

    let list: SinglyLinkedList<_> = [1].into_iter().collect();
    assert_eq!(list.find_middle(), Ok(&1));
}

#[test]
fn cycle() {
    let mut list: SinglyLinkedList<_> = (0..5).collect();
    assert!(!list.has_cycle());

    list.close_cycle_at(2).unwrap();
    assert!(list.has_cycle());
    assert_eq!(list.len(), 5);
    assert_eq!(forward(&list), [0, 1, 2, 3, 4]);
    assert_eq!(list.find_middle(), Ok(&2));

    list.break_cycle();
    assert!(!list.has_cycle());

    list.close_cycle_at(4).unwrap();
    assert!(list.has_cycle());

    // mutations break the cycle first
    list.insert_at_end(5);
    assert!(!list.has_cycle());
    assert_eq!(forward(&list), [0, 1, 2, 3, 4, 5]);

    assert_eq!(
        list.close_cycle_at(6),
        Err(DsaError::IndexOutOfRange { index: 6, len: 6 })
    );

    let mut empty: SinglyLinkedList<usize> = SinglyLinkedList::new();
    assert_eq!(empty.close_cycle_at(0), Err(DsaError::EmptyContainer));
}

#[test]
fn failed_deletions_keep_the_cycle() {
    let mut list: SinglyLinkedList<_> = (0..5).collect();
    list.close_cycle_at(0).unwrap();

    assert_eq!(
        list.delete_at_position(10),
        Err(DsaError::IndexOutOfRange { index: 10, len: 5 })
    );
    assert!(list.has_cycle());

    assert_eq!(
        list.remove_nth_from_end(0),
        Err(DsaError::IndexOutOfRange { index: 0, len: 5 })
    );
    assert_eq!(
        list.remove_nth_from_end(6),
        Err(DsaError::IndexOutOfRange { index: 6, len: 5 })
    );
    assert!(list.has_cycle());

    // successful deletions still break it
    assert_eq!(list.remove_nth_from_end(1), Ok(4));
    assert!(!list.has_cycle());
    assert_eq!(forward(&list), [0, 1, 2, 3]);
}

#[test]
fn single_node_cycle() {
    let mut list: SinglyLinkedList<_> = [1].into_iter().collect();
    assert!(!list.has_cycle());

    list.close_cycle_at(0).unwrap();
    assert!(list.has_cycle());

    assert_eq!(list.delete_at_beginning(), Ok(1));
    assert!(!list.has_cycle());
}

#[test]
fn delete_duplicates() {
    let mut list: SinglyLinkedList<_> = [1, 1, 2, 3, 3, 3, 4, 5, 5].into_iter().collect();

    assert_eq!(list.delete_duplicates(), 4);
    assert_eq!(forward(&list), [1, 2, 3, 4, 5]);
    assert_eq!(list.back(), Ok(&5));
    assert_eq!(list.utilization().num_closed_nodes, 0);

    assert_eq!(list.delete_duplicates(), 0);
}

#[test]
fn is_palindrome() {
    let list: SinglyLinkedList<_> = [1, 2, 3, 2, 1].into_iter().collect();
    assert!(list.is_palindrome());

    let list: SinglyLinkedList<_> = "abba".chars().collect();
    assert!(list.is_palindrome());

    let list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    assert!(!list.is_palindrome());

    let list: SinglyLinkedList<usize> = SinglyLinkedList::new();
    assert!(list.is_palindrome());
}

#[test]
fn merge_sorted() {
    let a: SinglyLinkedList<_> = [1, 3, 5, 7].into_iter().collect();
    let b: SinglyLinkedList<_> = [2, 3, 6].into_iter().collect();

    let merged = SinglyLinkedList::merge_sorted(a, b);
    assert_eq!(forward(&merged), [1, 2, 3, 3, 5, 6, 7]);
    assert_eq!(merged.back(), Ok(&7));

    let empty: SinglyLinkedList<usize> = SinglyLinkedList::new();
    let b: SinglyLinkedList<_> = [2, 4].into_iter().collect();
    assert_eq!(forward(&SinglyLinkedList::merge_sorted(empty, b)), [2, 4]);
}

#[test]
fn clear() {
    let mut list: SinglyLinkedList<_> = (0..10).collect();
    list.clear();

    assert!(list.is_empty());
    assert!(forward(&list).is_empty());

    list.insert_at_beginning(3);
    assert_eq!(forward(&list), [3]);
}

#[test]
fn display_and_eq() {
    let list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(list.to_string(), "[1 -> 2 -> 3]");

    let mut other = list.clone();
    assert_eq!(list, other);

    other.insert_at_end(4);
    assert_ne!(list, other);

    let mut extended = list.clone();
    extended.extend([4]);
    assert_eq!(extended, other);
}

#[test]
fn policy_never_keeps_holes() {
    let mut list: PolicyNever<String> = to_str(&[0, 1, 2, 3, 4, 5]).into_iter().collect();

    for i in 0..4 {
        assert_eq!(list.delete_at_beginning(), Ok(i.to_string()));
    }

    assert_eq!(forward(&list), to_str(&[4, 5]));
    assert_eq!(list.utilization().num_closed_nodes, 4);
    assert_back(&list);
}

#[test]
fn policy_on_threshold_reclaims() {
    let mut list: PolicyOnThreshold<1, String> =
        to_str(&[0, 1, 2, 3, 4, 5, 6, 7]).into_iter().collect();

    assert_eq!(list.delete_at_position(5), Ok(5.to_string()));
    assert_eq!(list.delete_at_position(1), Ok(1.to_string()));
    assert_eq!(list.delete_at_position(2), Ok(3.to_string()));
    assert_eq!(list.delete_at_position(0), Ok(0.to_string()));
    assert_eq!(list.utilization().num_closed_nodes, 4);

    // more than half of the nodes are closed
    assert_eq!(list.delete_at_end(), Ok(7.to_string()));
    assert_eq!(list.utilization().num_closed_nodes, 0);
    assert_eq!(forward(&list), to_str(&[2, 4, 6]));
    assert_back(&list);

    list.insert_at_end(8.to_string());
    list.insert_at_position(3.to_string(), 1).unwrap();
    assert_eq!(forward(&list), to_str(&[2, 3, 4, 6, 8]));
    assert_back(&list);

    list.reverse();
    assert_eq!(forward(&list), to_str(&[8, 6, 4, 3, 2]));
}

#[test]
fn default_policy_survives_many_removals() {
    let mut list: SinglyLinkedList<_> = (0..100).collect();

    for i in (0..100).rev().step_by(3) {
        let position = list.search(&i).unwrap();
        assert_eq!(list.delete_at_position(position), Ok(i));
    }

    let expected: Vec<_> = (0..100).filter(|x| (99 - x) % 3 != 0).collect();
    assert_eq!(forward(&list), expected);
    assert_eq!(list.back(), expected.last().ok_or(DsaError::EmptyContainer));
}
