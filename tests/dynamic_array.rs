use dsa_selfref::*;

fn to_vec<T: Clone>(array: &DynamicArray<T>) -> Vec<T> {
    let vec: Vec<_> = array.iter().cloned().collect();
    assert_eq!(vec.len(), array.len());
    assert!(array.len() <= array.capacity());
    vec
}

#[test]
fn new_array() {
    let array: DynamicArray<char> = DynamicArray::new();

    assert!(array.is_empty());
    assert_eq!(array.capacity(), 1);
    assert_eq!(array.get(0), Err(DsaError::IndexOutOfRange { index: 0, len: 0 }));
    assert_eq!(array.last(), Err(DsaError::EmptyContainer));
    assert_eq!(array.to_string(), "[]");
}

#[test]
fn append_doubles_capacity() {
    let mut array = DynamicArray::new();

    let mut capacities = vec![];
    for i in 0..9 {
        array.append(i);
        capacities.push(array.capacity());
    }

    assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(to_vec(&array), (0..9).collect::<Vec<_>>());
}

#[test]
fn get_set() {
    let mut array: DynamicArray<_> = ["a", "b", "c"].into_iter().collect();

    assert_eq!(array.get(1), Ok(&"b"));
    assert_eq!(array.set(1, "x"), Ok("b"));
    assert_eq!(array.get(1), Ok(&"x"));

    assert_eq!(array.set(3, "y"), Err(DsaError::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(to_vec(&array), ["a", "x", "c"]);
}

#[test]
fn insert() {
    let mut array = DynamicArray::new();

    array.insert(0, 1).unwrap();
    array.insert(0, 0).unwrap();
    array.insert(2, 3).unwrap();
    array.insert(2, 2).unwrap();
    assert_eq!(to_vec(&array), [0, 1, 2, 3]);
    assert_eq!(array.capacity(), 4);

    array.insert(4, 4).unwrap();
    assert_eq!(array.capacity(), 8);

    assert_eq!(array.insert(6, 6), Err(DsaError::IndexOutOfRange { index: 6, len: 5 }));
    assert_eq!(to_vec(&array), [0, 1, 2, 3, 4]);
}

#[test]
fn remove_shrinks_when_quarter_full() {
    let mut array: DynamicArray<_> = (0..8).collect();
    assert_eq!(array.capacity(), 8);

    assert_eq!(array.remove(0), Ok(0));
    assert_eq!(array.remove(6), Ok(7));
    assert_eq!(array.remove(3), Ok(4));
    assert_eq!(array.remove(0), Ok(1));
    assert_eq!(array.remove(0), Ok(2));
    assert_eq!(array.remove(0), Ok(3));
    assert_eq!(array.capacity(), 8);
    assert_eq!(to_vec(&array), [5, 6]);

    // 1 < 8 / 4
    assert_eq!(array.remove(1), Ok(6));
    assert_eq!(array.capacity(), 4);
    assert_eq!(to_vec(&array), [5]);

    // never shrinks when emptied
    assert_eq!(array.remove(0), Ok(5));
    assert_eq!(array.capacity(), 4);
    assert!(array.is_empty());

    assert_eq!(array.remove(0), Err(DsaError::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn pop_and_last() {
    let mut array: DynamicArray<_> = (0..3).collect();

    assert_eq!(array.last(), Ok(&2));
    assert_eq!(array.pop(), Ok(2));
    assert_eq!(array.pop(), Ok(1));
    assert_eq!(array.pop(), Ok(0));
    assert_eq!(array.pop(), Err(DsaError::EmptyContainer));
    assert!(array.capacity() >= 1);
}

#[test]
fn drops_removed_elements() {
    use std::rc::Rc;

    let value = Rc::new(42);
    let mut array = DynamicArray::new();
    for _ in 0..5 {
        array.append(Rc::clone(&value));
    }
    assert_eq!(Rc::strong_count(&value), 6);

    _ = array.remove(2).unwrap();
    assert_eq!(Rc::strong_count(&value), 5);

    drop(array);
    assert_eq!(Rc::strong_count(&value), 1);
}

#[test]
fn display_and_debug() {
    let array: DynamicArray<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(array.to_string(), "[1, 2, 3]");
    assert_eq!(
        format!("{array:?}"),
        "DynamicArray { len: 3, capacity: 4, elements: [1, 2, 3] }"
    );
}
