use minheap::MinHeap;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Add(u8),
    Pop,
    Peek,
    Delete(u8),
    DeleteInPlace(u8),
    Heapify(Vec<Option<u8>>),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<u8>().prop_map(Operation::Add),
        2 => Just(Operation::Pop),
        1 => Just(Operation::Peek),
        2 => any::<u8>().prop_map(Operation::Delete),
        1 => any::<u8>().prop_map(Operation::DeleteInPlace),
        1 => proptest::collection::vec(proptest::option::of(any::<u8>()), 0..8)
            .prop_map(Operation::Heapify),
    ]
}

fn remove_one(model: &mut Vec<u8>, x: u8) -> bool {
    match model.iter().position(|&m| m == x) {
        Some(index) => {
            model.swap_remove(index);
            true
        }
        None => false,
    }
}

proptest! {
    #[test]
    fn test_min_heap_matches_model(ops in proptest::collection::vec(operation(), 1..200)) {
        // Unordered multiset model; the minimum is recomputed on demand.
        let mut model: Vec<u8> = Vec::new();
        let mut heap = MinHeap::new();

        for op in ops {
            match op {
                Operation::Add(x) => {
                    heap.add(x);
                    model.push(x);
                }
                Operation::Pop => {
                    let expected = model.iter().min().copied();
                    if let Some(min) = expected {
                        remove_one(&mut model, min);
                    }
                    prop_assert_eq!(heap.pop(), expected, "Pop result mismatch");
                }
                Operation::Peek => {
                    prop_assert_eq!(heap.peek().copied(), model.iter().min().copied());
                }
                Operation::Delete(x) => {
                    let before = heap.as_slice().to_vec();
                    let expected = remove_one(&mut model, x);
                    prop_assert_eq!(heap.delete(&x), expected, "Delete result mismatch for {}", x);
                    if !expected {
                        prop_assert_eq!(heap.as_slice(), before.as_slice());
                    }
                }
                Operation::DeleteInPlace(x) => {
                    let expected = remove_one(&mut model, x);
                    prop_assert_eq!(heap.delete_in_place(&x), expected);
                }
                Operation::Heapify(items) => {
                    model.extend(items.iter().flatten());
                    heap.heapify(items);
                }
            }

            prop_assert!(heap.is_heap(), "Heap property violated");
            prop_assert_eq!(heap.len(), model.len(), "Length mismatch");
        }

        model.sort_unstable();
        prop_assert_eq!(heap.into_sorted_vec(), model);
    }

    #[test]
    fn test_pop_order_is_sorted(items in proptest::collection::vec(any::<i32>(), 0..300)) {
        let mut heap: MinHeap<_> = items.iter().copied().collect();
        let mut popped = Vec::with_capacity(items.len());
        while let Some(x) = heap.pop() {
            popped.push(x);
        }

        let mut expected = items;
        expected.sort_unstable();
        prop_assert_eq!(popped, expected);
        prop_assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_delete_removes_exactly_one(
        items in proptest::collection::vec(0u8..8, 1..64),
        target in 0u8..8,
    ) {
        let mut heap = MinHeap::from(items.clone());
        let count_before = items.iter().filter(|&&x| x == target).count();

        let deleted = heap.delete(&target);
        let count_after = heap.iter().filter(|&&x| x == target).count();

        prop_assert_eq!(deleted, count_before > 0);
        prop_assert_eq!(count_after, count_before.saturating_sub(1));
        prop_assert!(heap.is_heap());
    }
}
