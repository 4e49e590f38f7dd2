//! Debug-only heap invariant checks.
//!
//! Public operations call [`heap_assert`] once before returning so debug builds
//! catch a broken sift immediately. Release builds skip the scan entirely.

use super::sift::parent;

/// Returns `true` if every node is `<=` each of its children.
pub(super) fn is_heap<T: Ord>(data: &[T]) -> bool {
    (1..data.len()).all(|child| data[parent(child)] <= data[child])
}

/// Debug-asserts the heap property after the named operation.
#[inline(always)]
pub(super) fn heap_assert<T: Ord>(data: &[T], operation: &str) {
    debug_assert!(
        is_heap(data),
        "Heap invariant violated after {}",
        operation
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_heap() {
        assert!(is_heap::<i32>(&[]));
        assert!(is_heap(&[1]));
        assert!(is_heap(&[1, 1, 1]));
        assert!(is_heap(&[1, 3, 2, 7, 4]));
        assert!(!is_heap(&[2, 1]));
        assert!(!is_heap(&[1, 3, 2, 7, 2]));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Heap invariant violated after pop")]
    fn test_heap_assert_fires() {
        heap_assert(&[3, 1, 2], "pop");
    }
}
