//! # `minheap` - Array-Backed Binary Min-Heap
//!
//! A priority container that keeps its smallest element at the front.
//! Elements live in one contiguous, growable buffer that is read as a complete
//! binary tree, so parent and child positions are pure index arithmetic.
//!
//! ## Guarantees
//!
//! - **Heap property**: every node is `<=` each of its children under the
//!   element type's natural `Ord`.
//! - **Completeness**: live elements always occupy the prefix `[0, len)`.
//! - **Atomic operations**: every public call leaves both properties restored;
//!   the heap is never observable in a half-sifted state.
//!
//! ## Complexity
//!
//! | Operation | Cost |
//! |---|---|
//! | [`MinHeap::peek`] | O(1) |
//! | [`MinHeap::add`] | O(log n) worst case, O(1) average |
//! | [`MinHeap::pop`] | O(log n) |
//! | [`MinHeap::delete`] | O(n log n): compaction plus full rebuild |
//! | [`MinHeap::delete_in_place`] | O(n) scan plus O(log n) repair |
//! | [`MinHeap::heapify`] | O(n log n): one `add` per element |
//!
//! ## Example
//!
//! ```rust
//! use minheap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! for x in [5, 3, 8, 1, 9, 2] {
//!     heap.add(x);
//! }
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//!
//! assert!(heap.delete(&8));
//! assert!(!heap.delete(&42));
//!
//! assert_eq!(heap.into_sorted_vec(), vec![3, 5, 9]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod collections;
pub mod constants;

pub use collections::heap::{IntoIter, IntoIterSorted, Iter, MinHeap};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // The heap is a thin wrapper around its buffer.
    assert!(mem::size_of::<MinHeap<u64>>() == mem::size_of::<Vec<u64>>());
    assert!(mem::align_of::<MinHeap<u64>>() == mem::align_of::<Vec<u64>>());

    assert!(constants::INITIAL_CAPACITY > 0);
    assert!(constants::GROWTH_FACTOR >= 2);
};
