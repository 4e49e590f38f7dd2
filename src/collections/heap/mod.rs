//! `MinHeap` - a priority container implemented with an array-backed binary heap.
//!
//! Elements are stored in a `Vec` read as a complete binary tree: the node at
//! index `i` has its parent at `(i - 1) / 2` and its children at `2i + 1` and
//! `2i + 2`. The vector length is the logical size; slots past it do not exist.
//!
//! The front of the heap is always the smallest element under `T`'s natural
//! order. There is no custom comparator and no decrease-key.

mod invariant;
mod iter;
mod serde_impl;
mod sift;

pub use iter::{IntoIter, IntoIterSorted, Iter};

use crate::constants::{GROWTH_FACTOR, INITIAL_CAPACITY};
use core::cmp::Ord;
use core::fmt;

/// A binary min-heap.
///
/// The smallest element is always available in O(1) through [`MinHeap::peek`].
/// Insertion and removal of the minimum run in O(log n).
///
/// Removing an arbitrary element by value with [`MinHeap::delete`] compacts the
/// buffer and rebuilds the whole heap. [`MinHeap::delete_in_place`] is the
/// O(log n) repair alternative; the two may leave equal elements in different
/// positions.
#[derive(Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    ///
    /// No memory is allocated until the first element is added.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Creates a heap from a sequence that may contain absent entries.
    ///
    /// Equivalent to [`MinHeap::new`] followed by [`MinHeap::heapify`].
    ///
    /// ```rust
    /// use minheap::MinHeap;
    ///
    /// let heap = MinHeap::heapified([Some(4), None, Some(2)]);
    /// assert_eq!(heap.len(), 2);
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    pub fn heapified<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut heap = Self::new();
        heap.heapify(elements);
        heap
    }

    /// Adds an element to the heap.
    ///
    /// The element is appended after the last live slot and sifted up while it
    /// is strictly smaller than its parent. Runs in O(log n) worst case and
    /// O(1) on average.
    pub fn add(&mut self, element: T) {
        self.push_sift(element);
        invariant::heap_assert(&self.data, "add");
    }

    /// Returns the smallest element, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the smallest element, or `None` if the heap is empty.
    ///
    /// The last element takes the root's place and is sifted down.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.take_root()?;
        invariant::heap_assert(&self.data, "pop");
        Some(item)
    }

    /// Removes the first element equal to `element`, scanning in storage order.
    ///
    /// Later elements shift one slot left to close the gap, and the heap is
    /// then rebuilt by re-adding every survivor in storage order. This costs
    /// O(n log n). Returns `false` and leaves the heap untouched if nothing
    /// matches.
    pub fn delete(&mut self, element: &T) -> bool {
        let Some(index) = self.position(element) else {
            return false;
        };
        self.data.remove(index);
        self.reheapify();
        invariant::heap_assert(&self.data, "delete");
        true
    }

    /// Removes the first element equal to `element` without rebuilding.
    ///
    /// The match is replaced by the last element, which is then sifted up or
    /// down. The scan is still O(n); the repair is O(log n). Among equal
    /// elements the resulting layout can differ from [`MinHeap::delete`].
    pub fn delete_in_place(&mut self, element: &T) -> bool {
        let Some(index) = self.position(element) else {
            return false;
        };
        self.data.swap_remove(index);
        if index < self.data.len() && sift::sift_up(&mut self.data, index) == index {
            sift::sift_down(&mut self.data, index);
        }
        invariant::heap_assert(&self.data, "delete_in_place");
        true
    }

    /// Adds every present element of `elements`, skipping `None` entries.
    ///
    /// Each element goes through the same path as [`MinHeap::add`], so loading
    /// n elements costs O(n log n).
    pub fn heapify<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut added = 0usize;
        let mut skipped = 0usize;
        for element in elements {
            match element {
                Some(element) => {
                    self.push_sift(element);
                    added += 1;
                }
                None => skipped += 1,
            }
        }
        heap_trace!(added, skipped, len = self.data.len(), "heapify");
        #[cfg(not(feature = "tracing"))]
        let _ = (added, skipped);
        invariant::heap_assert(&self.data, "heapify");
    }

    /// Returns `true` if an element equal to `element` is in the heap.
    pub fn contains(&self, element: &T) -> bool {
        self.position(element).is_some()
    }

    /// Returns `true` if the heap property holds over the whole buffer.
    ///
    /// Always `true` for a heap driven only through its public API.
    pub fn is_heap(&self) -> bool {
        invariant::is_heap(&self.data)
    }

    /// Consumes the heap and returns its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.take_root() {
            sorted.push(item);
        }
        sorted
    }

    /// Consumes the heap into an iterator that pops elements in ascending order.
    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted::new(self)
    }

    fn position(&self, element: &T) -> Option<usize> {
        self.data.iter().position(|candidate| candidate == element)
    }

    fn push_sift(&mut self, element: T) {
        if self.data.len() == self.data.capacity() {
            self.grow();
        }
        self.data.push(element);
        let last = self.data.len() - 1;
        sift::sift_up(&mut self.data, last);
    }

    fn take_root(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let item = self.data.pop()?;
        if !self.data.is_empty() {
            sift::sift_down(&mut self.data, 0);
        }
        Some(item)
    }

    // Same as clearing and re-adding each survivor in storage order: survivor
    // `i` already sits in slot `i`, so adding it to a heap of size `i` is a
    // sift-up within the prefix `[0, i]`.
    fn reheapify(&mut self) {
        for node in 1..self.data.len() {
            sift::sift_up(&mut self.data[..=node], node);
        }
        heap_trace!(len = self.data.len(), "reheapify");
    }

    fn grow(&mut self) {
        let capacity = self.data.capacity();
        let target = if capacity == 0 {
            INITIAL_CAPACITY
        } else {
            capacity.saturating_mul(GROWTH_FACTOR)
        };
        self.data.reserve_exact(target - self.data.len());
        heap_trace!(
            old_capacity = capacity,
            new_capacity = self.data.capacity(),
            "grow"
        );
    }
}

impl<T> MinHeap<T> {
    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without growing.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Drops every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the elements in storage (level) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over all elements in storage order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.data)
    }

    /// Consumes the heap and returns its buffer in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.len())
            .field("data", &self.data)
            .finish()
    }
}
