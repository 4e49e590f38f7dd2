//! Iterators and conversions for `MinHeap`.
//!
//! Every bulk conversion into a heap goes through the same sift-up path as
//! `MinHeap::add`, one element at a time.

use super::MinHeap;
use core::iter::FusedIterator;

/// Borrowing iterator over a heap's elements in storage order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(data: &'a [T]) -> Self {
        Self { inner: data.iter() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a heap's elements in storage order.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// Owning iterator that pops elements in ascending order.
#[derive(Debug, Clone)]
pub struct IntoIterSorted<T> {
    heap: MinHeap<T>,
}

impl<T> IntoIterSorted<T> {
    pub(super) fn new(heap: MinHeap<T>) -> Self {
        Self { heap }
    }
}

impl<T: Ord> Iterator for IntoIterSorted<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIterSorted<T> {}
impl<T: Ord> FusedIterator for IntoIterSorted<T> {}

impl<T> IntoIterator for MinHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.data.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heapify(iter.into_iter().map(Some));
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.heapify(iter.into_iter().copied().map(Some));
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for MinHeap<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_storage_order() {
        let heap: MinHeap<_> = [3, 1, 2].into();
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
        assert_eq!(heap.iter().len(), 3);
        assert_eq!(heap.iter().rev().next(), Some(&2));

        let mut total = 0;
        for x in &heap {
            total += x;
        }
        assert_eq!(total, 6);
    }

    #[test]
    fn test_into_iter_matches_into_vec() {
        let heap: MinHeap<_> = vec![9, 4, 7, 1].into();
        let layout = heap.as_slice().to_vec();
        assert_eq!(heap.clone().into_iter().collect::<Vec<_>>(), layout);
        assert_eq!(heap.into_vec(), layout);
    }

    #[test]
    fn test_into_iter_sorted() {
        let heap: MinHeap<_> = (0..20).rev().collect();
        let mut sorted = heap.into_iter_sorted();
        assert_eq!(sorted.len(), 20);
        assert_eq!(sorted.next(), Some(0));
        assert_eq!(sorted.len(), 19);
        assert_eq!(sorted.collect::<Vec<_>>(), (1..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_extend() {
        let mut heap = MinHeap::new();
        heap.extend(vec![5, 2]);
        heap.extend(&[4, 1]);
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 4, 5]);
    }
}
