//! Index arithmetic and sift primitives over a complete binary tree stored in a slice.
//!
//! The slice length is the logical size: nothing at or past `data.len()` is
//! ever read, so no sentinel is needed to mark missing children.

/// Index of the parent of `node`. `node` must be non-zero.
#[inline]
pub(super) const fn parent(node: usize) -> usize {
    (node - 1) / 2
}

/// Index of the left child of `node`.
#[inline]
pub(super) const fn left_child(node: usize) -> usize {
    2 * node + 1
}

/// Index of the right child of `node`.
#[inline]
pub(super) const fn right_child(node: usize) -> usize {
    2 * node + 2
}

/// Moves `data[node]` toward the root while it is strictly smaller than its parent.
///
/// Returns the final index of the moved element.
pub(super) fn sift_up<T: Ord>(data: &mut [T], mut node: usize) -> usize {
    while node > 0 {
        let up = parent(node);
        if data[node] < data[up] {
            data.swap(node, up);
            node = up;
        } else {
            break;
        }
    }
    node
}

/// Moves `data[node]` toward the leaves while a child is strictly smaller.
///
/// At each level the smaller existing child is chosen; on a tie the left
/// child wins. Returns the final index of the moved element.
pub(super) fn sift_down<T: Ord>(data: &mut [T], mut node: usize) -> usize {
    let len = data.len();
    loop {
        let left = left_child(node);
        if left >= len {
            break;
        }
        let right = right_child(node);
        let mut smaller = left;
        if right < len && data[right] < data[left] {
            smaller = right;
        }

        if data[smaller] < data[node] {
            data.swap(node, smaller);
            node = smaller;
        } else {
            break;
        }
    }
    node
}
