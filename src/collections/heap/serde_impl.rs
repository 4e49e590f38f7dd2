//! Serde support for `MinHeap`.
//!
//! A heap serializes as a sequence of its elements in storage order.
//! Deserialization accepts a sequence of optional elements, drops absent
//! entries, and bulk-loads the rest through `MinHeap::heapify`, so any input
//! order produces a valid heap.

use super::MinHeap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for MinHeap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.data)
    }
}

impl<'de, T> Deserialize<'de> for MinHeap<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<Option<T>>::deserialize(deserializer)?;
        Ok(Self::heapified(elements))
    }
}
