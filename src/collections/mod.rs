//! Collections provided by this crate.
//!
//! Collections are organized by data structure family:
//! - `heap`: array-backed priority containers

pub mod heap;

pub use heap::MinHeap;
