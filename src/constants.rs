//! Growth constants for heap backing storage.

/// Capacity reserved by the first growth of a heap created without a hint.
pub const INITIAL_CAPACITY: usize = 16;

/// Multiplier applied to the capacity when the buffer is full.
pub const GROWTH_FACTOR: usize = 2;
