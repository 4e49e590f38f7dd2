//! Structured logging shim.
//!
//! With the `tracing` feature enabled, `heap_trace!` forwards to
//! `tracing::trace!`. Without it the macro expands to nothing and its
//! arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! heap_trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! heap_trace {
    ($($arg:tt)*) => {};
}
