//! Internal logging macros.

/// Emit a `TRACE` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so call sites carry no cost and the crate
/// carries no `tracing` dependency in a `default-features = false` build.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "outcome", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_event;
