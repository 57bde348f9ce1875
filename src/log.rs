//! Crate-internal logging.
//!
//! `debug!` and `warn!` forward to `tracing` when the `tracing` feature is
//! on and expand to nothing otherwise. Neither is part of the public API.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_shim {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug;

#[cfg(not(feature = "tracing"))]
pub(crate) use warn_shim as warn;
