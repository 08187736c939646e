//! Insights - Observability for bytering.
//!
//! Structured `tracing` events for ring activity. Costs a level check when no
//! subscriber is installed.
//!
//! # Usage
//!
//! ```rust,no_run
//! bytering::insights::init_logging();
//! ```
//!
//! Then filter with `RUST_LOG`, e.g. `RUST_LOG=bytering=trace`.

use tracing::{ debug, trace };
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber driven by `RUST_LOG` (defaults to `info`).
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Record storage allocation for a new buffer
#[inline]
pub fn record_create(capacity: usize) {
    debug!(capacity, "ring buffer allocated");
}

/// Record a write; truncated writes are reported as backpressure
#[inline]
pub fn record_write(requested: usize, written: usize) {
    trace!(requested, written, "write");
    if written < requested {
        record_backpressure(requested - written);
    }
}

/// Record a read; `requested` is the caller's bound before clamping
#[inline]
pub fn record_read(requested: usize, delivered: usize) {
    trace!(requested, delivered, "read");
}

/// Record backpressure (bytes dropped because the buffer was full)
#[inline]
pub fn record_backpressure(dropped: usize) {
    debug!(dropped, "backpressure: write truncated");
}

/// Record a clear
#[inline]
pub fn record_clear(discarded: usize) {
    trace!(discarded, "cleared");
}
