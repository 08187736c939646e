//! bytering - Fixed-capacity circular byte buffer for I/O transport.
//!
//! A `RingBuffer` sits between a raw byte source (serial link, device socket,
//! captured data) and the code that parses it. Capacity is a power of two,
//! fixed at construction, and one slot is always kept free, so a buffer of
//! capacity `N` holds at most `N - 1` bytes.
//!
//! ```rust
//! use bytering::{ ReadAmount, RingBuffer };
//!
//! let mut ring = RingBuffer::new(8)?;
//! assert_eq!(ring.write(b"ABCDE"), 5);
//! assert_eq!(ring.read(ReadAmount::AtMost(3)), b"ABC");
//! assert_eq!(ring.write(b"FGHIJ"), 5);
//! assert_eq!(ring.read(ReadAmount::All), b"DEFGHIJ");
//! # Ok::<(), bytering::ByteRingError>(())
//! ```
//!
//! Writes never block and never grow the buffer: anything beyond
//! `free_space()` is dropped and the returned count is the only signal.

pub mod constants;
pub mod error;
pub mod insights;
pub mod metrics;
pub mod ring;

pub use error::{ ByteRingError, Result };
pub use metrics::{ RingStats, RingStatsSnapshot };
pub use ring::{
    RawDescriptor,
    ReadAmount,
    RingBuffer,
    RingBufferConfig,
    SharedRingBuffer,
    StreamHandle,
};
