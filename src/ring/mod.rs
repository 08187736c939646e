//! Fixed-capacity circular byte buffers.
//!
//! | Type | Use Case |
//! |------|----------|
//! | `RingBuffer` | Single-context producer/consumer, no locking |
//! | `SharedRingBuffer` | Same buffer handed across threads behind a mutex |
//!
//! Capacity is always a power of two so cursor wrap is a mask. One slot stays
//! reserved: a buffer of capacity `N` holds at most `N - 1` bytes, and equal
//! cursors always mean empty.

pub mod ring_buffer;
pub mod shared_ring_buffer;
pub mod stream;

pub use ring_buffer::RingBuffer;
pub use shared_ring_buffer::SharedRingBuffer;
pub use stream::{ RawDescriptor, StreamHandle };

use serde::{ Deserialize, Serialize };

use crate::constants::{ DEFAULT_CAPACITY, MAX_CAPACITY };
use crate::error::{ ByteRingError, Result };

/// How many bytes a read should consume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadAmount {
    /// Everything currently buffered
    #[default]
    All,
    /// Up to `n` bytes; fewer if fewer are buffered
    AtMost(usize),
}

impl ReadAmount {
    /// Clamp the request against the bytes currently available
    #[inline(always)]
    pub fn resolve(self, available: usize) -> usize {
        match self {
            Self::All => available,
            Self::AtMost(n) => n.min(available),
        }
    }
}

impl From<usize> for ReadAmount {
    /// A plain count is an upper bound
    fn from(n: usize) -> Self {
        Self::AtMost(n)
    }
}

/// Check that `capacity` is a usable ring size
pub fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 || !capacity.is_power_of_two() || capacity > MAX_CAPACITY {
        return Err(ByteRingError::invalid_capacity(capacity));
    }
    Ok(())
}

/// Configuration for ring buffer construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingBufferConfig {
    /// Size of the storage block in bytes (must be power of 2)
    pub capacity: usize,
    /// Zero consumed bytes so `snapshot()` shows only unread data
    pub zero_on_read: bool,
}

impl Default for RingBufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            zero_on_read: false,
        }
    }
}

impl RingBufferConfig {
    /// Create a new configuration with the specified capacity
    pub fn new(capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            capacity,
            ..Default::default()
        })
    }

    /// Zero consumed bytes on read
    pub fn with_zero_on_read(mut self, enable: bool) -> Self {
        self.zero_on_read = enable;
        self
    }

    /// Re-check a configuration built by hand or deserialized
    pub fn validate(&self) -> Result<()> {
        validate_capacity(self.capacity)
    }
}
