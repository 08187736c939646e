//! RingBuffer - Fixed-capacity circular byte buffer
//!
//! Transport buffer between raw byte sources (serial links, sockets, captured
//! data) and the code that consumes them.
//!
//! ## Layout
//!
//! ```text
//!            read_cursor            write_cursor
//!                 v                      v
//! [ stale stale | u  n  r  e  a  d | free free free ]
//! ```
//!
//! Cursors live in `[0, capacity)` and advance with `& mask`. Writes and reads
//! that cross the physical end of storage are split into two copies.
//!
//! ## APIs
//!
//! - `write()` stores what fits and returns the count; the rest is dropped
//! - `read()` / `read_into()` consume bytes from the front
//! - `peek()` inspects a buffered byte without consuming it

use std::fmt;
use std::ops::Index;

use crate::constants::DEFAULT_CAPACITY;
use crate::error::{ ByteRingError, Result };
use crate::insights;
use crate::metrics::{ RingStats, RingStatsSnapshot };
use crate::ring::{ validate_capacity, ReadAmount, RingBufferConfig };

/// Fixed-capacity byte ring with one reserved slot
pub struct RingBuffer {
    /// Zero-initialized storage, `capacity` bytes long
    storage: Box<[u8]>,
    /// Mask for fast index calculation
    mask: usize,
    /// Next slot to write
    write_cursor: usize,
    /// Next slot to read
    read_cursor: usize,
    zero_on_read: bool,
    stats: RingStats,
}

impl RingBuffer {
    /// Create a buffer of `capacity` bytes, able to hold `capacity - 1`
    pub fn new(capacity: usize) -> Result<Self> {
        Self::from_config(&RingBufferConfig {
            capacity,
            ..Default::default()
        })
    }

    /// Create a buffer of `DEFAULT_CAPACITY` bytes
    pub fn with_default_capacity() -> Result<Self> {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Create a buffer from a validated or hand-built configuration
    pub fn from_config(config: &RingBufferConfig) -> Result<Self> {
        let capacity = config.capacity;
        validate_capacity(capacity)?;

        let storage = allocate(capacity)?;
        insights::record_create(capacity);

        Ok(Self {
            storage,
            mask: capacity - 1,
            write_cursor: 0,
            read_cursor: 0,
            zero_on_read: config.zero_on_read,
            stats: RingStats::new(),
        })
    }

    /// Total slot count; one slot is always kept free
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// `capacity - 1`, used to wrap cursors
    #[inline(always)]
    pub fn mask(&self) -> usize {
        self.mask
    }

    /// Bytes buffered and not yet read
    #[inline(always)]
    pub fn used_count(&self) -> usize {
        self.write_cursor.wrapping_sub(self.read_cursor) & self.mask
    }

    /// Bytes that can be written without loss
    #[inline(always)]
    pub fn free_space(&self) -> usize {
        self.read_cursor.wrapping_sub(self.write_cursor).wrapping_sub(1) & self.mask
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.used_count()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.write_cursor == self.read_cursor
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.free_space() == 0
    }

    /// Copy as many leading bytes of `data` as fit.
    ///
    /// Returns the number stored. Anything beyond `free_space()` is silently
    /// dropped; compare the return value with `data.len()` to detect it.
    ///
    /// A call that stores nothing leaves the buffer untouched, but a non-empty
    /// `data` still counts as a (truncated) write in `stats()`.
    pub fn write(&mut self, data: &[u8]) -> usize {
        if data.is_empty() {
            return 0;
        }

        let count = data.len().min(self.free_space());
        if count > 0 {
            let start = self.write_cursor;
            let first = count.min(self.capacity() - start);
            self.storage[start..start + first].copy_from_slice(&data[..first]);
            self.storage[..count - first].copy_from_slice(&data[first..count]);
            self.write_cursor = (start + count) & self.mask;
        }

        self.stats.record_write(data.len(), count);
        insights::record_write(data.len(), count);
        count
    }

    /// Consume up to `amount` bytes into a new vector.
    ///
    /// Returns an empty vector when nothing is buffered or zero was requested.
    pub fn read(&mut self, amount: impl Into<ReadAmount>) -> Vec<u8> {
        let amount = amount.into();
        let available = self.used_count();
        let requested = match amount {
            ReadAmount::All => available,
            ReadAmount::AtMost(n) => n,
        };

        let mut out = vec![0u8; amount.resolve(available)];
        let count = self.drain_into(&mut out);
        if count > 0 {
            insights::record_read(requested, count);
        }
        out
    }

    /// Consume everything buffered
    pub fn read_all(&mut self) -> Vec<u8> {
        self.read(ReadAmount::All)
    }

    /// Consume up to `out.len()` bytes into `out`, returning the count
    pub fn read_into(&mut self, out: &mut [u8]) -> usize {
        let count = self.drain_into(out);
        if count > 0 {
            insights::record_read(out.len(), count);
        }
        count
    }

    fn drain_into(&mut self, out: &mut [u8]) -> usize {
        let count = out.len().min(self.used_count());
        if count == 0 {
            return 0;
        }

        let start = self.read_cursor;
        let first = count.min(self.capacity() - start);
        out[..first].copy_from_slice(&self.storage[start..start + first]);
        out[first..count].copy_from_slice(&self.storage[..count - first]);

        if self.zero_on_read {
            self.storage[start..start + first].fill(0);
            self.storage[..count - first].fill(0);
        }
        self.read_cursor = (start + count) & self.mask;

        self.stats.record_read(count);
        count
    }

    /// Byte at logical offset `index` from the read cursor, not consumed
    #[inline]
    pub fn peek(&self, index: usize) -> Result<u8> {
        let len = self.used_count();
        if index >= len {
            return Err(ByteRingError::index_out_of_range(index, len));
        }
        Ok(self.storage[self.physical(index)])
    }

    /// Discard all buffered content and zero the storage
    pub fn clear(&mut self) {
        let discarded = self.used_count();
        self.storage.fill(0);
        self.write_cursor = 0;
        self.read_cursor = 0;
        self.stats.record_clear();
        insights::record_clear(discarded);
    }

    /// Copy of the whole physical storage block, live and stale bytes alike.
    ///
    /// Diagnostics only; consumers should use `read` or `peek`.
    pub fn snapshot(&self) -> Vec<u8> {
        self.storage.to_vec()
    }

    /// Traffic counters since construction or the last `reset_stats()`
    pub fn stats(&self) -> RingStatsSnapshot {
        self.stats.snapshot()
    }

    /// Zero the counters; buffered content is kept
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    #[inline(always)]
    fn physical(&self, index: usize) -> usize {
        (self.read_cursor + index) & self.mask
    }
}

/// Reserve zeroed storage without aborting on allocator failure
fn allocate(capacity: usize) -> Result<Box<[u8]>> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|source| ByteRingError::AllocationFailure { capacity, source })?;
    storage.resize(capacity, 0u8);
    Ok(storage.into_boxed_slice())
}

impl Default for RingBuffer {
    /// A `DEFAULT_CAPACITY` buffer.
    ///
    /// # Panics
    /// If the default-sized allocation fails.
    fn default() -> Self {
        match Self::with_default_capacity() {
            Ok(ring) => ring,
            Err(err) => panic!("default ring buffer: {err}"),
        }
    }
}

impl Index<usize> for RingBuffer {
    type Output = u8;

    /// Same as `peek`, but panics when `index >= used_count()`
    fn index(&self, index: usize) -> &u8 {
        let len = self.used_count();
        assert!(index < len, "index {index} out of range for {len} buffered bytes");
        &self.storage[self.physical(index)]
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("used", &self.used_count())
            .field("read_cursor", &self.read_cursor)
            .field("write_cursor", &self.write_cursor)
            .finish()
    }
}
