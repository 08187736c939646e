//! SharedRingBuffer - `RingBuffer` behind a mutex for cross-thread use
//!
//! `RingBuffer` has no internal synchronization. This handle serializes every
//! operation through one `parking_lot::Mutex`, so a producer thread and a
//! consumer thread can share a buffer. Use `with_lock()` when several steps
//! must happen without another thread in between.
//!
//! ```rust
//! use bytering::{ ReadAmount, SharedRingBuffer };
//!
//! let ring = SharedRingBuffer::new(64)?;
//! let producer = ring.clone();
//! std::thread::spawn(move || producer.write(b"ping")).join().unwrap();
//! assert_eq!(ring.read(ReadAmount::All), b"ping");
//! # Ok::<(), bytering::ByteRingError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::metrics::RingStatsSnapshot;
use crate::ring::{ ReadAmount, RingBuffer, RingBufferConfig };

/// Cloneable, thread-safe handle to one ring buffer
#[derive(Clone)]
pub struct SharedRingBuffer {
    inner: Arc<Mutex<RingBuffer>>,
}

impl SharedRingBuffer {
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_buffer(RingBuffer::new(capacity)?))
    }

    pub fn from_config(config: &RingBufferConfig) -> Result<Self> {
        Ok(Self::from_buffer(RingBuffer::from_config(config)?))
    }

    pub fn from_buffer(ring: RingBuffer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ring)),
        }
    }

    pub fn write(&self, data: &[u8]) -> usize {
        self.inner.lock().write(data)
    }

    pub fn read(&self, amount: impl Into<ReadAmount>) -> Vec<u8> {
        self.inner.lock().read(amount)
    }

    pub fn read_into(&self, out: &mut [u8]) -> usize {
        self.inner.lock().read_into(out)
    }

    pub fn peek(&self, index: usize) -> Result<u8> {
        self.inner.lock().peek(index)
    }

    pub fn used_count(&self) -> usize {
        self.inner.lock().used_count()
    }

    pub fn free_space(&self) -> usize {
        self.inner.lock().free_space()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn snapshot(&self) -> Vec<u8> {
        self.inner.lock().snapshot()
    }

    pub fn stats(&self) -> RingStatsSnapshot {
        self.inner.lock().stats()
    }

    /// Run `f` with the buffer locked for its whole duration
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut RingBuffer) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Recover the buffer if this is the last handle
    pub fn into_inner(self) -> std::result::Result<RingBuffer, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl fmt::Debug for SharedRingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRingBuffer").field(&*self.inner.lock()).finish()
    }
}
