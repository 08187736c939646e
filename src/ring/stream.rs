//! Stream shims for code that treats a ring buffer as a file-like handle.
//!
//! `StreamHandle` names the capability set such callers rely on: direction
//! flags, a descriptor, `flush` and `close`. `RingBuffer` also implements
//! `std::io::Read` and `std::io::Write` so it can sit behind serializers and
//! line readers directly.

use std::io;

use crate::constants::NO_FILE_DESCRIPTOR;
use crate::error::Result;
use crate::ring::RingBuffer;

/// OS-level descriptor type reported by `StreamHandle::file_descriptor`
pub type RawDescriptor = i32;

/// Capabilities of a generic byte stream handle
pub trait StreamHandle {
    fn readable(&self) -> bool;

    fn writable(&self) -> bool;

    fn seekable(&self) -> bool {
        false
    }

    /// Underlying OS descriptor, or `NO_FILE_DESCRIPTOR` for in-memory
    /// streams. Never pass the sentinel to OS calls.
    fn file_descriptor(&self) -> RawDescriptor {
        NO_FILE_DESCRIPTOR
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    fn is_closed(&self) -> bool {
        false
    }
}

/// In-memory: readable and writable, never seekable, no descriptor.
/// `flush` and `close` are no-ops and the buffer stays usable.
impl StreamHandle for RingBuffer {
    #[inline(always)]
    fn readable(&self) -> bool {
        true
    }

    #[inline(always)]
    fn writable(&self) -> bool {
        true
    }
}

impl io::Read for RingBuffer {
    /// Returns `Ok(0)` when nothing is buffered
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf))
    }
}

impl io::Write for RingBuffer {
    /// Returns `Ok(0)` when full, which `write_all` reports as `WriteZero`
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(RingBuffer::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
