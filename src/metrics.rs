//! Metrics for bytering buffers.
//!
//! Lightweight per-buffer counters for observability. They describe traffic
//! only and never feed back into buffer behavior.

/// Traffic counters owned by one ring buffer
#[derive(Debug, Clone, Default)]
pub struct RingStats {
    bytes_written: u64,
    bytes_read: u64,
    writes: u64,
    reads: u64,
    truncated_writes: u64,
    truncated_bytes: u64,
    clears: u64,
}

impl RingStats {
    pub const fn new() -> Self {
        Self {
            bytes_written: 0,
            bytes_read: 0,
            writes: 0,
            reads: 0,
            truncated_writes: 0,
            truncated_bytes: 0,
            clears: 0,
        }
    }

    /// Count a non-empty write request, of which `written` bytes were stored
    #[inline]
    pub fn record_write(&mut self, requested: usize, written: usize) {
        self.writes += 1;
        self.bytes_written += written as u64;
        if written < requested {
            self.truncated_writes += 1;
            self.truncated_bytes += (requested - written) as u64;
        }
    }

    /// Count a read that delivered at least one byte
    #[inline]
    pub fn record_read(&mut self, delivered: usize) {
        self.reads += 1;
        self.bytes_read += delivered as u64;
    }

    #[inline]
    pub fn record_clear(&mut self) {
        self.clears += 1;
    }

    pub fn snapshot(&self) -> RingStatsSnapshot {
        RingStatsSnapshot {
            bytes_written: self.bytes_written,
            bytes_read: self.bytes_read,
            writes: self.writes,
            reads: self.reads,
            truncated_writes: self.truncated_writes,
            truncated_bytes: self.truncated_bytes,
            clears: self.clears,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RingStatsSnapshot {
    pub bytes_written: u64,
    pub bytes_read: u64,
    pub writes: u64,
    pub reads: u64,
    pub truncated_writes: u64,
    pub truncated_bytes: u64,
    pub clears: u64,
}

impl std::fmt::Display for RingStatsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "writes={} reads={} bytes_in={} bytes_out={} truncated={} dropped={} clears={}",
            self.writes,
            self.reads,
            self.bytes_written,
            self.bytes_read,
            self.truncated_writes,
            self.truncated_bytes,
            self.clears
        )
    }
}
