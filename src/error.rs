//! Error types and handling for the Bytering library

use std::collections::TryReserveError;

use thiserror::Error;

use crate::constants::MAX_CAPACITY;

/// Result type alias for Bytering operations
pub type Result<T> = std::result::Result<T, ByteRingError>;

/// Main error type for the Bytering library
#[derive(Error, Debug)]
pub enum ByteRingError {
    /// Capacity is zero, not a power of two, or above `MAX_CAPACITY`
    #[error("Invalid capacity {capacity}: must be a power of two in 1..={max}", max = MAX_CAPACITY)]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },

    /// Storage for the ring could not be reserved
    #[error("Failed to allocate {capacity} bytes of ring storage")]
    AllocationFailure {
        /// The capacity that was requested
        capacity: usize,
        /// Allocator error
        source: TryReserveError,
    },

    /// Logical offset lies outside the buffered window
    #[error("Index {index} out of range for {len} buffered bytes")]
    IndexOutOfRange {
        /// Requested offset from the read cursor
        index: usize,
        /// Bytes buffered at the time of the request
        len: usize,
    },
}

impl ByteRingError {
    /// Create a new invalid capacity error
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity { capacity }
    }

    /// Create a new index error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if this error is recoverable
    ///
    /// Construction failures leave no buffer behind; a bad peek leaves the
    /// buffer untouched.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this error was raised while constructing a buffer
    pub fn is_construction_error(&self) -> bool {
        matches!(self, Self::InvalidCapacity { .. } | Self::AllocationFailure { .. })
    }
}
