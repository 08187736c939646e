//! Bytering Constants
//!
//! Sizing limits and sentinels shared by the ring buffer and its stream shims.

use static_assertions::const_assert;

/// Default ring buffer capacity in bytes (must be power of 2)
pub const DEFAULT_CAPACITY: usize = 4096;

/// Largest capacity accepted at construction (1 GiB)
pub const MAX_CAPACITY: usize = 1 << 30;

/// Descriptor reported by stream shims that are not backed by an OS handle
pub const NO_FILE_DESCRIPTOR: i32 = -1;

const_assert!(DEFAULT_CAPACITY.is_power_of_two());
const_assert!(MAX_CAPACITY.is_power_of_two());
const_assert!(DEFAULT_CAPACITY <= MAX_CAPACITY);
