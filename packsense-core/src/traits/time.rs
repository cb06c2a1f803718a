//! Time Source Abstraction for the Control Loop
//!
//! The change detector never owns a timer thread. It asks a `TimeSource` for
//! the current time once per tick and compares against its last poll.
//!
//! ## Common Implementations
//!
//! - `SteadyClock`: `Instant`-based monotonic clock (std)
//! - `FixedTime`: controllable time for testing and trace replay
//! - Host adapters: e.g. an FPGA timestamp counter exposed by the robot runtime

use crate::time::Timestamp;

/// Source of time for the system
///
/// ## Example Implementation
///
/// ```rust
/// use packsense_core::traits::TimeSource;
/// use packsense_core::time::Timestamp;
///
/// struct FpgaClock {
///     micros: u64,
/// }
///
/// impl TimeSource for FpgaClock {
///     fn now(&self) -> Timestamp {
///         self.micros / 1000
///     }
///
///     fn is_wall_clock(&self) -> bool {
///         false
///     }
///
///     fn precision_ms(&self) -> u32 {
///         1
///     }
/// }
/// ```
///
/// Timestamps only need to be monotonic for change detection. A source that
/// jumps backwards simply delays the next poll.
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;

    /// Get precision in milliseconds
    fn precision_ms(&self) -> u32;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn is_wall_clock(&self) -> bool {
        (**self).is_wall_clock()
    }

    fn precision_ms(&self) -> u32 {
        (**self).precision_ms()
    }
}
