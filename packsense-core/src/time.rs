//! Time management for the control loop
//!
//! The host owns the clock. Each tick it hands the monitor something that
//! implements [`TimeSource`], and the change detector measures its poll
//! interval against that. Provided sources:
//! - [`SteadyClock`] (std): monotonic milliseconds since the clock was created
//! - [`FixedTime`]: manually stepped, for tests and replayed traces

pub use crate::traits::time::TimeSource;

/// Timestamp in milliseconds since an arbitrary, source-defined epoch
pub type Timestamp = u64;

/// Milliseconds elapsed from `earlier` to `later`, zero if the clock went backwards
pub fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

/// Monotonic clock backed by `std::time::Instant` (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SteadyClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SteadyClock {
    /// Start a clock reading zero now
    pub fn new() -> Self {
        Self { origin: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for SteadyClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for SteadyClock {
    fn now(&self) -> Timestamp {
        self.origin.elapsed().as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }

    fn precision_ms(&self) -> u32 {
        1
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a source frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Step forward by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }

    fn precision_ms(&self) -> u32 {
        1
    }
}
