//! Time-Related Constants
//!
//! Intervals used by the change detector and the control loop.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

// ===== CONTROL LOOP =====

/// Nominal host control-loop period (milliseconds).
///
/// The robot runtime calls the periodic hook at 50 Hz.
pub const CONTROL_LOOP_PERIOD_MS: u64 = 20;

/// Default change-detection poll interval (milliseconds).
///
/// Two seconds covers connector bounce while a pack is seated or pulled,
/// so a single insertion yields one transition instead of a burst.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2 * MS_PER_SECOND;
