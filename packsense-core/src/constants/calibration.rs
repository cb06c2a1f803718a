//! Identity Signal Calibration
//!
//! The pack carries a small microcontroller that drives a fixed PWM duty
//! cycle on its identity line, one level per pack. These constants describe
//! that encoding as seen by the robot's duty-cycle input.

// ===== SIGNAL SCALE =====

/// Full-scale raw signal value.
///
/// The pack side writes an 8-bit analogWrite level (0-255), so the measured
/// duty fraction is mapped back onto the same scale before matching.
pub const SIGNAL_FULL_SCALE: u8 = 255;

/// Default matching tolerance (raw signal units).
///
/// ±10 counts absorbs duty-cycle measurement jitter while keeping the
/// windows of adjacent packs (≈42 counts apart) disjoint.
pub const DEFAULT_TOLERANCE: u8 = 10;

/// Identity reported when no calibration entry matches.
pub const NO_UNIT: u8 = 0;

// ===== CAPACITY =====

/// Maximum number of calibration entries a table can hold.
///
/// Fixed so the table lives inline without heap allocation. With the default
/// tolerance an 8-bit scale fits at most 12 disjoint windows, so 16 leaves
/// headroom for tighter tolerances.
pub const MAX_UNITS: usize = 16;

// ===== DEPLOYED PACK SET =====

/// Expected raw signal for each deployed pack, indexed by identity − 1.
///
/// Six packs spread evenly across the scale: 21, 64, 106, 148, 191, 233.
pub const STANDARD_SIGNALS: [u8; 6] = [21, 64, 106, 148, 191, 233];

/// Number of packs in the deployed set.
pub const STANDARD_UNIT_COUNT: usize = STANDARD_SIGNALS.len();
