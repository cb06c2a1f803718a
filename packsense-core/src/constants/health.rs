//! Pack Health Thresholds
//!
//! Health is graded purely on how many times a pack has been used, as counted
//! by the external usage tracker.

/// Usage count at which a pack enters the warning tier.
///
/// Around 20 match cycles a competition pack starts losing capacity under
/// peak current draw.
pub const USAGE_WARNING_THRESHOLD: u32 = 20;

/// Usage count at which a pack enters the critical tier.
///
/// Packs past 40 cycles should be rotated out of match use.
pub const USAGE_CRITICAL_THRESHOLD: u32 = 40;

/// Numeric health level published for the nominal tier.
pub const HEALTH_LEVEL_NOMINAL: u8 = 0;

/// Numeric health level published for the warning tier.
pub const HEALTH_LEVEL_WARNING: u8 = 1;

/// Numeric health level published for the critical tier.
pub const HEALTH_LEVEL_CRITICAL: u8 = 2;
