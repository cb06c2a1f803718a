//! Telemetry Namespaces and Keys
//!
//! Keys are built as `<root>/<suffix>`. The publish root is owned by this
//! module; the source root belongs to the external usage tracker and is only
//! ever read.

// ===== NAMESPACE ROOTS =====

/// Default root for values this module publishes.
pub const DEFAULT_PUBLISH_ROOT: &str = "Battery";

/// Default root written by the external usage tracker.
pub const DEFAULT_SOURCE_ROOT: &str = "BatteryManager";

// ===== PUBLISHED KEYS =====

/// Display name of the current pack.
pub const KEY_NAME: &str = "Name";

/// Identity number (0 = none).
pub const KEY_NUMBER: &str = "Number";

/// Raw 0-255 signal.
pub const KEY_RAW_SIGNAL: &str = "PWM Value";

/// Presence flag.
pub const KEY_INSTALLED: &str = "Installed";

/// Usage count pass-through.
pub const KEY_USAGE_COUNT: &str = "Usage Count";

/// Total runtime pass-through.
pub const KEY_TOTAL_RUNTIME: &str = "Total Runtime";

/// Session runtime pass-through.
pub const KEY_SESSION_RUNTIME: &str = "Session Runtime";

/// Health level (0 nominal, 1 warning, 2 critical).
pub const KEY_HEALTH_LEVEL: &str = "Health Level";

/// Health advisory text.
pub const KEY_WARNING: &str = "Warning";

// ===== SOURCE KEYS =====

/// Display name the tracker assigns to the confirmed pack.
pub const SOURCE_NAME: &str = "CurrentBattery/Name";

/// Usage counter maintained by the tracker.
pub const SOURCE_USAGE_COUNT: &str = "CurrentBattery/UsageCount";

/// Formatted total runtime.
pub const SOURCE_TOTAL_TIME: &str = "CurrentBattery/TotalTimeFormatted";

/// Formatted session runtime.
pub const SOURCE_SESSION_TIME: &str = "CurrentBattery/SessionTimeFormatted";

/// Tracker's own installed flag.
pub const SOURCE_INSTALLED: &str = "BatteryInstalled";

// ===== DEFAULTS =====

/// Display name when nothing is connected.
pub const NO_UNIT_NAME: &str = "No Battery";

/// Prefix of the fallback display name, followed by the identity number.
pub const UNIT_NAME_PREFIX: &str = "Battery";

/// Runtime string shown when the tracker has not published one.
pub const DEFAULT_RUNTIME_DISPLAY: &str = "0h 0m 0s";
