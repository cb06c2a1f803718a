//! Constants for Packsense Core
//!
//! Centralized, documented defaults. Everything here is the value shipped on
//! the robot; a [`crate::MonitorConfig`] can override most of it.
//!
//! ## Organization
//!
//! - **Calibration**: signal scale, tolerance and the deployed pack table
//! - **Health**: usage thresholds and published health levels
//! - **Telemetry**: namespace roots, keys and display defaults
//! - **Time**: poll and control-loop intervals

/// Signal scale, tolerance and the deployed calibration table.
pub mod calibration;

/// Usage thresholds for health tiers.
pub mod health;

/// Telemetry namespaces, keys and display defaults.
pub mod telemetry;

/// Poll and control-loop intervals.
pub mod time;

// Re-export commonly used constants for convenience
pub use calibration::{
    DEFAULT_TOLERANCE, MAX_UNITS, NO_UNIT, SIGNAL_FULL_SCALE, STANDARD_SIGNALS,
};

pub use health::{USAGE_CRITICAL_THRESHOLD, USAGE_WARNING_THRESHOLD};

pub use telemetry::{DEFAULT_PUBLISH_ROOT, DEFAULT_SOURCE_ROOT};

pub use time::{CONTROL_LOOP_PERIOD_MS, DEFAULT_POLL_INTERVAL_MS, MS_PER_SECOND};
