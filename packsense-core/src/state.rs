//! Per-Tick State
//!
//! [`ObservedState`] is rebuilt from the fresh sample on every tick and never
//! outlives it. [`UsageStats`] is a read-only view of figures maintained by
//! the external usage tracker, read back through the telemetry store under
//! the source namespace described by [`SourceKeys`].

use alloc::format;
use alloc::string::String;

use crate::constants::calibration::NO_UNIT;
use crate::constants::telemetry::{
    DEFAULT_RUNTIME_DISPLAY, NO_UNIT_NAME, SOURCE_INSTALLED, SOURCE_NAME,
    SOURCE_SESSION_TIME, SOURCE_TOTAL_TIME, SOURCE_USAGE_COUNT, UNIT_NAME_PREFIX,
};
use crate::health::HealthReport;
use crate::traits::telemetry::TelemetryStore;

/// Fully qualified keys of the usage tracker's namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKeys {
    /// Display name of the current pack
    pub name: String,
    /// Cumulative usage count
    pub usage_count: String,
    /// Formatted lifetime runtime
    pub total_runtime: String,
    /// Formatted runtime since power-on
    pub session_runtime: String,
    /// Installation flag
    pub installed: String,
}

impl SourceKeys {
    /// Keys under `root`
    pub fn new(root: &str) -> Self {
        Self {
            name: format!("{}/{}", root, SOURCE_NAME),
            usage_count: format!("{}/{}", root, SOURCE_USAGE_COUNT),
            total_runtime: format!("{}/{}", root, SOURCE_TOTAL_TIME),
            session_runtime: format!("{}/{}", root, SOURCE_SESSION_TIME),
            installed: format!("{}/{}", root, SOURCE_INSTALLED),
        }
    }
}

/// Usage figures kept by the external tracker
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageStats {
    /// Number of recorded uses
    pub usage_count: u32,
    /// Lifetime runtime, preformatted
    pub total_runtime: String,
    /// Runtime this session, preformatted
    pub session_runtime: String,
}

impl Default for UsageStats {
    fn default() -> Self {
        Self {
            usage_count: 0,
            total_runtime: String::from(DEFAULT_RUNTIME_DISPLAY),
            session_runtime: String::from(DEFAULT_RUNTIME_DISPLAY),
        }
    }
}

impl UsageStats {
    /// Read the tracker's figures, falling back to defaults for missing keys
    pub fn read<S: TelemetryStore + ?Sized>(store: &S, keys: &SourceKeys) -> Self {
        Self {
            usage_count: usage_from_number(store.get_number(&keys.usage_count, 0.0)),
            total_runtime: store.get_string(&keys.total_runtime, DEFAULT_RUNTIME_DISPLAY),
            session_runtime: store.get_string(&keys.session_runtime, DEFAULT_RUNTIME_DISPLAY),
        }
    }
}

/// Convert a telemetry number into a usage count
///
/// Negative and non-finite values read as 0; large values saturate.
pub fn usage_from_number(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

/// Default display name for an identity
pub fn default_display_name(identity: u8) -> String {
    if identity == NO_UNIT {
        String::from(NO_UNIT_NAME)
    } else {
        format!("{} {}", UNIT_NAME_PREFIX, identity)
    }
}

/// Classification result for the current tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservedState {
    /// Scaled sensor reading
    pub raw_signal: u8,
    /// Classified identity, 0 when nothing matched
    pub identity: u8,
    /// Identity is known and the tracker confirms installation
    pub present: bool,
    /// Name shown on the dashboard
    pub display_name: String,
}

impl Default for ObservedState {
    fn default() -> Self {
        Self {
            raw_signal: 0,
            identity: NO_UNIT,
            present: false,
            display_name: String::from(NO_UNIT_NAME),
        }
    }
}

impl ObservedState {
    /// Combine a classification with the tracker's view of the pack
    pub fn observe<S: TelemetryStore + ?Sized>(
        raw_signal: u8,
        identity: u8,
        store: &S,
        keys: &SourceKeys,
    ) -> Self {
        if identity == NO_UNIT {
            return Self { raw_signal, ..Self::default() };
        }

        let display_name = store.get_string(&keys.name, &default_display_name(identity));
        let present = store.get_boolean(&keys.installed, true);

        Self { raw_signal, identity, present, display_name }
    }
}

/// Health output for a present pack
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitHealth {
    /// Pass-through usage figures
    pub usage: UsageStats,
    /// Graded tier and advisory
    pub health: HealthReport,
}
