//! Monitor Configuration
//!
//! One struct carries everything the monitor needs at init: the calibration
//! table and tolerance, health thresholds, poll interval, telemetry
//! namespaces and the two logging switches. `Default` is the deployed robot
//! configuration; builder methods override individual fields.
//!
//! With the `serde` feature the struct deserializes from partial documents,
//! missing fields taking their defaults (see `packsense-config` for file
//! loading).
//!
//! ```rust
//! use packsense_core::{CalibrationEntry, CalibrationTable, MonitorConfig};
//!
//! // Three-pack practice set with a tighter tolerance
//! let table = CalibrationTable::new(
//!     &[
//!         CalibrationEntry::new(1, 40),
//!         CalibrationEntry::new(2, 128),
//!         CalibrationEntry::new(3, 216),
//!     ],
//!     6,
//! )?;
//!
//! let config = MonitorConfig::default()
//!     .with_calibration_table(&table)
//!     .with_poll_interval_ms(1_000)
//!     .with_publish_root("PracticePack");
//!
//! config.validate()?;
//! # Ok::<(), packsense_core::ConfigError>(())
//! ```

use alloc::string::String;

use crate::classifier::{CalibrationEntry, CalibrationTable};
use crate::constants::calibration::{DEFAULT_TOLERANCE, MAX_UNITS};
use crate::constants::telemetry::{DEFAULT_PUBLISH_ROOT, DEFAULT_SOURCE_ROOT};
use crate::constants::time::DEFAULT_POLL_INTERVAL_MS;
use crate::errors::{ConfigError, ConfigResult};
use crate::health::HealthThresholds;

/// Everything the monitor is configured with at init
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Calibration entries in ascending identity order
    pub calibration: heapless::Vec<CalibrationEntry, MAX_UNITS>,

    /// Matching tolerance in raw signal units
    pub tolerance: u8,

    /// Usage thresholds for the health tiers
    pub health: HealthThresholds,

    /// Minimum time between change-detection polls (milliseconds)
    pub poll_interval_ms: u64,

    /// Namespace root for published values
    pub publish_root: String,

    /// Namespace root of the external usage tracker (read only)
    pub source_root: String,

    /// Produce health advisory text
    pub health_warnings: bool,

    /// Log transitions, raw identity changes and mode entry
    pub log_transitions: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            calibration: CalibrationTable::standard().entries().iter().copied().collect(),
            tolerance: DEFAULT_TOLERANCE,
            health: HealthThresholds::default(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            publish_root: String::from(DEFAULT_PUBLISH_ROOT),
            source_root: String::from(DEFAULT_SOURCE_ROOT),
            health_warnings: true,
            log_transitions: true,
        }
    }
}

impl MonitorConfig {
    /// Use the entries and tolerance of an already-validated table
    pub fn with_calibration_table(mut self, table: &CalibrationTable) -> Self {
        self.calibration = table.entries().iter().copied().collect();
        self.tolerance = table.tolerance();
        self
    }

    /// Override the matching tolerance
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override the health thresholds
    pub fn with_thresholds(mut self, thresholds: HealthThresholds) -> Self {
        self.health = thresholds;
        self
    }

    /// Override the change-detection poll interval
    pub fn with_poll_interval_ms(mut self, interval_ms: u64) -> Self {
        self.poll_interval_ms = interval_ms;
        self
    }

    /// Override the namespace root for published values
    pub fn with_publish_root(mut self, root: impl Into<String>) -> Self {
        self.publish_root = root.into();
        self
    }

    /// Override the namespace root read from the usage tracker
    pub fn with_source_root(mut self, root: impl Into<String>) -> Self {
        self.source_root = root.into();
        self
    }

    /// Enable or disable health advisory text
    pub fn with_health_warnings(mut self, enabled: bool) -> Self {
        self.health_warnings = enabled;
        self
    }

    /// Enable or disable transition and mode-entry logging
    pub fn with_transition_logging(mut self, enabled: bool) -> Self {
        self.log_transitions = enabled;
        self
    }

    /// Build the calibration table described by this config
    pub fn calibration_table(&self) -> ConfigResult<CalibrationTable> {
        CalibrationTable::new(&self.calibration, self.tolerance)
    }

    /// Check every field; the monitor refuses to init on error
    pub fn validate(&self) -> ConfigResult<()> {
        self.calibration_table()?;
        self.health.validate()?;

        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.publish_root.trim().is_empty() {
            return Err(ConfigError::EmptyNamespace { field: "publish_root" });
        }
        if self.source_root.trim().is_empty() {
            return Err(ConfigError::EmptyNamespace { field: "source_root" });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_deployed_configuration() {
        let config = MonitorConfig::default();

        assert_eq!(config.calibration.len(), 6);
        assert_eq!(config.calibration[0], CalibrationEntry::new(1, 21));
        assert_eq!(config.calibration[5], CalibrationEntry::new(6, 233));
        assert_eq!(config.tolerance, 10);
        assert_eq!(config.health, HealthThresholds { warning: 20, critical: 40 });
        assert_eq!(config.poll_interval_ms, 2000);
        assert_eq!(config.publish_root, "Battery");
        assert_eq!(config.source_root, "BatteryManager");
        assert!(config.health_warnings);
        assert!(config.log_transitions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let table = CalibrationTable::new(&[CalibrationEntry::new(1, 128)], 4).unwrap();
        let config = MonitorConfig::default()
            .with_calibration_table(&table)
            .with_thresholds(HealthThresholds { warning: 5, critical: 9 })
            .with_source_root("Tracker")
            .with_health_warnings(false)
            .with_transition_logging(false);

        assert_eq!(config.calibration.len(), 1);
        assert_eq!(config.tolerance, 4);
        assert_eq!(config.calibration_table().unwrap(), table);
        assert_eq!(config.health.critical, 9);
        assert_eq!(config.source_root, "Tracker");
        assert!(!config.health_warnings);
        assert!(!config.log_transitions);
    }

    #[test]
    fn validation_errors() {
        let zero_poll = MonitorConfig::default().with_poll_interval_ms(0);
        assert_eq!(zero_poll.validate(), Err(ConfigError::ZeroPollInterval));

        let blank_root = MonitorConfig::default().with_publish_root("  ");
        assert_eq!(
            blank_root.validate(),
            Err(ConfigError::EmptyNamespace { field: "publish_root" })
        );

        let inverted = MonitorConfig::default()
            .with_thresholds(HealthThresholds { warning: 40, critical: 20 });
        assert!(matches!(inverted.validate(), Err(ConfigError::InvertedThresholds { .. })));

        let mut empty = MonitorConfig::default();
        empty.calibration.clear();
        assert_eq!(empty.validate(), Err(ConfigError::EmptyCalibration));
    }

    #[test]
    fn overlapping_windows_are_still_valid() {
        // Tolerance 30 makes neighbouring windows overlap; that is a warning, not an error
        let config = MonitorConfig::default().with_tolerance(30);
        assert!(config.validate().is_ok());
        assert!(!config.calibration_table().unwrap().is_well_separated());
    }
}
