//! Config Document Loading
//!
//! Parses a JSON config document and resolves it against the profile
//! registry into a validated [`MonitorConfig`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use packsense_core::{CalibrationEntry, CalibrationTable, HealthThresholds, MonitorConfig};

use crate::profiles::ProfileRegistry;
use crate::LoadError;

/// Config file contents before resolution; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigDocument {
    /// Named calibration profile to start from
    pub profile: Option<String>,
    /// Explicit calibration entries, replacing the profile's
    pub calibration: Option<Vec<CalibrationEntry>>,
    /// Matching tolerance override
    pub tolerance: Option<u8>,
    /// Health threshold override
    pub health: Option<HealthThresholds>,
    /// Poll interval override (milliseconds)
    pub poll_interval_ms: Option<u64>,
    /// Published namespace override
    pub publish_root: Option<String>,
    /// Usage tracker namespace override
    pub source_root: Option<String>,
    /// Advisory text switch
    pub health_warnings: Option<bool>,
    /// Transition logging switch
    pub log_transitions: Option<bool>,
}

impl ConfigDocument {
    /// Parse a document without resolving it
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply the document on top of the deployed defaults
    pub fn resolve(self, registry: &ProfileRegistry) -> Result<MonitorConfig, LoadError> {
        let mut config = MonitorConfig::default();

        if let Some(name) = &self.profile {
            let profile = registry.get(name)?;
            config = config.with_calibration_table(&profile.table);
        }

        match (self.calibration, self.tolerance) {
            (Some(entries), tolerance) => {
                let tolerance = tolerance.unwrap_or(config.tolerance);
                let table = CalibrationTable::new(&entries, tolerance)?;
                config = config.with_calibration_table(&table);
            }
            (None, Some(tolerance)) => config = config.with_tolerance(tolerance),
            (None, None) => {}
        }

        if let Some(health) = self.health {
            config = config.with_thresholds(health);
        }
        if let Some(interval) = self.poll_interval_ms {
            config = config.with_poll_interval_ms(interval);
        }
        if let Some(root) = self.publish_root {
            config = config.with_publish_root(root);
        }
        if let Some(root) = self.source_root {
            config = config.with_source_root(root);
        }
        if let Some(enabled) = self.health_warnings {
            config = config.with_health_warnings(enabled);
        }
        if let Some(enabled) = self.log_transitions {
            config = config.with_transition_logging(enabled);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Parse and resolve a JSON config document
pub fn from_json_str(json: &str, registry: &ProfileRegistry) -> Result<MonitorConfig, LoadError> {
    ConfigDocument::from_json_str(json)?.resolve(registry)
}

/// Load a config file using only the built-in profiles
pub fn load_config(path: impl AsRef<Path>) -> Result<MonitorConfig, LoadError> {
    load_config_with(path, &ProfileRegistry::new())
}

/// Load a config file, resolving profile names against `registry`
pub fn load_config_with(
    path: impl AsRef<Path>,
    registry: &ProfileRegistry,
) -> Result<MonitorConfig, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let config = from_json_str(&json, registry)?;
    log::info!(
        "loaded monitor config from {}: {} packs, poll {} ms",
        path.display(),
        config.calibration.len(),
        config.poll_interval_ms
    );
    Ok(config)
}
