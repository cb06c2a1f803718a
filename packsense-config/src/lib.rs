//! Configuration Files for Packsense
//!
//! ## Overview
//!
//! `packsense-core` takes a [`MonitorConfig`] at init and never touches the
//! filesystem. This crate is the std-side companion that reads that config
//! from JSON and keeps a registry of named calibration profiles, so a team
//! can move between pack sets (competition, practice, bench) without
//! recompiling.
//!
//! ## Config Documents
//!
//! Every field is optional; anything left out keeps the deployed default.
//!
//! ```json
//! {
//!   "profile": "default",
//!   "tolerance": 8,
//!   "health": { "warning": 25, "critical": 50 },
//!   "poll_interval_ms": 1000,
//!   "publish_root": "Battery",
//!   "health_warnings": true
//! }
//! ```
//!
//! Resolution order: defaults, then the named profile's calibration, then
//! explicit `calibration` / `tolerance`, then the remaining fields. The
//! result is checked with [`MonitorConfig::validate`] before it is returned.
//!
//! ## Profiles
//!
//! A profile is a named calibration table. The registry always contains
//! `default` (the six deployed packs); more can be loaded from a profiles
//! file:
//!
//! ```json
//! {
//!   "profiles": [
//!     {
//!       "name": "practice",
//!       "description": "Three-pack practice set",
//!       "tolerance": 6,
//!       "entries": [
//!         { "identity": 1, "expected_signal": 40 },
//!         { "identity": 2, "expected_signal": 128 },
//!         { "identity": 3, "expected_signal": 216 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use packsense_config::{from_json_str, ProfileRegistry};
//!
//! let registry = ProfileRegistry::new();
//! let config = from_json_str(r#"{ "poll_interval_ms": 500 }"#, &registry)?;
//!
//! assert_eq!(config.poll_interval_ms, 500);
//! assert_eq!(config.calibration.len(), 6);
//! # Ok::<(), packsense_config::LoadError>(())
//! ```

use packsense_core::ConfigError;

pub mod loader;
pub mod profiles;

pub use loader::{from_json_str, load_config, load_config_with, ConfigDocument};
pub use packsense_core::MonitorConfig;
pub use profiles::{CalibrationProfile, ProfileDocument, ProfileRegistry, DEFAULT_PROFILE};

/// Errors raised while loading configuration
#[derive(Debug, thiserror_no_std::Error)]
pub enum LoadError {
    /// File could not be read
    #[error("Failed to read {path}: {reason}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        reason: String,
    },

    /// Document is not valid JSON or has the wrong shape
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Document parsed but describes an invalid configuration
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),

    /// Config names a profile the registry does not have
    #[error("Unknown calibration profile: {0}")]
    UnknownProfile(String),

    /// Two profiles share a name
    #[error("Duplicate calibration profile: {0}")]
    DuplicateProfile(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(error: serde_json::Error) -> Self {
        LoadError::Parse(error.to_string())
    }
}
