//! Error Types for Monitor Configuration
//!
//! The tick path never fails: a missing calibration match is the normal
//! "no pack" outcome and a missing telemetry key falls back to its default.
//! Errors only exist when a configuration is built or loaded, so every
//! variant here describes a configuration defect.
//!
//! Like the rest of the core, errors stay small and `Copy`. Reasons are
//! `&'static str`, never heap strings.
//!
//! ```rust
//! use packsense_core::{ConfigError, MonitorConfig};
//!
//! let config = MonitorConfig::default().with_poll_interval_ms(0);
//! assert!(matches!(config.validate(), Err(ConfigError::ZeroPollInterval)));
//! ```
//!
//! Overlapping calibration windows are *not* an error. They are reported as a
//! warning at init and resolved by first match in ascending identity order.

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Calibration table has no entries
    #[error("Calibration table is empty")]
    EmptyCalibration,

    /// More calibration entries than the fixed table capacity
    #[error("Calibration table has {count} entries, capacity is {capacity}")]
    TooManyUnits {
        /// Number of entries supplied
        count: usize,
        /// Maximum number of entries the table can hold
        capacity: usize,
    },

    /// Identity 0 is reserved for "no unit"
    #[error("Identity 0 is reserved for no unit")]
    ReservedIdentity,

    /// Identities must be strictly ascending in table order
    #[error("Identity {identity} does not follow {previous} in ascending order")]
    UnorderedIdentity {
        /// Identity of the preceding entry
        previous: u8,
        /// Offending identity
        identity: u8,
    },

    /// Warning threshold above critical threshold
    #[error("Warning threshold {warning} exceeds critical threshold {critical}")]
    InvertedThresholds {
        /// Usage count at which the warning tier starts
        warning: u32,
        /// Usage count at which the critical tier starts
        critical: u32,
    },

    /// Change detection would poll on every tick with no debounce
    #[error("Poll interval must be greater than zero")]
    ZeroPollInterval,

    /// A telemetry namespace root is blank
    #[error("Telemetry namespace '{field}' is empty")]
    EmptyNamespace {
        /// Which namespace field was blank
        field: &'static str,
    },
}

#[cfg(feature = "embedded")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyCalibration =>
                defmt::write!(fmt, "Calibration table empty"),
            Self::TooManyUnits { count, capacity } =>
                defmt::write!(fmt, "{} units, capacity {}", count, capacity),
            Self::ReservedIdentity =>
                defmt::write!(fmt, "Identity 0 reserved"),
            Self::UnorderedIdentity { previous, identity } =>
                defmt::write!(fmt, "Identity {} after {}", identity, previous),
            Self::InvertedThresholds { warning, critical } =>
                defmt::write!(fmt, "Warning {} > critical {}", warning, critical),
            Self::ZeroPollInterval =>
                defmt::write!(fmt, "Zero poll interval"),
            Self::EmptyNamespace { field } =>
                defmt::write!(fmt, "Empty namespace {}", field),
        }
    }
}
