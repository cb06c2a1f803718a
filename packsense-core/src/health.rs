//! Health Evaluator
//!
//! Grades a pack by its usage count alone. The count is kept by an external
//! tracker and read back through telemetry; this module only compares it to
//! two fixed thresholds:
//!
//! ```text
//! usage:  0 ─────────── warning ─────────── critical ──────────▶
//! tier:       Nominal            Warning             Critical
//! ```
//!
//! Each evaluation also yields the advisory line shown on the dashboard and
//! in the operator log. Nominal packs get an empty advisory, as does every
//! pack when advisories are switched off.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::constants::health::{
    HEALTH_LEVEL_CRITICAL, HEALTH_LEVEL_NOMINAL, HEALTH_LEVEL_WARNING,
    USAGE_CRITICAL_THRESHOLD, USAGE_WARNING_THRESHOLD,
};
use crate::constants::telemetry::UNIT_NAME_PREFIX;
use crate::errors::{ConfigError, ConfigResult};

/// Coarse wear classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthTier {
    /// Below the warning threshold
    Nominal,
    /// At or above warning, below critical
    Warning,
    /// At or above critical
    Critical,
}

impl HealthTier {
    /// Numeric level published to telemetry (0, 1, 2)
    pub const fn level(&self) -> u8 {
        match self {
            HealthTier::Nominal => HEALTH_LEVEL_NOMINAL,
            HealthTier::Warning => HEALTH_LEVEL_WARNING,
            HealthTier::Critical => HEALTH_LEVEL_CRITICAL,
        }
    }

    /// Inverse of [`HealthTier::level`]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            HEALTH_LEVEL_NOMINAL => Some(HealthTier::Nominal),
            HEALTH_LEVEL_WARNING => Some(HealthTier::Warning),
            HEALTH_LEVEL_CRITICAL => Some(HealthTier::Critical),
            _ => None,
        }
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            HealthTier::Nominal => "nominal",
            HealthTier::Warning => "warning",
            HealthTier::Critical => "critical",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for HealthTier {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

/// Usage counts at which the warning and critical tiers begin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthThresholds {
    /// First usage count graded Warning
    pub warning: u32,
    /// First usage count graded Critical
    pub critical: u32,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            warning: USAGE_WARNING_THRESHOLD,
            critical: USAGE_CRITICAL_THRESHOLD,
        }
    }
}

impl HealthThresholds {
    /// Create thresholds, rejecting warning > critical
    pub fn new(warning: u32, critical: u32) -> ConfigResult<Self> {
        let thresholds = Self { warning, critical };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check the ordering of the two thresholds
    pub fn validate(&self) -> ConfigResult<()> {
        if self.warning > self.critical {
            return Err(ConfigError::InvertedThresholds {
                warning: self.warning,
                critical: self.critical,
            });
        }
        Ok(())
    }

    /// Grade a usage count
    pub fn tier(&self, usage_count: u32) -> HealthTier {
        if usage_count < self.warning {
            HealthTier::Nominal
        } else if usage_count < self.critical {
            HealthTier::Warning
        } else {
            HealthTier::Critical
        }
    }
}

/// Outcome of one health evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthReport {
    /// Graded tier
    pub tier: HealthTier,
    /// Advisory line, empty when there is nothing to say
    pub advisory: String,
}

impl HealthReport {
    /// Whether an advisory should be shown
    pub fn has_advisory(&self) -> bool {
        !self.advisory.is_empty()
    }
}

/// Health evaluator with fixed thresholds
#[derive(Debug, Clone)]
pub struct HealthEvaluator {
    thresholds: HealthThresholds,
    advisories: bool,
}

impl Default for HealthEvaluator {
    fn default() -> Self {
        Self::new(HealthThresholds::default())
    }
}

impl HealthEvaluator {
    /// Create an evaluator with advisories enabled
    pub fn new(thresholds: HealthThresholds) -> Self {
        Self { thresholds, advisories: true }
    }

    /// Enable or disable advisory text (tiers are still graded)
    pub fn with_advisories(mut self, enabled: bool) -> Self {
        self.advisories = enabled;
        self
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> HealthThresholds {
        self.thresholds
    }

    /// Grade `usage_count` for the pack with `identity`
    pub fn evaluate(&self, usage_count: u32, identity: u8) -> HealthReport {
        let tier = self.thresholds.tier(usage_count);
        let advisory = if self.advisories {
            advisory_text(tier, identity)
        } else {
            String::new()
        };

        HealthReport { tier, advisory }
    }
}

/// Advisory line for a tier
pub fn advisory_text(tier: HealthTier, identity: u8) -> String {
    match tier {
        HealthTier::Nominal => String::new(),
        HealthTier::Warning => format!("{} {} has high usage", UNIT_NAME_PREFIX, identity),
        HealthTier::Critical => {
            format!("{} {} needs replacement soon!", UNIT_NAME_PREFIX, identity)
        }
    }
}
