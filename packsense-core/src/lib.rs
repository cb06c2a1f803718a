//! Core engine for Packsense
//!
//! Identifies which of a fixed set of swappable power packs is connected to a
//! machine by decoding a single PWM-encoded identity signal, then derives a
//! small state for the dashboard and the operator log.
//!
//! Each control-loop tick runs four pieces in order:
//! - [`classifier`] maps the scaled duty cycle onto a calibration table
//! - [`publisher`] pushes the latest classification to the telemetry store
//! - [`change`] polls on a slower cadence and emits debounced transition events
//! - [`health`] turns the externally-kept usage counter into a health tier
//!
//! Key constraints:
//! - Runs inside a fixed-period host callback, never blocks
//! - No internal threads, timers or global state
//! - Missing telemetry keys fall back to defaults, the tick path never fails
//!
//! ```no_run
//! use packsense_core::{MemoryTelemetry, MonitorConfig, PackMonitor};
//! use packsense_core::time::FixedTime;
//!
//! let mut monitor = PackMonitor::init(MonitorConfig::default(), MemoryTelemetry::new())?;
//! let clock = FixedTime::new(0);
//!
//! // Duty cycle 0.0824 decodes to raw signal 21, the first pack
//! let report = monitor.tick(0.0824, &clock);
//! assert_eq!(report.observed.identity, 1);
//! # Ok::<(), packsense_core::ConfigError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod change;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod health;
pub mod monitor;
pub mod publisher;
pub mod state;
pub mod telemetry;
pub mod time;
pub mod traits;

// Public API
pub use change::{ChangeDetector, ConfirmedState};
pub use classifier::{scale_fraction, CalibrationEntry, CalibrationTable};
pub use config::MonitorConfig;
pub use errors::{ConfigError, ConfigResult};
pub use events::PackEvent;
pub use health::{HealthEvaluator, HealthReport, HealthThresholds, HealthTier};
pub use monitor::{PackMonitor, StatusReport, TickReport};
pub use publisher::StatePublisher;
pub use state::{ObservedState, UnitHealth, UsageStats};
pub use telemetry::{MemoryTelemetry, TelemetryValue};
pub use traits::{LoopModule, RobotMode, SignalSource, TelemetryStore, TimeSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
