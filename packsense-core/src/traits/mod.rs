//! Core Traits and Abstractions for Packsense
//!
//! Every external collaborator of the monitor sits behind one of these
//! traits, so the whole tick can run against fakes in tests.
//!
//! ## Module Organization
//!
//! - [`time`] - Time source abstraction for the poll interval
//! - [`telemetry`] - Typed key-value access to the dashboard store
//! - [`signal`] - Duty-cycle input from the identity sensor
//! - [`lifecycle`] - Host-facing tick and mode-entry interface
//!
//! ## Usage Example
//!
//! ```rust
//! use packsense_core::traits::{LoopModule, RobotMode, TelemetryStore};
//! use packsense_core::{MemoryTelemetry, MonitorConfig, PackMonitor};
//! use packsense_core::time::FixedTime;
//!
//! let mut monitor = PackMonitor::init(MonitorConfig::default(), MemoryTelemetry::new())?;
//! let clock = FixedTime::new(0);
//!
//! // Host calls through the lifecycle trait
//! LoopModule::tick(&mut monitor, 0.0, &clock);
//! monitor.on_mode_enter(RobotMode::Autonomous);
//!
//! assert!(!monitor.store().get_boolean("Battery/Installed", true));
//! # Ok::<(), packsense_core::ConfigError>(())
//! ```

pub mod lifecycle;
pub mod signal;
pub mod telemetry;
pub mod time;

pub use lifecycle::{LoopModule, RobotMode};
pub use signal::SignalSource;
pub use telemetry::TelemetryStore;
pub use time::TimeSource;
