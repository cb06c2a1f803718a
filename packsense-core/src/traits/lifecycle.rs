//! Host Lifecycle Interface
//!
//! The robot runtime owns the program lifecycle. It constructs a module once,
//! calls it every control-loop tick, and tells it when the robot changes
//! mode. `LoopModule` is that contract; the host never needs to know what the
//! module does inside a tick.

use core::fmt;

use crate::traits::time::TimeSource;

/// Operating modes the host can enter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RobotMode {
    /// Robot disabled, outputs off
    Disabled,
    /// Autonomous period
    Autonomous,
    /// Operator-controlled period
    Teleop,
    /// Test mode
    Test,
}

impl RobotMode {
    /// Short label used as a log prefix
    pub const fn label(&self) -> &'static str {
        match self {
            RobotMode::Disabled => "Robot",
            RobotMode::Autonomous => "Auto",
            RobotMode::Teleop => "Teleop",
            RobotMode::Test => "Test Mode",
        }
    }
}

impl fmt::Display for RobotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RobotMode::Disabled => "disabled",
            RobotMode::Autonomous => "autonomous",
            RobotMode::Teleop => "teleop",
            RobotMode::Test => "test",
        };
        f.write_str(name)
    }
}

/// A module driven by the host's fixed-period callback
///
/// Implementations must not block: the sensor read and telemetry writes are
/// assumed to be bounded-latency calls, and nothing inside a tick suspends.
pub trait LoopModule {
    /// Per-tick output handed back to the host
    type Report;

    /// Run one control-loop tick on a fresh duty-cycle sample
    fn tick<C: TimeSource + ?Sized>(&mut self, sample: f64, clock: &C) -> Self::Report;

    /// Called once whenever the host enters `mode`
    fn on_mode_enter(&mut self, mode: RobotMode);
}
