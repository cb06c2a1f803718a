//! Pack Monitor
//!
//! Owns every piece of cross-tick state and wires the four components
//! together. The host builds one monitor with [`PackMonitor::init`], calls
//! [`PackMonitor::tick`] from its periodic callback and
//! [`PackMonitor::on_mode_enter`] on mode changes.
//!
//! ## Tick order
//!
//! 1. Scale the sample and classify it against the calibration table
//! 2. Build the observed state (tracker confirms presence, supplies the name)
//! 3. Read usage figures and grade health when a pack is present
//! 4. Publish to the telemetry store
//! 5. Offer the observation to the change detector
//!
//! Nothing in the tick path fails. Missing telemetry falls back to defaults
//! and an unknown signal is simply "no pack".

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::change::{ChangeDetector, ConfirmedState};
use crate::classifier::CalibrationTable;
use crate::config::MonitorConfig;
use crate::constants::calibration::NO_UNIT;
use crate::constants::telemetry::DEFAULT_RUNTIME_DISPLAY;
use crate::errors::ConfigResult;
use crate::events::PackEvent;
use crate::health::{HealthEvaluator, HealthTier};
use crate::publisher::StatePublisher;
use crate::state::{ObservedState, SourceKeys, UnitHealth, UsageStats};
use crate::traits::lifecycle::{LoopModule, RobotMode};
use crate::traits::signal::SignalSource;
use crate::traits::telemetry::TelemetryStore;
use crate::traits::time::TimeSource;

/// What one tick produced
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Classification of this tick's sample
    pub observed: ObservedState,
    /// Usage and health, present packs only
    pub unit: Option<UnitHealth>,
    /// Transition confirmed by this tick's poll, if any
    pub event: Option<PackEvent>,
    /// Raw identity differs from the previous tick
    pub identity_changed: bool,
}

/// Snapshot of the current pack for operator logs
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    /// Display name
    pub name: String,
    /// Identity (0 when none)
    pub number: u8,
    /// Raw scaled signal
    pub raw_signal: u8,
    /// Presence flag
    pub installed: bool,
    /// Usage and health when installed
    pub unit: Option<UnitHealth>,
}

impl StatusReport {
    /// Report rendered as log lines
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(String::from("========== Battery Status =========="));
        lines.push(format!("Battery: {}", self.name));
        lines.push(format!("Number: {}", self.number));
        lines.push(format!("PWM Value: {}", self.raw_signal));
        lines.push(format!("Installed: {}", self.installed));

        if let Some(unit) = self.unit.as_ref().filter(|_| self.installed) {
            lines.push(format!("Usage Count: {}", unit.usage.usage_count));
            lines.push(format!("Total Runtime: {}", unit.usage.total_runtime));
            lines.push(format!("Session Runtime: {}", unit.usage.session_runtime));
            lines.push(format!("Health Level: {}", unit.health.tier.level()));
            if unit.health.has_advisory() {
                lines.push(format!("Warning: {}", unit.health.advisory));
            }
        }

        lines.push(String::from("===================================="));
        lines
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Power-pack identification monitor
pub struct PackMonitor<S: TelemetryStore> {
    config: MonitorConfig,
    table: CalibrationTable,
    evaluator: HealthEvaluator,
    detector: ChangeDetector,
    publisher: StatePublisher,
    source_keys: SourceKeys,
    store: S,
    observed: ObservedState,
    unit: Option<UnitHealth>,
    last_event: Option<PackEvent>,
}

impl<S: TelemetryStore> PackMonitor<S> {
    /// Validate `config` and build a monitor publishing into `store`
    pub fn init(config: MonitorConfig, store: S) -> ConfigResult<Self> {
        config.validate()?;
        let table = config.calibration_table()?;

        log_info!(
            "pack monitor ready: {} packs, tolerance {}, poll every {} ms",
            table.len(),
            table.tolerance(),
            config.poll_interval_ms
        );
        for entry in table.entries() {
            log_info!("  pack {} -> signal ~{}", entry.identity, entry.expected_signal);
        }
        for (a, b) in table.overlapping_pairs() {
            log_warn!(
                "calibration windows overlap: pack {} (~{}) and pack {} (~{}), pack {} wins",
                a.identity,
                a.expected_signal,
                b.identity,
                b.expected_signal,
                a.identity
            );
        }

        let evaluator = HealthEvaluator::new(config.health).with_advisories(config.health_warnings);
        let detector = ChangeDetector::new(config.poll_interval_ms);
        let publisher = StatePublisher::new(&config.publish_root);
        let source_keys = SourceKeys::new(&config.source_root);

        Ok(Self {
            config,
            table,
            evaluator,
            detector,
            publisher,
            source_keys,
            store,
            observed: ObservedState::default(),
            unit: None,
            last_event: None,
        })
    }

    /// Run one control-loop tick on a duty-cycle sample
    pub fn tick<C: TimeSource + ?Sized>(&mut self, sample: f64, clock: &C) -> TickReport {
        let (raw, identity) = self.table.classify_fraction(sample);
        let observed = ObservedState::observe(raw, identity, &self.store, &self.source_keys);

        let identity_changed = observed.identity != self.observed.identity;
        if identity_changed && self.config.log_transitions {
            if observed.identity == NO_UNIT {
                log_info!("no pack detected (signal {})", raw);
            } else {
                log_info!("pack detected: {} (signal {})", observed.display_name, raw);
            }
        }

        let unit = if observed.present {
            let usage = UsageStats::read(&self.store, &self.source_keys);
            let health = self.evaluator.evaluate(usage.usage_count, observed.identity);
            Some(UnitHealth { usage, health })
        } else {
            None
        };

        self.publisher.publish(&mut self.store, &observed, unit.as_ref());
        self.observed = observed;
        self.unit = unit;

        let event = self.detector.poll(&self.observed, clock.now());
        if let Some(event) = event {
            self.last_event = Some(event);
            if self.config.log_transitions {
                self.log_event(&event);
            }
        }

        TickReport {
            observed: self.observed.clone(),
            unit: self.unit.clone(),
            event,
            identity_changed,
        }
    }

    /// Read the sensor through `source` and run one tick
    pub fn tick_from<Src, C>(&mut self, source: &mut Src, clock: &C) -> TickReport
    where
        Src: SignalSource + ?Sized,
        C: TimeSource + ?Sized,
    {
        let sample = source.duty_cycle();
        self.tick(sample, clock)
    }

    /// Emit the status lines for entering `mode`
    pub fn on_mode_enter(&mut self, mode: RobotMode) {
        log_debug!("entering {} mode", mode);
        if !self.config.log_transitions {
            return;
        }
        for line in self.mode_summary(mode) {
            log_info!("{}", line);
        }
    }

    /// Lines logged on entering `mode`
    pub fn mode_summary(&self, mode: RobotMode) -> Vec<String> {
        let prefix = mode.label();
        let mut lines = Vec::new();

        match mode {
            RobotMode::Disabled => {
                lines.push(format!("[{}] Entering disabled mode", prefix));
                lines.extend(self.status_report().lines());
            }
            RobotMode::Autonomous | RobotMode::Teleop => {
                lines.push(format!("[{}] Starting with {}", prefix, self.observed.display_name));
                let warning = self.health_warning();
                if !warning.is_empty() {
                    lines.push(format!("[{}] {}", prefix, warning));
                }
            }
            RobotMode::Test => {
                lines.push(format!("[{}] Pack detection test", prefix));
                lines.extend(self.status_report().lines());
            }
        }

        lines
    }

    /// Snapshot of the latest tick
    pub fn status_report(&self) -> StatusReport {
        StatusReport {
            name: self.observed.display_name.clone(),
            number: self.observed.identity,
            raw_signal: self.observed.raw_signal,
            installed: self.observed.present,
            unit: self.unit.clone(),
        }
    }

    fn log_event(&self, event: &PackEvent) {
        match event {
            PackEvent::Installed { .. } => {
                log_info!("pack installed: {}", self.observed.display_name);
                if let Some(unit) = &self.unit {
                    log_info!("  usage count: {}", unit.usage.usage_count);
                    log_info!("  total runtime: {}", unit.usage.total_runtime);
                }
                self.log_advisory();
            }
            PackEvent::Removed { identity } => {
                log_warn!("pack removed (was pack {})", identity);
            }
            PackEvent::Swapped { from, .. } => {
                log_info!("pack changed: Battery {} -> {}", from, self.observed.display_name);
                self.log_advisory();
            }
        }
    }

    fn log_advisory(&self) {
        let warning = self.health_warning();
        if !warning.is_empty() {
            log_warn!("  {}", warning);
        }
    }

    /// Identity from the latest tick (0 when none)
    pub fn identity(&self) -> u8 {
        self.observed.identity
    }

    /// Display name from the latest tick
    pub fn display_name(&self) -> &str {
        &self.observed.display_name
    }

    /// Raw scaled signal from the latest tick
    pub fn raw_signal(&self) -> u8 {
        self.observed.raw_signal
    }

    /// Whether a pack is present
    pub fn is_installed(&self) -> bool {
        self.observed.present
    }

    /// Whether pack `identity` specifically is present
    pub fn is_installed_unit(&self, identity: u8) -> bool {
        self.observed.present && self.observed.identity == identity
    }

    /// Usage count of the present pack (0 when none)
    pub fn usage_count(&self) -> u32 {
        self.unit.as_ref().map_or(0, |unit| unit.usage.usage_count)
    }

    /// Lifetime runtime of the present pack
    pub fn total_runtime(&self) -> &str {
        self.unit
            .as_ref()
            .map_or(DEFAULT_RUNTIME_DISPLAY, |unit| unit.usage.total_runtime.as_str())
    }

    /// Session runtime of the present pack
    pub fn session_runtime(&self) -> &str {
        self.unit
            .as_ref()
            .map_or(DEFAULT_RUNTIME_DISPLAY, |unit| unit.usage.session_runtime.as_str())
    }

    /// Health tier of the present pack
    pub fn health_tier(&self) -> Option<HealthTier> {
        self.unit.as_ref().map(|unit| unit.health.tier)
    }

    /// Health level 0/1/2 (0 when no pack)
    pub fn health_level(&self) -> u8 {
        self.health_tier().map_or(HealthTier::Nominal.level(), |tier| tier.level())
    }

    /// Advisory text, empty when healthy or no pack
    pub fn health_warning(&self) -> &str {
        self.unit.as_ref().map_or("", |unit| unit.health.advisory.as_str())
    }

    /// State confirmed at the last poll
    pub fn confirmed(&self) -> ConfirmedState {
        self.detector.confirmed()
    }

    /// Most recent transition event
    pub fn last_event(&self) -> Option<PackEvent> {
        self.last_event
    }

    /// Latest observed state
    pub fn observed(&self) -> &ObservedState {
        &self.observed
    }

    /// Active configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Calibration table in use
    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }

    /// Telemetry store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable telemetry store, for hosts that share it
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Tear down the monitor, returning the store
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: TelemetryStore> LoopModule for PackMonitor<S> {
    type Report = TickReport;

    fn tick<C: TimeSource + ?Sized>(&mut self, sample: f64, clock: &C) -> TickReport {
        PackMonitor::tick(self, sample, clock)
    }

    fn on_mode_enter(&mut self, mode: RobotMode) {
        PackMonitor::on_mode_enter(self, mode)
    }
}

impl<S: TelemetryStore> fmt::Debug for PackMonitor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackMonitor")
            .field("observed", &self.observed)
            .field("confirmed", &self.detector.confirmed())
            .field("last_event", &self.last_event)
            .finish_non_exhaustive()
    }
}
