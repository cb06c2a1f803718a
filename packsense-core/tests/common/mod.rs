//! Common test utilities for integration tests
//!
//! This module provides:
//! - Duty-cycle trace generators with sensor noise
//! - A trace runner that drives a monitor on a fixed tick period
//! - Pre-built pack scenarios with expected event sequences

#![allow(dead_code)]

pub mod generators;
pub mod scenarios;

use packsense_core::{
    constants::CONTROL_LOOP_PERIOD_MS, time::FixedTime, MemoryTelemetry, MonitorConfig,
    PackEvent, PackMonitor, TelemetryStore, TickReport,
};

/// Usage tracker key for the default source root
pub const USAGE_KEY: &str = "BatteryManager/CurrentBattery/UsageCount";

/// Installation flag key for the default source root
pub const INSTALLED_KEY: &str = "BatteryManager/BatteryInstalled";

/// Monitor with the deployed configuration and an empty store
pub fn default_monitor() -> PackMonitor<MemoryTelemetry> {
    PackMonitor::init(MonitorConfig::default(), MemoryTelemetry::new())
        .expect("default config is valid")
}

/// Monitor whose tracker reports `usage` uses
pub fn monitor_with_usage(usage: f64) -> PackMonitor<MemoryTelemetry> {
    let mut monitor = default_monitor();
    monitor.store_mut().put_number(USAGE_KEY, usage);
    monitor
}

/// Drives a monitor through a sample trace at the control-loop period
pub struct TraceRunner {
    pub monitor: PackMonitor<MemoryTelemetry>,
    pub clock: FixedTime,
    pub period_ms: u64,
    pub reports: Vec<TickReport>,
}

impl TraceRunner {
    pub fn new(monitor: PackMonitor<MemoryTelemetry>) -> Self {
        Self {
            monitor,
            clock: FixedTime::new(0),
            period_ms: CONTROL_LOOP_PERIOD_MS,
            reports: Vec::new(),
        }
    }

    /// Run one tick per sample, advancing the clock after each
    pub fn run(&mut self, samples: &[f64]) -> &mut Self {
        for &sample in samples {
            let report = self.monitor.tick(sample, &self.clock);
            self.reports.push(report);
            self.clock.advance(self.period_ms);
        }
        self
    }

    /// Hold one sample for `duration_ms`
    pub fn hold(&mut self, sample: f64, duration_ms: u64) -> &mut Self {
        let ticks = duration_ms / self.period_ms;
        for _ in 0..ticks {
            let report = self.monitor.tick(sample, &self.clock);
            self.reports.push(report);
            self.clock.advance(self.period_ms);
        }
        self
    }

    /// Every event emitted so far, in order
    pub fn events(&self) -> Vec<PackEvent> {
        self.reports.iter().filter_map(|report| report.event).collect()
    }

    /// Identities classified on each tick
    pub fn identities(&self) -> Vec<u8> {
        self.reports.iter().map(|report| report.observed.identity).collect()
    }
}

/// Duty-cycle fraction that scales to exactly `raw`
pub fn fraction_for(raw: u8) -> f64 {
    // Midpoint of the truncation bucket, immune to float rounding
    (f64::from(raw) + 0.5) / 255.0
}
