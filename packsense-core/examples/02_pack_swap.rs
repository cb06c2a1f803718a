//! Pack Swap Example
//!
//! Simulates a pit stop at the robot's 20 ms loop rate: pack 2 runs for a
//! while, the line drops out while the connector is reseated, pack 5 goes in.
//! The dashboard follows every tick; the change detector only reports what
//! it sees on its 2 s polls.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_pack_swap
//! ```

use packsense_core::{
    time::FixedTime, ConfigError, MemoryTelemetry, MonitorConfig, PackMonitor, RobotMode,
    SignalSource, TimeSource,
};

/// Scripted identity line: (duration in ms, duty cycle)
struct ScriptedLine {
    phases: Vec<(u64, f64)>,
    elapsed_ms: u64,
}

impl ScriptedLine {
    fn total_ms(&self) -> u64 {
        self.phases.iter().map(|(duration, _)| duration).sum()
    }
}

impl SignalSource for ScriptedLine {
    fn duty_cycle(&mut self) -> f64 {
        let mut start = 0;
        let mut sample = 0.0;
        for &(duration, duty) in &self.phases {
            if self.elapsed_ms < start + duration {
                sample = duty;
                break;
            }
            start += duration;
        }
        self.elapsed_ms += 20;
        sample
    }
}

fn main() -> Result<(), ConfigError> {
    println!("Packsense Pack Swap Example");
    println!("===========================\n");

    let mut monitor = PackMonitor::init(MonitorConfig::default(), MemoryTelemetry::new())?;
    let mut clock = FixedTime::new(0);
    let mut line = ScriptedLine {
        phases: vec![
            (4_500, 0.2510),  // pack 2
            (300, 0.0),       // connector out
            (5_000, 0.7490),  // pack 5
            (2_500, 0.0),     // bay left empty
        ],
        elapsed_ms: 0,
    };

    monitor.on_mode_enter(RobotMode::Teleop);

    let mut last_identity = None;
    for _ in 0..line.total_ms() / 20 {
        let report = monitor.tick_from(&mut line, &clock);

        if last_identity != Some(report.observed.identity) {
            println!(
                "t={:5}ms  dashboard: {} (raw {})",
                clock.now(),
                report.observed.display_name,
                report.observed.raw_signal
            );
            last_identity = Some(report.observed.identity);
        }
        if let Some(event) = report.event {
            println!("t={:5}ms  event:     {}", clock.now(), event);
        }

        clock.advance(20);
    }

    println!();
    for line in monitor.mode_summary(RobotMode::Disabled) {
        println!("{}", line);
    }

    Ok(())
}
