//! Basic Tick Example
//!
//! The smallest useful setup: the deployed configuration, an in-memory
//! telemetry store and a manually stepped clock. Each tick classifies a
//! duty-cycle sample and publishes the result.
//!
//! ## What You'll Learn
//!
//! - Building a monitor from `MonitorConfig::default()`
//! - Feeding duty-cycle samples through `tick`
//! - Reading back what was published
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_tick
//! ```

use packsense_core::{
    time::FixedTime, ConfigError, MemoryTelemetry, MonitorConfig, PackMonitor, TelemetryStore,
};

fn main() -> Result<(), ConfigError> {
    println!("Packsense Basic Tick Example");
    println!("============================\n");

    let mut store = MemoryTelemetry::new();
    // The usage tracker normally writes these; fake one pack's history
    store.put_number("BatteryManager/CurrentBattery/UsageCount", 23.0);
    store.put_string("BatteryManager/CurrentBattery/TotalTimeFormatted", "6h 12m 40s");

    let mut monitor = PackMonitor::init(MonitorConfig::default(), store)?;
    let mut clock = FixedTime::new(0);

    let samples = [
        (0.0, "Empty bay"),
        (0.0824, "Pack 1 (raw ~21)"),
        (0.4157, "Pack 3 (raw ~106)"),
        (0.5, "Between windows (raw 127)"),
        (0.9137, "Pack 6 (raw ~233)"),
    ];

    for (sample, description) in &samples {
        let report = monitor.tick(*sample, &clock);
        clock.advance(20);

        print!("{:.<32} ", description);
        println!(
            "raw {:3} -> identity {} ({}){}",
            report.observed.raw_signal,
            report.observed.identity,
            report.observed.display_name,
            if report.observed.present { ", installed" } else { "" }
        );
        if let Some(unit) = &report.unit {
            println!(
                "{:33}usage {}, tier {}, {}",
                "",
                unit.usage.usage_count,
                unit.health.tier,
                if unit.health.has_advisory() { unit.health.advisory.as_str() } else { "no warning" }
            );
        }
    }

    println!("\nPublished under Battery/:");
    for key in monitor.store().keys_under("Battery") {
        println!("  {:<24} {:?}", key, monitor.store().get(key));
    }

    Ok(())
}
