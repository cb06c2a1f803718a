//! Custom Calibration Example
//!
//! A practice robot with four packs signalling different duty cycles.
//! Shows how table construction rejects bad input, how overlapping windows
//! are reported, and how classification resolves them.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_custom_calibration
//! ```

use packsense_core::{
    CalibrationEntry, CalibrationTable, ConfigError, HealthThresholds, MemoryTelemetry,
    MonitorConfig, PackMonitor,
};

fn main() -> Result<(), ConfigError> {
    println!("Packsense Custom Calibration Example");
    println!("====================================\n");

    println!("Rejected tables:");
    let attempts: [(&str, Vec<CalibrationEntry>); 3] = [
        ("empty", vec![]),
        ("identity 0", vec![CalibrationEntry::new(0, 50)]),
        (
            "descending identities",
            vec![CalibrationEntry::new(2, 50), CalibrationEntry::new(1, 150)],
        ),
    ];
    for (name, entries) in &attempts {
        match CalibrationTable::new(entries, 8) {
            Ok(_) => println!("  {:<24} accepted?!", name),
            Err(e) => println!("  {:<24} {}", name, e),
        }
    }

    let practice = CalibrationTable::new(
        &[
            CalibrationEntry::new(1, 30),
            CalibrationEntry::new(2, 90),
            CalibrationEntry::new(3, 150),
            CalibrationEntry::new(4, 165),
        ],
        8,
    )?;

    println!("\nPractice table (tolerance {}):", practice.tolerance());
    for entry in practice.entries() {
        println!("  pack {} -> {}", entry.identity, entry.expected_signal);
    }
    for (a, b) in practice.overlapping_pairs() {
        println!(
            "  overlap: pack {} and pack {} (signals {} and {})",
            a.identity, b.identity, a.expected_signal, b.expected_signal
        );
    }

    println!("\nClassification:");
    for raw in [0u8, 29, 38, 39, 95, 157, 158, 173, 250] {
        println!("  raw {:3} -> identity {}", raw, practice.classify(raw));
    }

    let config = MonitorConfig::default()
        .with_calibration_table(&practice)
        .with_thresholds(HealthThresholds::new(10, 25)?)
        .with_poll_interval_ms(1_000);
    let monitor = PackMonitor::init(config, MemoryTelemetry::new())?;

    println!(
        "\nMonitor ready: {} packs, poll every {} ms, warning at {} uses",
        monitor.table().len(),
        monitor.config().poll_interval_ms,
        monitor.config().health.warning
    );

    Ok(())
}
