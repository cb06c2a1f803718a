//! Integration tests for the pack monitor
//!
//! Drives the full tick path (classification, presence, health, publishing
//! and change detection) against scripted duty-cycle traces.

mod common;

use packsense_core::{
    time::FixedTime, HealthThresholds, HealthTier, LoopModule, MemoryTelemetry, MonitorConfig,
    PackEvent, PackMonitor, RobotMode, TelemetryStore,
};

use common::{
    default_monitor, fraction_for, monitor_with_usage,
    generators::SignalGenerator,
    scenarios::{Scenarios, TICKS_PER_POLL},
    TraceRunner, INSTALLED_KEY, USAGE_KEY,
};

#[test]
fn test_scenarios_produce_expected_events() {
    for scenario in Scenarios::all() {
        let mut runner = TraceRunner::new(default_monitor());
        runner.run(&scenario.samples);

        assert_eq!(
            runner.events(),
            scenario.expected_events,
            "scenario {} produced the wrong events",
            scenario.name
        );
    }
}

#[test]
fn test_first_pack_nominal_end_to_end() {
    let mut monitor = monitor_with_usage(5.0);
    let report = monitor.tick(0.0824, &FixedTime::new(0));

    assert_eq!(report.observed.identity, 1);
    assert!(report.observed.present);
    assert_eq!(report.unit.as_ref().map(|unit| unit.health.tier), Some(HealthTier::Nominal));

    let store = monitor.store();
    assert_eq!(store.get_string("Battery/Name", ""), "Battery 1");
    assert_eq!(store.get_number("Battery/Number", 0.0), 1.0);
    assert_eq!(store.get_number("Battery/PWM Value", 0.0), 21.0);
    assert!(store.get_boolean("Battery/Installed", false));
    assert_eq!(store.get_number("Battery/Usage Count", -1.0), 5.0);
    assert_eq!(store.get_number("Battery/Health Level", -1.0), 0.0);
    assert_eq!(store.get_string("Battery/Warning", "unset"), "");
}

#[test]
fn test_empty_line_publishes_presence_only() {
    let mut monitor = monitor_with_usage(45.0);
    monitor.tick(0.0, &FixedTime::new(0));

    let store = monitor.store();
    let published: Vec<_> = store.keys_under("Battery").collect();
    assert_eq!(
        published,
        vec!["Battery/Installed", "Battery/Name", "Battery/Number", "Battery/PWM Value"]
    );
    assert!(!store.get_boolean("Battery/Installed", true));
}

#[test]
fn test_single_installed_event_with_noise() {
    let mut runner = TraceRunner::new(default_monitor());
    let samples = SignalGenerator::new(99).steady(148, 6, TICKS_PER_POLL * 10);
    runner.run(&samples);

    assert_eq!(runner.events(), vec![PackEvent::Installed { identity: 4 }]);
    assert!(runner.identities().iter().all(|&identity| identity == 4));
}

#[test]
fn test_dashboard_follows_raw_while_events_lag() {
    let mut runner = TraceRunner::new(default_monitor());
    runner.hold(fraction_for(64), 2_100);

    // Swap mid-interval: dashboard updates on the next tick, event waits for the poll
    let report = runner.run(&[fraction_for(233)]).reports.last().cloned().unwrap();
    assert_eq!(report.observed.identity, 6);
    assert!(report.identity_changed);
    assert_eq!(report.event, None);
    assert_eq!(runner.monitor.store().get_number("Battery/Number", 0.0), 6.0);
    assert_eq!(runner.monitor.confirmed().identity, 2);

    runner.hold(fraction_for(233), 2_000);
    assert_eq!(
        runner.events(),
        vec![
            PackEvent::Installed { identity: 2 },
            PackEvent::Swapped { from: 2, to: 6 },
        ]
    );
}

#[test]
fn test_tracker_vetoes_presence() {
    let mut runner = TraceRunner::new(default_monitor());
    runner.monitor.store_mut().put_boolean(INSTALLED_KEY, false);
    runner.hold(fraction_for(106), 5_000);

    assert!(runner.events().is_empty());
    assert_eq!(runner.monitor.identity(), 3);
    assert!(!runner.monitor.is_installed());
    assert_eq!(runner.monitor.health_tier(), None);

    runner.monitor.store_mut().put_boolean(INSTALLED_KEY, true);
    runner.hold(fraction_for(106), 2_000);
    assert_eq!(runner.events(), vec![PackEvent::Installed { identity: 3 }]);
}

#[test]
fn test_health_tracks_usage_changes() {
    let mut monitor = monitor_with_usage(19.0);
    let clock = FixedTime::new(0);

    monitor.tick(fraction_for(191), &clock);
    assert_eq!(monitor.health_tier(), Some(HealthTier::Nominal));

    monitor.store_mut().put_number(USAGE_KEY, 20.0);
    monitor.tick(fraction_for(191), &clock);
    assert_eq!(monitor.health_tier(), Some(HealthTier::Warning));
    assert_eq!(monitor.health_warning(), "Battery 5 has high usage");

    monitor.store_mut().put_number(USAGE_KEY, 40.0);
    monitor.tick(fraction_for(191), &clock);
    assert_eq!(monitor.health_level(), 2);
    assert_eq!(
        monitor.store().get_string("Battery/Warning", ""),
        "Battery 5 needs replacement soon!"
    );
}

#[test]
fn test_custom_namespaces_and_thresholds() {
    let config = MonitorConfig::default()
        .with_publish_root("Pack")
        .with_source_root("Tracker")
        .with_thresholds(HealthThresholds::new(3, 6).unwrap())
        .with_health_warnings(false);
    let mut store = MemoryTelemetry::new();
    store.put_number("Tracker/CurrentBattery/UsageCount", 4.0);
    store.put_string("Tracker/CurrentBattery/Name", "Spare");

    let mut monitor = PackMonitor::init(config, store).unwrap();
    monitor.tick(fraction_for(21), &FixedTime::new(0));

    let store = monitor.store();
    assert_eq!(store.get_string("Pack/Name", ""), "Spare");
    assert_eq!(store.get_number("Pack/Health Level", -1.0), 1.0);
    assert_eq!(store.get_string("Pack/Warning", "unset"), "");
    assert!(!store.contains("Battery/Name"));
}

#[test]
fn test_lifecycle_through_trait() {
    fn drive<M: LoopModule>(module: &mut M, samples: &[f64]) -> Vec<M::Report> {
        let mut clock = FixedTime::new(0);
        module.on_mode_enter(RobotMode::Disabled);
        let reports = samples
            .iter()
            .map(|&sample| {
                let report = module.tick(sample, &clock);
                clock.advance(20);
                report
            })
            .collect();
        module.on_mode_enter(RobotMode::Teleop);
        reports
    }

    let mut monitor = monitor_with_usage(25.0);
    let reports = drive(&mut monitor, &[fraction_for(64); 3]);

    assert_eq!(reports.len(), 3);
    assert!(monitor.is_installed_unit(2));

    let teleop = monitor.mode_summary(RobotMode::Teleop);
    assert_eq!(
        teleop,
        vec![
            "[Teleop] Starting with Battery 2".to_string(),
            "[Teleop] Battery 2 has high usage".to_string(),
        ]
    );
}

#[test]
fn test_status_report_text() {
    let mut monitor = monitor_with_usage(41.0);
    monitor.store_mut().put_string(
        "BatteryManager/CurrentBattery/SessionTimeFormatted",
        "0h 3m 10s",
    );
    monitor.tick(fraction_for(148), &FixedTime::new(0));

    let lines = monitor.status_report().lines();
    assert_eq!(lines[1], "Battery: Battery 4");
    assert_eq!(lines[2], "Number: 4");
    assert_eq!(lines[3], "PWM Value: 148");
    assert_eq!(lines[4], "Installed: true");
    assert!(lines.contains(&"Session Runtime: 0h 3m 10s".to_string()));
    assert!(lines.contains(&"Warning: Battery 4 needs replacement soon!".to_string()));
}
