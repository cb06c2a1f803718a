//! State Publisher
//!
//! Writes the latest classification to the telemetry store every tick. Keys
//! live under one configurable root:
//!
//! | key               | type    | written         |
//! |-------------------|---------|-----------------|
//! | `Name`            | string  | always          |
//! | `Number`          | number  | always          |
//! | `PWM Value`       | number  | always          |
//! | `Installed`       | boolean | always          |
//! | `Usage Count`     | number  | pack present    |
//! | `Total Runtime`   | string  | pack present    |
//! | `Session Runtime` | string  | pack present    |
//! | `Health Level`    | number  | pack present    |
//! | `Warning`         | string  | pack present    |
//!
//! With no pack present the usage and health keys are left alone rather
//! than zeroed, so the dashboard keeps the last figures it saw.

use alloc::format;
use alloc::string::String;

use crate::constants::telemetry::{
    KEY_HEALTH_LEVEL, KEY_INSTALLED, KEY_NAME, KEY_NUMBER, KEY_RAW_SIGNAL,
    KEY_SESSION_RUNTIME, KEY_TOTAL_RUNTIME, KEY_USAGE_COUNT, KEY_WARNING,
};
use crate::state::{ObservedState, UnitHealth};
use crate::traits::telemetry::TelemetryStore;

/// Fully qualified published keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishKeys {
    /// Display name
    pub name: String,
    /// Identity number
    pub number: String,
    /// Raw scaled signal
    pub raw_signal: String,
    /// Presence flag
    pub installed: String,
    /// Usage count
    pub usage_count: String,
    /// Lifetime runtime
    pub total_runtime: String,
    /// Session runtime
    pub session_runtime: String,
    /// Health level (0/1/2)
    pub health_level: String,
    /// Advisory text
    pub warning: String,
}

impl PublishKeys {
    /// Keys under `root`
    pub fn new(root: &str) -> Self {
        let key = |suffix: &str| format!("{}/{}", root, suffix);
        Self {
            name: key(KEY_NAME),
            number: key(KEY_NUMBER),
            raw_signal: key(KEY_RAW_SIGNAL),
            installed: key(KEY_INSTALLED),
            usage_count: key(KEY_USAGE_COUNT),
            total_runtime: key(KEY_TOTAL_RUNTIME),
            session_runtime: key(KEY_SESSION_RUNTIME),
            health_level: key(KEY_HEALTH_LEVEL),
            warning: key(KEY_WARNING),
        }
    }
}

/// Pushes observed state to a telemetry store
#[derive(Debug, Clone)]
pub struct StatePublisher {
    keys: PublishKeys,
}

impl StatePublisher {
    /// Publisher writing under `root`
    pub fn new(root: &str) -> Self {
        Self { keys: PublishKeys::new(root) }
    }

    /// Keys this publisher writes
    pub fn keys(&self) -> &PublishKeys {
        &self.keys
    }

    /// Write one tick's worth of state
    ///
    /// `unit` is only consulted when the observation is present.
    pub fn publish<S: TelemetryStore + ?Sized>(
        &self,
        store: &mut S,
        observed: &ObservedState,
        unit: Option<&UnitHealth>,
    ) {
        let keys = &self.keys;
        store.put_string(&keys.name, &observed.display_name);
        store.put_number(&keys.number, f64::from(observed.identity));
        store.put_number(&keys.raw_signal, f64::from(observed.raw_signal));
        store.put_boolean(&keys.installed, observed.present);

        if !observed.present {
            return;
        }
        if let Some(unit) = unit {
            store.put_number(&keys.usage_count, f64::from(unit.usage.usage_count));
            store.put_string(&keys.total_runtime, &unit.usage.total_runtime);
            store.put_string(&keys.session_runtime, &unit.usage.session_runtime);
            store.put_number(&keys.health_level, f64::from(unit.health.tier.level()));
            store.put_string(&keys.warning, &unit.health.advisory);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthEvaluator;
    use crate::state::UsageStats;
    use crate::telemetry::MemoryTelemetry;

    fn present(identity: u8) -> ObservedState {
        ObservedState {
            raw_signal: 148,
            identity,
            present: true,
            display_name: format!("Battery {}", identity),
        }
    }

    fn unit(usage_count: u32, identity: u8) -> UnitHealth {
        UnitHealth {
            usage: UsageStats { usage_count, ..UsageStats::default() },
            health: HealthEvaluator::default().evaluate(usage_count, identity),
        }
    }

    #[test]
    fn present_pack_publishes_everything() {
        let publisher = StatePublisher::new("Battery");
        let mut store = MemoryTelemetry::new();
        publisher.publish(&mut store, &present(4), Some(&unit(25, 4)));

        assert_eq!(store.get_string("Battery/Name", ""), "Battery 4");
        assert_eq!(store.get_number("Battery/Number", -1.0), 4.0);
        assert_eq!(store.get_number("Battery/PWM Value", -1.0), 148.0);
        assert!(store.get_boolean("Battery/Installed", false));
        assert_eq!(store.get_number("Battery/Usage Count", -1.0), 25.0);
        assert_eq!(store.get_number("Battery/Health Level", -1.0), 1.0);
        assert_eq!(store.get_string("Battery/Warning", ""), "Battery 4 has high usage");
        assert_eq!(store.get_string("Battery/Session Runtime", ""), "0h 0m 0s");
    }

    #[test]
    fn absent_pack_omits_health_keys() {
        let publisher = StatePublisher::new("Battery");
        let mut store = MemoryTelemetry::new();
        publisher.publish(&mut store, &ObservedState::default(), Some(&unit(50, 0)));

        assert_eq!(store.len(), 4);
        assert_eq!(store.get_string("Battery/Name", ""), "No Battery");
        assert!(!store.get_boolean("Battery/Installed", true));
        assert!(!store.contains("Battery/Usage Count"));
        assert!(!store.contains("Battery/Health Level"));
    }

    #[test]
    fn removal_keeps_last_figures() {
        let publisher = StatePublisher::new("Battery");
        let mut store = MemoryTelemetry::new();
        publisher.publish(&mut store, &present(2), Some(&unit(41, 2)));
        publisher.publish(&mut store, &ObservedState::default(), None);

        assert!(!store.get_boolean("Battery/Installed", true));
        assert_eq!(store.get_number("Battery/Health Level", -1.0), 2.0);
    }

    #[test]
    fn custom_root() {
        let publisher = StatePublisher::new("Robot/Pack");
        assert_eq!(publisher.keys().raw_signal, "Robot/Pack/PWM Value");
    }
}
