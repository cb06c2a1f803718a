//! In-Memory Telemetry Store
//!
//! A `BTreeMap`-backed [`TelemetryStore`] for tests, simulations and hosts
//! without a dashboard. It follows the same rules as a NetworkTables-style
//! backend: values are typed, and reading a key with the wrong type returns
//! the caller's default instead of converting.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::traits::telemetry::TelemetryStore;

/// A typed telemetry value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TelemetryValue {
    /// Text entry
    String(String),
    /// Numeric entry (all numbers are doubles on the wire)
    Number(f64),
    /// Boolean entry
    Boolean(bool),
}

impl TelemetryValue {
    /// String contents, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TelemetryValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TelemetryValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean value, if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            TelemetryValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Telemetry store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryTelemetry {
    entries: BTreeMap<String, TelemetryValue>,
    writes: u64,
}

impl MemoryTelemetry {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`
    pub fn get(&self, key: &str) -> Option<&TelemetryValue> {
        self.entries.get(key)
    }

    /// Whether `key` has been written
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Delete `key`, returning its value
    pub fn remove(&mut self, key: &str) -> Option<TelemetryValue> {
        self.entries.remove(key)
    }

    /// All keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Keys under `root/`
    pub fn keys_under<'a>(&'a self, root: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.keys().filter(move |key| {
            key.strip_prefix(root).map_or(false, |rest| rest.starts_with('/'))
        })
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of put calls since creation
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn put(&mut self, key: &str, value: TelemetryValue) {
        self.writes += 1;
        self.entries.insert(key.to_string(), value);
    }
}

impl TelemetryStore for MemoryTelemetry {
    fn put_string(&mut self, key: &str, value: &str) {
        self.put(key, TelemetryValue::String(value.to_string()));
    }

    fn put_number(&mut self, key: &str, value: f64) {
        self.put(key, TelemetryValue::Number(value));
    }

    fn put_boolean(&mut self, key: &str, value: bool) {
        self.put(key, TelemetryValue::Boolean(value));
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key)
            .and_then(TelemetryValue::as_str)
            .unwrap_or(default)
            .to_string()
    }

    fn get_number(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(TelemetryValue::as_number).unwrap_or(default)
    }

    fn get_boolean(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(TelemetryValue::as_boolean).unwrap_or(default)
    }
}
