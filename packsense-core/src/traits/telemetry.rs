//! Telemetry Store Capability
//!
//! The dashboard backend (NetworkTables on a robot, an in-memory map in
//! tests) is reduced to typed get/put by key. Reads take a caller-supplied
//! default that is returned whenever the key is missing or holds a value of
//! another type, so an unavailable store never surfaces as an error.
//!
//! Keys are full paths such as `"Battery/Name"`. Namespacing is done by the
//! caller through [`crate::config::MonitorConfig`].

use alloc::string::String;

/// Narrow key-value interface to the external telemetry store
pub trait TelemetryStore {
    /// Write a string value
    fn put_string(&mut self, key: &str, value: &str);

    /// Write a numeric value
    fn put_number(&mut self, key: &str, value: f64);

    /// Write a boolean value
    fn put_boolean(&mut self, key: &str, value: bool);

    /// Read a string, or `default` if absent
    fn get_string(&self, key: &str, default: &str) -> String;

    /// Read a number, or `default` if absent
    fn get_number(&self, key: &str, default: f64) -> f64;

    /// Read a boolean, or `default` if absent
    fn get_boolean(&self, key: &str, default: bool) -> bool;
}

impl<T: TelemetryStore + ?Sized> TelemetryStore for &mut T {
    fn put_string(&mut self, key: &str, value: &str) {
        (**self).put_string(key, value)
    }

    fn put_number(&mut self, key: &str, value: f64) {
        (**self).put_number(key, value)
    }

    fn put_boolean(&mut self, key: &str, value: bool) {
        (**self).put_boolean(key, value)
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        (**self).get_string(key, default)
    }

    fn get_number(&self, key: &str, default: f64) -> f64 {
        (**self).get_number(key, default)
    }

    fn get_boolean(&self, key: &str, default: bool) -> bool {
        (**self).get_boolean(key, default)
    }
}
