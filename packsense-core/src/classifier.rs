//! Signal Classifier
//!
//! Maps a raw identity signal onto the calibration table. The pack side
//! drives one fixed duty cycle per pack; the robot measures it as a fraction,
//! scales it back to the 0-255 domain and looks for the entry whose expected
//! level lies within the tolerance.
//!
//! ```text
//! raw:     0 ──── 21 ──── 64 ──── 106 ──── 148 ──── 191 ──── 233 ──── 255
//! pack:    ·   [ 1 ]   [ 2 ]    [ 3 ]    [ 4 ]    [ 5 ]    [ 6 ]     ·
//!              ±10     ±10      ±10      ±10      ±10      ±10
//! ```
//!
//! Anything between windows (including 0, an unplugged line) classifies as
//! identity 0. That is the normal "no pack" outcome, not an error.
//!
//! ## Overlapping windows
//!
//! With a sane table the windows are disjoint: adjacent expected levels sit
//! more than twice the tolerance apart. Nothing enforces that at runtime.
//! If windows do overlap, the first match in table order (lowest identity)
//! wins. [`CalibrationTable::overlapping_pairs`] reports such pairs so the
//! monitor can warn about them at init.

use crate::constants::calibration::{
    DEFAULT_TOLERANCE, MAX_UNITS, NO_UNIT, SIGNAL_FULL_SCALE, STANDARD_SIGNALS,
};
use crate::errors::{ConfigError, ConfigResult};

/// One known pack: its identity and the raw level it signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationEntry {
    /// Identity in `1..=N`
    pub identity: u8,
    /// Expected raw signal on the 0-255 scale
    pub expected_signal: u8,
}

impl CalibrationEntry {
    /// Create an entry
    pub const fn new(identity: u8, expected_signal: u8) -> Self {
        Self { identity, expected_signal }
    }

    /// Check whether `raw` falls inside this entry's window
    pub fn matches(&self, raw: u8, tolerance: u8) -> bool {
        is_within_tolerance(raw, self.expected_signal, tolerance)
    }
}

/// Ordered, immutable calibration table with a uniform tolerance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationTable {
    entries: heapless::Vec<CalibrationEntry, MAX_UNITS>,
    tolerance: u8,
}

impl CalibrationTable {
    /// Build a table from entries in ascending identity order
    ///
    /// Rejects an empty table, more than [`MAX_UNITS`] entries, identity 0,
    /// and identities that are not strictly ascending. Window overlap is
    /// allowed.
    pub fn new(entries: &[CalibrationEntry], tolerance: u8) -> ConfigResult<Self> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyCalibration);
        }

        let table = heapless::Vec::from_slice(entries).map_err(|_| ConfigError::TooManyUnits {
            count: entries.len(),
            capacity: MAX_UNITS,
        })?;

        let mut previous = NO_UNIT;
        for entry in entries {
            if entry.identity == NO_UNIT {
                return Err(ConfigError::ReservedIdentity);
            }
            if entry.identity <= previous {
                return Err(ConfigError::UnorderedIdentity {
                    previous,
                    identity: entry.identity,
                });
            }
            previous = entry.identity;
        }

        Ok(Self { entries: table, tolerance })
    }

    /// The deployed six-pack table with the default tolerance
    pub fn standard() -> Self {
        let entries = STANDARD_SIGNALS
            .iter()
            .zip(1u8..)
            .map(|(&signal, identity)| CalibrationEntry::new(identity, signal))
            .collect();

        Self { entries, tolerance: DEFAULT_TOLERANCE }
    }

    /// Entries in table order
    pub fn entries(&self) -> &[CalibrationEntry] {
        &self.entries
    }

    /// Number of known packs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table, provided for API completeness
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matching tolerance in raw signal units
    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    /// Expected raw signal for `identity`, if it is in the table
    pub fn expected_signal(&self, identity: u8) -> Option<u8> {
        self.entries
            .iter()
            .find(|entry| entry.identity == identity)
            .map(|entry| entry.expected_signal)
    }

    /// Classify a raw signal: first matching identity, or 0 for none
    pub fn classify(&self, raw: u8) -> u8 {
        self.entries
            .iter()
            .find(|entry| entry.matches(raw, self.tolerance))
            .map_or(NO_UNIT, |entry| entry.identity)
    }

    /// Scale a duty-cycle fraction and classify it, returning `(raw, identity)`
    pub fn classify_fraction(&self, fraction: f64) -> (u8, u8) {
        let raw = scale_fraction(fraction);
        (raw, self.classify(raw))
    }

    /// Pairs of entries whose windows share at least one raw value
    pub fn overlapping_pairs(&self) -> impl Iterator<Item = (CalibrationEntry, CalibrationEntry)> + '_ {
        let reach = 2 * u16::from(self.tolerance);
        self.entries.iter().enumerate().flat_map(move |(i, a)| {
            self.entries[i + 1..]
                .iter()
                .filter(move |b| u16::from(a.expected_signal.abs_diff(b.expected_signal)) <= reach)
                .map(move |b| (*a, *b))
        })
    }

    /// True when no two windows overlap
    pub fn is_well_separated(&self) -> bool {
        self.overlapping_pairs().next().is_none()
    }
}

impl Default for CalibrationTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Check if a value is within tolerance of a target
pub fn is_within_tolerance(value: u8, target: u8, tolerance: u8) -> bool {
    value.abs_diff(target) <= tolerance
}

/// Convert a duty-cycle fraction to the 0-255 raw scale, truncating
///
/// Out-of-range fractions are clamped into `[0.0, 1.0]`; NaN reads as 0.
pub fn scale_fraction(fraction: f64) -> u8 {
    if fraction.is_nan() {
        return 0;
    }
    (fraction.clamp(0.0, 1.0) * f64::from(SIGNAL_FULL_SCALE)) as u8
}
