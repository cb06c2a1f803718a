//! Change Detector
//!
//! Debounces the per-tick classification into transition events. The
//! detector only looks at the observed state when its poll interval has
//! elapsed, so noise and brief removal flicker between polls never reach the
//! event stream.
//!
//! ```text
//! tick:   │ │ │ │ │ │ │ │ │ │ │ │ │ │ │ │ │ │ │ │ │ │ │
//! poll:   ^arm                  ^poll                 ^poll
//!         └──── interval ──────┘└──── interval ──────┘
//! ```
//!
//! The timer is armed on the first call, using the host clock of that tick.
//! The confirmed state is overwritten on every poll, event or not.

use crate::constants::calibration::NO_UNIT;
use crate::constants::time::DEFAULT_POLL_INTERVAL_MS;
use crate::events::PackEvent;
use crate::state::ObservedState;
use crate::time::{elapsed_ms, Timestamp};

/// Last state the detector acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfirmedState {
    /// Identity at the last poll (0 when none)
    pub identity: u8,
    /// Presence at the last poll
    pub present: bool,
}

/// Compare a fresh observation with the confirmed state
///
/// Pure transition function of the `NoUnit` / `UnitPresent(n)` machine.
pub fn transition(confirmed: ConfirmedState, present: bool, identity: u8) -> Option<PackEvent> {
    match (confirmed.present, present) {
        (false, true) => Some(PackEvent::Installed { identity }),
        (true, false) => Some(PackEvent::Removed { identity: confirmed.identity }),
        (true, true) if identity != confirmed.identity && confirmed.identity != NO_UNIT => {
            Some(PackEvent::Swapped { from: confirmed.identity, to: identity })
        }
        _ => None,
    }
}

/// Rate-limited transition detector
#[derive(Debug, Clone)]
pub struct ChangeDetector {
    interval_ms: u64,
    last_reset: Option<Timestamp>,
    confirmed: ConfirmedState,
}

impl Default for ChangeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL_MS)
    }
}

impl ChangeDetector {
    /// Create a detector polling every `interval_ms`
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_reset: None,
            confirmed: ConfirmedState::default(),
        }
    }

    /// Poll interval in milliseconds
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// State confirmed at the last poll
    pub fn confirmed(&self) -> ConfirmedState {
        self.confirmed
    }

    /// Whether a poll at `now` would act
    pub fn is_due(&self, now: Timestamp) -> bool {
        match self.last_reset {
            Some(last) => elapsed_ms(last, now) >= self.interval_ms,
            None => false,
        }
    }

    /// Offer the latest observation; acts only once per interval
    pub fn poll(&mut self, observed: &ObservedState, now: Timestamp) -> Option<PackEvent> {
        if self.last_reset.is_none() {
            self.last_reset = Some(now);
            return None;
        }
        if !self.is_due(now) {
            return None;
        }

        self.last_reset = Some(now);
        let event = transition(self.confirmed, observed.present, observed.identity);
        self.confirmed = ConfirmedState {
            identity: observed.identity,
            present: observed.present,
        };
        event
    }

    /// Forget the confirmed state and disarm the timer
    pub fn reset(&mut self) {
        self.last_reset = None;
        self.confirmed = ConfirmedState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn observed(identity: u8, present: bool) -> ObservedState {
        ObservedState {
            raw_signal: 0,
            identity,
            present,
            display_name: String::new(),
        }
    }

    #[test]
    fn transition_table() {
        let none = ConfirmedState::default();
        let two = ConfirmedState { identity: 2, present: true };

        assert_eq!(transition(none, true, 3), Some(PackEvent::Installed { identity: 3 }));
        assert_eq!(transition(two, false, 0), Some(PackEvent::Removed { identity: 2 }));
        assert_eq!(transition(two, true, 4), Some(PackEvent::Swapped { from: 2, to: 4 }));
        assert_eq!(transition(two, true, 2), None);
        assert_eq!(transition(none, false, 0), None);
    }

    #[test]
    fn identity_seen_but_not_installed_is_quiet() {
        // Tracker vetoes presence: identity changes without presence are ignored
        let none = ConfirmedState { identity: 3, present: false };
        assert_eq!(transition(none, false, 5), None);
    }

    #[test]
    fn first_call_only_arms_timer() {
        let mut detector = ChangeDetector::new(2000);
        assert_eq!(detector.poll(&observed(1, true), 500), None);
        assert_eq!(detector.confirmed(), ConfirmedState::default());
        assert!(!detector.is_due(2499));
        assert!(detector.is_due(2500));
    }

    #[test]
    fn single_installed_across_many_ticks() {
        let mut detector = ChangeDetector::new(2000);
        let present = observed(1, true);
        let mut installed = 0;

        for tick in 0..500u64 {
            if let Some(PackEvent::Installed { .. }) = detector.poll(&present, tick * 20) {
                installed += 1;
            }
        }

        assert_eq!(installed, 1);
        assert_eq!(detector.confirmed(), ConfirmedState { identity: 1, present: true });
    }

    #[test]
    fn flicker_between_polls_is_ignored() {
        let mut detector = ChangeDetector::new(2000);
        detector.poll(&observed(2, true), 0);
        assert_eq!(detector.poll(&observed(2, true), 2000), Some(PackEvent::Installed { identity: 2 }));

        // Pack drops out for a few ticks, back before the next poll
        assert_eq!(detector.poll(&observed(0, false), 2500), None);
        assert_eq!(detector.poll(&observed(0, false), 3000), None);
        assert_eq!(detector.poll(&observed(2, true), 4000), None);
    }

    #[test]
    fn swap_and_removal() {
        let mut detector = ChangeDetector::new(1000);
        detector.poll(&observed(2, true), 0);
        detector.poll(&observed(2, true), 1000);

        assert_eq!(
            detector.poll(&observed(4, true), 2000),
            Some(PackEvent::Swapped { from: 2, to: 4 })
        );
        assert_eq!(
            detector.poll(&observed(0, false), 3000),
            Some(PackEvent::Removed { identity: 4 })
        );
        assert_eq!(detector.poll(&observed(0, false), 4000), None);
    }

    #[test]
    fn backwards_clock_waits() {
        let mut detector = ChangeDetector::new(1000);
        detector.poll(&observed(1, true), 5000);
        assert_eq!(detector.poll(&observed(1, true), 100), None);
        assert!(!detector.is_due(100));
    }

    #[test]
    fn reset_disarms() {
        let mut detector = ChangeDetector::new(1000);
        detector.poll(&observed(1, true), 0);
        detector.poll(&observed(1, true), 1000);
        detector.reset();

        assert_eq!(detector.confirmed(), ConfirmedState::default());
        assert_eq!(detector.poll(&observed(1, true), 5000), None);
        assert_eq!(
            detector.poll(&observed(1, true), 6000),
            Some(PackEvent::Installed { identity: 1 })
        );
    }
}
