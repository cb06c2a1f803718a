//! Pre-built pack scenarios
//!
//! Each scenario is a sample trace plus the event sequence the change
//! detector should produce for it with the deployed configuration
//! (2 s poll, 20 ms ticks).

use packsense_core::PackEvent;

use super::generators::SignalGenerator;

/// One scripted scenario
pub struct PackScenario {
    pub name: &'static str,
    pub samples: Vec<f64>,
    pub expected_events: Vec<PackEvent>,
}

/// Ticks in one poll interval at the deployed period
pub const TICKS_PER_POLL: usize = 100;

pub struct Scenarios;

impl Scenarios {
    /// Pack 3 connected for the whole run
    pub fn steady_install() -> PackScenario {
        let mut generator = SignalGenerator::new(7);
        PackScenario {
            name: "steady_install",
            samples: generator.steady(106, 4, TICKS_PER_POLL * 5 + 1),
            expected_events: vec![PackEvent::Installed { identity: 3 }],
        }
    }

    /// Pack 2 then pack 5, swapped between polls
    pub fn hot_swap() -> PackScenario {
        let mut generator = SignalGenerator::new(11);
        let mut samples = generator.steady(64, 3, TICKS_PER_POLL * 3);
        samples.extend(generator.steady(191, 3, TICKS_PER_POLL * 3 + 1));
        PackScenario {
            name: "hot_swap",
            samples,
            expected_events: vec![
                PackEvent::Installed { identity: 2 },
                PackEvent::Swapped { from: 2, to: 5 },
            ],
        }
    }

    /// Pack 1 with brief dropouts, then pulled for good
    pub fn flicker_then_removal() -> PackScenario {
        // Dropouts are single ticks; a poll landing on one would see a removal,
        // so keep them off the poll ticks (multiples of TICKS_PER_POLL)
        let mut samples = SignalGenerator::new(3).steady(21, 2, TICKS_PER_POLL * 4);
        for index in [17, 130, 131, 250, 333] {
            samples[index] = 0.0;
        }
        samples.extend(SignalGenerator::empty(TICKS_PER_POLL * 2 + 1));
        PackScenario {
            name: "flicker_then_removal",
            samples,
            expected_events: vec![
                PackEvent::Installed { identity: 1 },
                PackEvent::Removed { identity: 1 },
            ],
        }
    }

    /// Nothing connected
    pub fn empty_bay() -> PackScenario {
        PackScenario {
            name: "empty_bay",
            samples: SignalGenerator::empty(TICKS_PER_POLL * 4),
            expected_events: Vec::new(),
        }
    }

    pub fn all() -> Vec<PackScenario> {
        vec![
            Self::steady_install(),
            Self::hot_swap(),
            Self::flicker_then_removal(),
            Self::empty_bay(),
        ]
    }
}
