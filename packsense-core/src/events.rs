//! Pack Transition Events
//!
//! The change detector emits at most one event per poll. Events are advisory:
//! they feed the operator log and audit trail, never the dashboard values,
//! which always follow the latest raw classification.
//!
//! ```text
//!                 Installed(n)
//!     NoUnit ──────────────────▶ UnitPresent(n)
//!        ▲                         │        ▲
//!        │        Removed          │        │ Swapped(n → m)
//!        └─────────────────────────┘        └──────┘
//! ```
//!
//! "No event" is `None` at the call site, not a variant.

use core::fmt;

/// A debounced change in which pack is connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackEvent {
    /// A pack appeared where there was none
    Installed {
        /// Newly confirmed identity
        identity: u8,
    },

    /// The confirmed pack is gone
    Removed {
        /// Identity that was confirmed before removal
        identity: u8,
    },

    /// One pack was replaced by another between two polls
    Swapped {
        /// Previously confirmed identity
        from: u8,
        /// Newly confirmed identity
        to: u8,
    },
}

impl PackEvent {
    /// Identity connected after this event (0 after removal)
    pub const fn current_identity(&self) -> u8 {
        match self {
            PackEvent::Installed { identity } => *identity,
            PackEvent::Removed { .. } => 0,
            PackEvent::Swapped { to, .. } => *to,
        }
    }

    /// Whether a pack is connected after this event
    pub const fn leaves_unit_present(&self) -> bool {
        !matches!(self, PackEvent::Removed { .. })
    }

    /// Stable lowercase name for log fields and audit records
    pub const fn kind(&self) -> &'static str {
        match self {
            PackEvent::Installed { .. } => "installed",
            PackEvent::Removed { .. } => "removed",
            PackEvent::Swapped { .. } => "swapped",
        }
    }
}

impl fmt::Display for PackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackEvent::Installed { identity } => write!(f, "pack {} installed", identity),
            PackEvent::Removed { identity } => write!(f, "pack {} removed", identity),
            PackEvent::Swapped { from, to } => write!(f, "pack changed {} -> {}", from, to),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PackEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PackEvent::Installed { identity } => defmt::write!(fmt, "installed {}", identity),
            PackEvent::Removed { identity } => defmt::write!(fmt, "removed {}", identity),
            PackEvent::Swapped { from, to } => defmt::write!(fmt, "swapped {} -> {}", from, to),
        }
    }
}
