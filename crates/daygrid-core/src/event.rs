#![forbid(unsafe_code)]

//! Event model for a single calendar day.

use std::fmt;

/// Length of the addressable day window in minutes (12 hours from the
/// day-start anchor).
pub const DAY_MINUTES: u16 = 720;

/// Opaque identifier for events.
///
/// Hosts match layout output back to their own records by id, so the value
/// is never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventId(u64);

impl EventId {
    /// Create an EventId from a raw u64 value.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A scheduled event within a single day.
///
/// `start` and `end` are minutes from the day-start anchor. Intervals are
/// half-open: an event ending at minute 50 has left the calendar by the
/// time another starts there.
///
/// Callers guarantee `start < end <= DAY_MINUTES`. Construction does not
/// re-check the contract; the untyped input boundary in `daygrid-layout`
/// is where raw data gets shape-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Host-side identifier, echoed back in layout output.
    pub id: EventId,
    /// Start minute (inclusive).
    pub start: u16,
    /// End minute (exclusive).
    pub end: u16,
}

impl Event {
    /// Create a new event.
    #[inline]
    pub const fn new(id: EventId, start: u16, end: u16) -> Self {
        Self { id, start, end }
    }

    /// Minutes between start and end.
    #[inline]
    pub const fn duration(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Check whether two events overlap in time.
    ///
    /// Symmetric and boundary-exclusive: an event ending exactly when
    /// another starts does not overlap it.
    #[inline]
    pub const fn overlaps(&self, other: &Event) -> bool {
        self.end > other.start && self.start < other.end
    }

    /// Check the caller-side day-window contract
    /// (`start < end <= DAY_MINUTES`).
    ///
    /// Advisory: the layout solver assumes the contract holds and never
    /// calls this itself.
    #[must_use]
    pub const fn is_within_day(&self) -> bool {
        self.start < self.end && self.end <= DAY_MINUTES
    }
}
