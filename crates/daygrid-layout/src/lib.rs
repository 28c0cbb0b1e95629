#![forbid(unsafe_code)]

//! Horizontal layout solver for single-day calendar events.
//!
//! Given a day's events, the solver assigns each one a column and a width
//! so that events overlapping in time never overlap on screen, while
//! events that do not overlap keep the full calendar width. Events that do
//! overlap share the strip in equal columns, subdividing only as far as
//! their colliding group forces them to.
//!
//! ```
//! use daygrid_layout::{DayLayout, Event, EventId};
//!
//! let events = [
//!     Event::new(EventId::from_raw(0), 60, 120),
//!     Event::new(EventId::from_raw(1), 90, 180),
//! ];
//! let placed = DayLayout::new().lay_out(&events).unwrap();
//! assert_eq!(placed[0].width, 300);
//! assert_eq!(placed[1].left, 300);
//! ```

pub use daygrid_core::event::{DAY_MINUTES, Event, EventId};
pub use daygrid_core::geometry::Span;

mod collision;
pub mod input;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collision::{ColumnEvent, colliding_group, link_earlier_overlaps, sort_by_start_and_end};

/// Default calendar strip width in pixel-equivalent units.
pub const CALENDAR_WIDTH: u16 = 600;

/// Errors produced by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Top-level raw input was not an array of events.
    NotAnArray,
    /// A raw input element is missing numeric `start`/`end` fields.
    MalformedEvent { index: usize },
    /// An event violates the `start < end <= DAY_MINUTES` day-window
    /// contract.
    OutsideDayWindow { index: usize },
    /// Widening a colliding group did not free a column on retry. This is
    /// a solver bug, never a valid input state; the computation aborts
    /// rather than emit an overlapping layout.
    PlacementExhausted { id: EventId, divisor: u16 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnArray => write!(f, "events must be an array"),
            Self::MalformedEvent { index } => {
                write!(f, "event at index {index} must have numeric start and end")
            }
            Self::OutsideDayWindow { index } => {
                write!(
                    f,
                    "event at index {index} lies outside the {DAY_MINUTES}-minute day window"
                )
            }
            Self::PlacementExhausted { id, divisor } => {
                write!(
                    f,
                    "no free column for event {id} after widening its group to divisor {divisor}"
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Final geometry for one event.
///
/// `width` and `left` are horizontal pixel-equivalent units inside the
/// calendar strip; `start` and `end` echo the input minutes. Results are
/// emitted sorted by `(start, end)`, so hosts match records back to their
/// own by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub id: EventId,
    pub start: u16,
    pub end: u16,
    pub width: u16,
    pub left: u16,
}

impl LayoutResult {
    /// Right edge (exclusive).
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.left.saturating_add(self.width)
    }

    /// Top edge in vertical pixel units. Minutes map 1:1 to vertical
    /// units; the renderer adds its own day-start offset.
    #[must_use]
    pub const fn top(&self) -> u16 {
        self.start
    }

    /// Height in vertical pixel units.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Horizontal extent as a span.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.left, self.width)
    }

    /// Check whether two placed events compete for the same pixels.
    ///
    /// Symmetric, and false for events that do not overlap in time:
    /// sharing a horizontal span is only a collision while both events are
    /// on screen at once. Boundary-touching extents do not collide.
    #[must_use]
    pub const fn collides_with(&self, other: &LayoutResult) -> bool {
        let in_time = self.end > other.start && self.start < other.end;
        in_time && self.span().overlaps(&other.span())
    }
}

/// A single-day layout computation.
///
/// Builder-style configuration over the calendar strip width:
///
/// ```
/// use daygrid_layout::{DayLayout, Event, EventId};
///
/// let events = [Event::new(EventId::from_raw(0), 0, 60)];
/// let placed = DayLayout::new().width(800).lay_out(&events).unwrap();
/// assert_eq!(placed[0].width, 800);
/// ```
#[derive(Debug, Clone)]
pub struct DayLayout {
    width: u16,
}

impl Default for DayLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl DayLayout {
    /// Create a layout over the default calendar width.
    pub const fn new() -> Self {
        Self {
            width: CALENDAR_WIDTH,
        }
    }

    /// Set the calendar strip width.
    pub const fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Assign every event a column and width.
    ///
    /// Input may arrive unsorted; results come back sorted by
    /// `(start, end)`. Inputs honoring the day-window contract never fail:
    /// the only error is the internal placement invariant.
    pub fn lay_out(&self, events: &[Event]) -> Result<Vec<LayoutResult>, LayoutError> {
        let mut columns: Vec<ColumnEvent> = events.iter().copied().map(ColumnEvent::new).collect();
        sort_by_start_and_end(&mut columns);
        link_earlier_overlaps(&mut columns);

        for idx in 0..columns.len() {
            self.place(&mut columns, idx)?;
        }

        Ok(columns
            .iter()
            .map(|col| {
                let span = col.span(self.width);
                LayoutResult {
                    id: col.event.id,
                    start: col.event.start,
                    end: col.event.end,
                    width: span.width,
                    left: span.left(),
                }
            })
            .collect())
    }

    /// Place one event, widening its colliding group if no column is free.
    fn place(&self, columns: &mut [ColumnEvent], idx: usize) -> Result<(), LayoutError> {
        // A colliding group shares one divisor, so any earlier overlap is a
        // valid representative to copy from.
        if let Some(&first) = columns[idx].earlier_overlaps.first() {
            let adopted = columns[first].divisor;
            columns[idx].divisor = adopted;
        }

        if self.try_to_fit(columns, idx) {
            return Ok(());
        }

        self.widen_group(columns, idx);

        // Widening adds exactly one column slot beyond the ones the first
        // scan exhausted, so this retry must find a free column.
        if self.try_to_fit(columns, idx) {
            return Ok(());
        }

        Err(LayoutError::PlacementExhausted {
            id: columns[idx].event.id,
            divisor: columns[idx].divisor,
        })
    }

    /// First-fit scan over the candidate's columns.
    fn try_to_fit(&self, columns: &mut [ColumnEvent], idx: usize) -> bool {
        for candidate in 0..columns[idx].divisor {
            if self.fits(columns, idx, candidate) {
                columns[idx].column = candidate;
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    message = "layout.place",
                    event = %columns[idx].event.id,
                    column = candidate,
                    divisor = columns[idx].divisor,
                );
                return true;
            }
        }
        false
    }

    /// True iff no earlier overlap occupies the candidate column's span.
    fn fits(&self, columns: &[ColumnEvent], idx: usize, candidate: u16) -> bool {
        let span = columns[idx].span_at(candidate, self.width);
        columns[idx]
            .earlier_overlaps
            .iter()
            .all(|&prev| !columns[prev].span(self.width).overlaps(&span))
    }

    /// Bump the divisor of every member of the colliding group by one.
    ///
    /// Already-placed members keep their columns: shrinking a span can
    /// only remove overlap, and `column < divisor` still holds after the
    /// bump.
    fn widen_group(&self, columns: &mut [ColumnEvent], idx: usize) {
        let group = colliding_group(columns, idx);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "layout.widen_group",
            event = %columns[idx].event.id,
            members = group.len(),
            divisor = columns[idx].divisor + 1,
        );
        for member in group {
            columns[member].divisor = columns[member].divisor.saturating_add(1);
        }
    }
}

/// Lay out a day's events over the default calendar width.
pub fn lay_out_day(events: &[Event]) -> Result<Vec<LayoutResult>, LayoutError> {
    DayLayout::new().lay_out(events)
}
