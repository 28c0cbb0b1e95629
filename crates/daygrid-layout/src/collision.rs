#![forbid(unsafe_code)]

//! Collision analysis over a day's events.
//!
//! Events are sorted by `(start, end)` and linked with back-edges: each
//! event records the indices of the earlier-sorted events it overlaps in
//! time. Later events discover their own overlaps when they are processed,
//! so every pair is examined exactly once and the edges form a DAG over
//! sort order. The solver walks events left to right and only ever needs
//! to look backwards.

use daygrid_core::event::Event;
use daygrid_core::geometry::Span;
use rustc_hash::FxHashSet;

/// An event plus the placement state the solver refines.
///
/// `column` and `divisor` start at `0` and `1` (full width).
/// `earlier_overlaps` holds indices into the owning sorted sequence, never
/// references, so the collision graph cannot form ownership cycles.
#[derive(Debug, Clone)]
pub(crate) struct ColumnEvent {
    pub event: Event,
    /// Zero-based horizontal column. Always `< divisor`.
    pub column: u16,
    /// Width divisor: the event renders at `calendar_width / divisor`.
    pub divisor: u16,
    /// Earlier-sorted events this one overlaps in time.
    pub earlier_overlaps: Vec<usize>,
}

impl ColumnEvent {
    pub fn new(event: Event) -> Self {
        Self {
            event,
            column: 0,
            divisor: 1,
            earlier_overlaps: Vec::new(),
        }
    }

    /// Horizontal extent at the current column and divisor.
    pub fn span(&self, calendar_width: u16) -> Span {
        self.span_at(self.column, calendar_width)
    }

    /// Horizontal extent the event would occupy at `column`.
    ///
    /// Width floor-divides so columns stay pixel-aligned; any remainder of
    /// the strip is left unused.
    pub fn span_at(&self, column: u16, calendar_width: u16) -> Span {
        let width = calendar_width / self.divisor;
        Span::new(width.saturating_mul(column), width)
    }
}

/// Sort events ascending by start, ties broken by ascending end.
///
/// Stable and idempotent. The solver's left-to-right placement relies on
/// this order: when an event is placed, everything it can collide with in
/// space already holds a final column.
pub(crate) fn sort_by_start_and_end(columns: &mut [ColumnEvent]) {
    columns.sort_by_key(|c| (c.event.start, c.event.end));
}

/// Record, for each event, the earlier-sorted events it overlaps in time.
pub(crate) fn link_earlier_overlaps(columns: &mut [ColumnEvent]) {
    for idx in 1..columns.len() {
        let mut overlaps = Vec::new();
        for prev in 0..idx {
            if columns[prev].event.overlaps(&columns[idx].event) {
                overlaps.push(prev);
            }
        }
        columns[idx].earlier_overlaps = overlaps;
    }
}

/// Transitive closure of time overlaps reachable through earlier events.
///
/// Contains `idx` itself plus every event reachable by repeatedly
/// following `earlier_overlaps` edges, each member once. When the solver
/// widens, every member of this set gets the new divisor.
pub(crate) fn colliding_group(columns: &[ColumnEvent], idx: usize) -> Vec<usize> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![idx];
    let mut group = Vec::new();

    while let Some(current) = stack.pop() {
        if !seen.insert(current) {
            continue;
        }
        group.push(current);
        stack.extend(columns[current].earlier_overlaps.iter().copied());
    }

    group
}
