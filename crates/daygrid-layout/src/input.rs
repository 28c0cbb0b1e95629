#![forbid(unsafe_code)]

//! Raw input boundary.
//!
//! Hosts hand the layout engine untyped event lists (form payloads,
//! fixture files). Shape is checked here, once, so the typed model stays
//! total and the solver never re-validates.

use daygrid_core::event::{Event, EventId};
use serde_json::Value;

use crate::LayoutError;

/// Parse a JSON array of `{id, start, end}` objects into events.
///
/// Fails with [`LayoutError::NotAnArray`] unless the top level is an
/// array, and with [`LayoutError::MalformedEvent`] for an element whose
/// `start` or `end` is missing or not an unsigned number. Elements
/// without an `id` get their array index.
///
/// Values are not range-checked against the day window; that contract
/// stays with the caller (see [`check_day_window`]).
pub fn events_from_value(value: &Value) -> Result<Vec<Event>, LayoutError> {
    let items = value.as_array().ok_or(LayoutError::NotAnArray)?;

    let mut events = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let start = minute_field(item, "start").ok_or(LayoutError::MalformedEvent { index })?;
        let end = minute_field(item, "end").ok_or(LayoutError::MalformedEvent { index })?;
        let id = item
            .get("id")
            .and_then(Value::as_u64)
            .unwrap_or(index as u64);
        events.push(Event::new(EventId::from_raw(id), start, end));
    }
    Ok(events)
}

/// Check every event against the `start < end <= DAY_MINUTES` contract.
///
/// The solver assumes the contract and never calls this; form-collection
/// layers run it before accepting input.
pub fn check_day_window(events: &[Event]) -> Result<(), LayoutError> {
    match events.iter().position(|event| !event.is_within_day()) {
        Some(index) => Err(LayoutError::OutsideDayWindow { index }),
        None => Ok(()),
    }
}

fn minute_field(item: &Value, key: &str) -> Option<u16> {
    item.get(key)?
        .as_u64()
        .and_then(|raw| u16::try_from(raw).ok())
}
