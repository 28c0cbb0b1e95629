#![forbid(unsafe_code)]

//! Core: event model and span geometry for single-day calendar layout.
//!
//! # Role in daygrid
//! `daygrid-core` is the leaf layer. It owns the immutable event record a
//! host hands to the layout engine and the half-open horizontal spans the
//! solver places events into.
//!
//! # Primary responsibilities
//! - **Event**: an `{id, start, end}` record in minutes from the day-start
//!   anchor, with half-open overlap semantics.
//! - **Span**: a 1-D horizontal extent within the calendar strip.
//!
//! The solver (`daygrid-layout`) consumes these types and re-exports them,
//! so most hosts only depend on the layout crate.

pub mod event;
pub mod geometry;
