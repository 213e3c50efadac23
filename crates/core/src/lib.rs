//! # SlotKeeper Core
//!
//! Availability model for a service provider: a recurring weekly template,
//! dated exceptions that override it, and the projection of both (plus booked
//! appointments) into display-ready calendar events.
//!
//! Everything in this crate is synchronous and free of I/O. Fetching and
//! persisting live in `slotkeeper-client` and the reference backend.

/// Visible ranges and calendar view interactions
pub mod calendar;
/// Exception editor dialog state machine
pub mod editor;
/// Which exception types a date accepts, and the defaults for a new one
pub mod eligibility;
pub mod errors;
/// Generation tokens for discarding stale range fetches
pub mod fetch;
pub mod models;
/// Merge of template, exceptions and appointments into calendar events
pub mod projector;
/// Fixed presentation table for exception types and appointments
pub mod style;
/// The seven-day recurring schedule
pub mod template;
