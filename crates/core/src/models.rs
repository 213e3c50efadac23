pub mod appointment;
pub mod event;
pub mod exception;
pub mod schedule;
pub mod time_format;

use chrono::NaiveTime;

/// Builds a wall-clock time from literal hour and minute values.
pub(crate) fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}
