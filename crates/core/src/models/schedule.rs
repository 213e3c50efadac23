use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{clock, time_format::hhmm};

pub const DAYS_PER_WEEK: u8 = 7;

/// Hours used for a weekday the provider never configured.
pub fn default_start_time() -> NaiveTime {
    clock(9, 0)
}

pub fn default_end_time() -> NaiveTime {
    clock(18, 0)
}

/// Weekday index of a date, Monday = 0 through Sunday = 6.
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// One row of the weekly template, as exchanged with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub day_of_week: u8,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub is_working_day: bool,
}

impl ScheduleDay {
    /// A 09:00–18:00 row for `day_of_week`.
    pub fn with_default_hours(day_of_week: u8, is_working_day: bool) -> Self {
        Self {
            day_of_week,
            start_time: default_start_time(),
            end_time: default_end_time(),
            is_working_day,
        }
    }

    pub fn hours(&self) -> (NaiveTime, NaiveTime) {
        (self.start_time, self.end_time)
    }
}
