use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ScheduleError, ScheduleResult},
    models::event::EventAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    #[default]
    Week,
    Month,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        })
    }
}

impl FromStr for ViewMode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            other => Err(ScheduleError::Validation(format!(
                "Unknown view mode '{}', expected day, week or month",
                other
            ))),
        }
    }
}

/// An inclusive span of calendar dates. Serializes as the
/// `date_from`/`date_to` query pair the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl DateRange {
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> ScheduleResult<Self> {
        if date_from > date_to {
            return Err(ScheduleError::Validation(format!(
                "date_from {} is after date_to {}",
                date_from, date_to
            )));
        }
        Ok(Self { date_from, date_to })
    }

    pub fn single(date: NaiveDate) -> Self {
        Self {
            date_from: date,
            date_to: date,
        }
    }

    /// Range shown by a calendar in `mode` around `selected`: the day itself,
    /// its Monday-to-Sunday week, or its calendar month.
    pub fn visible(selected: NaiveDate, mode: ViewMode) -> Self {
        match mode {
            ViewMode::Day => Self::single(selected),
            // Weeks and months cut off at the ends of the representable calendar.
            ViewMode::Week => {
                let offset = Duration::days(selected.weekday().num_days_from_monday() as i64);
                let monday = selected.checked_sub_signed(offset).unwrap_or(NaiveDate::MIN);
                Self {
                    date_from: monday,
                    date_to: monday
                        .checked_add_signed(Duration::days(6))
                        .unwrap_or(NaiveDate::MAX),
                }
            }
            ViewMode::Month => {
                let first = selected.with_day(1).unwrap_or(selected);
                let last = first
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(NaiveDate::MAX);
                Self {
                    date_from: first,
                    date_to: last,
                }
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.date_from <= date && date <= self.date_to
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.date_from.iter_days().take_while(move |date| *date <= self.date_to)
    }
}

/// Callbacks a calendar view reports back to the schedule page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarInteraction {
    DateClick(NaiveDate),
    EmptySlotClick { date: NaiveDate, time: NaiveTime },
    EventClick(EventAction),
    ViewModeChange(ViewMode),
    DateChange(NaiveDate),
}
