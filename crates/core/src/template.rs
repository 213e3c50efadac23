use chrono::{NaiveDate, NaiveTime};

use crate::{
    errors::{ScheduleError, ScheduleResult},
    models::schedule::{day_of_week, ScheduleDay, DAYS_PER_WEEK},
};

/// Weekdays that work in a template nobody has saved yet (Monday..Friday).
const INITIAL_WORKING_DAYS: u8 = 5;

/// A single-field edit of one weekday row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    StartTime(NaiveTime),
    EndTime(NaiveTime),
    IsWorkingDay(bool),
}

/// The provider's recurring availability, always exactly one row per weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyTemplate {
    days: [ScheduleDay; DAYS_PER_WEEK as usize],
}

impl Default for WeeklyTemplate {
    fn default() -> Self {
        Self::initial()
    }
}

impl WeeklyTemplate {
    /// In-memory state before anything has been loaded: Monday to Friday
    /// working 09:00–18:00, weekend off.
    pub fn initial() -> Self {
        Self {
            days: std::array::from_fn(|index| {
                let day = index as u8;
                ScheduleDay::with_default_hours(day, day < INITIAL_WORKING_DAYS)
            }),
        }
    }

    /// Builds a template from whatever the backend returned.
    ///
    /// Weekdays with no row get 09:00–18:00, non-working. Rows with an
    /// out-of-range weekday are ignored and the first row wins on duplicates.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ScheduleDay>,
    {
        let mut slots: [Option<ScheduleDay>; DAYS_PER_WEEK as usize] = [None; DAYS_PER_WEEK as usize];
        for row in rows {
            if let Some(slot) = slots.get_mut(row.day_of_week as usize) {
                if slot.is_none() {
                    *slot = Some(row);
                }
            }
        }

        Self {
            days: std::array::from_fn(|index| {
                slots[index].unwrap_or_else(|| ScheduleDay::with_default_hours(index as u8, false))
            }),
        }
    }

    /// Strict counterpart of [`WeeklyTemplate::from_rows`] used for bulk
    /// replacement: exactly one row for each weekday, nothing else.
    pub fn try_from_complete(rows: &[ScheduleDay]) -> ScheduleResult<Self> {
        if rows.len() != DAYS_PER_WEEK as usize {
            return Err(ScheduleError::Validation(format!(
                "Weekly schedule must contain {} days, got {}",
                DAYS_PER_WEEK,
                rows.len()
            )));
        }

        let mut seen = [false; DAYS_PER_WEEK as usize];
        for row in rows {
            let Some(flag) = seen.get_mut(row.day_of_week as usize) else {
                return Err(ScheduleError::Validation(format!(
                    "day_of_week must be between 0 and 6, got {}",
                    row.day_of_week
                )));
            };
            if *flag {
                return Err(ScheduleError::Validation(format!(
                    "day_of_week {} appears more than once",
                    row.day_of_week
                )));
            }
            *flag = true;
        }

        Ok(Self::from_rows(rows.iter().copied()))
    }

    pub fn days(&self) -> &[ScheduleDay] {
        &self.days
    }

    pub fn day(&self, day_of_week: u8) -> Option<&ScheduleDay> {
        self.days.get(day_of_week as usize)
    }

    pub fn for_date(&self, date: NaiveDate) -> &ScheduleDay {
        &self.days[day_of_week(date) as usize]
    }

    pub fn is_working_date(&self, date: NaiveDate) -> bool {
        self.for_date(date).is_working_day
    }

    /// Stored hours for the date's weekday, whether or not it is a working day.
    pub fn hours_for(&self, date: NaiveDate) -> (NaiveTime, NaiveTime) {
        self.for_date(date).hours()
    }

    /// Edits one field in memory. Turning a day off keeps its hours.
    pub fn set_field(&mut self, day_of_week: u8, field: TemplateField) -> ScheduleResult<()> {
        let day = self.days.get_mut(day_of_week as usize).ok_or_else(|| {
            ScheduleError::Validation(format!("day_of_week must be between 0 and 6, got {}", day_of_week))
        })?;

        match field {
            TemplateField::StartTime(time) => day.start_time = time,
            TemplateField::EndTime(time) => day.end_time = time,
            TemplateField::IsWorkingDay(flag) => day.is_working_day = flag,
        }
        Ok(())
    }

    /// Working days need a non-empty span. Non-working rows are not checked.
    pub fn validate(&self) -> ScheduleResult<()> {
        for day in self.days.iter().filter(|day| day.is_working_day) {
            if day.start_time >= day.end_time {
                return Err(ScheduleError::Validation(format!(
                    "Day {}: start time {} must be before end time {}",
                    day.day_of_week,
                    day.start_time.format("%H:%M"),
                    day.end_time.format("%H:%M")
                )));
            }
        }
        Ok(())
    }

    pub fn to_rows(&self) -> Vec<ScheduleDay> {
        self.days.to_vec()
    }
}
