pub mod appointments;
pub mod exceptions;
pub mod weekly;

use chrono::NaiveDate;
use serde::Deserialize;
use slotkeeper_core::{calendar::DateRange, errors::ScheduleResult};

/// `date_from`/`date_to` query pair shared by the range endpoints.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl RangeQuery {
    pub fn to_range(&self) -> ScheduleResult<DateRange> {
        DateRange::new(self.date_from, self.date_to)
    }
}
