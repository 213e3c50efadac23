use chrono::{DateTime, Utc};
use slotkeeper_core::models::exception::ScheduleException;

#[derive(Debug, Clone)]
pub struct StoredException {
    pub sequence: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub exception: ScheduleException,
}
