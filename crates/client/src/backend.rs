use async_trait::async_trait;
use slotkeeper_core::{
    calendar::DateRange,
    errors::ScheduleResult,
    models::{
        appointment::Appointment,
        exception::{ExceptionPayload, ScheduleException},
        schedule::ScheduleDay,
    },
};
use uuid::Uuid;

/// The data API the schedule page depends on.
///
/// Range listings are inclusive on both ends. Exceptions are never fetched
/// one at a time.
#[async_trait]
pub trait ScheduleBackend: Send + Sync {
    /// Persisted template rows. May hold fewer than seven rows, or none.
    async fn weekly_schedule(&self) -> ScheduleResult<Vec<ScheduleDay>>;

    /// Overwrites the whole template in one call.
    async fn save_weekly_schedule(&self, days: Vec<ScheduleDay>) -> ScheduleResult<Vec<ScheduleDay>>;

    async fn list_exceptions(&self, range: DateRange) -> ScheduleResult<Vec<ScheduleException>>;

    async fn create_exception(&self, payload: ExceptionPayload) -> ScheduleResult<ScheduleException>;

    async fn update_exception(&self, id: Uuid, payload: ExceptionPayload) -> ScheduleResult<ScheduleException>;

    async fn delete_exception(&self, id: Uuid) -> ScheduleResult<()>;

    async fn list_appointments(&self, range: DateRange) -> ScheduleResult<Vec<Appointment>>;
}
