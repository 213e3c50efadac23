use async_trait::async_trait;
use mockall::mock;
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

use crate::backend::ScheduleBackend;

// Mock backend for testing the page controller
mock! {
    pub Backend {}

    #[async_trait]
    impl ScheduleBackend for Backend {
        async fn weekly_schedule(&self) -> ScheduleResult<Vec<ScheduleDay>>;

        async fn save_weekly_schedule(&self, days: Vec<ScheduleDay>) -> ScheduleResult<Vec<ScheduleDay>>;

        async fn list_exceptions(&self, range: DateRange) -> ScheduleResult<Vec<ScheduleException>>;

        async fn create_exception(&self, payload: ExceptionPayload) -> ScheduleResult<ScheduleException>;

        async fn update_exception(&self, id: Uuid, payload: ExceptionPayload) -> ScheduleResult<ScheduleException>;

        async fn delete_exception(&self, id: Uuid) -> ScheduleResult<()>;

        async fn list_appointments(&self, range: DateRange) -> ScheduleResult<Vec<Appointment>>;
    }
}
