use chrono::NaiveDate;
use thiserror::Error;

use crate::models::exception::ExceptionKind;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Exception type '{kind}' is not allowed on {date}")]
    Ineligible { kind: ExceptionKind, date: NaiveDate },

    #[error("Backend error: {0}")]
    Backend(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
