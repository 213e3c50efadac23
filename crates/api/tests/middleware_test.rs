use axum::http::StatusCode;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use slotkeeper_api::middleware::error_handling::{map_error, AppError};
use slotkeeper_core::{errors::ScheduleError, models::exception::ExceptionKind};

#[tokio::test]
async fn test_error_handling_not_found() {
    let response = map_error(ScheduleError::NotFound("Exception not found".to_string()));

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let response = map_error(ScheduleError::Validation("Invalid input".to_string()));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_ineligible() {
    let error = ScheduleError::Ineligible {
        kind: ExceptionKind::Working,
        date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
    };

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_error_handling_backend() {
    let response = map_error(ScheduleError::Backend(eyre::eyre!("Store unavailable")));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = ScheduleError::Internal(Box::new(std::io::Error::other("Internal error")));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_eyre_reports_become_backend_errors() {
    let error: AppError = eyre::eyre!("Store unavailable").into();

    assert!(matches!(error.0, ScheduleError::Backend(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
