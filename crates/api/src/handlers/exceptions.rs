use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use slotkeeper_core::{
    errors::ScheduleError,
    models::exception::{ExceptionPayload, ScheduleException},
};
use slotkeeper_store::repositories::exception;
use uuid::Uuid;

use super::RangeQuery;
use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_exceptions(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<ScheduleException>>, AppError> {
    let range = query.to_range()?;
    let exceptions = exception::list_exceptions_in_range(&state.store, range.date_from, range.date_to).await?;
    Ok(Json(exceptions))
}

#[axum::debug_handler]
pub async fn create_exception(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ExceptionPayload>,
) -> Result<(StatusCode, Json<ScheduleException>), AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let created = exception::create_exception(&state.store, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[axum::debug_handler]
pub async fn update_exception(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ExceptionPayload>,
) -> Result<Json<ScheduleException>, AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let updated = exception::update_exception(&state.store, id, payload)
        .await?
        .ok_or_else(|| ScheduleError::NotFound(format!("Schedule exception with ID {} not found", id)))?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_exception(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !exception::delete_exception(&state.store, id).await? {
        return Err(AppError(ScheduleError::NotFound(format!(
            "Schedule exception with ID {} not found",
            id
        ))));
    }
    Ok(StatusCode::NO_CONTENT)
}
