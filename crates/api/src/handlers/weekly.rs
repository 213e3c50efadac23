use std::sync::Arc;

use axum::{extract::State, Json};
use slotkeeper_core::{models::schedule::ScheduleDay, template::WeeklyTemplate};
use slotkeeper_store::repositories::weekly;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn get_weekly_schedule(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ScheduleDay>>, AppError> {
    let days = weekly::get_weekly_schedule(&state.store).await?;
    Ok(Json(days))
}

/// Replaces the whole template. The body must hold exactly one row per
/// weekday, and every working day needs its start before its end.
#[axum::debug_handler]
pub async fn replace_weekly_schedule(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Vec<ScheduleDay>>,
) -> Result<Json<Vec<ScheduleDay>>, AppError> {
    let template = WeeklyTemplate::try_from_complete(&payload)?;
    template.validate()?;

    let days = weekly::replace_weekly_schedule(&state.store, template.days()).await?;
    Ok(Json(days))
}
