use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use slotkeeper_core::{
    calendar::DateRange,
    models::appointment::{Appointment, AppointmentStatus},
};
use slotkeeper_store::repositories::appointment;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct AppointmentQuery {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub status: Option<AppointmentStatus>,
}

/// Bookings in the range, ordered by date and start time. Cancelled ones are
/// included unless a status filter says otherwise.
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let range = DateRange::new(query.date_from, query.date_to)?;
    let appointments =
        appointment::list_appointments_in_range(&state.store, range.date_from, range.date_to, query.status).await?;
    Ok(Json(appointments))
}
