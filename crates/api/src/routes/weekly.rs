use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/schedule/weekly",
        get(handlers::weekly::get_weekly_schedule).put(handlers::weekly::replace_weekly_schedule),
    )
}
