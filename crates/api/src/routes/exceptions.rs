use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/schedule/exceptions",
            get(handlers::exceptions::list_exceptions).post(handlers::exceptions::create_exception),
        )
        .route(
            "/api/schedule/exceptions/:id",
            patch(handlers::exceptions::update_exception).delete(handlers::exceptions::delete_exception),
        )
}
