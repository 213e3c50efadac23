//! # SlotKeeper API
//!
//! Reference backend for the availability core. It serves the REST contract
//! the schedule page talks to: the weekly template, dated exceptions and a
//! read-only appointment feed, all backed by the in-memory store.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate input and call the store repositories
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Environment-driven server settings

/// Configuration module for API settings
pub mod config;
/// Request handlers for the schedule resources
pub mod handlers;
/// Error mapping shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use slotkeeper_store::StorePool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Store holding the template, exceptions and appointments
    pub store: StorePool,
}

/// Builds the application router with every route and the shared state
/// attached, without any middleware layers.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Weekly template endpoints
        .merge(routes::weekly::routes())
        // Dated exception endpoints
        .merge(routes::exceptions::routes())
        // Read-only appointment feed
        .merge(routes::appointments::routes())
        .with_state(state)
}

/// Wraps the router in tracing, timeout and (when configured) CORS layers.
pub fn app(config: &config::ApiConfig, state: Arc<ApiState>) -> Router {
    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    match &config.cors_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();

            let cors = CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
                .allow_origin(origins)
                .allow_credentials(true);

            app.layer(cors)
        }
        None => app,
    }
}

/// Starts the API server with the provided configuration and store
///
/// Installs the global tracing subscriber at the configured level, binds the
/// listener and serves until the process is stopped.
pub async fn start_server(config: config::ApiConfig, store: StorePool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState { store });
    let app = app(&config, state);

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
