//! # Slotbook API
//!
//! The API crate provides the web server for the Slotbook service: doctors
//! and the time slots they offer.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Request field extraction and error-to-response mapping
//! - **Config**: Handle environment and application configuration
//!
//! Handlers never touch a database directly. They talk to the
//! [`ClinicStore`] held in [`ApiState`], so the same router runs over
//! PostgreSQL in production and over an in-memory store in tests.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Request field extraction and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use slotbook_core::store::ClinicStore;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use slotbook_api::{build_router, ApiState};
/// use slotbook_db::memory::InMemoryStore;
///
/// let state = Arc::new(ApiState::new(Arc::new(InMemoryStore::new())));
/// let app = build_router(state);
/// ```
pub struct ApiState {
    /// Persistence port used by every handler
    pub store: Arc<dyn ClinicStore>,
}

impl ApiState {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Status, health and version endpoints
        .merge(routes::health::routes())
        // Doctor endpoints
        .merge(routes::doctor::routes())
        // Slot endpoints
        .merge(routes::slot::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and store
///
/// This function sets up logging, configures routes and serves HTTP until
/// the listener fails.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use std::sync::Arc;
/// use slotbook_api::{config::ApiConfig, start_server};
/// use slotbook_db::{create_pool, store::PgStore};
///
/// let config = ApiConfig::from_env()?;
/// let db_pool = create_pool(&config.database_url, config.max_connections).await?;
/// start_server(config, Arc::new(PgStore::new(db_pool))).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn ClinicStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(store));
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true))
}
