//! # Studiobook API
//!
//! The API crate provides the web server for the studio booking directory.
//! It exposes the studio catalog, slot generation and the booking ledger as
//! JSON endpoints.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into core crate calls
//! - **Middleware**: Error mapping to HTTP responses
//! - **Config**: Environment-driven application configuration
//!
//! The API uses Axum as the web framework; persistence goes through the
//! storage backends of the db crate.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling for handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use studiobook_core::{catalog::StudioCatalog, ledger::BookingLedger, storage::KeyValueStore};
use tokio::{net::TcpListener, sync::Mutex};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Ledger persisted through whichever backend was configured.
pub type SharedLedger = BookingLedger<Arc<dyn KeyValueStore>>;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Studio dataset loaded at startup
    pub catalog: StudioCatalog,
    /// Booking ledger; the mutex keeps one submission in flight at a time
    pub ledger: Mutex<SharedLedger>,
}

impl ApiState {
    pub fn new(catalog: StudioCatalog, ledger: SharedLedger) -> Self {
        Self {
            catalog,
            ledger: Mutex::new(ledger),
        }
    }
}

/// Installs the global tracing subscriber at the given level.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Studio directory endpoints
        .merge(routes::studio::routes())
        // Booking ledger endpoints
        .merge(routes::booking::routes())
        // Attach shared state to all routes
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin '{}'", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins))
}

/// Starts the API server
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `catalog` - Studio dataset served by the directory endpoints
/// * `store` - Backend the booking ledger persists to
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use studiobook_api::config::ApiConfig;
/// use studiobook_core::catalog::StudioCatalog;
///
/// let config = ApiConfig::from_env()?;
/// let catalog = StudioCatalog::load(&config.studios_data_path)?;
/// let store = studiobook_db::open_store(&config.storage).await?;
/// studiobook_api::start_server(config, catalog, store).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    catalog: StudioCatalog,
    store: Arc<dyn KeyValueStore>,
) -> Result<()> {
    let ledger = BookingLedger::with_key(store, config.bookings_key.clone());
    let state = Arc::new(ApiState::new(catalog, ledger));

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
