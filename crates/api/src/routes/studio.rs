use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/studios", get(handlers::studio::list_studios))
        .route(
            "/api/studios/suggestions",
            get(handlers::studio::suggest_locations),
        )
        .route("/api/studios/nearby", get(handlers::studio::nearby))
        .route("/api/studios/stats", get(handlers::studio::stats))
        .route("/api/studios/:id", get(handlers::studio::get_studio))
        .route("/api/studios/:id/slots", get(handlers::studio::get_slots))
}
