use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/bookings",
        get(handlers::booking::list_bookings)
            .post(handlers::booking::create_booking)
            .delete(handlers::booking::clear_bookings),
    )
}
