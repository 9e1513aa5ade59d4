//! # Booking Handlers
//!
//! HTTP surface of the booking ledger. The ledger sits behind an async mutex
//! in [`ApiState`], so submissions from concurrent requests run one at a time
//! within this process.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use studiobook_core::models::booking::{BookingRecord, BookingRequest};

use crate::{
    handlers::{studio::find_studio, ApiResponse},
    middleware::error_handling::AppError,
    ApiState,
};

/// Body of `POST /api/bookings`.
///
/// The studio name is resolved from the catalog. Missing text fields
/// deserialize as empty so they are reported as validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub studio_id: u32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time_slot: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A stored booking plus its long-form date for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: BookingRecord,
    pub display_date: String,
}

impl From<BookingRecord> for BookingView {
    fn from(booking: BookingRecord) -> Self {
        let display_date = booking.display_date();
        Self {
            booking,
            display_date,
        }
    }
}

pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ApiResponse<Vec<BookingView>>>, AppError> {
    let ledger = state.ledger.lock().await;
    let bookings = ledger.list_bookings().await?;
    Ok(Json(ApiResponse::ok(
        bookings.into_iter().map(BookingView::from).collect(),
    )))
}

/// Books a studio slot.
///
/// # Errors
///
/// * `StudioError::NotFound` - unknown studio
/// * `StudioError::Validation` - date, slot, name or email is empty
/// * `StudioError::Conflict` - the slot is already booked on that date
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingRecord>>), AppError> {
    let studio = find_studio(&state, payload.studio_id)?;
    let candidate = BookingRequest {
        studio_id: studio.id,
        studio_name: studio.name.clone(),
        date: payload.date,
        time_slot: payload.time_slot,
        name: payload.name,
        email: payload.email,
    };

    let ledger = state.ledger.lock().await;
    let record = ledger.submit_booking(candidate).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(record))))
}

pub async fn clear_bookings(State(state): State<Arc<ApiState>>) -> Result<StatusCode, AppError> {
    let ledger = state.ledger.lock().await;
    ledger.clear_all_bookings().await?;
    Ok(StatusCode::NO_CONTENT)
}
