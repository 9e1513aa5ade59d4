//! # Studio Handlers
//!
//! Read-only endpoints over the studio catalog loaded at startup.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use studiobook_core::{
    directory::{
        self, DirectoryStats, NearbyStudio, Pagination, StudioQuery, DEFAULT_LIMIT, DEFAULT_PAGE,
        DEFAULT_SUGGESTIONS,
    },
    errors::StudioError,
    models::{
        slot::Slot,
        studio::{Coordinates, Studio},
    },
};

use crate::{handlers::ApiResponse, middleware::error_handling::AppError, ApiState};

/// Radius used by the nearby endpoint when none is given.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Query parameters for the studio listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListStudiosQuery {
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Studios per page (default: 12)
    pub limit: Option<i64>,
    /// Case-insensitive substring matched against city, area and address
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StudioListResponse {
    pub success: bool,
    pub data: Vec<Studio>,
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: Option<f64>,
}

/// Lists studios page by page, optionally filtered by location.
///
/// # Endpoint
///
/// ```text
/// GET /api/studios?page=1&limit=12&search=dhaka
/// ```
///
/// # Errors
///
/// * `StudioError::Validation` - page or limit below 1
pub async fn list_studios(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListStudiosQuery>,
) -> Result<Json<StudioListResponse>, AppError> {
    let query = StudioQuery {
        page: query.page.unwrap_or(DEFAULT_PAGE),
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
        search: query.search,
    };
    let page = directory::query_studios(state.catalog.studios(), &query)?;

    Ok(Json(StudioListResponse {
        success: true,
        data: page.data,
        pagination: page.pagination,
    }))
}

pub async fn get_studio(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<Studio>>, AppError> {
    let studio = find_studio(&state, id)?;
    Ok(Json(ApiResponse::ok(studio.clone())))
}

/// Bookable one-hour slots for a studio, e.g. `["9:00 - 10:00", ...]`.
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<Vec<Slot>>>, AppError> {
    let studio = find_studio(&state, id)?;
    Ok(Json(ApiResponse::ok(studio.slots()?)))
}

pub async fn suggest_locations(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SuggestionQuery>,
) -> Json<ApiResponse<Vec<String>>> {
    let suggestions = directory::location_suggestions(
        state.catalog.studios(),
        query.q.as_deref().unwrap_or_default(),
        query.limit.unwrap_or(DEFAULT_SUGGESTIONS),
    );
    Json(ApiResponse::ok(suggestions))
}

/// Studios within a radius of the caller's position, nearest first.
///
/// # Endpoint
///
/// ```text
/// GET /api/studios/nearby?lat=23.79&lng=90.41&radius_km=5
/// ```
pub async fn nearby(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<ApiResponse<Vec<NearbyStudio>>>, AppError> {
    let origin = Coordinates {
        latitude: query.lat,
        longitude: query.lng,
    };
    let radius_km = query.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    let studios = directory::nearby_studios(state.catalog.studios(), origin, radius_km)?;
    Ok(Json(ApiResponse::ok(studios)))
}

pub async fn stats(State(state): State<Arc<ApiState>>) -> Json<ApiResponse<DirectoryStats>> {
    Json(ApiResponse::ok(directory::directory_stats(
        state.catalog.studios(),
    )))
}

pub(crate) fn find_studio(state: &ApiState, id: u32) -> Result<&Studio, AppError> {
    state
        .catalog
        .find(id)
        .ok_or_else(|| AppError(StudioError::NotFound(format!("Studio with ID {} not found", id))))
}
