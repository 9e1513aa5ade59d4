//! # Studio Directory Queries
//!
//! In-process queries over the studio catalog: location search with
//! pagination, search suggestions, radius search and summary stats.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{StudioError, StudioResult},
    models::studio::{Coordinates, Studio},
};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 12;
pub const DEFAULT_SUGGESTIONS: usize = 5;

/// Mean earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioQuery {
    pub page: i64,
    pub limit: i64,
    pub search: Option<String>,
}

impl Default for StudioQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_studios: usize,
    pub limit: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudioPage {
    pub data: Vec<Studio>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyStudio {
    pub studio: Studio,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub total_studios: usize,
    pub average_rating: f64,
    pub average_price_per_hour: f64,
}

/// Studios whose city, area or address contains `query`, ignoring case.
///
/// A blank query matches everything.
pub fn search_studios<'a>(studios: &'a [Studio], query: &str) -> Vec<&'a Studio> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return studios.iter().collect();
    }

    studios
        .iter()
        .filter(|studio| {
            let location = &studio.location;
            location.city.to_lowercase().contains(&needle)
                || location.area.to_lowercase().contains(&needle)
                || location.address.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Filters by `query.search` and returns the requested page.
///
/// # Errors
///
/// * `StudioError::Validation` - `page` or `limit` is below 1
pub fn query_studios(studios: &[Studio], query: &StudioQuery) -> StudioResult<StudioPage> {
    if query.page < 1 || query.limit < 1 {
        return Err(StudioError::Validation(
            "Page and limit must be greater than 0".to_string(),
        ));
    }

    let page = query.page as usize;
    let limit = query.limit as usize;
    let filtered = search_studios(studios, query.search.as_deref().unwrap_or_default());

    let total_studios = filtered.len();
    let total_pages = total_studios.div_ceil(limit);
    let data = filtered
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect();

    Ok(StudioPage {
        data,
        pagination: Pagination {
            current_page: page,
            total_pages,
            total_studios,
            limit,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        },
    })
}

/// Distinct city and area names containing `query`, sorted, at most `max`.
pub fn location_suggestions(studios: &[Studio], query: &str, max: usize) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let locations: BTreeSet<&str> = studios
        .iter()
        .flat_map(|studio| [studio.location.city.as_str(), studio.location.area.as_str()])
        .collect();

    locations
        .into_iter()
        .filter(|location| location.to_lowercase().contains(&needle))
        .take(max)
        .map(str::to_string)
        .collect()
}

/// Great-circle distance between two points in kilometres.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Studios within `radius_km` of `origin`, nearest first.
///
/// # Errors
///
/// * `StudioError::Validation` - coordinates out of range or a negative radius
pub fn nearby_studios(
    studios: &[Studio],
    origin: Coordinates,
    radius_km: f64,
) -> StudioResult<Vec<NearbyStudio>> {
    if !(-90.0..=90.0).contains(&origin.latitude) {
        return Err(StudioError::Validation(format!(
            "Latitude {} is out of range",
            origin.latitude
        )));
    }
    if !(-180.0..=180.0).contains(&origin.longitude) {
        return Err(StudioError::Validation(format!(
            "Longitude {} is out of range",
            origin.longitude
        )));
    }
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(StudioError::Validation(format!(
            "Radius {} must be a non-negative number of kilometres",
            radius_km
        )));
    }

    let mut nearby: Vec<NearbyStudio> = studios
        .iter()
        .map(|studio| NearbyStudio {
            distance_km: haversine_km(origin, studio.location.coordinates),
            studio: studio.clone(),
        })
        .filter(|candidate| candidate.distance_km <= radius_km)
        .collect();
    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    Ok(nearby)
}

pub fn directory_stats(studios: &[Studio]) -> DirectoryStats {
    let total_studios = studios.len();
    if total_studios == 0 {
        return DirectoryStats {
            total_studios,
            average_rating: 0.0,
            average_price_per_hour: 0.0,
        };
    }

    let count = total_studios as f64;
    DirectoryStats {
        total_studios,
        average_rating: studios.iter().map(|s| s.rating).sum::<f64>() / count,
        average_price_per_hour: studios.iter().map(|s| s.price_per_hour).sum::<f64>() / count,
    }
}
