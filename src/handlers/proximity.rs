use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::geo::{build_clusters, find_within_radius, GeoPoint};
use crate::AppState;

// ============ Radius query ============

#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
    pub reference: GeoPoint,
    pub candidates: Vec<GeoPoint>,
    pub radius_km: f64,
}

#[derive(Debug, Serialize)]
pub struct NearbyMatch {
    pub point: GeoPoint,
    pub distance_km: f64,
}

/// Entities within a radius of a reference point, nearest first.
///
/// Used by the alerting workflow ("which volunteers are near this lost-person
/// report") and the map screens ("who is around this marker").
pub async fn nearby(
    State(state): State<AppState>,
    Json(payload): Json<NearbyRequest>,
) -> AppResult<Json<Vec<NearbyMatch>>> {
    check_snapshot_size(&state, payload.candidates.len())?;

    let matches = find_within_radius(&payload.reference, &payload.candidates, payload.radius_km)?;

    tracing::debug!(
        reference = %payload.reference.id,
        candidates = payload.candidates.len(),
        radius_km = payload.radius_km,
        matched = matches.len(),
        "Radius query served"
    );

    let response = matches
        .into_iter()
        .map(|m| NearbyMatch {
            point: m.point.clone(),
            distance_km: m.distance_km,
        })
        .collect();

    Ok(Json(response))
}

// ============ Marker clustering ============

#[derive(Debug, Deserialize)]
pub struct ClustersRequest {
    pub points: Vec<GeoPoint>,
    pub radius_km: f64,
}

#[derive(Debug, Serialize)]
pub struct ClusterCenter {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct ClusterResponse {
    pub center: ClusterCenter,
    pub members: Vec<GeoPoint>,
}

/// Group a snapshot of map markers into proximity clusters.
///
/// Points that end up alone stay out of the response; the client renders
/// them as ordinary individual markers.
pub async fn clusters(
    State(state): State<AppState>,
    Json(payload): Json<ClustersRequest>,
) -> AppResult<Json<Vec<ClusterResponse>>> {
    check_snapshot_size(&state, payload.points.len())?;

    let clusters = build_clusters(&payload.points, payload.radius_km)?;

    tracing::debug!(
        points = payload.points.len(),
        radius_km = payload.radius_km,
        clusters = clusters.len(),
        "Cluster pass served"
    );

    let response = clusters
        .into_iter()
        .map(|c| ClusterResponse {
            center: ClusterCenter {
                latitude: c.center.latitude,
                longitude: c.center.longitude,
            },
            members: c.members.into_iter().cloned().collect(),
        })
        .collect();

    Ok(Json(response))
}

// ============ Health ============

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn check_snapshot_size(state: &AppState, len: usize) -> AppResult<()> {
    if len > state.config.max_points {
        return Err(AppError::BadRequest(format!(
            "Snapshot has {} points, limit is {}",
            len, state.config.max_points
        )));
    }
    Ok(())
}
