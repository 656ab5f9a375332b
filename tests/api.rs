use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use trinetra_proximity::{routes, AppState, Config};

fn app() -> Router {
    routes::create_router(AppState {
        config: Config::default(),
    })
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn health_is_ok() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn nearby_returns_only_users_within_radius() {
    // Volunteer near Ramkund; one user ~60 m away, another ~60 km away
    let body = json!({
        "reference": { "id": "vol-1", "latitude": 19.9975, "longitude": 73.7898 },
        "candidates": [
            { "id": "user-1", "latitude": 19.9980, "longitude": 73.7900, "name": "Asha" },
            { "id": "user-2", "latitude": 20.5, "longitude": 74.0 }
        ],
        "radius_km": 1.0
    });

    let (status, matches) = post_json(app(), "/api/proximity/nearby", body).await;
    assert_eq!(status, StatusCode::OK);

    let matches = matches.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["point"]["id"], "user-1");
    // Opaque fields ride along untouched
    assert_eq!(matches[0]["point"]["name"], "Asha");
    let distance = matches[0]["distance_km"].as_f64().unwrap();
    assert!(distance < 0.1, "got {distance}");
}

#[tokio::test]
async fn nearby_rejects_non_positive_radius() {
    let body = json!({
        "reference": { "id": "vol-1", "latitude": 19.9975, "longitude": 73.7898 },
        "candidates": [],
        "radius_km": -5.0
    });

    let (status, error) = post_json(app(), "/api/proximity/nearby", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].as_str().unwrap().contains("radius"));
}

#[tokio::test]
async fn nearby_rejects_unlocated_reference() {
    let body = json!({
        "reference": { "id": "vol-1" },
        "candidates": [
            { "id": "user-1", "latitude": 19.9980, "longitude": 73.7900 }
        ],
        "radius_km": 1.0
    });

    let (status, error) = post_json(app(), "/api/proximity/nearby", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].as_str().unwrap().contains("coordinate"));
}

#[tokio::test]
async fn clusters_groups_dense_markers_and_drops_singletons() {
    let body = json!({
        "points": [
            { "id": "a", "latitude": 19.9975, "longitude": 73.7898 },
            { "id": "b", "latitude": 19.9980, "longitude": 73.7900 },
            { "id": "lone", "latitude": 20.5, "longitude": 74.0 }
        ],
        "radius_km": 1.0
    });

    let (status, clusters) = post_json(app(), "/api/proximity/clusters", body).await;
    assert_eq!(status, StatusCode::OK);

    let clusters = clusters.as_array().unwrap();
    assert_eq!(clusters.len(), 1);
    let members = clusters[0]["members"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["id"], "a");
    assert_eq!(members[1]["id"], "b");

    let center_lat = clusters[0]["center"]["latitude"].as_f64().unwrap();
    assert!((center_lat - 19.99775).abs() < 1e-6);
}

#[tokio::test]
async fn oversized_snapshot_is_rejected() {
    let mut config = Config::default();
    config.max_points = 2;
    let app = routes::create_router(AppState { config });

    let body = json!({
        "points": [
            { "id": "a", "latitude": 0.0, "longitude": 0.0 },
            { "id": "b", "latitude": 0.0, "longitude": 0.1 },
            { "id": "c", "latitude": 0.0, "longitude": 0.2 }
        ],
        "radius_km": 1.0
    });

    let (status, error) = post_json(app, "/api/proximity/clusters", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].as_str().unwrap().contains("limit"));
}
