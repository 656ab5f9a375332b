//! Geospatial proximity engine: haversine distance, radius queries, and
//! greedy marker clustering over snapshots of located entities.
//!
//! Everything here is pure and synchronous. Callers hand in a slice of
//! points mirrored from the live store; each call recomputes from scratch
//! and returns fresh output, so the cheap way to stay current is to call
//! again on every snapshot.

mod cluster;
mod distance;
mod point;
mod radius;

pub use cluster::{build_clusters, Cluster};
pub use distance::distance_km;
pub use point::{Coordinate, GeoPoint};
pub use radius::{find_within_radius, Match};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid coordinate: latitude={latitude:?}, longitude={longitude:?}")]
    InvalidCoordinate {
        latitude: Option<f64>,
        longitude: Option<f64>,
    },

    #[error("radius must be a positive number of kilometers, got {0}")]
    InvalidRadius(f64),
}
