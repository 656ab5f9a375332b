use serde::{Deserialize, Serialize};

use super::GeoError;

/// A validated (latitude, longitude) pair in degrees.
///
/// Construction is the only way to obtain one, so every `Coordinate` in the
/// system is finite and in range: latitude in [-90, 90], longitude in
/// [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GeoError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(GeoError::InvalidCoordinate {
                latitude: Some(latitude),
                longitude: Some(longitude),
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// An identified entity with optional coordinates and an opaque payload.
///
/// Records mirrored from the live store frequently lack GPS data; both
/// coordinate fields are therefore optional, and a point only participates
/// in distance computations when [`GeoPoint::coordinate`] returns `Some`.
/// The payload is carried through every operation unchanged and never
/// inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint<P = serde_json::Value> {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> GeoPoint<P> {
    pub fn new(
        id: impl Into<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        payload: P,
    ) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            payload,
        }
    }

    /// The point's validated coordinate, or `None` if either field is
    /// missing, non-finite, or out of range.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon).ok(),
            _ => None,
        }
    }

    /// Like [`GeoPoint::coordinate`], but for positions where a location is
    /// mandatory (the reference of a radius query).
    pub fn require_coordinate(&self) -> Result<Coordinate, GeoError> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon),
            _ => Err(GeoError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            }),
        }
    }
}
