use super::distance::distance_km;
use super::{GeoError, GeoPoint};

/// A candidate that fell within the queried radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a, P> {
    pub point: &'a GeoPoint<P>,
    pub distance_km: f64,
}

/// Find all candidates within `radius_km` of `reference`, sorted ascending
/// by distance. Ties keep input order.
///
/// The reference must be located; candidates without a valid coordinate are
/// skipped. The reference itself is excluded by `id`, so a *different*
/// candidate standing at the exact same spot is still returned.
pub fn find_within_radius<'a, P>(
    reference: &GeoPoint<P>,
    candidates: &'a [GeoPoint<P>],
    radius_km: f64,
) -> Result<Vec<Match<'a, P>>, GeoError> {
    if !(radius_km > 0.0) || !radius_km.is_finite() {
        return Err(GeoError::InvalidRadius(radius_km));
    }
    let origin = reference.require_coordinate()?;

    let mut matches = Vec::new();
    for candidate in candidates {
        if candidate.id == reference.id {
            continue;
        }
        let Some(coord) = candidate.coordinate() else {
            continue;
        };
        let d = distance_km(origin, coord);
        if d <= radius_km {
            matches.push(Match {
                point: candidate,
                distance_km: d,
            });
        }
    }

    // Stable sort keeps first-seen order for equal distances
    matches.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    Ok(matches)
}
