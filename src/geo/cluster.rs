use super::distance::distance_km;
use super::{Coordinate, GeoError, GeoPoint};

/// A greedily-formed group of nearby points, used to collapse dense areas
/// of the map into a single aggregate marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<'a, P> {
    /// Arithmetic mean of the members' latitudes and longitudes.
    pub center: Coordinate,
    /// Members in discovery order, anchor first.
    pub members: Vec<&'a GeoPoint<P>>,
}

/// Partition located points into proximity clusters with a single greedy
/// pass.
///
/// Points are visited in input order. Each unvisited point anchors a new
/// group and pulls in every later unvisited point within `radius_km` of the
/// *anchor* only; membership is never re-tested against other members. A
/// point close to a member but not to the anchor therefore starts (or joins)
/// a different group. The map screens were built around this exact grouping,
/// so it is kept as-is rather than replaced with connected components.
///
/// Groups that end up with a single member are dropped; solitary points
/// render as plain markers.
pub fn build_clusters<'a, P>(
    points: &'a [GeoPoint<P>],
    radius_km: f64,
) -> Result<Vec<Cluster<'a, P>>, GeoError> {
    if !(radius_km > 0.0) || !radius_km.is_finite() {
        return Err(GeoError::InvalidRadius(radius_km));
    }

    let located: Vec<(&'a GeoPoint<P>, Coordinate)> = points
        .iter()
        .filter_map(|p| p.coordinate().map(|c| (p, c)))
        .collect();

    let mut visited = vec![false; located.len()];
    let mut clusters = Vec::new();

    for i in 0..located.len() {
        if visited[i] {
            continue;
        }
        visited[i] = true;
        let (anchor, anchor_coord) = located[i];

        let mut members = vec![anchor];
        let mut lat_sum = anchor_coord.latitude;
        let mut lon_sum = anchor_coord.longitude;

        for j in (i + 1)..located.len() {
            if visited[j] {
                continue;
            }
            let (point, coord) = located[j];
            if distance_km(anchor_coord, coord) <= radius_km {
                visited[j] = true;
                members.push(point);
                lat_sum += coord.latitude;
                lon_sum += coord.longitude;
            }
        }

        if members.len() < 2 {
            continue;
        }

        let n = members.len() as f64;
        // Mean of in-range coordinates stays in range
        let center = Coordinate::new(lat_sum / n, lon_sum / n)?;
        clusters.push(Cluster { center, members });
    }

    Ok(clusters)
}
