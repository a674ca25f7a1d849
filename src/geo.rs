//! Great-circle distances over waypoint paths.

use crate::entities::Coordinates;
use crate::error::{invalid_path_error, Error};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
pub fn haversine_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Sum of segment distances along `path`, in travel order.
///
/// The path is `[origin, stops.., destination]` and must hold at least two
/// points. Coordinates are not range checked.
pub fn total_distance(path: &[Coordinates]) -> Result<f64, Error> {
    if path.len() < 2 {
        return Err(invalid_path_error());
    }

    Ok(path
        .windows(2)
        .map(|pair| haversine_distance(&pair[0], &pair[1]))
        .sum())
}
