use crate::models::{Location, User};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers-to-miles conversion factor
const MILES_PER_KM: f64 = 0.621371;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Great-circle distance in miles. Symmetric, and exactly zero when both
/// points are identical.
#[inline]
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c * MILES_PER_KM
}

/// Distance in miles between two known locations.
#[inline]
pub fn distance_between(a: &Location, b: &Location) -> f64 {
    haversine_miles(a.lat, a.lng, b.lat, b.lng)
}

/// Distance in miles between two users, when both have a location.
///
/// `None` means the distance is unknown; callers must then skip
/// proximity-based scoring and filtering for the pair. Zero coordinates are
/// valid real-world positions and are never treated as missing.
#[inline]
pub fn distance_between_users(a: &User, b: &User) -> Option<f64> {
    match (&a.location, &b.location) {
        (Some(loc_a), Some(loc_b)) => Some(distance_between(loc_a, loc_b)),
        _ => None,
    }
}
