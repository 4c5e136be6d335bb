// src/geo.rs

use std::f64::consts::PI;

const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Search radius used by the `near` filter. Not user-configurable.
pub const NEAR_RADIUS_MILES: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

/// Latitude/longitude rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Approximates a circle of `radius_miles` around `center` with a bounding box.
///
/// The longitude delta is widened by the secant of the latitude so the box
/// covers roughly the same ground distance east-west as north-south.
/// Nothing is clamped: out-of-range centers give out-of-range bounds, and the
/// longitude bounds diverge as the center approaches a pole.
pub fn compute_bounding_box(center: Point, radius_miles: f64) -> NearBox {
    let angular_radius = radius_miles / EARTH_RADIUS_MILES;

    let lat_rad = center.lat * (PI / 180.0);
    let lng_rad = center.lng * (PI / 180.0);
    let lng_delta = angular_radius / lat_rad.cos();

    NearBox {
        min_lat: (lat_rad - angular_radius) * (180.0 / PI),
        max_lat: (lat_rad + angular_radius) * (180.0 / PI),
        min_lng: (lng_rad - lng_delta) * (180.0 / PI),
        max_lng: (lng_rad + lng_delta) * (180.0 / PI),
    }
}
