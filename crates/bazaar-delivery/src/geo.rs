//! Great-circle distance between two coordinates.
//!
//! Callers branch on missing coordinates before reaching this module; every
//! function here assumes finite inputs.

use bazaar_core::GeoPoint;

/// Mean Earth radius used for all distance math.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between `a` and `b` in kilometres.
///
/// No rounding is applied; compare the raw value against radii and round only
/// when building a display string with [`format_distance`].
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    // abs() keeps the result bit-identical when the arguments are swapped.
    let d_lat = (b.latitude - a.latitude).abs().to_radians();
    let d_lng = (b.longitude - a.longitude).abs().to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1.0 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Renders a distance rounded to one decimal place, e.g. `"5.1 km"`.
#[must_use]
pub fn format_distance(km: f64) -> String {
    format!("{km:.1} km")
}
