//! Unit-sphere surface points to geographic coordinates, plus the display
//! formatting used by the selection popup.

use glam::Vec3;

/// Separator between the formatted latitude and longitude (comma plus a
/// non-breaking space, so the popup never wraps between them).
pub const COORD_SEPARATOR: &str = ",\u{a0}";

/// Geographic coordinate in signed degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    /// Latitude in `[-90, 90]`, north positive.
    pub lat_deg: f64,
    /// Longitude in `[-180, 180)`, east positive.
    pub lon_deg: f64,
}

impl LatLon {
    /// Human-readable label, e.g. `51.5072° N, 0.1276° W`.
    pub fn label(&self) -> String {
        format!(
            "{}{}{}",
            format_coordinate(self.lat_deg, 'N', 'S'),
            COORD_SEPARATOR,
            format_coordinate(self.lon_deg, 'E', 'W'),
        )
    }
}

/// Convert a point on (or near) the unit sphere to latitude/longitude.
///
/// The input is normalized first, so a raw mesh vertex slightly off the
/// sphere maps to the nearest surface point. The longitude zero sits a
/// quarter turn west of the +Z axis, matching the map texture's seam.
pub fn surface_to_lat_lon(p: Vec3) -> LatLon {
    let n = p.normalize_or_zero();
    let (x, y, z) = (n.x as f64, n.y as f64, n.z as f64);
    let lat_deg = 90.0 - y.clamp(-1.0, 1.0).acos().to_degrees();
    let lon_deg = (270.0 + x.atan2(z).to_degrees()) % 360.0 - 180.0;
    LatLon { lat_deg, lon_deg }
}

/// Format one coordinate to 4 decimal places with a compass letter.
///
/// Zero takes the positive direction, so the equator reads `0.0000° N`.
#[inline]
pub fn format_coordinate(value_deg: f64, positive: char, negative: char) -> String {
    let direction = if value_deg >= 0.0 { positive } else { negative };
    format!("{:.4}°\u{a0}{}", value_deg.abs(), direction)
}
