use serde::Serialize;

/// A WGS84 coordinate pair.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Parse a feed `geo` string of the form "<lat>,<lon>".
///
/// Anything else (blank, one or three components, non-numeric or non-finite
/// parts) yields `None`.
pub fn parse_geo(geo: &str) -> Option<GeoPoint> {
    let mut parts = geo.split(',');
    let lat = parse_component(parts.next()?)?;
    let lon = parse_component(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(GeoPoint { lat, lon })
}

fn parse_component(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
