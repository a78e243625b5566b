//! Geographic coordinates.

/// A geographic position, latitude first.
///
/// This is the coordinate type the controller's public operations take.
/// Conversion into the widget's own coordinate order is done by
/// [`WidgetPoint`](crate::WidgetPoint).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latlon_keeps_argument_order() {
        let point = GeoPoint::latlon(55.75, 37.61);
        assert_eq!(point.lat, 55.75);
        assert_eq!(point.lon, 37.61);
    }
}
