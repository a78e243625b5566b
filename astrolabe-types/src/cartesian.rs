//! Widget-space coordinates.

use crate::geo::GeoPoint;

/// The point type the wrapped widget's primitives expect.
///
/// The widget takes coordinates in (longitude, latitude) order, so `x` is
/// the longitude and `y` is the latitude. All conversions from
/// [`GeoPoint`] go through [`From`], which performs the order swap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetPoint {
    /// Longitude in degrees.
    pub x: f64,
    /// Latitude in degrees.
    pub y: f64,
}

impl WidgetPoint {
    /// Creates a point from raw widget-space coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<GeoPoint> for WidgetPoint {
    fn from(gps: GeoPoint) -> Self {
        Self {
            x: gps.lon,
            y: gps.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn conversion_swaps_coordinate_order() {
        let widget_point = WidgetPoint::from(GeoPoint::latlon(10.0, 20.0));
        assert_relative_eq!(widget_point.x, 20.0);
        assert_relative_eq!(widget_point.y, 10.0);
    }
}
