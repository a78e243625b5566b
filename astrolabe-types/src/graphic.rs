//! Graphics drawn onto graphics layers.

use crate::cartesian::WidgetPoint;
use crate::geo::GeoPoint;
use crate::properties::{Attributes, PropertyValue};

/// Attribute key under which a graphic records the latitude it was drawn at.
pub const LAT_ATTRIBUTE: &str = "lat";

/// Attribute key under which a graphic records the longitude it was drawn at.
pub const LON_ATTRIBUTE: &str = "lon";

/// A point graphic on a graphics layer.
///
/// A graphic drawn from a [`GeoPoint`] records the point in its attribute
/// map under [`LAT_ATTRIBUTE`] / [`LON_ATTRIBUTE`]. Duplicate detection
/// compares those attributes, not the geometry, so a relocated graphic
/// still counts as drawn at its original position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graphic {
    /// Position of the graphic in widget-space coordinates.
    pub geometry: WidgetPoint,
    /// Attribute map carried by the graphic.
    pub attributes: Attributes,
}

impl Graphic {
    /// Creates a graphic at the given position, carrying the position as its
    /// attributes.
    pub fn at(gps: GeoPoint) -> Self {
        let mut attributes = Attributes::new();
        attributes.insert(LAT_ATTRIBUTE.into(), PropertyValue::Float(gps.lat));
        attributes.insert(LON_ATTRIBUTE.into(), PropertyValue::Float(gps.lon));
        Self {
            geometry: gps.into(),
            attributes,
        }
    }

    /// Returns whether the graphic's attributes record exactly this position.
    pub fn is_at(&self, gps: GeoPoint) -> bool {
        self.attributes.get(LAT_ATTRIBUTE) == Some(&PropertyValue::Float(gps.lat))
            && self.attributes.get(LON_ATTRIBUTE) == Some(&PropertyValue::Float(gps.lon))
    }

    /// Moves the graphic's geometry, leaving the attributes as first drawn.
    pub fn set_geometry(&mut self, geometry: WidgetPoint) {
        self.geometry = geometry;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn graphic_carries_its_position_as_attributes() {
        let graphic = Graphic::at(GeoPoint::latlon(48.85, 2.35));

        assert_relative_eq!(graphic.geometry.x, 2.35);
        assert_relative_eq!(graphic.geometry.y, 48.85);
        assert_eq!(
            graphic.attributes.get(LAT_ATTRIBUTE),
            Some(&PropertyValue::Float(48.85))
        );
        assert_eq!(
            graphic.attributes.get(LON_ATTRIBUTE),
            Some(&PropertyValue::Float(2.35))
        );
    }

    #[test]
    fn is_at_requires_exact_match() {
        let graphic = Graphic::at(GeoPoint::latlon(48.85, 2.35));

        assert!(graphic.is_at(GeoPoint::latlon(48.85, 2.35)));
        assert!(!graphic.is_at(GeoPoint::latlon(48.85, 2.3500001)));
    }

    #[test]
    fn relocation_does_not_touch_attributes() {
        let mut graphic = Graphic::at(GeoPoint::latlon(48.85, 2.35));
        graphic.set_geometry(GeoPoint::latlon(50.0, 3.0).into());

        assert_relative_eq!(graphic.geometry.y, 50.0);
        assert!(graphic.is_at(GeoPoint::latlon(48.85, 2.35)));
    }
}
