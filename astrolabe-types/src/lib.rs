//! Primitive types shared by the `astrolabe` map controller.
//!
//! The controller's public API speaks geographic coordinates
//! ([`GeoPoint`]), while the wrapped widget's primitives expect cartesian
//! order ([`WidgetPoint`]). Keeping both types here, with a single
//! conversion point between them, makes sure the coordinate-order swap
//! happens exactly once, at the widget boundary.
//!
//! Graphics and feature attributes are untyped on the widget side, so they
//! are modelled as maps of [`PropertyValue`] tagged scalars.

mod cartesian;
mod geo;
mod graphic;
mod properties;

pub use cartesian::WidgetPoint;
pub use geo::GeoPoint;
pub use graphic::{Graphic, LAT_ATTRIBUTE, LON_ATTRIBUTE};
pub use properties::{Attributes, PropertyValue};
