//! Controller adapter for an embedded mapping widget.
//!
//! This crate configures an externally supplied mapping widget (layers,
//! scale indicator, click handling) and forwards map events to the rest of
//! the application through a publish/subscribe bus. It renders nothing
//! itself: projection, tiling and feature drawing stay inside the wrapped
//! widget, reached through the [`MapWidget`] trait.
//!
//! A [`MapController`] is wired up from three injected pieces:
//!
//! * a [`MapWidget`] implementation bridging to the vendor SDK,
//! * an [`EventBus`] the controller publishes [`MapEvent`]s to,
//! * a [`StyleSink`](patch::StyleSink) applying the cosmetic patches that
//!   correct the widget's rendering defects.
//!
//! ```
//! use std::sync::Arc;
//!
//! use astrolabe::testing::{RecordingBus, RecordingStyles, RecordingWidget};
//! use astrolabe::types::GeoPoint;
//! use astrolabe::{LayerConfig, MapController};
//!
//! # fn main() -> Result<(), astrolabe::ControllerError> {
//! let bus = Arc::new(RecordingBus::new());
//! let styles = Arc::new(RecordingStyles::new());
//! let mut controller =
//!     MapController::<RecordingWidget>::init("map-root", bus.clone(), styles.clone())?;
//!
//! controller.add_layer(LayerConfig::Basemap {
//!     id: "streets".into(),
//!     url: "https://tiles.example.com/streets/MapServer".into(),
//!     visible: true,
//! })?;
//! controller.center(GeoPoint::latlon(51.5, -0.12), Some(5));
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod error;
pub mod event;
pub mod layer;
pub mod patch;
#[cfg(any(test, feature = "_tests"))]
pub mod testing;
pub mod widget;

pub use astrolabe_types as types;
pub use controller::MapController;
pub use error::ControllerError;
pub use event::{CallbackBus, EventBus, MapEvent};
pub use layer::{LayerConfig, LayerKind};
pub use widget::{MapOptions, MapWidget, WidgetEvent};
