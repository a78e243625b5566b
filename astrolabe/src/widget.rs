//! Abstraction over the wrapped mapping widget.
//!
//! Everything the controller needs from the vendor SDK goes through
//! [`MapWidget`]: construction, view changes, layer management, graphics
//! and event subscription. Rendering, tiling and projection stay on the
//! widget side.

use astrolabe_types::{Attributes, GeoPoint, Graphic, WidgetPoint};

use crate::error::ControllerError;
use crate::layer::LayerConfig;

/// Options applied when binding the widget to its host container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapOptions {
    /// Whether the widget draws its vendor logo.
    pub show_logo: bool,
    /// Lowest zoom level the widget may reach.
    pub min_zoom: u32,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            show_logo: false,
            min_zoom: 1,
        }
    }
}

/// Event emitted by the widget itself.
///
/// These fire on the UI thread some time after the triggering action; no
/// ordering is guaranteed relative to other application code.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidgetEvent {
    /// The widget finished loading its initial state.
    Loaded,
    /// A zoom animation finished at the given level.
    ZoomEnd {
        /// Zoom level the viewport settled at.
        level: u32,
    },
    /// The map surface was clicked.
    Clicked {
        /// Geographic position under the click.
        position: GeoPoint,
    },
}

/// Handler registered for [`WidgetEvent`]s.
pub type WidgetEventHandler = Box<dyn Fn(&WidgetEvent)>;

/// Handler registered for clicks on a specific layer.
///
/// The argument is the attribute map of the hit feature or graphic.
pub type LayerClickHandler = Box<dyn Fn(&Attributes)>;

/// Connection to the wrapped mapping widget.
pub trait MapWidget: Sized {
    /// Constructs the widget bound to the host container with the given id.
    fn bind(container_id: &str, options: &MapOptions) -> Result<Self, ControllerError>;

    /// Attaches the scale indicator control to the widget.
    fn attach_scalebar(&mut self);

    /// Triggers the widget's layout recomputation.
    ///
    /// With `immediate` set the widget skips its built-in resize delay.
    fn resize(&mut self, immediate: bool);

    /// Recenters the viewport on the given point.
    fn center_at(&mut self, center: WidgetPoint);

    /// Recenters the viewport on the given point and zooms it to `level`.
    fn center_and_zoom(&mut self, center: WidgetPoint, level: u32);

    /// Constructs the native layer described by `config` and adds it to the
    /// map.
    fn add_layer(&mut self, config: &LayerConfig) -> Result<(), ControllerError>;

    /// Returns whether the named layer is currently visible.
    fn layer_visibility(&self, layer_id: &str) -> Result<bool, ControllerError>;

    /// Shows or hides the named layer.
    fn set_layer_visibility(
        &mut self,
        layer_id: &str,
        visible: bool,
    ) -> Result<(), ControllerError>;

    /// Restricts which sublayers of a dynamic service layer are drawn.
    fn set_visible_sublayers(
        &mut self,
        layer_id: &str,
        sublayers: &[u32],
    ) -> Result<(), ControllerError>;

    /// Graphics currently present on the named graphics layer.
    fn graphics(&self, layer_id: &str) -> Result<&[Graphic], ControllerError>;

    /// Adds a graphic to the named graphics layer.
    fn add_graphic(&mut self, layer_id: &str, graphic: Graphic) -> Result<(), ControllerError>;

    /// Moves the geometry of the first graphic on the named layer.
    fn move_first_graphic(
        &mut self,
        layer_id: &str,
        geometry: WidgetPoint,
    ) -> Result<(), ControllerError>;

    /// Removes all graphics from the named graphics layer.
    fn clear_graphics(&mut self, layer_id: &str) -> Result<(), ControllerError>;

    /// Subscribes to widget-internal events.
    fn on_event(&mut self, handler: WidgetEventHandler);

    /// Subscribes to clicks on the named layer.
    fn on_layer_click(
        &mut self,
        layer_id: &str,
        handler: LayerClickHandler,
    ) -> Result<(), ControllerError>;
}
