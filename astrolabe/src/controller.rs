//! The map controller.

use std::sync::Arc;

use ahash::HashMap;
use astrolabe_types::{GeoPoint, Graphic};
use log::{debug, info, warn};

use crate::error::ControllerError;
use crate::event::{EventBus, MapEvent};
use crate::layer::{LayerConfig, LayerKind};
use crate::patch::{self, StyleSink};
use crate::widget::{MapOptions, MapWidget, WidgetEvent};

/// Controller for an embedded mapping widget.
///
/// The controller owns the widget, keeps a registry of the layers it has
/// added, and forwards map events to the injected [`EventBus`]. All
/// operations are synchronous calls into the widget; the widget's own
/// events (load, zoom end, click) invoke the reactions registered at
/// [`init`](MapController::init) time on the UI thread.
pub struct MapController<W> {
    widget: W,
    bus: Arc<dyn EventBus>,
    styles: Arc<dyn StyleSink>,
    layers: HashMap<String, LayerKind>,
}

impl<W: MapWidget> MapController<W> {
    /// Binds the widget to the host container and wires up the controller.
    ///
    /// Attaches the scale indicator and registers three reactions with the
    /// widget: cosmetic control patches on load, the scale indicator width
    /// table on zoom end, and a [`MapEvent::MapActivated`] publication on
    /// click.
    pub fn init(
        container_id: &str,
        bus: Arc<dyn EventBus>,
        styles: Arc<dyn StyleSink>,
    ) -> Result<Self, ControllerError> {
        info!("binding map widget to container \"{container_id}\"");
        let mut widget = W::bind(container_id, &MapOptions::default())?;
        widget.attach_scalebar();

        let reaction_styles = styles.clone();
        let reaction_bus = bus.clone();
        widget.on_event(Box::new(move |event| match event {
            WidgetEvent::Loaded => {
                debug!("widget loaded, patching controls");
                patch::on_load(reaction_styles.as_ref());
            }
            WidgetEvent::ZoomEnd { level } => {
                patch::on_zoom_end(reaction_styles.as_ref(), *level);
            }
            WidgetEvent::Clicked { position } => {
                reaction_bus.publish(MapEvent::MapActivated {
                    position: *position,
                });
            }
        }));

        Ok(Self {
            widget,
            bus,
            styles,
            layers: HashMap::default(),
        })
    }

    /// Triggers the widget's layout recomputation.
    ///
    /// Unless `use_default_position` is set, the scale indicator is pinned
    /// 80px above the bottom edge to counter the widget's layout
    /// regression; with it set, the override is cleared.
    pub fn resize(&mut self, immediate: bool, use_default_position: bool) {
        self.widget.resize(immediate);
        patch::on_resize(self.styles.as_ref(), use_default_position);
    }

    /// Recenters the map on a geographic point.
    ///
    /// With `zoom_to` given, the viewport is also zoomed to that level.
    pub fn center(&mut self, gps: GeoPoint, zoom_to: Option<u32>) {
        match zoom_to {
            Some(level) => self.widget.center_and_zoom(gps.into(), level),
            None => self.widget.center_at(gps.into()),
        }
    }

    /// Adds a layer to the map.
    ///
    /// Dynamic layers immediately get their visible sublayers restricted to
    /// the configured set. Feature and graphics layers get a click
    /// subscription publishing [`MapEvent::AssetActivated`] /
    /// [`MapEvent::GraphicActivated`] respectively.
    ///
    /// A layer id identifies at most one layer on the map, so a config
    /// reusing an id of an already added layer is rejected with
    /// [`ControllerError::LayerExists`].
    pub fn add_layer(&mut self, config: LayerConfig) -> Result<(), ControllerError> {
        let id = config.id().to_owned();
        if self.layers.contains_key(&id) {
            return Err(ControllerError::LayerExists(id));
        }

        self.widget.add_layer(&config)?;

        match &config {
            LayerConfig::Basemap { .. } => {}
            LayerConfig::Dynamic { sublayers, .. } => {
                self.widget.set_visible_sublayers(&id, sublayers)?;
            }
            LayerConfig::Feature { key_field, .. } => {
                let bus = self.bus.clone();
                let key_field = key_field.clone();
                let layer_id = id.clone();
                self.widget.on_layer_click(
                    &id,
                    Box::new(move |attributes| {
                        let Some(asset_id) = attributes.get(&key_field) else {
                            warn!(
                                "feature on layer \"{layer_id}\" has no \"{key_field}\" attribute"
                            );
                            return;
                        };
                        bus.publish(MapEvent::AssetActivated {
                            asset_id: asset_id.clone(),
                        });
                    }),
                )?;
            }
            LayerConfig::Graphic { .. } => {
                let bus = self.bus.clone();
                self.widget.on_layer_click(
                    &id,
                    Box::new(move |attributes| {
                        bus.publish(MapEvent::GraphicActivated {
                            attributes: attributes.clone(),
                        });
                    }),
                )?;
            }
        }

        debug!("added {} layer \"{id}\"", config.kind());
        self.layers.insert(id, config.kind());
        Ok(())
    }

    /// Flips visibility of the named layer.
    pub fn toggle_layer(&mut self, layer_id: &str) -> Result<(), ControllerError> {
        if !self.layers.contains_key(layer_id) {
            return Err(ControllerError::LayerNotFound(layer_id.to_owned()));
        }

        let visible = self.widget.layer_visibility(layer_id)?;
        self.widget.set_layer_visibility(layer_id, !visible)
    }

    /// Draws a graphic at the given point on the named graphics layer.
    ///
    /// On a single-graphic layer (`single` set) the one existing graphic is
    /// relocated to the point instead of a second one being created. On a
    /// regular graphics layer the call is idempotent: if a graphic was
    /// already drawn at exactly this (lat, lon) pair, nothing happens.
    pub fn draw_graphic(
        &mut self,
        layer_id: &str,
        gps: GeoPoint,
        single: bool,
    ) -> Result<(), ControllerError> {
        self.expect_graphics_layer(layer_id)?;

        if single && !self.widget.graphics(layer_id)?.is_empty() {
            debug!("relocating single graphic on layer \"{layer_id}\"");
            return self.widget.move_first_graphic(layer_id, gps.into());
        }

        if self
            .widget
            .graphics(layer_id)?
            .iter()
            .any(|graphic| graphic.is_at(gps))
        {
            // Already drawn at this position.
            return Ok(());
        }

        self.widget.add_graphic(layer_id, Graphic::at(gps))
    }

    /// Removes all graphics from the named graphics layer.
    pub fn clear_graphics(&mut self, layer_id: &str) -> Result<(), ControllerError> {
        self.expect_graphics_layer(layer_id)?;
        self.widget.clear_graphics(layer_id)
    }

    /// The wrapped widget.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access to the wrapped widget.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    fn expect_graphics_layer(&self, layer_id: &str) -> Result<(), ControllerError> {
        match self.layers.get(layer_id) {
            None => Err(ControllerError::LayerNotFound(layer_id.to_owned())),
            Some(LayerKind::Graphic) => Ok(()),
            Some(kind) => Err(ControllerError::LayerKindMismatch {
                id: layer_id.to_owned(),
                expected: LayerKind::Graphic,
                actual: *kind,
            }),
        }
    }
}
