//! Recording fakes for tests, doctests and examples.

use ahash::HashMap;
use astrolabe_types::{Attributes, Graphic, WidgetPoint};
use parking_lot::Mutex;

use crate::error::ControllerError;
use crate::event::{EventBus, MapEvent};
use crate::layer::{LayerConfig, LayerKind};
use crate::patch::{StylePatch, StyleSink};
use crate::widget::{LayerClickHandler, MapOptions, MapWidget, WidgetEvent, WidgetEventHandler};

/// A call recorded by [`RecordingWidget`].
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCall {
    /// The scale indicator was attached.
    AttachScalebar,
    /// Layout recomputation was triggered.
    Resize {
        /// Whether the built-in resize delay was skipped.
        immediate: bool,
    },
    /// The viewport was recentered.
    CenterAt(WidgetPoint),
    /// The viewport was recentered and zoomed.
    CenterAndZoom(WidgetPoint, u32),
    /// A layer was constructed and added.
    AddLayer(LayerConfig),
    /// A layer was shown or hidden.
    SetLayerVisibility {
        /// Id of the layer.
        id: String,
        /// New visibility.
        visible: bool,
    },
    /// Visible sublayers of a dynamic layer were restricted.
    SetVisibleSublayers {
        /// Id of the layer.
        id: String,
        /// The restricted sublayer set.
        sublayers: Vec<u32>,
    },
    /// A graphic was added to a layer.
    AddGraphic {
        /// Id of the layer.
        layer_id: String,
    },
    /// The first graphic of a layer was relocated.
    MoveFirstGraphic {
        /// Id of the layer.
        layer_id: String,
        /// New geometry of the graphic.
        geometry: WidgetPoint,
    },
    /// All graphics were removed from a layer.
    ClearGraphics {
        /// Id of the layer.
        layer_id: String,
    },
}

struct FakeLayer {
    kind: LayerKind,
    visible: bool,
    sublayers: Vec<u32>,
    graphics: Vec<Graphic>,
    click_handlers: Vec<LayerClickHandler>,
}

impl FakeLayer {
    fn new(config: &LayerConfig) -> Self {
        Self {
            kind: config.kind(),
            visible: config.visible(),
            sublayers: Vec::new(),
            graphics: Vec::new(),
            click_handlers: Vec::new(),
        }
    }
}

fn unknown_layer(layer_id: &str) -> ControllerError {
    ControllerError::Widget(format!("unknown layer \"{layer_id}\""))
}

/// In-memory [`MapWidget`] recording every call made to it.
///
/// Tests drive the widget's own events with [`fire`](RecordingWidget::fire)
/// and [`fire_layer_click`](RecordingWidget::fire_layer_click), and assert
/// against the recorded [`WidgetCall`] log.
#[derive(Default)]
pub struct RecordingWidget {
    container_id: String,
    options: Option<MapOptions>,
    calls: Vec<WidgetCall>,
    layers: HashMap<String, FakeLayer>,
    event_handlers: Vec<WidgetEventHandler>,
}

impl RecordingWidget {
    /// Id of the container the widget was bound to.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Options the widget was bound with.
    pub fn options(&self) -> Option<&MapOptions> {
        self.options.as_ref()
    }

    /// Calls made to the widget, in order.
    pub fn calls(&self) -> &[WidgetCall] {
        &self.calls
    }

    /// Fires a widget-internal event into the registered handlers.
    pub fn fire(&self, event: WidgetEvent) {
        for handler in &self.event_handlers {
            handler(&event);
        }
    }

    /// Fires a click on the named layer with the hit attributes.
    pub fn fire_layer_click(&self, layer_id: &str, attributes: &Attributes) {
        if let Some(layer) = self.layers.get(layer_id) {
            for handler in &layer.click_handlers {
                handler(attributes);
            }
        }
    }
}

impl MapWidget for RecordingWidget {
    fn bind(container_id: &str, options: &MapOptions) -> Result<Self, ControllerError> {
        Ok(Self {
            container_id: container_id.to_owned(),
            options: Some(options.clone()),
            ..Self::default()
        })
    }

    fn attach_scalebar(&mut self) {
        self.calls.push(WidgetCall::AttachScalebar);
    }

    fn resize(&mut self, immediate: bool) {
        self.calls.push(WidgetCall::Resize { immediate });
    }

    fn center_at(&mut self, center: WidgetPoint) {
        self.calls.push(WidgetCall::CenterAt(center));
    }

    fn center_and_zoom(&mut self, center: WidgetPoint, level: u32) {
        self.calls.push(WidgetCall::CenterAndZoom(center, level));
    }

    fn add_layer(&mut self, config: &LayerConfig) -> Result<(), ControllerError> {
        self.calls.push(WidgetCall::AddLayer(config.clone()));
        self.layers
            .insert(config.id().to_owned(), FakeLayer::new(config));
        Ok(())
    }

    fn layer_visibility(&self, layer_id: &str) -> Result<bool, ControllerError> {
        self.layers
            .get(layer_id)
            .map(|layer| layer.visible)
            .ok_or_else(|| unknown_layer(layer_id))
    }

    fn set_layer_visibility(
        &mut self,
        layer_id: &str,
        visible: bool,
    ) -> Result<(), ControllerError> {
        self.calls.push(WidgetCall::SetLayerVisibility {
            id: layer_id.to_owned(),
            visible,
        });
        let layer = self
            .layers
            .get_mut(layer_id)
            .ok_or_else(|| unknown_layer(layer_id))?;
        layer.visible = visible;
        Ok(())
    }

    fn set_visible_sublayers(
        &mut self,
        layer_id: &str,
        sublayers: &[u32],
    ) -> Result<(), ControllerError> {
        self.calls.push(WidgetCall::SetVisibleSublayers {
            id: layer_id.to_owned(),
            sublayers: sublayers.to_vec(),
        });
        let layer = self
            .layers
            .get_mut(layer_id)
            .ok_or_else(|| unknown_layer(layer_id))?;
        layer.sublayers = sublayers.to_vec();
        Ok(())
    }

    fn graphics(&self, layer_id: &str) -> Result<&[Graphic], ControllerError> {
        self.layers
            .get(layer_id)
            .map(|layer| layer.graphics.as_slice())
            .ok_or_else(|| unknown_layer(layer_id))
    }

    fn add_graphic(&mut self, layer_id: &str, graphic: Graphic) -> Result<(), ControllerError> {
        self.calls.push(WidgetCall::AddGraphic {
            layer_id: layer_id.to_owned(),
        });
        let layer = self
            .layers
            .get_mut(layer_id)
            .ok_or_else(|| unknown_layer(layer_id))?;
        layer.graphics.push(graphic);
        Ok(())
    }

    fn move_first_graphic(
        &mut self,
        layer_id: &str,
        geometry: WidgetPoint,
    ) -> Result<(), ControllerError> {
        self.calls.push(WidgetCall::MoveFirstGraphic {
            layer_id: layer_id.to_owned(),
            geometry,
        });
        let layer = self
            .layers
            .get_mut(layer_id)
            .ok_or_else(|| unknown_layer(layer_id))?;
        let graphic = layer.graphics.first_mut().ok_or_else(|| {
            ControllerError::Widget(format!("no graphic to move on layer \"{layer_id}\""))
        })?;
        graphic.set_geometry(geometry);
        Ok(())
    }

    fn clear_graphics(&mut self, layer_id: &str) -> Result<(), ControllerError> {
        self.calls.push(WidgetCall::ClearGraphics {
            layer_id: layer_id.to_owned(),
        });
        let layer = self
            .layers
            .get_mut(layer_id)
            .ok_or_else(|| unknown_layer(layer_id))?;
        layer.graphics.clear();
        Ok(())
    }

    fn on_event(&mut self, handler: WidgetEventHandler) {
        self.event_handlers.push(handler);
    }

    fn on_layer_click(
        &mut self,
        layer_id: &str,
        handler: LayerClickHandler,
    ) -> Result<(), ControllerError> {
        let layer = self
            .layers
            .get_mut(layer_id)
            .ok_or_else(|| unknown_layer(layer_id))?;
        layer.click_handlers.push(handler);
        Ok(())
    }
}

/// [`EventBus`] capturing published events.
#[derive(Default)]
pub struct RecordingBus {
    events: Mutex<Vec<MapEvent>>,
}

impl RecordingBus {
    /// Creates a bus with an empty event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events published so far, in order.
    pub fn events(&self) -> Vec<MapEvent> {
        self.events.lock().clone()
    }
}

impl EventBus for RecordingBus {
    fn publish(&self, event: MapEvent) {
        self.events.lock().push(event);
    }
}

/// [`StyleSink`] capturing applied patches.
#[derive(Default)]
pub struct RecordingStyles {
    patches: Mutex<Vec<(String, StylePatch)>>,
}

impl RecordingStyles {
    /// Creates a sink with an empty patch log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All patches applied so far, with their selectors.
    pub fn patches(&self) -> Vec<(String, StylePatch)> {
        self.patches.lock().clone()
    }

    /// Patches applied to the given selector, in order.
    pub fn for_selector(&self, selector: &str) -> Vec<StylePatch> {
        self.patches
            .lock()
            .iter()
            .filter(|(applied_to, _)| applied_to == selector)
            .map(|(_, patch)| patch.clone())
            .collect()
    }
}

impl StyleSink for RecordingStyles {
    fn apply(&self, selector: &str, patch: &StylePatch) {
        self.patches
            .lock()
            .push((selector.to_owned(), patch.clone()));
    }
}
