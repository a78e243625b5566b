//! Wire a controller to a fake widget and watch the published events.
//! Run with: cargo run --example wiring

use std::sync::Arc;

use astrolabe::testing::RecordingWidget;
use astrolabe::types::{Attributes, GeoPoint, PropertyValue};
use astrolabe::widget::WidgetEvent;
use astrolabe::{CallbackBus, LayerConfig, MapController};

fn main() {
    env_logger::init();

    let bus = Arc::new(CallbackBus::new());
    bus.subscribe(|event: &astrolabe::MapEvent| {
        println!("[{}] {event:?}", event.topic());
    });

    let styles = Arc::new(PrintingStyles);
    let mut controller =
        MapController::<RecordingWidget>::init("map-root", bus.clone(), styles.clone())
            .expect("failed to initialize controller");

    controller
        .add_layer(LayerConfig::Basemap {
            id: "streets".into(),
            url: "https://tiles.example.com/streets/MapServer".into(),
            visible: true,
        })
        .expect("failed to add basemap");

    let mut renderer = Attributes::new();
    renderer.insert("symbol".into(), PropertyValue::from("simple-marker"));
    renderer.insert("color".into(), PropertyValue::from("#C33"));
    controller
        .add_layer(LayerConfig::Graphic {
            id: "trucks".into(),
            visible: true,
            renderer,
        })
        .expect("failed to add graphics layer");

    controller.center(GeoPoint::latlon(51.5, -0.12), Some(5));
    controller
        .draw_graphic("trucks", GeoPoint::latlon(51.51, -0.13), false)
        .expect("failed to draw graphic");

    // The widget emits these on its own in a real host; the fake lets us
    // drive them by hand.
    controller.widget().fire(WidgetEvent::Loaded);
    controller.widget().fire(WidgetEvent::Clicked {
        position: GeoPoint::latlon(51.52, -0.11),
    });

    let mut attributes = Attributes::new();
    attributes.insert("truck".into(), PropertyValue::from("KAMAZ-53212"));
    controller.widget().fire_layer_click("trucks", &attributes);
}

/// Prints every patch instead of touching a DOM.
struct PrintingStyles;

impl astrolabe::patch::StyleSink for PrintingStyles {
    fn apply(&self, selector: &str, patch: &astrolabe::patch::StylePatch) {
        println!("patch {selector}: {patch:?}");
    }
}
