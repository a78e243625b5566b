//! Events published by the controller and the bus that carries them.
//!
//! The bus is injected into [`MapController::init`](crate::MapController::init),
//! so the host application decides how map events reach the rest of the
//! system. [`CallbackBus`] is the default implementation for hosts without
//! an event system of their own.

use astrolabe_types::{Attributes, GeoPoint, PropertyValue};
use maybe_sync::{MaybeSend, MaybeSync};
use parking_lot::Mutex;

/// An event emitted by the map and forwarded to the application.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapEvent {
    /// The map surface was clicked.
    MapActivated {
        /// The clicked geographic position.
        position: GeoPoint,
    },
    /// A feature of a feature layer was clicked.
    AssetActivated {
        /// Value of the feature's identifying attribute.
        asset_id: PropertyValue,
    },
    /// A graphic of a graphics layer was clicked.
    GraphicActivated {
        /// The clicked graphic's attribute map.
        attributes: Attributes,
    },
}

impl MapEvent {
    /// Stable topic name for subscribers that filter events by name.
    pub fn topic(&self) -> &'static str {
        match self {
            MapEvent::MapActivated { .. } => "map.activated",
            MapEvent::AssetActivated { .. } => "map.asset.activated",
            MapEvent::GraphicActivated { .. } => "map.graphic.activated",
        }
    }
}

/// Publish side of the application event bus.
pub trait EventBus: MaybeSend + MaybeSync {
    /// Delivers the event to all interested subscribers.
    fn publish(&self, event: MapEvent);
}

/// Callback invoked by [`CallbackBus`] for every published event.
pub trait Subscriber: Fn(&MapEvent) + MaybeSend + MaybeSync {}

impl<T: Fn(&MapEvent) + MaybeSend + MaybeSync> Subscriber for T {}

/// Default [`EventBus`] dispatching events to registered callbacks.
#[derive(Default)]
pub struct CallbackBus {
    subscribers: Mutex<Vec<Box<dyn Subscriber>>>,
}

impl CallbackBus {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked for every published event.
    ///
    /// Subscribers interested in a single event name can filter on
    /// [`MapEvent::topic`].
    pub fn subscribe(&self, subscriber: impl Subscriber + 'static) {
        self.subscribers.lock().push(Box::new(subscriber));
    }
}

impl EventBus for CallbackBus {
    fn publish(&self, event: MapEvent) {
        log::trace!("publishing \"{}\"", event.topic());
        for subscriber in self.subscribers.lock().iter() {
            subscriber(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn publish_reaches_every_subscriber() {
        let bus = CallbackBus::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        for _ in 0..2 {
            let received = received.clone();
            bus.subscribe(move |event: &MapEvent| received.lock().push(event.topic()));
        }

        bus.publish(MapEvent::MapActivated {
            position: GeoPoint::latlon(0.0, 0.0),
        });

        assert_eq!(*received.lock(), vec!["map.activated", "map.activated"]);
    }

    #[test]
    fn topics_are_distinct_per_event() {
        let map = MapEvent::MapActivated {
            position: GeoPoint::latlon(0.0, 0.0),
        };
        let asset = MapEvent::AssetActivated {
            asset_id: PropertyValue::Int(1),
        };
        let graphic = MapEvent::GraphicActivated {
            attributes: Attributes::new(),
        };

        assert_eq!(map.topic(), "map.activated");
        assert_eq!(asset.topic(), "map.asset.activated");
        assert_eq!(graphic.topic(), "map.graphic.activated");
    }
}
