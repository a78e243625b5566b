//! Layer configuration.

use std::fmt;

use astrolabe_types::Attributes;

/// The four kinds of layer the widget can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayerKind {
    /// Tiled base map service layer.
    Basemap,
    /// Dynamic map service layer.
    Dynamic,
    /// Feature service layer.
    Feature,
    /// In-memory graphics layer.
    Graphic,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayerKind::Basemap => "basemap",
            LayerKind::Dynamic => "dynamic",
            LayerKind::Feature => "feature",
            LayerKind::Graphic => "graphic",
        };
        f.write_str(name)
    }
}

/// Configuration of a layer to be added to the map.
///
/// Each variant carries exactly the attributes its kind requires, so an
/// incomplete configuration does not construct.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayerConfig {
    /// Tiled base map service layer.
    Basemap {
        /// Id the layer is created under.
        id: String,
        /// Location of the tile service.
        url: String,
        /// Whether the layer is initially shown.
        visible: bool,
    },
    /// Dynamic map service layer restricted to the given sublayers.
    Dynamic {
        /// Id the layer is created under.
        id: String,
        /// Location of the map service.
        url: String,
        /// Whether the layer is initially shown.
        visible: bool,
        /// Sublayers of the service that are drawn.
        sublayers: Vec<u32>,
    },
    /// Feature service layer.
    ///
    /// Clicking a feature publishes the value of its `key_field` attribute.
    Feature {
        /// Id the layer is created under.
        id: String,
        /// Location of the feature service.
        url: String,
        /// Whether the layer is initially shown.
        visible: bool,
        /// Name of the attribute identifying a feature.
        key_field: String,
    },
    /// In-memory graphics layer.
    Graphic {
        /// Id the layer is created under.
        id: String,
        /// Whether the layer is initially shown.
        visible: bool,
        /// Widget-side renderer descriptor, passed through verbatim.
        renderer: Attributes,
    },
}

impl LayerConfig {
    /// Id of the layer this configuration describes.
    pub fn id(&self) -> &str {
        match self {
            LayerConfig::Basemap { id, .. }
            | LayerConfig::Dynamic { id, .. }
            | LayerConfig::Feature { id, .. }
            | LayerConfig::Graphic { id, .. } => id,
        }
    }

    /// Whether the layer is initially shown.
    pub fn visible(&self) -> bool {
        match self {
            LayerConfig::Basemap { visible, .. }
            | LayerConfig::Dynamic { visible, .. }
            | LayerConfig::Feature { visible, .. }
            | LayerConfig::Graphic { visible, .. } => *visible,
        }
    }

    /// Kind tag of this configuration.
    pub fn kind(&self) -> LayerKind {
        match self {
            LayerConfig::Basemap { .. } => LayerKind::Basemap,
            LayerConfig::Dynamic { .. } => LayerKind::Dynamic,
            LayerConfig::Feature { .. } => LayerKind::Feature,
            LayerConfig::Graphic { .. } => LayerKind::Graphic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_exposes_id_and_kind() {
        let config = LayerConfig::Dynamic {
            id: "utilities".into(),
            url: "https://services.example.com/utilities/MapServer".into(),
            visible: true,
            sublayers: vec![1, 2],
        };

        assert_eq!(config.id(), "utilities");
        assert_eq!(config.kind(), LayerKind::Dynamic);
        assert_eq!(config.kind().to_string(), "dynamic");
    }
}
