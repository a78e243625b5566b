//! Error types.

use thiserror::Error;

use crate::layer::LayerKind;

/// Error from a controller or widget operation.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// No layer with the given id is present on the map.
    #[error("layer \"{0}\" is not present on the map")]
    LayerNotFound(String),

    /// A layer with the given id has already been added to the map.
    #[error("layer \"{0}\" has already been added to the map")]
    LayerExists(String),

    /// The operation targets a layer of the wrong kind.
    #[error("layer \"{id}\" is a {actual} layer, but the operation requires a {expected} layer")]
    LayerKindMismatch {
        /// Id of the targeted layer.
        id: String,
        /// Kind the operation requires.
        expected: LayerKind,
        /// Kind the layer was added with.
        actual: LayerKind,
    },

    /// The wrapped widget reported a failure.
    #[error("map widget error: {0}")]
    Widget(String),
}
