//! Cosmetic patches for the widget's rendered controls.
//!
//! The wrapped widget renders its zoom slider without hover titles and
//! draws the scale indicator on a transparent background that is unreadable
//! over most base maps. It also loses the indicator's width and position on
//! zoom and resize. The patches correcting this are coupled to the widget's
//! rendering internals by CSS selector, so they all live in this module and
//! nothing else in the crate knows about selectors.

use maybe_sync::{MaybeSend, MaybeSync};

/// Selector for the zoom-in slider button.
pub const ZOOM_IN_BUTTON: &str = ".mapSliderIncrementButton";

/// Selector for the zoom-out slider button.
pub const ZOOM_OUT_BUTTON: &str = ".mapSliderDecrementButton";

/// Class rendering a zoom slider button as disabled.
pub const ZOOM_BUTTON_DISABLED_CLASS: &str = "mapSliderDisabledButton";

/// Selector for the scale indicator.
pub const SCALEBAR: &str = ".mapScalebar";

/// A patch applied to a rendered control element.
///
/// A patch carries CSS properties, element attributes and classes to add.
/// Setting a CSS property to an empty value clears it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StylePatch {
    css: Vec<(String, String)>,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
}

impl StylePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a CSS property. An empty value clears the property.
    pub fn css(mut self, property: &str, value: &str) -> Self {
        self.css.push((property.into(), value.into()));
        self
    }

    /// Sets an element attribute, such as a hover title.
    pub fn attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Adds a class to the element.
    pub fn class(mut self, name: &str) -> Self {
        self.classes.push(name.into());
        self
    }

    /// CSS properties set by this patch, in application order.
    pub fn css_properties(&self) -> &[(String, String)] {
        &self.css
    }

    /// Element attributes set by this patch.
    pub fn element_attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Classes added by this patch.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Sink for style patches.
///
/// Implemented by the host page's styling mechanism and injected into
/// [`MapController::init`](crate::MapController::init).
pub trait StyleSink: MaybeSend + MaybeSync {
    /// Applies the patch to every element matching the selector.
    fn apply(&self, selector: &str, patch: &StylePatch);
}

/// Scale indicator width for the given zoom level.
///
/// Levels outside the table have no dedicated width; the indicator is left
/// as is.
pub(crate) fn scalebar_width(level: u32) -> Option<u32> {
    match level {
        1 => Some(117),
        2 | 3 => Some(145),
        4 | 5 => Some(113),
        6 | 7 => Some(142),
        _ => None,
    }
}

/// Readability styling for the scale indicator.
fn scalebar_base() -> StylePatch {
    StylePatch::new()
        .css("background-color", "#FFF")
        .css("border", "2px solid #555")
        .css("border-radius", "4px")
        .css("padding", "3px")
}

/// Patches applied once the widget reports itself loaded.
pub(crate) fn on_load(sink: &dyn StyleSink) {
    sink.apply(
        ZOOM_IN_BUTTON,
        &StylePatch::new().attribute("title", "Zoom In"),
    );
    sink.apply(
        ZOOM_OUT_BUTTON,
        &StylePatch::new()
            .attribute("title", "Zoom Out")
            .class(ZOOM_BUTTON_DISABLED_CLASS),
    );
    sink.apply(SCALEBAR, &scalebar_base().css("width", "117px"));
}

/// Re-applies the scale indicator width after a zoom animation.
pub(crate) fn on_zoom_end(sink: &dyn StyleSink, level: u32) {
    if let Some(width) = scalebar_width(level) {
        sink.apply(SCALEBAR, &StylePatch::new().css("width", &format!("{width}px")));
    }
}

/// Repositions the scale indicator after a layout recomputation.
///
/// The widget drops the indicator to an unusable position on resize unless
/// it is pinned 80px above the bottom edge. The patch never touches the
/// current width.
pub(crate) fn on_resize(sink: &dyn StyleSink, use_default_position: bool) {
    let patch = if use_default_position {
        scalebar_base().css("bottom", "").css("position", "")
    } else {
        scalebar_base().css("bottom", "80px").css("position", "absolute")
    };
    sink.apply(SCALEBAR, &patch);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_table_matches_fixed_levels() {
        assert_eq!(scalebar_width(1), Some(117));
        assert_eq!(scalebar_width(2), Some(145));
        assert_eq!(scalebar_width(3), Some(145));
        assert_eq!(scalebar_width(4), Some(113));
        assert_eq!(scalebar_width(5), Some(113));
        assert_eq!(scalebar_width(6), Some(142));
        assert_eq!(scalebar_width(7), Some(142));
    }

    #[test]
    fn levels_outside_the_table_have_no_width() {
        for level in [0, 8, 9, 20] {
            assert_eq!(scalebar_width(level), None);
        }
    }

    #[test]
    fn patch_builder_keeps_application_order() {
        let patch = StylePatch::new()
            .css("bottom", "80px")
            .css("position", "absolute")
            .attribute("title", "Zoom In")
            .class(ZOOM_BUTTON_DISABLED_CLASS);

        assert_eq!(
            patch.css_properties(),
            [
                ("bottom".to_string(), "80px".to_string()),
                ("position".to_string(), "absolute".to_string()),
            ]
        );
        assert_eq!(
            patch.element_attributes(),
            [("title".to_string(), "Zoom In".to_string())]
        );
        assert_eq!(patch.classes(), [ZOOM_BUTTON_DISABLED_CLASS.to_string()]);
    }
}
