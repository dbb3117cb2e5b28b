//! Collapsible "curiosities" section.

use crate::dom;
use web_sys::Element;

pub const OPENED_CLASS: &str = "opened";
pub const ARROW_SELECTOR: &str = ".arrow";

pub fn arrow_glyph(opened: bool) -> &'static str {
    if opened { "▲" } else { "▼" }
}

/// Flip the container's `opened` class and sync the arrow, if it has one.
pub fn toggle(container: &Element) -> bool {
    let opened = dom::toggle_class(container, OPENED_CLASS);
    if let Ok(Some(arrow)) = container.query_selector(ARROW_SELECTOR) {
        dom::set_text(&arrow, arrow_glyph(opened));
    }
    opened
}
