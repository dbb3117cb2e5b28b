//! Mobile navigation menu.

use crate::dom::{self, NavElements};

pub const ACTIVE_CLASS: &str = "active";

/// Flip the menu open/closed. Returns whether it is now open.
pub fn toggle_menu(nav: &NavElements) -> bool {
    dom::toggle_class(&nav.menu, ACTIVE_CLASS)
}

/// Close the menu after a link is followed.
pub fn close_menu(nav: &NavElements) {
    if dom::has_class(&nav.menu, ACTIVE_CLASS) {
        dom::remove_class(&nav.menu, ACTIVE_CLASS);
    }
}

pub fn links(nav: &NavElements) -> Vec<web_sys::Element> {
    dom::query_all_within(&nav.menu, "a")
}
