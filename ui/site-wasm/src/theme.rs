//! Page theme and static text.
//!
//! Applies the theme class to `<body>` and rewrites the placeholder copy of
//! the static page so it matches the Pokémon theme. Missing nodes are
//! skipped.

use crate::dom::{self, Elements};

pub const THEME_CLASS: &str = "videojuegos";

/// `(selector, text)` pairs applied by [`update_initial_content`].
pub const TEXT_REWRITES: &[(&str, &str)] = &[
    (".logo", "Poké World JS"),
    ("a[href=\"#api\"]", "Pokédex API"),
    ("#api h2", "Dynamic Pokédex"),
    (
        "#api p",
        "Press the button to load a random Pokémon and see its information.",
    ),
    ("#cargarDatos", "Load New Pokémon"),
    ("#formulario h2", "Become a Trainer"),
    (
        "#formulario p",
        "Fill in the form to get your official League license.",
    ),
];

pub fn apply_theme(els: &Elements) {
    dom::add_class(&els.body, THEME_CLASS);
}

/// Rewrite every matching node; returns how many were found.
pub fn update_initial_content() -> usize {
    let mut updated = 0;
    for (selector, text) in TEXT_REWRITES {
        if let Some(el) = dom::query(selector) {
            dom::set_text(&el, text);
            updated += 1;
        }
    }
    tracing::debug!(updated, "page copy rewritten");
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn each_selector_is_rewritten_once() {
        let selectors: HashSet<_> = TEXT_REWRITES.iter().map(|(s, _)| *s).collect();
        assert_eq!(selectors.len(), TEXT_REWRITES.len());
        assert!(TEXT_REWRITES.iter().all(|(_, text)| !text.is_empty()));
        assert!(selectors.contains(&format!("#{}", dom::LOAD_TRIGGER_ID).as_str()));
    }
}
