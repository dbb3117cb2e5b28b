//! Poké World page script.
//!
//! Rust + WASM replacement for the site's vanilla page script: mobile
//! navigation, themed page copy, a random PokéAPI card, the curiosities
//! accordion and the contact form. Each concern lives in its own module.

pub mod accordion;
pub mod api;
pub mod card;
pub mod contact;
pub mod dom;
pub mod events;
pub mod logging;
pub mod nav;
pub mod theme;

use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let doc = dom::document();
    if doc.ready_state() != "loading" {
        return init();
    }

    // Script loaded ahead of the markup: wait for the document to be parsed
    let on_ready = Closure::once(move || {
        if let Err(e) = init() {
            gloo_console::error!("page init failed:", e);
        }
    });
    doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    logging::init(els.body.get_attribute("data-log-level").as_deref());
    tracing::info!(
        nav = els.nav.is_some(),
        catalog = els.catalog.is_some(),
        contact = els.contact.is_some(),
        accordion = els.accordion.is_some(),
        "page elements bound"
    );

    theme::apply_theme(&els);

    let config = Rc::new(api::catalog_config(&els.body));

    events::bind_events(&els, &config);

    theme::update_initial_content();

    // First card on page load
    if let Some(catalog) = &els.catalog {
        events::spawn_load(catalog, &config);
    }

    Ok(())
}
