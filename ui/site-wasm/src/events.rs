//! Event binding.
//!
//! Wires every UI listener once at startup. Each feature is only wired when
//! its elements were found by [`Elements::bind`](crate::dom::Elements::bind).
//! Async handlers are spawned with `wasm_bindgen_futures::spawn_local`.

use crate::accordion;
use crate::card;
use crate::contact;
use crate::dom::{CatalogElements, Elements};
use crate::nav;
use pw_catalog::CatalogConfig;
use std::rc::Rc;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

/// Attach a listener for `event` and leak the closure for the page lifetime.
fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        tracing::warn!("failed to bind {} listener: {:?}", event, e);
    }
    cb.forget();
}

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        listen::<web_sys::MouseEvent, _>(&$el, "click", $cb);
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements, config: &Rc<CatalogConfig>) {
    // ── Navigation ──
    if let Some(nav_els) = &els.nav {
        {
            let nav2 = nav_els.clone();
            on_click!(nav_els.toggle, move |_: web_sys::MouseEvent| {
                nav::toggle_menu(&nav2);
            });
        }
        for link in nav::links(nav_els) {
            let nav2 = nav_els.clone();
            on_click!(link, move |_: web_sys::MouseEvent| {
                nav::close_menu(&nav2);
            });
        }
    }

    // ── Catalog ──
    if let Some(catalog) = &els.catalog {
        if let Some(trigger) = &catalog.trigger {
            let catalog2 = catalog.clone();
            let config2 = Rc::clone(config);
            on_click!(trigger, move |_: web_sys::MouseEvent| {
                spawn_load(&catalog2, &config2);
            });
        }
    }

    // ── Accordion ──
    if let Some(container) = &els.accordion {
        let container2 = container.clone();
        on_click!(container, move |_: web_sys::MouseEvent| {
            accordion::toggle(&container2);
        });
    }

    // ── Contact form ──
    if let Some(contact_els) = &els.contact {
        let contact2 = contact_els.clone();
        listen::<web_sys::Event, _>(&contact_els.form, "submit", move |e: web_sys::Event| {
            e.prevent_default();
            contact::on_submit(&contact2);
        });
    }
}

/// Start a catalog load without waiting for it.
pub fn spawn_load(catalog: &CatalogElements, config: &Rc<CatalogConfig>) {
    let catalog = catalog.clone();
    let config = Rc::clone(config);
    wasm_bindgen_futures::spawn_local(async move {
        card::on_load_random(&catalog, &config).await;
    });
}
