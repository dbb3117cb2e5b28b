//! Catalog card rendering.
//!
//! `DomCatalog` is the page-side half of the catalog flow: it owns the
//! display area and the load trigger, and builds the card nodes from a
//! [`CardView`].

use crate::api::FetchCatalog;
use crate::dom::{self, CatalogElements};
use pw_catalog::card::{
    self, CardView, ERROR_BODY, ERROR_TITLE, IMAGE_HEIGHT, IMAGE_WIDTH, LOADING_BODY,
    LOADING_TITLE,
};
use pw_catalog::{CatalogConfig, CatalogDisplay, CatalogError};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlImageElement};

const CARD_CLASS: &str = "api-item";
const ERROR_BACKGROUND: &str = "#e74c3c";

pub struct DomCatalog {
    els: CatalogElements,
    placeholder_url: String,
}

impl DomCatalog {
    pub fn new(els: CatalogElements, placeholder_url: &str) -> Self {
        Self {
            els,
            placeholder_url: placeholder_url.to_owned(),
        }
    }

    /// Replace the display area with a titled status card.
    fn show_status(&self, title: &str, body: &str) -> Result<HtmlElement, JsValue> {
        let content = &self.els.content;
        dom::clear(content);
        let card: HtmlElement = dom::create_typed("div")?;
        card.set_class_name(CARD_CLASS);
        append_text(&card, "h3", title)?;
        append_text(&card, "p", body)?;
        content.append_child(&card)?;
        Ok(card)
    }

    fn render(&self, view: &CardView) -> Result<(), JsValue> {
        let content = &self.els.content;
        dom::clear(content);

        let card = dom::create_element("div")?;
        card.set_class_name(CARD_CLASS);

        let img = build_image(view, &self.placeholder_url)?;
        card.append_child(&img)?;

        append_text(&card, "h3", &view.heading())?;

        let types = dom::create_element("p")?;
        types.append_child(&dom::document().create_text_node("Type(s): "))?;
        append_text(&types, "strong", &view.types)?;
        card.append_child(&types)?;

        append_text(&card, "p", &view.height_line())?;
        append_text(&card, "p", &view.weight_line())?;

        content.append_child(&card)?;
        Ok(())
    }
}

impl CatalogDisplay for DomCatalog {
    fn set_trigger_enabled(&self, enabled: bool) {
        if let Some(trigger) = &self.els.trigger {
            trigger.set_disabled(!enabled);
        }
    }

    fn show_loading(&self) {
        let _ = self.show_status(LOADING_TITLE, LOADING_BODY);
    }

    fn show_error(&self, _error: &CatalogError) {
        if let Ok(card) = self.show_status(ERROR_TITLE, ERROR_BODY) {
            dom::set_style(&card, "background-color", ERROR_BACKGROUND);
            dom::set_style(&card, "color", "white");
        }
    }

    fn show_card(&self, view: &CardView) {
        if let Err(e) = self.render(view) {
            tracing::error!("failed to render card #{}: {:?}", view.padded_id, e);
        }
    }
}

fn append_text(parent: &Element, tag: &str, text: &str) -> Result<Element, JsValue> {
    let el = dom::create_element(tag)?;
    dom::set_text(&el, text);
    parent.append_child(&el)?;
    Ok(el)
}

/// Create the card image with a one-shot fallback to the placeholder.
fn build_image(view: &CardView, placeholder_url: &str) -> Result<HtmlImageElement, JsValue> {
    let img: HtmlImageElement = dom::create_typed("img")?;
    img.set_alt(&view.display_name);
    img.set_width(IMAGE_WIDTH);
    img.set_height(IMAGE_HEIGHT);
    dom::set_style(&img, "object-fit", "contain");
    dom::set_style(&img, "background-color", "#fff");

    let target = img.clone();
    let placeholder = placeholder_url.to_owned();
    let on_error = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let failed = target.src();
        gloo_console::error!(format!("image failed to load: {failed}"));
        if let Some(fallback) = card::fallback_on_error(&failed, &placeholder) {
            target.set_src(&fallback.src);
            target.set_title(fallback.title);
        }
    }) as Box<dyn FnMut(_)>);
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    img.set_src(&view.image_url);
    Ok(img)
}

/// Load a random catalog item into the display area.
pub async fn on_load_random(els: &CatalogElements, config: &CatalogConfig) {
    let display = DomCatalog::new(els.clone(), &config.placeholder_url);
    let unit = js_sys::Math::random();
    // failures are already rendered and logged by the flow
    let _ = pw_catalog::load_random_item(config, &FetchCatalog, &display, unit).await;
}
