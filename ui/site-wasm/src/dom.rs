//! DOM element bindings.
//!
//! Every element the page script touches is resolved once at startup into
//! [`Elements`]. Each feature groups its elements in its own struct and is
//! `None` when any of its required elements is missing, so a partial page
//! simply skips that feature.

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

// ── Element ids ──

pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const API_CONTENT_ID: &str = "apiContent";
pub const LOAD_TRIGGER_ID: &str = "cargarDatos";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const NAME_INPUT_ID: &str = "nombre";
pub const EMAIL_INPUT_ID: &str = "email";
pub const SUBJECT_SELECT_ID: &str = "asunto";
pub const MESSAGE_INPUT_ID: &str = "mensaje";
pub const NAME_ERROR_ID: &str = "errorNombre";
pub const EMAIL_ERROR_ID: &str = "errorEmail";
pub const SUBJECT_ERROR_ID: &str = "errorAsunto";
pub const MESSAGE_ERROR_ID: &str = "errorMensaje";
pub const SUCCESS_MESSAGE_ID: &str = "successMessage";
pub const ACCORDION_ID: &str = "desplegable-tipos";

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let Ok(nl) = parent.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn clear(el: &Element) {
    el.set_inner_html("");
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

/// Flip `cls` and return whether it is now present.
pub fn toggle_class(el: &Element, cls: &str) -> bool {
    el.class_list().toggle(cls).unwrap_or_else(|_| has_class(el, cls))
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

pub fn create_typed<T: JsCast>(tag: &str) -> Result<T, JsValue> {
    create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("<{tag}> has an unexpected type")))
}

// ── Element groups ──

#[derive(Clone)]
pub struct NavElements {
    pub toggle: Element,
    pub menu: Element,
}

#[derive(Clone)]
pub struct CatalogElements {
    pub content: Element,
    pub trigger: Option<HtmlButtonElement>,
}

#[derive(Clone)]
pub struct ContactElements {
    pub form: HtmlFormElement,
    pub name: HtmlInputElement,
    pub email: HtmlInputElement,
    pub subject: HtmlSelectElement,
    pub message: HtmlTextAreaElement,
    pub name_error: Option<HtmlElement>,
    pub email_error: Option<HtmlElement>,
    pub subject_error: Option<HtmlElement>,
    pub message_error: Option<HtmlElement>,
    pub success: HtmlElement,
}

/// All DOM references used by the page script.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub body: HtmlElement,
    pub nav: Option<NavElements>,
    pub catalog: Option<CatalogElements>,
    pub contact: Option<ContactElements>,
    pub accordion: Option<Element>,
}

impl Elements {
    /// Resolve all DOM references. Call once the document is parsed.
    pub fn bind() -> Result<Elements, JsValue> {
        let body = document()
            .body()
            .ok_or_else(|| JsValue::from_str("missing <body>"))?;

        Ok(Elements {
            body,
            nav: bind_nav(),
            catalog: bind_catalog(),
            contact: bind_contact(),
            accordion: by_id(ACCORDION_ID),
        })
    }
}

fn bind_nav() -> Option<NavElements> {
    Some(NavElements {
        toggle: by_id(MENU_TOGGLE_ID)?,
        menu: by_id(NAV_MENU_ID)?,
    })
}

fn bind_catalog() -> Option<CatalogElements> {
    Some(CatalogElements {
        content: by_id(API_CONTENT_ID)?,
        trigger: by_id_typed(LOAD_TRIGGER_ID),
    })
}

fn bind_contact() -> Option<ContactElements> {
    Some(ContactElements {
        form: by_id_typed(CONTACT_FORM_ID)?,
        name: by_id_typed(NAME_INPUT_ID)?,
        email: by_id_typed(EMAIL_INPUT_ID)?,
        subject: by_id_typed(SUBJECT_SELECT_ID)?,
        message: by_id_typed(MESSAGE_INPUT_ID)?,
        name_error: by_id_typed(NAME_ERROR_ID),
        email_error: by_id_typed(EMAIL_ERROR_ID),
        subject_error: by_id_typed(SUBJECT_ERROR_ID),
        message_error: by_id_typed(MESSAGE_ERROR_ID),
        success: by_id_typed(SUCCESS_MESSAGE_ID)?,
    })
}
