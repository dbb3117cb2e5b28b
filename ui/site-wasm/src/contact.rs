//! Contact form adapter.
//!
//! Implements [`ContactFormView`] over the form elements so the validation
//! flow in `pw-contact` drives the page directly.

use crate::dom::{self, ContactElements};
use pw_api_types::ContactSubmission;
use pw_contact::{ContactForm, ContactFormView, Field};
use web_sys::HtmlElement;

#[derive(Clone)]
pub struct DomContactForm {
    els: ContactElements,
}

impl DomContactForm {
    pub fn new(els: ContactElements) -> Self {
        Self { els }
    }

    fn error_slot(&self, field: Field) -> Option<&HtmlElement> {
        match field {
            Field::Name => self.els.name_error.as_ref(),
            Field::Email => self.els.email_error.as_ref(),
            Field::Subject => self.els.subject_error.as_ref(),
            Field::Message => self.els.message_error.as_ref(),
        }
    }
}

impl ContactFormView for DomContactForm {
    fn read(&self) -> ContactForm {
        ContactForm {
            name: self.els.name.value(),
            email: self.els.email.value(),
            subject: self.els.subject.value(),
            message: self.els.message.value(),
        }
    }

    fn show_field_error(&self, field: Field, message: &str) {
        if let Some(slot) = self.error_slot(field) {
            dom::set_text(slot, message);
            dom::set_style(slot, "display", "block");
        }
    }

    fn clear_field_error(&self, field: Field) {
        if let Some(slot) = self.error_slot(field) {
            dom::set_text(slot, "");
            dom::set_style(slot, "display", "none");
        }
    }

    fn set_success_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        dom::set_style(&self.els.success, "display", display);
    }

    fn reset(&self) {
        self.els.form.reset();
    }
}

/// Handle a submit event: validate, and on success log the submission and
/// schedule the confirmation to disappear.
pub fn on_submit(els: &ContactElements) {
    let view = DomContactForm::new(els.clone());
    let Some(submission) = pw_contact::submit(&view) else {
        return;
    };
    log_submission(&submission);

    wasm_bindgen_futures::spawn_local(async move {
        pw_contact::hide_success_after(&view, |delay| {
            gloo_timers::future::sleep(delay)
        })
        .await;
    });
}

fn log_submission(submission: &ContactSubmission) {
    match serde_wasm_bindgen::to_value(submission) {
        Ok(value) => gloo_console::log!("Form submitted successfully:", value),
        Err(e) => tracing::warn!("could not serialise submission: {}", e),
    }
}
