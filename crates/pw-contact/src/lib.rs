//! Contact form validation and the submit flow.

use pw_api_types::ContactSubmission;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// How long the confirmation stays visible after a valid submit.
pub const SUCCESS_MESSAGE_DURATION: Duration = Duration::from_secs(5);

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("name must be at least 3 characters.")]
    NameTooShort,
    #[error("enter a valid email.")]
    InvalidEmail,
    #[error("you must select a subject.")]
    MissingSubject,
    #[error("message must be at least 10 characters.")]
    MessageTooShort,
}

/// Raw field values as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn check(&self, field: Field) -> Result<(), FieldError> {
        match field {
            Field::Name if self.name.trim().chars().count() < MIN_NAME_CHARS => {
                Err(FieldError::NameTooShort)
            }
            Field::Email if !is_valid_email(self.email.trim()) => Err(FieldError::InvalidEmail),
            // select values are compared as-is
            Field::Subject if self.subject.is_empty() => Err(FieldError::MissingSubject),
            Field::Message if self.message.trim().chars().count() < MIN_MESSAGE_CHARS => {
                Err(FieldError::MessageTooShort)
            }
            _ => Ok(()),
        }
    }

    /// Check every field; a failure never skips the remaining checks.
    pub fn validate(&self) -> ValidationReport {
        ValidationReport {
            outcomes: Field::ALL.map(|field| (field, self.check(field))),
        }
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.clone(),
            message: self.message.trim().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: [(Field, Result<(), FieldError>); 4],
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }

    pub fn outcome(&self, field: Field) -> Result<(), FieldError> {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, outcome)| *outcome)
            .unwrap_or(Ok(()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, Result<(), FieldError>)> + '_ {
        self.outcomes.iter().copied()
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.iter().filter_map(|(field, outcome)| outcome.err().map(|e| (field, e)))
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the
/// domain with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Page-side operations the submit flow needs.
pub trait ContactFormView {
    fn read(&self) -> ContactForm;
    fn show_field_error(&self, field: Field, message: &str);
    fn clear_field_error(&self, field: Field);
    fn set_success_visible(&self, visible: bool);
    fn reset(&self);
}

/// Validate the form currently on the page and update every error slot.
///
/// Returns the submission when all fields pass; the form is then reset and
/// the confirmation shown. Hiding the confirmation again is left to
/// [`hide_success_after`].
pub fn submit<V: ContactFormView + ?Sized>(view: &V) -> Option<ContactSubmission> {
    view.set_success_visible(false);

    let form = view.read();
    let report = form.validate();
    for (field, outcome) in report.iter() {
        match outcome {
            Ok(()) => view.clear_field_error(field),
            Err(err) => view.show_field_error(field, &err.to_string()),
        }
    }

    if !report.is_valid() {
        debug!(
            failed = report.errors().count(),
            "contact form rejected"
        );
        return None;
    }

    let submission = form.to_submission();
    info!(
        name = %submission.name,
        email = %submission.email,
        subject = %submission.subject,
        "contact form submitted"
    );
    view.set_success_visible(true);
    view.reset();
    Some(submission)
}

/// Wait [`SUCCESS_MESSAGE_DURATION`] with the supplied timer, then hide the
/// confirmation. Not cancelled by later submits.
pub async fn hide_success_after<V, F, Fut>(view: &V, sleep: F)
where
    V: ContactFormView + ?Sized,
    F: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    sleep(SUCCESS_MESSAGE_DURATION).await;
    view.set_success_visible(false);
}
