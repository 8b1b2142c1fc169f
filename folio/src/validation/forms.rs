//! Contact and newsletter form submission.

use std::sync::RwLock;

use folio_dom::{Event, SharedDocument};
use log::{debug, info};

use super::{Validator, ValidationResult, field_value};
use crate::page::{Behavior, EventResult};
use crate::toast::{Notifier, Toast};

pub const REQUIRED_MESSAGE: &str = "Please fill in all required fields";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// What a submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Accepted,
    Rejected(ValidationResult),
}

impl FormOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FormOutcome::Accepted)
    }
}

#[derive(Debug)]
struct Form {
    document: SharedDocument,
    form_id: String,
    validator: Validator,
    notifier: Notifier,
    last: RwLock<Option<FormOutcome>>,
}

impl Form {
    fn new(
        document: &SharedDocument,
        form_id: String,
        validator: Validator,
        notifier: Notifier,
    ) -> Option<Self> {
        if !document.with(|doc| doc.contains(&form_id)) {
            return None;
        }
        Some(Self {
            document: document.clone(),
            form_id,
            validator,
            notifier,
            last: RwLock::new(None),
        })
    }

    fn validate(&self) -> ValidationResult {
        self.document
            .with(|doc| self.validator.validate(doc, &self.form_id))
    }

    /// Validate and report with a toast. `on_accept` runs before the
    /// success toast.
    fn submit(&self, success: &str, on_accept: impl FnOnce(&Self)) -> FormOutcome {
        let result = self.validate();
        let headline = result.headline().map(|e| e.message.clone());
        let outcome = match headline {
            Some(message) => {
                debug!("{} rejected: {message}", self.form_id);
                self.notifier.show(Toast::error(message));
                FormOutcome::Rejected(result)
            }
            None => {
                on_accept(self);
                self.notifier.show(Toast::success(success));
                FormOutcome::Accepted
            }
        };
        *self.last.write().unwrap_or_else(|e| e.into_inner()) = Some(outcome.clone());
        outcome
    }

    fn value(&self, name: &str) -> String {
        self.document
            .with(|doc| field_value(doc, &self.form_id, name).1)
    }

    /// Clear every named input in the form.
    fn reset(&self) {
        self.document.with_mut(|doc| {
            let inputs = doc.query_within(&self.form_id, |el| el.get_attr("name").is_some());
            for id in inputs {
                doc.set_attr(&id, "value", "");
            }
        });
    }

    fn last(&self) -> Option<FormOutcome> {
        self.last
            .read()
            .map(|o| o.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }

    fn is_submit_for(&self, event: &Event) -> bool {
        matches!(event, Event::Submit { target } if *target == self.form_id)
    }
}

/// Contact form: name, email, subject and message are required.
#[derive(Debug)]
pub struct ContactForm {
    form: Form,
}

impl ContactForm {
    pub const SUCCESS_MESSAGE: &'static str =
        "Your mail app will open. Press send to deliver the message.";

    pub fn validator() -> Validator {
        Validator::new()
            .field("name")
            .required(REQUIRED_MESSAGE)
            .field("email")
            .required(REQUIRED_MESSAGE)
            .email(EMAIL_MESSAGE)
            .field("subject")
            .required(REQUIRED_MESSAGE)
            .field("message")
            .required(REQUIRED_MESSAGE)
            .done()
    }

    /// Returns `None` if the form is missing.
    pub fn install(
        document: &SharedDocument,
        form_id: impl Into<String>,
        notifier: Notifier,
    ) -> Option<Self> {
        Form::new(document, form_id.into(), Self::validator(), notifier).map(|form| Self { form })
    }

    pub fn validate(&self) -> ValidationResult {
        self.form.validate()
    }

    pub fn submit(&self) -> FormOutcome {
        self.form.submit(Self::SUCCESS_MESSAGE, |form| {
            info!("contact form accepted from {}", form.value("email"));
        })
    }

    pub fn last_outcome(&self) -> Option<FormOutcome> {
        self.form.last()
    }
}

impl Behavior for ContactForm {
    fn name(&self) -> &'static str {
        "contact-form"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        if !self.form.is_submit_for(event) {
            return EventResult::Ignored;
        }
        self.submit();
        EventResult::Consumed
    }
}

/// Newsletter signup: a valid email is all it needs. The form is cleared
/// after a successful signup.
#[derive(Debug)]
pub struct NewsletterForm {
    form: Form,
}

impl NewsletterForm {
    pub const SUCCESS_MESSAGE: &'static str = "You're subscribed to the newsletter!";

    pub fn validator() -> Validator {
        Validator::new()
            .field("email")
            .required(EMAIL_MESSAGE)
            .email(EMAIL_MESSAGE)
            .done()
    }

    pub fn install(
        document: &SharedDocument,
        form_id: impl Into<String>,
        notifier: Notifier,
    ) -> Option<Self> {
        Form::new(document, form_id.into(), Self::validator(), notifier).map(|form| Self { form })
    }

    pub fn submit(&self) -> FormOutcome {
        self.form.submit(Self::SUCCESS_MESSAGE, |form| {
            info!("newsletter subscription: {}", form.value("email"));
            form.reset();
        })
    }

    pub fn last_outcome(&self) -> Option<FormOutcome> {
        self.form.last()
    }
}

impl Behavior for NewsletterForm {
    fn name(&self) -> &'static str {
        "newsletter-form"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        if !self.form.is_submit_for(event) {
            return EventResult::Ignored;
        }
        self.submit();
        EventResult::Consumed
    }
}
