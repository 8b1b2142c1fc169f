//! Form validation.
//!
//! Fields are named by their input's `name` attribute and read from the
//! form's descendants when validation runs.
//!
//! # Example
//!
//! ```ignore
//! let validator = Validator::new()
//!     .field("name")
//!         .required("Name is required")
//!     .field("email")
//!         .required("Email is required")
//!         .email("Please enter a valid email address")
//!     .done();
//!
//! let result = document.with(|doc| validator.validate(doc, "contact-form"));
//! ```

mod forms;
mod result;
mod rules;

pub use forms::{ContactForm, FormOutcome, NewsletterForm};
pub use result::{FieldError, RuleKind, ValidationResult};
pub use rules::{is_blank, is_valid_email};

use folio_dom::Document;

type Check = Box<dyn Fn(&str) -> bool + Send + Sync>;

struct Rule {
    kind: RuleKind,
    check: Check,
    message: String,
}

struct FieldEntry {
    name: String,
    rules: Vec<Rule>,
}

/// A reusable set of field rules.
#[derive(Default)]
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field(
                "fields",
                &self.fields.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start rules for the input named `name`.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            entry: FieldEntry {
                name: name.into(),
                rules: Vec::new(),
            },
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Check every field of `form_id`. Each field reports its first
    /// failing rule. A field with no matching input validates as empty.
    pub fn validate(&self, doc: &Document, form_id: &str) -> ValidationResult {
        let mut errors = Vec::new();
        for field in &self.fields {
            let (element_id, value) = field_value(doc, form_id, &field.name);
            if let Some(rule) = field.rules.iter().find(|rule| !(rule.check)(&value)) {
                errors.push(FieldError {
                    field_name: field.name.clone(),
                    element_id,
                    kind: rule.kind,
                    message: rule.message.clone(),
                });
            }
        }
        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

/// Input ID and current value for the field `name` inside `form_id`.
pub fn field_value(doc: &Document, form_id: &str, name: &str) -> (String, String) {
    doc.query_within(form_id, |el| {
        el.get_attr("name").is_some_and(|n| n == name)
    })
    .into_iter()
    .next()
    .map(|id| {
        let value = doc.attr(&id, "value").unwrap_or_default();
        (id, value)
    })
    .unwrap_or_default()
}

/// Rules for one field. Call [`field`](Self::field) to move to the next
/// field, or [`done`](Self::done) to finish.
pub struct FieldBuilder {
    validator: Validator,
    entry: FieldEntry,
}

impl FieldBuilder {
    /// Add a custom rule.
    pub fn rule(
        mut self,
        kind: RuleKind,
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.entry.rules.push(Rule {
            kind,
            check: Box::new(check),
            message: message.into(),
        });
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Required, |v| !is_blank(v), message)
    }

    /// Empty values pass; combine with [`required`](Self::required).
    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(
            RuleKind::Email,
            |v| v.is_empty() || is_valid_email(v),
            message,
        )
    }

    /// Empty values pass.
    pub fn pattern(self, re: regex::Regex, message: impl Into<String>) -> Self {
        self.rule(
            RuleKind::Pattern,
            move |v| v.is_empty() || re.is_match(v),
            message,
        )
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.rule(
            RuleKind::Length,
            move |v| v.chars().count() <= max,
            message,
        )
    }

    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        self.done().field(name)
    }

    pub fn done(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(self.entry);
        validator
    }
}
