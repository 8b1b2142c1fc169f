use folio::Page;
use folio::config::ToastConfig;
use folio::toast::Notifier;
use folio::validation::{
    ContactForm, FormOutcome, NewsletterForm, RuleKind, ValidationResult, Validator, is_valid_email,
};
use folio_dom::{Document, Element, Event, SharedDocument, Viewport};

fn form_doc() -> SharedDocument {
    SharedDocument::new(Document::with_body(
        Viewport::default(),
        [
            Element::new("form")
                .id("contact-form")
                .child(Element::input("name").id("c-name"))
                .child(Element::input("email").id("c-email"))
                .child(Element::input("phone").id("c-phone"))
                .child(Element::input("subject").id("c-subject"))
                .child(Element::input("message").id("c-message")),
            Element::new("form")
                .id("newsletter")
                .child(Element::input("email").id("n-email")),
        ],
    ))
}

fn fill(page: &Page, fields: &[(&str, &str)]) {
    for (id, value) in fields {
        page.dispatch(Event::input(*id, *value));
    }
}

fn toast_levels(notifier: &Notifier, doc: &SharedDocument) -> Vec<&'static str> {
    notifier
        .visible()
        .iter()
        .map(|id| {
            if doc.with(|d| d.has_class(id, "error")) {
                "error"
            } else {
                "success"
            }
        })
        .collect()
}

#[test]
fn test_email_pattern() {
    assert!(is_valid_email("me@example.com"));
    assert!(is_valid_email("a.b+c@sub.example.co.jp"));
    assert!(!is_valid_email("me@example"));
    assert!(!is_valid_email("me @example.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_validator_reports_first_rule_per_field() {
    let doc = form_doc();
    doc.with_mut(|d| d.set_attr("c-email", "value", "nope"));

    let result = doc.with(|d| ContactForm::validator().validate(d, "contact-form"));
    assert!(result.is_invalid());
    assert_eq!(result.errors().len(), 4);

    let email = result.error_for("email").unwrap();
    assert_eq!(email.kind, RuleKind::Email);
    assert_eq!(email.element_id, "c-email");
    assert_eq!(result.headline().map(|e| e.kind), Some(RuleKind::Required));
}

#[test]
fn test_validator_custom_rules() {
    let doc = form_doc();
    doc.with_mut(|d| d.set_attr("c-name", "value", "a very long name indeed"));
    let validator = Validator::new()
        .field("name")
        .max_length(10, "Too long")
        .field("phone")
        .pattern(regex::Regex::new(r"^\d+$").unwrap(), "Digits only")
        .done();

    let result = doc.with(|d| validator.validate(d, "contact-form"));
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.first_error().map(|e| e.message.as_str()), Some("Too long"));
    assert_eq!(validator.field_names().collect::<Vec<_>>(), vec!["name", "phone"]);
}

#[test]
fn test_contact_missing_fields() {
    let doc = form_doc();
    let notifier = Notifier::new(doc.clone(), ToastConfig::default());
    let form = ContactForm::install(&doc, "contact-form", notifier.clone()).unwrap();
    let mut page = Page::new(doc.clone());
    page.mount(form);

    fill(&page, &[("c-name", "Aki"), ("c-email", "aki@example.com")]);
    assert!(page.dispatch(Event::submit("contact-form")));
    assert_eq!(toast_levels(&notifier, &doc), vec!["error"]);
}

#[test]
fn test_contact_bad_email_then_success() {
    let doc = form_doc();
    let notifier = Notifier::new(doc.clone(), ToastConfig::default());
    let form = std::sync::Arc::new(ContactForm::install(&doc, "contact-form", notifier.clone()).unwrap());
    let mut page = Page::new(doc.clone());
    page.mount(form.clone());

    fill(
        &page,
        &[
            ("c-name", "Aki"),
            ("c-email", "aki@example"),
            ("c-subject", "Hello"),
            ("c-message", "Nice apps"),
        ],
    );
    page.dispatch(Event::submit("contact-form"));
    match form.last_outcome() {
        Some(FormOutcome::Rejected(result)) => {
            assert_eq!(result.headline().map(|e| e.kind), Some(RuleKind::Email));
        }
        other => panic!("unexpected {other:?}"),
    }

    fill(&page, &[("c-email", "aki@example.com")]);
    page.dispatch(Event::submit("contact-form"));
    assert_eq!(form.last_outcome(), Some(FormOutcome::Accepted));
    assert_eq!(toast_levels(&notifier, &doc), vec!["error", "success"]);
    // Contact fields are left for the mail app.
    assert_eq!(doc.with(|d| d.attr("c-name", "value")), Some("Aki".to_string()));
}

#[test]
fn test_newsletter_resets_on_success() {
    let doc = form_doc();
    let notifier = Notifier::new(doc.clone(), ToastConfig::default());
    let form = NewsletterForm::install(&doc, "newsletter", notifier).unwrap();

    doc.with_mut(|d| d.set_attr("n-email", "value", "bad"));
    assert!(matches!(form.submit(), FormOutcome::Rejected(_)));
    assert_eq!(doc.with(|d| d.attr("n-email", "value")), Some("bad".to_string()));

    doc.with_mut(|d| d.set_attr("n-email", "value", "me@example.com"));
    assert!(form.submit().is_accepted());
    assert_eq!(doc.with(|d| d.attr("n-email", "value")), Some(String::new()));
}

#[test]
fn test_other_submits_ignored() {
    let doc = form_doc();
    let notifier = Notifier::new(doc.clone(), ToastConfig::default());
    let mut page = Page::new(doc.clone());
    page.mount_opt(NewsletterForm::install(&doc, "newsletter", notifier.clone()));

    assert!(!page.dispatch(Event::submit("contact-form")));
    assert!(notifier.visible().is_empty());
}

#[test]
fn test_missing_form() {
    let doc = SharedDocument::new(Document::default());
    let notifier = Notifier::new(doc.clone(), ToastConfig::default());
    assert!(ContactForm::install(&doc, "contact-form", notifier).is_none());
    assert_eq!(ValidationResult::default(), ValidationResult::Valid);
}
