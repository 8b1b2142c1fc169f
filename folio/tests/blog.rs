use folio::Page;
use folio::blog::{ArticleEntry, BlogFilter, BlogIds, LikeButtons, RatingButtons, matches_search};
use folio::config::ToastConfig;
use folio::toast::Notifier;
use folio_dom::{Display, Document, Element, Event, SharedDocument, Viewport};
use nucleo_matcher::{Config, Matcher};

fn card(id: &str, category: &str, title: &str, excerpt: &str) -> Element {
    Element::div()
        .id(id)
        .class("article-card")
        .data("category", category)
        .child(Element::text("h3", title))
        .child(Element::text("p", excerpt))
}

fn blog_doc() -> SharedDocument {
    SharedDocument::new(Document::with_body(
        Viewport::new(1200.0, 800.0),
        [
            Element::div()
                .id("filters")
                .child(Element::button().id("f-all").class("filter-btn").class("active").data("category", "all"))
                .child(Element::button().id("f-dev").class("filter-btn").data("category", "development"))
                .child(Element::button().id("f-life").class("filter-btn").data("category", "life")),
            Element::input("search").id("blog-search"),
            Element::div().id("blog-articles").children([
                card("a1", "development", "Building iOS apps with Swift", "Notes from shipping an app."),
                card("a2", "development", "Rust for web backends", "Why we moved our API."),
                card("a3", "life", "A year of remote work", "What changed when the office closed."),
            ]),
            Element::text("span", "Swift").id("tag-swift").class("tag"),
            Element::button().id("like-a1").class("like-btn").child(Element::text("span", "12")),
        ],
    ))
}

fn mounted_filter() -> (SharedDocument, Page, std::sync::Arc<BlogFilter>) {
    let doc = blog_doc();
    let filter = std::sync::Arc::new(BlogFilter::install(&doc, BlogIds::default()).unwrap());
    let mut page = Page::new(doc.clone());
    page.mount(filter.clone());
    (doc, page, filter)
}

fn display(doc: &SharedDocument, id: &str) -> Display {
    doc.element(id).map(|el| el.style.display).unwrap_or_default()
}

// ============================================================================
// Filter
// ============================================================================

#[test]
fn test_search_is_case_insensitive_substring() {
    let entry = ArticleEntry {
        id: "x".into(),
        category: "dev".into(),
        title: "Building iOS Apps".into(),
        excerpt: "Notes from shipping".into(),
    };
    let mut matcher = Matcher::new(Config::DEFAULT);
    assert!(matches_search(&entry, "", &mut matcher));
    assert!(matches_search(&entry, "ios apps", &mut matcher));
    assert!(matches_search(&entry, "SHIPPING", &mut matcher));
    assert!(!matches_search(&entry, "bldg", &mut matcher));
    assert!(entry.matches_category("all"));
    assert!(!entry.matches_category("life"));
}

#[test]
fn test_install_reads_cards() {
    let (_, _, filter) = mounted_filter();
    assert_eq!(filter.articles().len(), 3);
    assert_eq!(filter.articles()[2].title, "A year of remote work");
    assert_eq!(filter.category(), "all");
}

#[test]
fn test_category_buttons() {
    let (doc, page, filter) = mounted_filter();

    assert!(page.dispatch(Event::click("f-life")));
    assert_eq!(filter.category(), "life");
    assert_eq!(filter.visible(), vec!["a3"]);
    assert_eq!(display(&doc, "a1"), Display::None);
    assert_eq!(display(&doc, "a3"), Display::Grid);
    assert!(doc.with(|d| d.has_class("f-life", "active") && !d.has_class("f-all", "active")));
}

#[test]
fn test_search_input_combines_with_category() {
    let (_, page, filter) = mounted_filter();

    page.dispatch(Event::click("f-dev"));
    page.dispatch(Event::input("blog-search", "RUST"));
    assert_eq!(filter.search_term(), "rust");
    assert_eq!(filter.visible(), vec!["a2"]);

    page.dispatch(Event::input("blog-search", ""));
    assert_eq!(filter.visible(), vec!["a1", "a2"]);
}

#[test]
fn test_no_results_message_toggles() {
    let (doc, page, filter) = mounted_filter();

    page.dispatch(Event::input("blog-search", "kotlin"));
    assert!(filter.visible().is_empty());
    assert!(filter.has_no_results_message());
    assert!(doc.with(|d| d.is_within("blog-articles", "no-results-message")));

    // Stays single while still empty.
    page.dispatch(Event::input("blog-search", "kotlin!"));
    assert_eq!(doc.with(|d| d.query_class("no-results-message").len()), 1);

    page.dispatch(Event::input("blog-search", "remote"));
    assert!(!filter.has_no_results_message());
}

#[test]
fn test_tag_click_searches() {
    let (doc, page, filter) = mounted_filter();

    assert!(page.dispatch(Event::click("tag-swift")));
    assert_eq!(filter.search_term(), "swift");
    assert_eq!(filter.visible(), vec!["a1"]);
    assert_eq!(doc.with(|d| d.attr("blog-search", "value")), Some("swift".to_string()));
}

#[test]
fn test_filter_needs_search_box() {
    let doc = SharedDocument::new(Document::default());
    assert!(BlogFilter::install(&doc, BlogIds::default()).is_none());
}

// ============================================================================
// Like
// ============================================================================

#[test]
fn test_like_toggles_count() {
    let doc = blog_doc();
    let likes = LikeButtons::new(&doc);
    let mut page = Page::new(doc.clone());
    page.mount(likes.clone());

    assert_eq!(likes.count("like-a1"), Some(12));
    assert!(page.dispatch(Event::click("like-a1")));
    assert!(likes.is_liked("like-a1"));
    assert_eq!(likes.count("like-a1"), Some(13));

    page.dispatch(Event::click("like-a1"));
    assert!(!likes.is_liked("like-a1"));
    assert_eq!(likes.count("like-a1"), Some(12));
}

#[test]
fn test_like_ignores_other_elements() {
    let doc = blog_doc();
    let likes = LikeButtons::new(&doc);
    assert_eq!(likes.toggle("f-all"), None);
}

// ============================================================================
// Rating
// ============================================================================

fn rating_doc() -> SharedDocument {
    SharedDocument::new(Document::with_body(
        Viewport::default(),
        [
            Element::button().id("yes").class("rating-btn").class("helpful"),
            Element::button().id("no").class("rating-btn").class("not-helpful"),
        ],
    ))
}

#[test]
fn test_rating_is_exclusive() {
    let doc = rating_doc();
    let notifier = Notifier::new(doc.clone(), ToastConfig::default());
    let rating = RatingButtons::new(&doc, "https://example.com/post", notifier.clone());

    let feedback = rating.rate("yes").unwrap();
    assert!(feedback.helpful);
    assert_eq!(feedback.article_url, "https://example.com/post");
    assert!(doc.with(|d| d.has_class("yes", "selected")));

    let feedback = rating.rate("no").unwrap();
    assert!(!feedback.helpful);
    assert!(doc.with(|d| d.has_class("no", "selected") && !d.has_class("yes", "selected")));
    assert_eq!(rating.last_feedback(), Some(feedback));
    assert_eq!(notifier.visible().len(), 2);
}

#[test]
fn test_feedback_json_shape() {
    let doc = rating_doc();
    let notifier = Notifier::new(doc.clone(), ToastConfig::default());
    let rating = RatingButtons::new(&doc, "https://example.com/post", notifier);

    let feedback = rating.rate("yes").unwrap();
    let json: serde_json::Value = serde_json::to_value(&feedback).unwrap();
    assert_eq!(json["helpful"], true);
    assert_eq!(json["articleUrl"], "https://example.com/post");
    assert!(json["timestamp"].is_string());
}
