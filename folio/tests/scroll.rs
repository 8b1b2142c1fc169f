use std::time::Duration;

use folio::config::RevealConfig;
use folio::counter::{ANIMATED_CLASS, CountUp, Counters, parse_target};
use folio::nav::{Header, NavIds, SCROLLED_CLASS};
use folio::progress::{ProgressBar, ReadingProgress, page_progress, reading_progress};
use folio::reveal::{Reveal, VISIBLE_CLASS};
use folio::scroll_spy::ScrollSpy;
use folio::session::{self, SessionStore};
use folio::Page;
use folio_dom::{Document, Easing, Element, Event, Length, SharedDocument, Viewport};

fn scroll(page: &Page, y: f32) {
    page.dispatch(Event::Scroll { y });
}

fn width(doc: &SharedDocument, id: &str) -> Option<Length> {
    doc.element(id).and_then(|el| el.style.width)
}

// ============================================================================
// Progress
// ============================================================================

#[test]
fn test_page_progress() {
    let vp = Viewport::new(1200.0, 800.0).document_height(2800.0);
    assert_eq!(page_progress(&vp), 0.0);
    assert_eq!(page_progress(&vp.scrolled_to(1000.0)), 50.0);
    assert_eq!(page_progress(&vp.scrolled_to(2000.0)), 100.0);
    assert_eq!(page_progress(&vp.scrolled_to(5000.0)), 100.0);
}

#[test]
fn test_page_progress_short_page() {
    let vp = Viewport::new(1200.0, 800.0).document_height(600.0);
    assert_eq!(page_progress(&vp), 0.0);
}

#[test]
fn test_reading_progress() {
    // Article 1000..3000, window 800 high: reading spans 600..2600.
    let vp = Viewport::new(1200.0, 800.0).document_height(4000.0);
    assert_eq!(reading_progress(&vp.scrolled_to(0.0), 1000.0, 2000.0), 0.0);
    assert_eq!(reading_progress(&vp.scrolled_to(600.0), 1000.0, 2000.0), 0.0);
    assert_eq!(reading_progress(&vp.scrolled_to(1600.0), 1000.0, 2000.0), 50.0);
    assert_eq!(reading_progress(&vp.scrolled_to(2700.0), 1000.0, 2000.0), 100.0);
}

#[test]
fn test_progress_bars_follow_scroll() {
    let doc = SharedDocument::new(Document::with_body(
        Viewport::new(1200.0, 800.0).document_height(4000.0),
        [Element::div().id("article").offset_top(1000.0).height(2000.0)],
    ));
    let mut page = Page::new(doc.clone());
    let bar = ProgressBar::install(&doc);
    let reading = ReadingProgress::install(&doc, "article").unwrap();
    page.mount(bar.clone()).mount(reading.clone());

    assert_eq!(width(&doc, ProgressBar::DEFAULT_ID), Some(Length::Percent(0.0)));

    scroll(&page, 1600.0);
    assert_eq!(bar.progress(), 50.0);
    assert_eq!(reading.progress(), 50.0);
    assert_eq!(width(&doc, ReadingProgress::DEFAULT_ID), Some(Length::Percent(50.0)));
}

#[test]
fn test_reading_progress_needs_article() {
    let doc = SharedDocument::new(Document::default());
    assert!(ReadingProgress::install(&doc, "article").is_none());
}

// ============================================================================
// Session
// ============================================================================

const URL: &str = "https://example.com/blog/post";

#[test]
fn test_resume_offer() {
    let mut store = SessionStore::new();
    session::save_reading(&mut store, URL, 40.0);

    let offer = session::take_resume(&mut store, URL, 1000.0, 2000.0).unwrap();
    assert_eq!(offer.percent(), 40);
    assert_eq!(offer.scroll_to, 1800.0);
    assert!(store.is_empty());
}

#[test]
fn test_resume_needs_more_than_ten_percent() {
    let mut store = SessionStore::new();
    session::save_reading(&mut store, URL, 10.0);
    assert!(session::take_resume(&mut store, URL, 0.0, 1000.0).is_none());
    assert!(store.is_empty());
}

#[test]
fn test_resume_other_url_untouched() {
    let mut store = SessionStore::new();
    session::save_reading(&mut store, URL, 80.0);
    assert!(session::take_resume(&mut store, "https://example.com/other", 0.0, 1000.0).is_none());
    assert!(!store.is_empty());
}

#[test]
fn test_scroll_restore() {
    let mut store = SessionStore::new();
    session::save_scroll(&mut store, 640.0);
    assert_eq!(session::take_scroll(&mut store), Some(640.0));
    assert_eq!(session::take_scroll(&mut store), None);
}

// ============================================================================
// Scroll-spy
// ============================================================================

fn article_doc() -> SharedDocument {
    let sections = (0..4).map(|i| {
        Element::section()
            .id(format!("s{i}"))
            .offset_top(1000.0 + i as f32 * 600.0)
            .height(600.0)
    });
    let links = (0..4).map(|i| Element::link(format!("#s{i}")).id(format!("toc-s{i}")));
    SharedDocument::new(Document::with_body(
        Viewport::new(1200.0, 1000.0).document_height(5000.0),
        [
            Element::div().id("header").height(80.0),
            Element::div().id("toc").children(links),
            Element::div().id("article").children(sections),
        ],
    ))
}

#[test]
fn test_scroll_spy_highlights_band_section() {
    let doc = article_doc();
    let spy = ScrollSpy::install(&doc, "article", "toc", "header").unwrap();
    let mut page = Page::new(doc.clone());
    page.mount(spy);

    // Band is scroll_y + 200 .. scroll_y + 300; sections start at 1000 + 600i.
    scroll(&page, 1500.0);
    assert!(doc.with(|d| d.has_class("toc-s1", "active")));
    assert!(!doc.with(|d| d.has_class("toc-s0", "active")));

    scroll(&page, 2500.0);
    assert!(doc.with(|d| d.has_class("toc-s2", "active")));
    assert!(!doc.with(|d| d.has_class("toc-s1", "active")));
}

#[test]
fn test_scroll_spy_keeps_highlight_outside_sections() {
    let doc = article_doc();
    let spy = ScrollSpy::install(&doc, "article", "toc", "header").unwrap();

    doc.with_mut(|d| d.viewport.scroll_y = 1500.0);
    assert_eq!(spy.refresh().as_deref(), Some("s1"));

    doc.with_mut(|d| d.viewport.scroll_y = 0.0);
    assert_eq!(spy.refresh().as_deref(), Some("s1"));
}

#[test]
fn test_toc_click_scrolls_below_header() {
    let doc = article_doc();
    let spy = ScrollSpy::install(&doc, "article", "toc", "header").unwrap();
    assert_eq!(spy.scroll_target("s2"), Some(2200.0 - 80.0 - 20.0));

    let mut page = Page::new(doc.clone());
    page.mount(spy);
    assert!(page.dispatch(Event::click("toc-s2")));
    assert_eq!(doc.viewport().scroll_y, 2100.0);
}

#[test]
fn test_scroll_spy_without_sections() {
    let doc = SharedDocument::new(Document::default());
    assert!(ScrollSpy::install(&doc, "article", "toc", "header").is_none());
}

// ============================================================================
// Reveal
// ============================================================================

fn reveal_doc() -> SharedDocument {
    let cards = (0..3).map(|i| {
        Element::div()
            .id(format!("card-{i}"))
            .class("service-card")
            .offset_top(100.0 + i as f32 * 900.0)
            .height(300.0)
    });
    SharedDocument::new(Document::with_body(
        Viewport::new(1200.0, 800.0).document_height(4000.0),
        cards.chain([
            Element::new("img")
                .id("hero-img")
                .class("lazy")
                .data("src", "/img/hero.png")
                .offset_top(2500.0)
                .height(200.0),
        ]),
    ))
}

#[test]
fn test_reveal_tags_and_staggers() {
    let doc = reveal_doc();
    let reveal = Reveal::install(&doc, &RevealConfig::default());

    let card = doc.element("card-2").unwrap();
    assert!(card.has_class("fade-in"));
    assert_eq!(card.style.animation_delay, Some(Duration::from_millis(400)));
    assert!(reveal.is_revealed("card-0"));
    assert!(doc.with(|d| d.has_class("card-0", VISIBLE_CLASS)));
    assert!(!reveal.is_revealed("card-1"));
}

#[test]
fn test_reveal_on_scroll_is_sticky() {
    let doc = reveal_doc();
    let reveal = Reveal::install(&doc, &RevealConfig::default());
    let mut page = Page::new(doc.clone());
    page.mount(reveal);

    scroll(&page, 600.0);
    assert!(doc.with(|d| d.has_class("card-1", VISIBLE_CLASS)));

    scroll(&page, 0.0);
    assert!(doc.with(|d| d.has_class("card-1", VISIBLE_CLASS)));
}

#[test]
fn test_reveal_respects_bottom_margin() {
    let doc = reveal_doc();
    let reveal = Reveal::install(&doc, &RevealConfig::default());

    // card-1 spans 1000..1300; band bottom is scroll_y + 750.
    // 10% of it (30px) must be inside.
    doc.with_mut(|d| d.viewport.scroll_y = 270.0);
    reveal.refresh();
    assert!(!reveal.is_revealed("card-1"));

    doc.with_mut(|d| d.viewport.scroll_y = 290.0);
    reveal.refresh();
    assert!(reveal.is_revealed("card-1"));
}

#[test]
fn test_lazy_image_loads_once_visible() {
    let doc = reveal_doc();
    let reveal = Reveal::install(&doc, &RevealConfig::default());
    assert_eq!(reveal.pending_images(), vec!["hero-img"]);

    doc.with_mut(|d| d.viewport.scroll_y = 2000.0);
    reveal.refresh();

    let img = doc.element("hero-img").unwrap();
    assert_eq!(img.get_attr("src").map(String::as_str), Some("/img/hero.png"));
    assert!(!img.has_class("lazy"));
    assert!(reveal.pending_images().is_empty());
}

// ============================================================================
// Count-up
// ============================================================================

#[test]
fn test_count_up_values() {
    let count = CountUp::new(150);
    assert_eq!(count.value_at(Duration::ZERO), 0);
    assert_eq!(count.value_at(Duration::from_millis(1000)), 75);
    assert_eq!(count.value_at(Duration::from_millis(1999)), 149);
    assert_eq!(count.value_at(Duration::from_secs(5)), 150);
    assert_eq!(count.label_at(Duration::from_millis(1000)), "75+");
    assert_eq!(CountUp::new(42).final_label(), "42");
}

#[test]
fn test_count_up_easing_stays_in_range() {
    let count = CountUp::new(1000).easing(Easing::EaseOut);
    let mut last = 0;
    for ms in (0..=2000).step_by(16) {
        let value = count.value_at(Duration::from_millis(ms));
        assert!(value >= last && value <= 1000);
        last = value;
    }
}

#[test]
fn test_parse_target() {
    assert_eq!(parse_target("120+"), Some(120));
    assert_eq!(parse_target("1,500"), Some(1500));
    assert_eq!(parse_target("none"), None);
}

fn stats_doc() -> SharedDocument {
    SharedDocument::new(Document::with_body(
        Viewport::new(1200.0, 800.0).document_height(3000.0),
        [
            Element::text("span", "120+").id("apps").class("stat-number").offset_top(100.0).height(40.0),
            Element::text("span", "8").id("years").class("stat-number").offset_top(2000.0).height(40.0),
        ],
    ))
}

#[tokio::test(start_paused = true)]
async fn test_counters_animate_when_visible() {
    let doc = stats_doc();
    let counters = Counters::install(&doc, "stat-number");
    assert_eq!(counters.target("apps"), Some(120));

    assert_eq!(counters.refresh(), 1);
    assert!(doc.with(|d| d.has_class("apps", ANIMATED_CLASS)));
    assert!(!doc.with(|d| d.has_class("years", ANIMATED_CLASS)));

    tokio::time::sleep(Duration::from_millis(1000)).await;
    let mid = doc.element("apps").unwrap().text_content();
    assert_ne!(mid, "120+");
    assert!(mid.ends_with('+'));

    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(doc.element("apps").unwrap().text_content(), "120+");

    // Already animated.
    assert_eq!(counters.refresh(), 0);
}

#[test]
fn test_counters_without_runtime_jump_to_end() {
    let doc = stats_doc();
    let counters = Counters::install(&doc, "stat-number");
    doc.with_mut(|d| d.viewport.scroll_y = 1500.0);
    assert_eq!(counters.refresh(), 1);
    assert_eq!(doc.element("years").unwrap().text_content(), "8");
}

// ============================================================================
// Header
// ============================================================================

fn nav_doc() -> SharedDocument {
    SharedDocument::new(Document::with_body(
        Viewport::new(1200.0, 800.0).document_height(5000.0),
        [
            Element::div().id("header").height(80.0),
            Element::button().id("hamburger"),
            Element::div()
                .id("nav-menu")
                .child(Element::link("#about").id("nav-about")),
        ],
    ))
}

#[test]
fn test_header_scrolled_class() {
    let doc = nav_doc();
    let mut page = Page::new(doc.clone());
    page.mount_opt(Header::install(&doc, NavIds::default()));

    scroll(&page, 51.0);
    assert!(doc.with(|d| d.has_class("header", SCROLLED_CLASS)));
    scroll(&page, 50.0);
    assert!(!doc.with(|d| d.has_class("header", SCROLLED_CLASS)));
}

#[test]
fn test_header_hides_on_scroll_down() {
    let doc = nav_doc();
    let header = std::sync::Arc::new(
        Header::install(&doc, NavIds::default())
            .unwrap()
            .hide_on_scroll(true),
    );
    let mut page = Page::new(doc.clone());
    page.mount(header.clone());

    scroll(&page, 90.0);
    assert!(!header.is_hidden());
    scroll(&page, 300.0);
    assert!(header.is_hidden());
    assert_eq!(
        doc.element("header").and_then(|h| h.style.transform_y),
        Some(Length::Percent(-100.0))
    );
    scroll(&page, 250.0);
    assert!(!header.is_hidden());
    assert_eq!(
        doc.element("header").and_then(|h| h.style.transform_y),
        Some(Length::Percent(0.0))
    );
}

#[test]
fn test_menu_toggle_and_close_on_link() {
    let doc = nav_doc();
    let header = std::sync::Arc::new(Header::install(&doc, NavIds::default()).unwrap());
    let mut page = Page::new(doc.clone());
    page.mount(header.clone());

    page.dispatch(Event::click("hamburger"));
    assert!(header.is_menu_open());
    assert!(doc.with(|d| d.has_class("hamburger", "active")));

    page.dispatch(Event::click("nav-about"));
    assert!(!header.is_menu_open());
    assert!(!doc.with(|d| d.has_class("hamburger", "active")));
}
