//! The portfolio page the demo drives.

use folio::prelude::*;

const APPS: [(&str, &str); 9] = [
    ("Habit Garden", "Grow streaks into plants"),
    ("Tide Notes", "Markdown notes that sync"),
    ("Pocket Ledger", "Split bills with friends"),
    ("Trailhead", "Offline hiking maps"),
    ("Quiet Hours", "Focus timer with ambient sound"),
    ("Shelfie", "Scan and track your books"),
    ("Brew Log", "Coffee recipes and ratings"),
    ("Kana Drill", "Spaced repetition for kana"),
    ("Parcel Post", "Package tracking in one list"),
];

fn app_card(index: usize, (name, blurb): (&str, &str)) -> Element {
    Element::div()
        .id(format!("app-{index}"))
        .class("app-slide")
        .class("app-item")
        .offset_top(1300.0)
        .height(360.0)
        .child(Element::text("h3", name))
        .child(Element::text("p", blurb))
}

fn stat(id: &str, label: &str, top: f32) -> Element {
    Element::text("span", label)
        .id(id)
        .class("stat-number")
        .offset_top(top)
        .height(48.0)
}

pub fn portfolio() -> Document {
    let viewport = Viewport::new(1280.0, 800.0).document_height(4200.0);

    let header = Element::div().id("header").height(72.0);
    let hamburger = Element::button().id("hamburger");
    let menu = Element::div()
        .id("nav-menu")
        .child(Element::link("#work").id("nav-work"))
        .child(Element::link("#contact").id("nav-contact"));

    let hero = Element::section()
        .id("hero")
        .offset_top(0.0)
        .height(800.0)
        .child(Element::text("h1", "Hi, I build small, careful apps").class("section-title"))
        .child(stat("stat-apps", "120+", 600.0))
        .child(stat("stat-years", "8", 600.0));

    let slider = Element::section()
        .id("work")
        .offset_top(1200.0)
        .height(700.0)
        .child(Element::text("h2", "Apps").class("section-title").offset_top(1220.0).height(60.0))
        .child(
            Element::div()
                .id("app-slider")
                .children(APPS.into_iter().enumerate().map(|(i, app)| app_card(i, app))),
        )
        .child(Element::button().id("prevBtn"))
        .child(Element::button().id("nextBtn"))
        .child(Element::div().id("sliderDots"));

    let contact = Element::section()
        .id("contact")
        .offset_top(3200.0)
        .height(1000.0)
        .child(
            Element::new("form")
                .id("contact-form")
                .child(Element::input("name"))
                .child(Element::input("email"))
                .child(Element::input("subject"))
                .child(Element::input("message")),
        );

    Document::with_body(viewport, [header, hamburger, menu, hero, slider, contact])
}
