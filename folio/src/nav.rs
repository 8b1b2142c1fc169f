//! Header and navigation menu.

use std::sync::RwLock;

use folio_dom::{Event, Length, SharedDocument};
use log::debug;

use crate::page::{Behavior, EventResult};

pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";

/// Past this offset the header gets [`SCROLLED_CLASS`].
pub const SCROLLED_AFTER: f32 = 50.0;
/// Past this offset, scrolling down hides the header.
pub const HIDE_AFTER: f32 = 100.0;

/// Element IDs the header behavior binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavIds {
    pub header: String,
    pub hamburger: String,
    pub menu: String,
}

impl Default for NavIds {
    fn default() -> Self {
        Self {
            header: "header".into(),
            hamburger: "hamburger".into(),
            menu: "nav-menu".into(),
        }
    }
}

#[derive(Debug, Default)]
struct ScrollTrack {
    last_y: f32,
    hidden: bool,
}

/// Header background, hide-on-scroll and the mobile menu.
#[derive(Debug)]
pub struct Header {
    document: SharedDocument,
    ids: NavIds,
    hide_on_scroll: bool,
    track: RwLock<ScrollTrack>,
}

impl Header {
    /// Returns `None` if the header is missing. The hamburger and menu are
    /// optional.
    pub fn install(document: &SharedDocument, ids: NavIds) -> Option<Self> {
        let last_y = document.with(|doc| {
            doc.contains(&ids.header).then_some(doc.viewport.scroll_y)
        })?;
        Some(Self {
            document: document.clone(),
            ids,
            hide_on_scroll: false,
            track: RwLock::new(ScrollTrack {
                last_y,
                hidden: false,
            }),
        })
    }

    /// Also slide the header away while scrolling down.
    pub fn hide_on_scroll(mut self, enabled: bool) -> Self {
        self.hide_on_scroll = enabled;
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.track.read().map_or_else(|e| e.into_inner().hidden, |t| t.hidden)
    }

    pub fn is_menu_open(&self) -> bool {
        self.document
            .with(|doc| doc.has_class(&self.ids.menu, ACTIVE_CLASS))
    }

    pub fn toggle_menu(&self) -> bool {
        self.document.with_mut(|doc| {
            let open = !doc.has_class(&self.ids.menu, ACTIVE_CLASS);
            doc.set_class(&self.ids.hamburger, ACTIVE_CLASS, open);
            doc.set_class(&self.ids.menu, ACTIVE_CLASS, open);
            debug!("menu {}", if open { "opened" } else { "closed" });
            open
        })
    }

    pub fn close_menu(&self) {
        self.document.with_mut(|doc| {
            doc.set_class(&self.ids.hamburger, ACTIVE_CLASS, false);
            doc.set_class(&self.ids.menu, ACTIVE_CLASS, false);
        });
    }

    fn on_scroll(&self) {
        let mut track = self.track.write().unwrap_or_else(|e| e.into_inner());
        self.document.with_mut(|doc| {
            let y = doc.viewport.scroll_y;
            doc.set_class(&self.ids.header, SCROLLED_CLASS, y > SCROLLED_AFTER);

            if self.hide_on_scroll {
                let hide = if y > track.last_y && y > HIDE_AFTER {
                    true
                } else if y < track.last_y {
                    false
                } else {
                    track.hidden
                };
                if hide != track.hidden {
                    let offset = if hide { -100.0 } else { 0.0 };
                    doc.update(&self.ids.header, |h| {
                        h.style.transform_y = Some(Length::Percent(offset))
                    });
                    track.hidden = hide;
                }
            }
            track.last_y = y;
        });
    }
}

impl Behavior for Header {
    fn name(&self) -> &'static str {
        "header"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Scroll { .. } => {
                self.on_scroll();
                EventResult::Consumed
            }
            Event::Click { target } if *target == self.ids.hamburger => {
                self.toggle_menu();
                EventResult::Consumed
            }
            Event::Click { target } => {
                let in_menu = self.document.with(|doc| {
                    doc.is_within(&self.ids.menu, target)
                        && doc.get(target).is_some_and(|el| el.tag == "a")
                });
                if in_menu {
                    self.close_menu();
                }
                // Links keep their default action.
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }
}
