//! Table-of-contents scroll-spy.
//!
//! Sections inside the article are watched through a band from 20% below
//! the top of the window to 70% above its bottom. The last section in
//! that band becomes active and its TOC link gets the `active` class.
//! When no section is in the band the previous highlight stays.
//!
//! Clicking a TOC link scrolls its section to just below the header.

use std::sync::RwLock;

use folio_dom::{Event, Length, Observer, RootMargin, SharedDocument};
use log::debug;

use crate::page::{Behavior, EventResult};

pub const ACTIVE_CLASS: &str = "active";

/// Space left between the header and a section scrolled to.
pub const SCROLL_PADDING: f32 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TocEntry {
    section_id: String,
    link_id: Option<String>,
}

#[derive(Debug)]
pub struct ScrollSpy {
    document: SharedDocument,
    header_id: String,
    entries: Vec<TocEntry>,
    observer: Observer,
    active: RwLock<Option<String>>,
}

impl ScrollSpy {
    /// Watch `section` elements with IDs inside `article_id`, linked from
    /// `<a href="#id">` elements inside `toc_id`.
    ///
    /// Returns `None` when the article has no sections.
    pub fn install(
        document: &SharedDocument,
        article_id: &str,
        toc_id: &str,
        header_id: impl Into<String>,
    ) -> Option<Self> {
        let entries = document.with(|doc| {
            let links = doc.query_within(toc_id, |el| {
                el.tag == "a" && el.get_attr("href").is_some_and(|h| h.starts_with('#'))
            });
            let links: Vec<(String, String)> = links
                .into_iter()
                .filter_map(|id| {
                    let href = doc.attr(&id, "href")?;
                    Some((href.trim_start_matches('#').to_string(), id))
                })
                .collect();

            doc.query_within(article_id, |el| el.tag == "section")
                .into_iter()
                .map(|section_id| TocEntry {
                    link_id: links
                        .iter()
                        .find(|(target, _)| *target == section_id)
                        .map(|(_, link)| link.clone()),
                    section_id,
                })
                .collect::<Vec<_>>()
        });
        if entries.is_empty() {
            return None;
        }
        debug!("scroll-spy watching {} sections", entries.len());

        Some(Self {
            document: document.clone(),
            header_id: header_id.into(),
            entries,
            observer: Observer::new(
                0.0,
                RootMargin::new(Length::Percent(-20.0), Length::Percent(-70.0)),
            ),
            active: RwLock::new(None),
        })
    }

    /// Section currently highlighted.
    pub fn active_section(&self) -> Option<String> {
        self.active
            .read()
            .map(|a| a.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.section_id.as_str())
    }

    /// Scroll offset that brings `section_id` to just below the header.
    pub fn scroll_target(&self, section_id: &str) -> Option<f32> {
        self.document.with(|doc| {
            let section = doc.get(section_id)?;
            let header = doc.get(&self.header_id).map_or(0.0, |h| h.height);
            Some(section.offset_top - header - SCROLL_PADDING)
        })
    }

    /// Re-evaluate which section is active. Returns it.
    pub fn refresh(&self) -> Option<String> {
        let viewport = self.document.viewport();
        let current = self.document.with(|doc| {
            self.entries
                .iter()
                .rev()
                .find(|entry| {
                    doc.get(&entry.section_id).is_some_and(|el| {
                        self.observer
                            .is_intersecting(&viewport, el.offset_top, el.height)
                    })
                })
                .cloned()
        });

        let Some(current) = current else {
            return self.active_section();
        };

        let mut active = self.active.write().unwrap_or_else(|e| e.into_inner());
        if active.as_deref() != Some(current.section_id.as_str()) {
            debug!("scroll-spy: {}", current.section_id);
            self.document.with_mut(|doc| {
                for entry in &self.entries {
                    if let Some(link) = &entry.link_id {
                        doc.set_class(link, ACTIVE_CLASS, entry == &current);
                    }
                }
            });
            *active = Some(current.section_id.clone());
        }
        Some(current.section_id)
    }

    fn entry_for_link(&self, link_id: &str) -> Option<&TocEntry> {
        self.entries
            .iter()
            .find(|e| e.link_id.as_deref() == Some(link_id))
    }
}

impl Behavior for ScrollSpy {
    fn name(&self) -> &'static str {
        "scroll-spy"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Scroll { .. } | Event::Resize { .. } => {
                self.refresh();
                EventResult::Consumed
            }
            Event::Click { target } => {
                let Some(entry) = self.entry_for_link(target) else {
                    return EventResult::Ignored;
                };
                if let Some(y) = self.scroll_target(&entry.section_id) {
                    self.document.with_mut(|doc| {
                        doc.viewport.scroll_y = y.clamp(0.0, doc.viewport.max_scroll());
                    });
                    self.refresh();
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
