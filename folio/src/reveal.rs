//! Scroll-triggered reveal animations and lazy images.

use std::collections::HashSet;
use std::sync::{RwLock, RwLockWriteGuard};
use std::time::Duration;

use folio_dom::{BODY_ID, Event, Observer, RootMargin, SharedDocument};
use log::{debug, trace};

use crate::config::RevealConfig;
use crate::page::{Behavior, EventResult};

pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Default)]
struct Pending {
    revealed: HashSet<String>,
    images: Vec<String>,
}

/// Adds `visible` to configured elements the first time they scroll into
/// view, and swaps `data-src` into `src` for lazy images.
#[derive(Debug)]
pub struct Reveal {
    document: SharedDocument,
    observer: Observer,
    image_observer: Observer,
    lazy_class: String,
    targets: Vec<String>,
    pending: RwLock<Pending>,
}

impl Reveal {
    /// Tag every element of every group with its effect class and
    /// staggered delay, then reveal whatever is already in view.
    pub fn install(document: &SharedDocument, config: &RevealConfig) -> Self {
        let (targets, images) = document.with_mut(|doc| {
            let mut targets = Vec::new();
            for group in &config.groups {
                let stagger = Duration::from_millis(group.stagger_ms);
                for (i, id) in doc.query_class(&group.class).into_iter().enumerate() {
                    doc.update(&id, |el| {
                        el.add_class(group.effect.clone());
                        el.style.animation_delay = Some(stagger * i as u32);
                    });
                    targets.push(id);
                }
            }
            let images = doc.query_within(BODY_ID, |el| {
                el.tag == "img" && el.get_data("src").is_some()
            });
            (targets, images)
        });
        debug!(
            "reveal: {} targets, {} lazy images",
            targets.len(),
            images.len()
        );

        let reveal = Self {
            document: document.clone(),
            observer: Observer::new(
                config.threshold,
                RootMargin::bottom_px(config.bottom_margin_px),
            ),
            image_observer: Observer::default(),
            lazy_class: config.lazy_class.clone(),
            targets,
            pending: RwLock::new(Pending {
                revealed: HashSet::new(),
                images,
            }),
        };
        reveal.refresh();
        reveal
    }

    fn pending(&self) -> RwLockWriteGuard<'_, Pending> {
        self.pending.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.pending().revealed.contains(id)
    }

    /// Lazy images not yet loaded.
    pub fn pending_images(&self) -> Vec<String> {
        self.pending().images.clone()
    }

    /// Reveal newly visible targets and load newly visible images.
    ///
    /// Returns how many elements changed.
    pub fn refresh(&self) -> usize {
        let mut pending = self.pending();
        let mut doc = self.document.write();
        let viewport = doc.viewport;
        let mut changed = 0;

        for id in &self.targets {
            if pending.revealed.contains(id) {
                continue;
            }
            let visible = doc
                .get(id)
                .is_some_and(|el| self.observer.is_intersecting(&viewport, el.offset_top, el.height));
            if visible {
                doc.set_class(id, VISIBLE_CLASS, true);
                pending.revealed.insert(id.clone());
                trace!("revealed {id}");
                changed += 1;
            }
        }

        let lazy_class = &self.lazy_class;
        let image_observer = &self.image_observer;
        pending.images.retain(|id| {
            let Some(el) = doc.get(id) else {
                return false;
            };
            if !image_observer.is_intersecting(&viewport, el.offset_top, el.height) {
                return true;
            }
            let src = el.get_data("src").cloned().unwrap_or_default();
            doc.update(id, |img| {
                img.attrs.insert("src".into(), src);
                img.remove_class(lazy_class);
            });
            trace!("loaded image {id}");
            changed += 1;
            false
        });
        changed
    }
}

impl Behavior for Reveal {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Scroll { .. } | Event::Resize { .. } => (self.refresh() > 0).into(),
            _ => EventResult::Ignored,
        }
    }
}
