//! Like buttons on article cards.

use folio_dom::{Event, SharedDocument};
use log::debug;

use crate::page::{Behavior, EventResult};

pub const LIKE_CLASS: &str = "like-btn";
pub const LIKED_CLASS: &str = "liked";

/// Toggles a liked state and adjusts the count shown on the button.
#[derive(Debug, Clone)]
pub struct LikeButtons {
    document: SharedDocument,
}

impl LikeButtons {
    pub fn new(document: &SharedDocument) -> Self {
        Self {
            document: document.clone(),
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.document.with(|doc| doc.has_class(id, LIKED_CLASS))
    }

    /// Count shown on the button.
    pub fn count(&self, id: &str) -> Option<i64> {
        self.document
            .element(id)
            .and_then(|el| el.text_content().trim().parse().ok())
    }

    /// Flip the liked state. Returns the new count, or `None` if `id` is
    /// not a like button.
    pub fn toggle(&self, id: &str) -> Option<i64> {
        self.document.with_mut(|doc| {
            let el = doc.get(id)?;
            if !el.has_class(LIKE_CLASS) {
                return None;
            }
            let count: i64 = el.text_content().trim().parse().unwrap_or(0);
            let liked = !el.has_class(LIKED_CLASS);
            let count = if liked { count + 1 } else { (count - 1).max(0) };
            doc.update(id, |el| {
                el.set_class(LIKED_CLASS, liked);
                el.set_text(count.to_string());
            });
            debug!("{id} liked={liked} count={count}");
            Some(count)
        })
    }
}

impl Behavior for LikeButtons {
    fn name(&self) -> &'static str {
        "like-buttons"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Click { target } => self.toggle(target).is_some().into(),
            _ => EventResult::Ignored,
        }
    }
}
