//! Event dispatch.
//!
//! A `Page` owns the shared document and the behaviors mounted on it.
//! Window-level events (resize, scroll) are applied to the viewport and
//! broadcast to every behavior; targeted events go to behaviors in mount
//! order until one consumes them.

use std::sync::Arc;

use folio_dom::{Event, SharedDocument};
use log::{debug, trace};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

/// A component that reacts to page events.
///
/// Behaviors hold their own state behind interior mutability so they can
/// be shared with timer tasks.
pub trait Behavior: Send + Sync {
    /// Short name for log output.
    fn name(&self) -> &'static str;

    /// Handle one event.
    fn on_event(&self, event: &Event) -> EventResult;
}

impl<B: Behavior + ?Sized> Behavior for Arc<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn on_event(&self, event: &Event) -> EventResult {
        (**self).on_event(event)
    }
}

/// A document plus the behaviors mounted on it.
pub struct Page {
    document: SharedDocument,
    behaviors: Vec<Box<dyn Behavior>>,
}

impl Page {
    pub fn new(document: SharedDocument) -> Self {
        Self {
            document,
            behaviors: Vec::new(),
        }
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Mount a behavior. Behaviors see events in mount order.
    pub fn mount(&mut self, behavior: impl Behavior + 'static) -> &mut Self {
        debug!("mount {}", behavior.name());
        self.behaviors.push(Box::new(behavior));
        self
    }

    /// Mount a behavior if it was constructed (markup present).
    pub fn mount_opt(&mut self, behavior: Option<impl Behavior + 'static>) -> &mut Self {
        if let Some(behavior) = behavior {
            self.mount(behavior);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Dispatch one event. Returns whether any behavior handled it.
    pub fn dispatch(&self, event: Event) -> bool {
        trace!("dispatch {:?}", event);

        if !self.apply_to_document(&event) {
            return false;
        }

        if event.is_broadcast() {
            let mut handled = false;
            for behavior in &self.behaviors {
                handled |= behavior.on_event(&event).is_handled();
            }
            return handled;
        }

        for behavior in &self.behaviors {
            if behavior.on_event(&event).is_handled() {
                trace!("{:?} consumed by {}", event, behavior.name());
                return true;
            }
        }
        false
    }

    /// Update the document for events the host would apply itself.
    ///
    /// Returns false when the event must not reach behaviors: clicks on
    /// disabled or missing elements.
    fn apply_to_document(&self, event: &Event) -> bool {
        let mut doc = self.document.write();
        match event {
            Event::Resize { width, height } => {
                doc.viewport.width = *width;
                doc.viewport.height = *height;
                true
            }
            Event::Scroll { y } => {
                let max = doc.viewport.max_scroll();
                doc.viewport.scroll_y = y.clamp(0.0, max);
                true
            }
            Event::Input { target, value } => {
                doc.set_attr(target, "value", value.clone());
                true
            }
            Event::Click { target } => match doc.get(target) {
                Some(el) if el.disabled => {
                    trace!("click on disabled {target} dropped");
                    false
                }
                Some(_) => true,
                None => false,
            },
            Event::PointerEnter { .. } | Event::PointerLeave { .. } | Event::Submit { .. } => true,
        }
    }
}
