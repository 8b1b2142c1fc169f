//! Slider event handling.

use folio_dom::Event;

use super::{Direction, Slider, render};
use crate::page::{Behavior, EventResult};

impl Behavior for Slider {
    fn name(&self) -> &'static str {
        "slider"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        let config = self.config();
        match event {
            Event::Click { target } if *target == config.prev_id => {
                self.advance(Direction::Backward);
                EventResult::Consumed
            }
            Event::Click { target } if *target == config.next_id => {
                self.advance(Direction::Forward);
                EventResult::Consumed
            }
            Event::Click { target } => {
                let page = self
                    .inner
                    .document
                    .with(|doc| render::dot_page(doc, config, target));
                match page {
                    Some(page) => {
                        self.go_to_page(page as i64);
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }
            Event::PointerEnter { target } if *target == config.track_id => {
                self.on_pointer_enter();
                EventResult::Consumed
            }
            Event::PointerLeave { target } if *target == config.track_id => {
                self.on_pointer_leave();
                EventResult::Consumed
            }
            Event::Resize { .. } => self.on_viewport_resize().into(),
            _ => EventResult::Ignored,
        }
    }
}
