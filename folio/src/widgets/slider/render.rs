//! Applying slider layout to the document.

use folio_dom::{Document, Element, Length};

use super::layout::SliderLayout;
use crate::config::SliderConfig;

pub const DOT_CLASS: &str = "slider-dot";
pub const ACTIVE_CLASS: &str = "active";

/// ID of the `index`th dot under the dots container.
pub fn dot_id(config: &SliderConfig, index: usize) -> String {
    format!("{}-{}", config.dots_id, index)
}

/// Replace the dots container's children with `total_pages` fresh dots.
pub fn build_dots(doc: &mut Document, config: &SliderConfig, total_pages: usize, active: usize) {
    let dots = (0..total_pages)
        .map(|i| {
            let mut dot = Element::div()
                .id(dot_id(config, i))
                .class(DOT_CLASS)
                .data("page", i.to_string());
            dot.set_class(ACTIVE_CLASS, i == active);
            dot
        })
        .collect();
    doc.set_children(&config.dots_id, dots);
}

/// Write offset, button states and the active dot.
pub fn apply(doc: &mut Document, config: &SliderConfig, layout: &SliderLayout) {
    doc.update(&config.track_id, |track| {
        track.style.transform_x = Some(Length::Px(layout.offset_px));
    });
    doc.set_disabled(&config.prev_id, layout.prev_disabled);
    doc.set_disabled(&config.next_id, layout.next_disabled);
    doc.update(&config.dots_id, |dots| {
        for (i, dot) in dots.child_elements_mut().iter_mut().enumerate() {
            dot.set_class(ACTIVE_CLASS, i == layout.active_dot);
        }
    });
}

/// Page index a dot stands for, if `id` is one of this slider's dots.
pub fn dot_page(doc: &Document, config: &SliderConfig, id: &str) -> Option<usize> {
    let dot = doc.get(id)?;
    if !dot.has_class(DOT_CLASS) || !doc.is_within(&config.dots_id, id) {
        return None;
    }
    dot.get_data("page")?.parse().ok()
}
