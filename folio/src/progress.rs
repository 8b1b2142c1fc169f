//! Scroll progress indicators.

use folio_dom::{BODY_ID, Element, Event, Length, SharedDocument, Viewport};
use log::trace;

use crate::page::{Behavior, EventResult};

/// How far the page is scrolled, 0 to 100.
///
/// A page that cannot scroll reports 0.
pub fn page_progress(viewport: &Viewport) -> f32 {
    let max = viewport.max_scroll();
    if max <= 0.0 {
        return 0.0;
    }
    (viewport.scroll_y / max * 100.0).clamp(0.0, 100.0)
}

/// How far an article has been read, 0 to 100.
///
/// Reading starts when the article top reaches the middle of the window
/// and ends when its bottom does.
pub fn reading_progress(viewport: &Viewport, article_top: f32, article_height: f32) -> f32 {
    let half = viewport.height / 2.0;
    let start = article_top - half;
    let end = article_top + article_height - half;
    let y = viewport.scroll_y;
    if y < start {
        0.0
    } else if y > end || end <= start {
        100.0
    } else {
        ((y - start) / (end - start) * 100.0).clamp(0.0, 100.0)
    }
}

fn install_bar(document: &SharedDocument, id: &str) {
    document.with_mut(|doc| {
        if !doc.contains(id) {
            let bar = Element::div().id(id).class(id);
            doc.append_child(BODY_ID, bar);
        }
        doc.update(id, |bar| bar.style.width = Some(Length::Percent(0.0)));
    });
}

fn bar_width(document: &SharedDocument, id: &str) -> f32 {
    document
        .element(id)
        .and_then(|bar| bar.style.width)
        .map_or(0.0, |width| width.resolve(100.0))
}

/// Whole-page scroll bar.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    document: SharedDocument,
    bar_id: String,
}

impl ProgressBar {
    pub const DEFAULT_ID: &'static str = "scroll-progress";

    /// Append the bar to the body (reusing an existing element) at 0%.
    pub fn install(document: &SharedDocument) -> Self {
        Self::install_as(document, Self::DEFAULT_ID)
    }

    pub fn install_as(document: &SharedDocument, id: impl Into<String>) -> Self {
        let bar_id = id.into();
        install_bar(document, &bar_id);
        Self {
            document: document.clone(),
            bar_id,
        }
    }

    pub fn bar_id(&self) -> &str {
        &self.bar_id
    }

    /// Current bar width in percent.
    pub fn progress(&self) -> f32 {
        bar_width(&self.document, &self.bar_id)
    }

    pub fn refresh(&self) -> f32 {
        let progress = page_progress(&self.document.viewport());
        trace!("page progress {progress:.1}%");
        self.document.with_mut(|doc| {
            doc.update(&self.bar_id, |bar| {
                bar.style.width = Some(Length::Percent(progress))
            })
        });
        progress
    }
}

impl Behavior for ProgressBar {
    fn name(&self) -> &'static str {
        "progress-bar"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Scroll { .. } | Event::Resize { .. } => {
                self.refresh();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

/// Article reading bar.
#[derive(Debug, Clone)]
pub struct ReadingProgress {
    document: SharedDocument,
    bar_id: String,
    article_id: String,
}

impl ReadingProgress {
    pub const DEFAULT_ID: &'static str = "reading-progress";

    /// Returns `None` if the article element is missing.
    pub fn install(document: &SharedDocument, article_id: impl Into<String>) -> Option<Self> {
        let article_id = article_id.into();
        if !document.with(|doc| doc.contains(&article_id)) {
            return None;
        }
        install_bar(document, Self::DEFAULT_ID);
        Some(Self {
            document: document.clone(),
            bar_id: Self::DEFAULT_ID.to_string(),
            article_id,
        })
    }

    pub fn bar_id(&self) -> &str {
        &self.bar_id
    }

    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    pub fn progress(&self) -> f32 {
        bar_width(&self.document, &self.bar_id)
    }

    pub fn refresh(&self) -> f32 {
        self.document.with_mut(|doc| {
            let Some(article) = doc.get(&self.article_id) else {
                return 0.0;
            };
            let progress = reading_progress(&doc.viewport, article.offset_top, article.height);
            doc.update(&self.bar_id, |bar| {
                bar.style.width = Some(Length::Percent(progress))
            });
            progress
        })
    }
}

impl Behavior for ReadingProgress {
    fn name(&self) -> &'static str {
        "reading-progress"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Scroll { .. } | Event::Resize { .. } => {
                self.refresh();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
