//! Session-scoped values: reading resume and scroll restore.

use std::collections::HashMap;

use log::debug;

const READING_PROGRESS_KEY: &str = "readingProgress";
const ARTICLE_URL_KEY: &str = "articleUrl";
const SCROLL_POSITION_KEY: &str = "blogScrollPosition";

/// Minimum saved progress (percent) worth offering to resume.
pub const RESUME_MIN_PROGRESS: f32 = 10.0;

/// String key/value storage that lives as long as the browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An offer to continue reading where the reader left off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResumeOffer {
    /// Saved progress in percent.
    pub progress: f32,
    /// Scroll position that continues reading.
    pub scroll_to: f32,
}

impl ResumeOffer {
    /// Progress rounded for display.
    pub fn percent(&self) -> u32 {
        self.progress.round() as u32
    }
}

/// Remember reading progress for `url` when leaving the page.
pub fn save_reading(store: &mut SessionStore, url: &str, progress: f32) {
    store.set(READING_PROGRESS_KEY, progress.to_string());
    store.set(ARTICLE_URL_KEY, url);
}

/// On load: consume saved progress for `url`.
///
/// Saved values for a different URL are left alone. Values for this URL
/// are cleared whether or not an offer results, and an offer is only made
/// above [`RESUME_MIN_PROGRESS`].
pub fn take_resume(
    store: &mut SessionStore,
    url: &str,
    article_top: f32,
    article_height: f32,
) -> Option<ResumeOffer> {
    let saved = store.get(READING_PROGRESS_KEY)?;
    if store.get(ARTICLE_URL_KEY) != Some(url) {
        return None;
    }
    let progress = saved.parse::<f32>().unwrap_or(0.0);
    store.remove(READING_PROGRESS_KEY);
    store.remove(ARTICLE_URL_KEY);

    if progress <= RESUME_MIN_PROGRESS {
        debug!("saved progress {progress}% too low to resume");
        return None;
    }
    Some(ResumeOffer {
        progress,
        scroll_to: progress / 100.0 * article_height + article_top,
    })
}

/// Remember the scroll offset of a listing page.
pub fn save_scroll(store: &mut SessionStore, scroll_y: f32) {
    store.set(SCROLL_POSITION_KEY, scroll_y.to_string());
}

/// Consume a saved scroll offset.
pub fn take_scroll(store: &mut SessionStore) -> Option<f32> {
    store.remove(SCROLL_POSITION_KEY)?.parse().ok()
}
