//! "Was this helpful?" rating buttons.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use folio_dom::{Event, SharedDocument};
use log::{info, warn};
use serde::Serialize;

use crate::page::{Behavior, EventResult};
use crate::toast::{Notifier, Toast};

pub const RATING_CLASS: &str = "rating-btn";
pub const HELPFUL_CLASS: &str = "helpful";
pub const SELECTED_CLASS: &str = "selected";

/// One submitted rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub helpful: bool,
    pub article_url: String,
    pub timestamp: DateTime<Utc>,
}

impl Feedback {
    pub fn new(helpful: bool, article_url: impl Into<String>) -> Self {
        Self {
            helpful,
            article_url: article_url.into(),
            timestamp: Utc::now(),
        }
    }

    /// Message thanking the reader.
    pub fn thanks(&self) -> &'static str {
        if self.helpful {
            "Thanks for your feedback!"
        } else {
            "Thank you for letting us know."
        }
    }
}

#[derive(Debug)]
pub struct RatingButtons {
    document: SharedDocument,
    article_url: String,
    notifier: Notifier,
    last: RwLock<Option<Feedback>>,
}

impl RatingButtons {
    pub fn new(document: &SharedDocument, article_url: impl Into<String>, notifier: Notifier) -> Self {
        Self {
            document: document.clone(),
            article_url: article_url.into(),
            notifier,
            last: RwLock::new(None),
        }
    }

    pub fn last_feedback(&self) -> Option<Feedback> {
        self.last
            .read()
            .map(|f| f.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }

    /// Select one rating button. The selection is exclusive.
    pub fn rate(&self, button_id: &str) -> Option<Feedback> {
        let helpful = self.document.with_mut(|doc| {
            let button = doc.get(button_id)?;
            if !button.has_class(RATING_CLASS) {
                return None;
            }
            let helpful = button.has_class(HELPFUL_CLASS);
            for id in doc.query_class(RATING_CLASS) {
                doc.set_class(&id, SELECTED_CLASS, id == button_id);
            }
            Some(helpful)
        })?;

        let feedback = Feedback::new(helpful, self.article_url.clone());
        match serde_json::to_string(&feedback) {
            Ok(json) => info!("feedback submitted: {json}"),
            Err(e) => warn!("failed to serialize feedback: {e}"),
        }
        self.notifier.show(Toast::success(feedback.thanks()));

        *self.last.write().unwrap_or_else(|e| e.into_inner()) = Some(feedback.clone());
        Some(feedback)
    }
}

impl Behavior for RatingButtons {
    fn name(&self) -> &'static str {
        "rating"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Click { target } => self.rate(target).is_some().into(),
            _ => EventResult::Ignored,
        }
    }
}
