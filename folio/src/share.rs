//! Share links and copy-to-clipboard.
//!
//! Share buttons carry a platform class (`twitter`, `facebook`,
//! `linkedin` or `copy`) next to `share-btn`. Platform links are returned
//! for the host to open; `copy` writes the article URL to the clipboard
//! and reports the result with a toast.

use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

use folio_dom::{Event, SharedDocument};
use log::{debug, warn};
use url::Url;

use crate::error::ShareError;
use crate::page::{Behavior, EventResult};
use crate::toast::{Notifier, Toast};

pub const SHARE_CLASS: &str = "share-btn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Twitter,
    Facebook,
    LinkedIn,
    Copy,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::LinkedIn,
        Platform::Copy,
    ];

    pub fn class(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::LinkedIn => "linkedin",
            Platform::Copy => "copy",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.class() == class)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// Check an article URL is absolute http(s).
pub fn parse_article_url(url: &str) -> Result<Url, ShareError> {
    let url = Url::parse(url)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ShareError::UnsupportedScheme(other.to_string())),
    }
}

/// Build the share link for `platform`. `Copy` has no link.
pub fn share_url(platform: Platform, title: &str, article_url: &Url) -> Option<String> {
    let url = urlencoding::encode(article_url.as_str());
    match platform {
        Platform::Twitter => Some(format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            urlencoding::encode(title),
            url
        )),
        Platform::Facebook => Some(format!(
            "https://www.facebook.com/sharer/sharer.php?u={url}"
        )),
        Platform::LinkedIn => Some(format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={url}"
        )),
        Platform::Copy => None,
    }
}

/// Somewhere text can be copied to.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// In-process clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map(|c| c.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        *self.contents.lock().unwrap_or_else(|e| e.into_inner()) = Some(text.to_string());
        Ok(())
    }
}

/// What a share click produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// A link for the host to open in a new window.
    Open(String),
    /// Text placed on the clipboard.
    Copied(String),
    /// Copying failed; an error toast was shown.
    CopyFailed,
}

pub struct ShareButtons {
    document: SharedDocument,
    title: String,
    url: Url,
    clipboard: Arc<dyn Clipboard>,
    notifier: Notifier,
    last: RwLock<Option<ShareOutcome>>,
}

impl fmt::Debug for ShareButtons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareButtons")
            .field("title", &self.title)
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

impl ShareButtons {
    pub fn new(
        document: &SharedDocument,
        title: impl Into<String>,
        article_url: &str,
        clipboard: Arc<dyn Clipboard>,
        notifier: Notifier,
    ) -> Result<Self, ShareError> {
        Ok(Self {
            document: document.clone(),
            title: title.into(),
            url: parse_article_url(article_url)?,
            clipboard,
            notifier,
            last: RwLock::new(None),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn last_outcome(&self) -> Option<ShareOutcome> {
        self.last
            .read()
            .map(|o| o.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }

    /// Copy `text` and report the result with a toast.
    pub fn copy(&self, text: &str) -> ShareOutcome {
        match self.clipboard.write_text(text) {
            Ok(()) => {
                self.notifier
                    .show(Toast::success("Link copied to clipboard"));
                ShareOutcome::Copied(text.to_string())
            }
            Err(e) => {
                warn!("{e}");
                self.notifier.show(Toast::error("Copy failed"));
                ShareOutcome::CopyFailed
            }
        }
    }

    pub fn share(&self, platform: Platform) -> ShareOutcome {
        let outcome = match share_url(platform, &self.title, &self.url) {
            Some(link) => ShareOutcome::Open(link),
            None => self.copy(self.url.as_str()),
        };
        debug!("share via {platform}: {outcome:?}");
        *self.last.write().unwrap_or_else(|e| e.into_inner()) = Some(outcome.clone());
        outcome
    }

    fn platform_of(&self, id: &str) -> Option<Platform> {
        self.document.with(|doc| {
            let el = doc.get(id)?;
            if !el.has_class(SHARE_CLASS) {
                return None;
            }
            el.classes.iter().find_map(|c| Platform::from_class(c))
        })
    }
}

impl Behavior for ShareButtons {
    fn name(&self) -> &'static str {
        "share-buttons"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Click { target } => match self.platform_of(target) {
                Some(platform) => {
                    self.share(platform);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }
}
