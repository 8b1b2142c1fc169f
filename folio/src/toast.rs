//! Transient notifications.
//!
//! A toast is appended to its container off-screen, slides in shortly
//! after, stays for the display time, slides out, and is removed once the
//! exit transition has run.
//!
//! # Example
//!
//! ```ignore
//! let notifier = Notifier::new(doc.clone(), ToastConfig::default());
//! notifier.show(Toast::success("Link copied"));
//! notifier.show("Plain messages are info toasts");
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use folio_dom::{Color, Element, Length, SharedDocument};
use log::{debug, warn};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::config::ToastConfig;

/// Class every toast element carries.
pub const TOAST_CLASS: &str = "notification";

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastLevel {
    /// Class added next to [`TOAST_CLASS`].
    pub fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
        }
    }

    pub fn background(self) -> Color {
        match self {
            ToastLevel::Success => Color::rgb(0x10, 0xb9, 0x81),
            ToastLevel::Error => Color::rgb(0xef, 0x44, 0x44),
            ToastLevel::Info => Color::rgb(0x63, 0x66, 0xf1),
        }
    }
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }

    /// Build the toast's element, positioned off-screen.
    pub fn element(&self, id: impl Into<String>) -> Element {
        let mut element = Element::text("div", self.message.clone())
            .id(id)
            .class(TOAST_CLASS)
            .class(self.level.class());
        element.style.transform_x = Some(Length::Percent(100.0));
        element.style.background = Some(self.level.background());
        element
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::info(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::info(message)
    }
}

/// Shows toasts in a document and drives their enter/exit timeline.
///
/// Clones share the same cancellation, so `clear` on any clone cancels
/// every pending timeline.
#[derive(Debug, Clone)]
pub struct Notifier {
    document: SharedDocument,
    config: ToastConfig,
    cancel: Arc<Mutex<CancellationToken>>,
}

impl Notifier {
    pub fn new(document: SharedDocument, config: ToastConfig) -> Self {
        Self {
            document,
            config,
            cancel: Arc::new(Mutex::new(CancellationToken::new())),
        }
    }

    fn token(&self) -> MutexGuard<'_, CancellationToken> {
        self.cancel.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Append a toast and schedule its timeline. Returns the element ID.
    ///
    /// Outside a tokio runtime the toast is shown in place and stays until
    /// [`dismiss`](Self::dismiss) or [`clear`](Self::clear).
    pub fn show(&self, toast: impl Into<Toast>) -> String {
        let toast = toast.into();
        let id = format!("toast-{}", Uuid::new_v4().simple());
        debug!("toast {id} ({}): {}", toast.level.class(), toast.message);

        let appended = self
            .document
            .with_mut(|doc| doc.append_child(&self.config.container_id, toast.element(&id)));
        if !appended {
            warn!("toast container {} missing", self.config.container_id);
            return id;
        }

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("no async runtime, toast {id} shown without timeline");
            slide(&self.document, &id, 0.0);
            return id;
        };

        let document = self.document.clone();
        let token = self.token().child_token();
        let enter = self.config.enter_delay();
        let display = self.config.display();
        let exit = self.config.exit();
        let toast_id = id.clone();
        handle.spawn(async move {
            let timeline = async {
                tokio::time::sleep(enter).await;
                slide(&document, &toast_id, 0.0);
                tokio::time::sleep(display.saturating_sub(enter)).await;
                slide(&document, &toast_id, 100.0);
                tokio::time::sleep(exit).await;
                document.with_mut(|doc| doc.remove(&toast_id));
                debug!("toast {toast_id} removed");
            };
            tokio::select! {
                _ = token.cancelled() => {}
                _ = timeline => {}
            }
        });
        id
    }

    /// Remove one toast immediately.
    pub fn dismiss(&self, id: &str) -> bool {
        self.document.with_mut(|doc| doc.remove(id)).is_some()
    }

    /// IDs of toasts currently in the container.
    pub fn visible(&self) -> Vec<String> {
        self.document
            .with(|doc| doc.query_class_within(&self.config.container_id, TOAST_CLASS))
    }

    /// Cancel every pending timeline and remove all toasts.
    pub fn clear(&self) {
        let previous = std::mem::replace(&mut *self.token(), CancellationToken::new());
        previous.cancel();
        let ids = self.visible();
        self.document.with_mut(|doc| {
            for id in &ids {
                doc.remove(id);
            }
        });
    }
}

fn slide(document: &SharedDocument, id: &str, percent: f32) {
    document.with_mut(|doc| {
        doc.update(id, |el| el.style.transform_x = Some(Length::Percent(percent)))
    });
}
