pub mod blog;
pub mod config;
pub mod counter;
pub mod error;
pub mod nav;
pub mod page;
pub mod progress;
pub mod reveal;
pub mod runtime;
pub mod scroll_spy;
pub mod session;
pub mod share;
pub mod toast;
pub mod validation;
pub mod widgets;

pub use folio_dom as dom;
pub use page::{Behavior, EventResult, Page};

pub mod prelude {
    pub use crate::blog::{BlogFilter, BlogIds, Feedback, LikeButtons, RatingButtons};
    pub use crate::config::{Breakpoint, RevealConfig, SiteConfig, SliderConfig, ToastConfig};
    pub use crate::counter::{CountUp, Counters};
    pub use crate::error::{ConfigError, ShareError};
    pub use crate::nav::{Header, NavIds};
    pub use crate::page::{Behavior, EventResult, Page};
    pub use crate::progress::{ProgressBar, ReadingProgress, page_progress, reading_progress};
    pub use crate::reveal::Reveal;
    pub use crate::runtime::ScheduledTask;
    pub use crate::scroll_spy::ScrollSpy;
    pub use crate::session::{ResumeOffer, SessionStore};
    pub use crate::share::{Clipboard, MemoryClipboard, Platform, ShareButtons, ShareOutcome};
    pub use crate::toast::{Notifier, Toast, ToastLevel};
    pub use crate::validation::{
        ContactForm, FieldError, FormOutcome, NewsletterForm, ValidationResult, Validator,
    };
    pub use crate::widgets::{Direction, Slider, SliderLayout, SliderState};

    pub use folio_dom::{
        Color, Display, Document, Element, Event, Length, SharedDocument, Style, Viewport,
    };
}
