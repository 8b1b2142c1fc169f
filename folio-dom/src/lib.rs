pub mod document;
pub mod easing;
pub mod element;
pub mod event;
pub mod layout;
pub mod types;

pub use document::{Document, SharedDocument, BODY_ID};
pub use easing::Easing;
pub use element::Element;
pub use event::Event;
pub use layout::{Observer, RootMargin, Viewport};
pub use types::*;
