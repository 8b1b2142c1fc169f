mod observer;
mod viewport;

pub use observer::{Observer, RootMargin};
pub use viewport::Viewport;
