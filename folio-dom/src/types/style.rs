use std::time::Duration;

use super::{Color, Display, Length};

/// Inline style overrides.
///
/// Only the properties the page behaviors actually drive are modeled.
/// Everything else is left to the stylesheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub transform_x: Option<Length>,
    pub transform_y: Option<Length>,
    pub width: Option<Length>,
    pub opacity: Option<f32>,
    pub display: Display,
    pub animation_delay: Option<Duration>,
    pub background: Option<Color>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform_x(mut self, length: Length) -> Self {
        self.transform_x = Some(length);
        self
    }

    pub fn transform_y(mut self, length: Length) -> Self {
        self.transform_y = Some(length);
        self
    }

    pub fn width(mut self, length: Length) -> Self {
        self.width = Some(length);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn animation_delay(mut self, delay: Duration) -> Self {
        self.animation_delay = Some(delay);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }
}
