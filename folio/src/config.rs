//! Behavior configuration.
//!
//! Every struct deserializes from JSON with all fields optional, falling
//! back to the values the site ships with.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// A viewport-width threshold: widths up to and including `max_width`
/// show `per_view` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Breakpoint {
    pub max_width: u32,
    pub per_view: usize,
}

impl Breakpoint {
    pub const fn new(max_width: u32, per_view: usize) -> Self {
        Self {
            max_width,
            per_view,
        }
    }
}

/// Carousel configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Element that holds the slides and receives the offset.
    pub track_id: String,
    pub prev_id: String,
    pub next_id: String,
    pub dots_id: String,
    /// Class identifying slides inside the track.
    pub slide_class: String,
    /// Card width in pixels.
    pub card_width: f32,
    /// Gap between cards in pixels.
    pub card_gap: f32,
    /// Ascending width thresholds.
    pub breakpoints: Vec<Breakpoint>,
    /// Slides per view above the widest breakpoint.
    pub wide_per_view: usize,
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            track_id: "app-slider".into(),
            prev_id: "prevBtn".into(),
            next_id: "nextBtn".into(),
            dots_id: "sliderDots".into(),
            slide_class: "app-slide".into(),
            card_width: 300.0,
            card_gap: 24.0,
            breakpoints: vec![
                Breakpoint::new(480, 1),
                Breakpoint::new(768, 2),
                Breakpoint::new(1024, 3),
            ],
            wide_per_view: 4,
            autoplay: true,
            autoplay_interval_ms: 5000,
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track, prev, next and dots element IDs.
    pub fn elements(
        mut self,
        track: impl Into<String>,
        prev: impl Into<String>,
        next: impl Into<String>,
        dots: impl Into<String>,
    ) -> Self {
        self.track_id = track.into();
        self.prev_id = prev.into();
        self.next_id = next.into();
        self.dots_id = dots.into();
        self
    }

    pub fn slide_class(mut self, class: impl Into<String>) -> Self {
        self.slide_class = class.into();
        self
    }

    pub fn card(mut self, width: f32, gap: f32) -> Self {
        self.card_width = width;
        self.card_gap = gap;
        self
    }

    pub fn breakpoints(mut self, breakpoints: Vec<Breakpoint>, wide_per_view: usize) -> Self {
        self.breakpoints = breakpoints;
        self.wide_per_view = wide_per_view;
        self
    }

    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }

    pub fn autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    /// Width of one card plus the gap after it.
    pub fn card_pitch(&self) -> f32 {
        self.card_width + self.card_gap
    }

    /// Slides per view for a viewport `width`.
    pub fn slides_per_view(&self, width: f32) -> usize {
        self.breakpoints
            .iter()
            .find(|bp| width <= bp.max_width as f32)
            .map_or(self.wide_per_view, |bp| bp.per_view)
            .max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for pair in self.breakpoints.windows(2) {
            if pair[0].max_width >= pair[1].max_width {
                return Err(ConfigError::InvalidBreakpoints(format!(
                    "widths must ascend, got {} then {}",
                    pair[0].max_width, pair[1].max_width
                )));
            }
        }
        if self.breakpoints.iter().any(|bp| bp.per_view == 0) || self.wide_per_view == 0 {
            return Err(ConfigError::InvalidBreakpoints(
                "slides per view must be at least 1".into(),
            ));
        }
        if self.card_pitch() <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "card_width",
                reason: "card width plus gap must be positive".into(),
            });
        }
        if self.autoplay && self.autoplay_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "autoplay_interval_ms",
                reason: "must be non-zero when autoplay is enabled".into(),
            });
        }
        Ok(())
    }
}

/// Toast notification timing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Container toasts are appended to.
    pub container_id: String,
    /// Delay before the toast slides in.
    pub enter_delay_ms: u64,
    /// Time on screen before sliding out.
    pub display_ms: u64,
    /// Slide-out time before removal.
    pub exit_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            container_id: folio_dom::BODY_ID.into(),
            enter_delay_ms: 100,
            display_ms: 5000,
            exit_ms: 300,
        }
    }
}

impl ToastConfig {
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

/// A set of elements revealed together with a staggered delay.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevealGroup {
    /// Class selecting the elements.
    pub class: String,
    /// Class added up front to set the initial hidden state.
    pub effect: String,
    /// Delay added per element index.
    pub stagger_ms: u64,
}

impl RevealGroup {
    pub fn new(class: impl Into<String>, effect: impl Into<String>, stagger_ms: u64) -> Self {
        Self {
            class: class.into(),
            effect: effect.into(),
            stagger_ms,
        }
    }
}

/// Scroll-triggered reveal configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f32,
    /// Bottom root margin in pixels (negative shrinks the band).
    pub bottom_margin_px: f32,
    pub groups: Vec<RevealGroup>,
    /// Images carrying this class and a `data-src` load lazily.
    pub lazy_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: -50.0,
            groups: vec![
                RevealGroup::new("section-title", "fade-in", 0),
                RevealGroup::new("service-card", "fade-in", 200),
                RevealGroup::new("app-item", "fade-in", 100),
                RevealGroup::new("value-item", "slide-in-left", 200),
                RevealGroup::new("activity-image", "fade-in", 300),
            ],
            lazy_class: "lazy".into(),
        }
    }
}

/// Everything a page needs, loadable from one JSON document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub slider: SliderConfig,
    pub toast: ToastConfig,
    pub reveal: RevealConfig,
}

impl SiteConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.slider.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
