use super::Viewport;
use crate::types::Length;

/// Grows (positive) or shrinks (negative) the viewport's top and bottom
/// edges before intersection is tested. Percentages refer to the viewport
/// height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: Length,
    pub bottom: Length,
}

impl RootMargin {
    pub const fn new(top: Length, bottom: Length) -> Self {
        Self { top, bottom }
    }

    pub const fn bottom_px(px: f32) -> Self {
        Self {
            top: Length::Px(0.0),
            bottom: Length::Px(px),
        }
    }
}

/// Visibility test against the viewport, in the manner of an
/// intersection observer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Observer {
    /// Minimum visible fraction of the target (0.0 to 1.0).
    pub threshold: f32,
    pub root_margin: RootMargin,
}

impl Observer {
    pub fn new(threshold: f32, root_margin: RootMargin) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin,
        }
    }

    /// The observed band `(top, bottom)` in document coordinates.
    pub fn band(&self, viewport: &Viewport) -> (f32, f32) {
        let top = viewport.scroll_y - self.root_margin.top.resolve(viewport.height);
        let bottom = viewport.bottom() + self.root_margin.bottom.resolve(viewport.height);
        (top, bottom)
    }

    /// Fraction of the target `[top, top + height)` inside the band.
    pub fn ratio(&self, viewport: &Viewport, top: f32, height: f32) -> f32 {
        let (band_top, band_bottom) = self.band(viewport);
        if height <= 0.0 {
            return if top >= band_top && top < band_bottom {
                1.0
            } else {
                0.0
            };
        }
        let overlap = (top + height).min(band_bottom) - top.max(band_top);
        (overlap / height).clamp(0.0, 1.0)
    }

    pub fn is_intersecting(&self, viewport: &Viewport, top: f32, height: f32) -> bool {
        let ratio = self.ratio(viewport, top, height);
        ratio > 0.0 && ratio >= self.threshold
    }
}
