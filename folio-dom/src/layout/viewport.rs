/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Vertical scroll offset of the top edge.
    pub scroll_y: f32,
    /// Total scrollable height of the document.
    pub document_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            scroll_y: 0.0,
            document_height: 800.0,
        }
    }
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
            document_height: height,
        }
    }

    pub fn document_height(mut self, height: f32) -> Self {
        self.document_height = height;
        self
    }

    pub fn scrolled_to(mut self, y: f32) -> Self {
        self.scroll_y = y;
        self
    }

    /// How far the document can scroll.
    pub fn max_scroll(&self) -> f32 {
        (self.document_height - self.height).max(0.0)
    }

    /// Bottom edge of the visible window in document coordinates.
    pub fn bottom(&self) -> f32 {
        self.scroll_y + self.height
    }
}
