/// A CSS-like length used for offsets and widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    /// Resolve against a reference size (the size `100%` refers to).
    pub fn resolve(self, reference: f32) -> f32 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => reference * pct / 100.0,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Px(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Whatever the stylesheet says.
    #[default]
    Default,
    None,
    Block,
    Grid,
}
