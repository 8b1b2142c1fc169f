//! Pure slider geometry.

use super::state::SliderState;

/// Everything the render step needs, derived from state alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    /// Horizontal track offset in pixels (zero or negative).
    pub offset_px: f32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub active_dot: usize,
    pub total_pages: usize,
}

impl SliderLayout {
    /// `offset = -(page * card_pitch * per_view)`.
    pub fn compute(state: &SliderState, card_pitch: f32) -> Self {
        let page = state.current_page();
        Self {
            offset_px: -(page as f32 * card_pitch * state.slides_per_view() as f32),
            prev_disabled: state.is_first_page(),
            next_disabled: state.is_last_page(),
            active_dot: page,
            total_pages: state.total_pages(),
        }
    }
}
