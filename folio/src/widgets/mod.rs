//! Interactive page components.

pub mod slider;

pub use slider::{Direction, Slider, SliderLayout, SliderState};
