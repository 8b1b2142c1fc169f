mod color;
mod enums;
mod style;

pub use color::Color;
pub use enums::{Display, Length};
pub use style::Style;
