mod color;
mod enums;
mod style;

pub use color::{Color, ColorParseError};
pub use enums::{Align, Direction, Justify, Shape, Wrap};
pub use style::Style;
