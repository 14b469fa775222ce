use crate::types::{Align, Direction, Justify, Wrap};

/// Layout properties for container and region nodes.
///
/// The host's layout engine consumes these; this crate only records them on
/// the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub direction: Direction,
    pub wrap: Wrap,
    pub justify: Justify,
    pub align: Align,
    pub gap: f32,
}

impl Layout {
    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn column() -> Self {
        Self {
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }
}
