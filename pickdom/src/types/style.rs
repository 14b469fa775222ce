use super::Color;

/// Visual properties of a node. Every property is optional; unset
/// properties are left to the host's defaults, which makes the same type
/// usable both as a computed style and as a patch applied over one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub corner_radius: Option<f32>,
    pub border_width: Option<f32>,
    pub border_color: Option<Color>,
    pub background: Option<Color>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set width and height to the same value.
    pub fn size(mut self, size: f32) -> Self {
        self.width = Some(size);
        self.height = Some(size);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Overlay `patch` on top of this style. Set properties in the patch
    /// win; unset ones keep the base value.
    pub fn patched(mut self, patch: &Style) -> Self {
        if patch.width.is_some() {
            self.width = patch.width;
        }
        if patch.height.is_some() {
            self.height = patch.height;
        }
        if patch.corner_radius.is_some() {
            self.corner_radius = patch.corner_radius;
        }
        if patch.border_width.is_some() {
            self.border_width = patch.border_width;
        }
        if patch.border_color.is_some() {
            self.border_color = patch.border_color;
        }
        if patch.background.is_some() {
            self.background = patch.background;
        }
        self
    }
}
