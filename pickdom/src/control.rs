//! Single selectable control: an indicator with an optional label.

use crate::event::ActivateHandler;
use crate::node::{Layout, Node};
use crate::types::{Align, Color, Justify, Shape, Style};

/// Label content for a control: plain text or a prebuilt node.
#[derive(Debug, Clone)]
pub enum Label {
    Text(String),
    Node(Node),
}

impl Label {
    fn to_node(&self) -> Node {
        match self {
            Label::Text(content) => Node::text(content.clone()),
            Label::Node(node) => node.clone(),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Label {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

/// A single selectable indicator with an optional trailing label.
///
/// The control is fully controlled: `selected` renders whatever the caller
/// says, and an activation gesture only reports itself through
/// `on_activate`. Nothing here stores or toggles selection state.
///
/// [`build`](Self::build) derives the indicator geometry from `size` and
/// `shape` and returns the render tree. Building is pure; callers rebuild
/// after changing their own state.
///
/// # Example
///
/// ```
/// use pickdom::{Color, SelectableControl, Shape};
///
/// let control = SelectableControl::new()
///     .selected(true)
///     .size(32.0)
///     .selected_color(Color::rgb(30, 144, 255))
///     .shape(Shape::RoundedSquare)
///     .label("Notifications");
///
/// let tree = control.build();
/// assert!(tree.is_region());
/// ```
#[derive(Debug, Clone)]
pub struct SelectableControl {
    /// Whether the control renders in its selected state
    pub selected: bool,
    /// Indicator edge length (width and height)
    pub size: f32,
    /// Indicator border thickness, drawn in every state
    pub border_width: f32,
    /// Border color when not selected
    pub border_color: Color,
    /// Border and inner-mark color when selected
    pub selected_color: Color,
    /// Indicator fill when not selected
    pub background: Color,
    /// Indicator fill when selected
    pub selected_background: Color,
    /// Indicator silhouette
    pub shape: Shape,
    /// Disabled controls ignore activation gestures
    pub disabled: bool,
    /// Handler for activation gestures
    pub on_activate: Option<ActivateHandler>,
    /// Content rendered after the indicator
    pub label: Option<Label>,
    /// Style patch applied over the outer region
    pub style: Style,
    /// Style patch applied over the computed inner mark
    pub inner_style: Style,
    /// Region id (auto-generated if not specified)
    pub id: Option<String>,
}

impl Default for SelectableControl {
    fn default() -> Self {
        Self {
            selected: false,
            size: 24.0,
            border_width: 2.0,
            border_color: Color::BLACK,
            selected_color: Color::BLACK,
            background: Color::Transparent,
            selected_background: Color::BLACK,
            shape: Shape::Circle,
            disabled: false,
            on_activate: None,
            label: None,
            style: Style::new(),
            inner_style: Style::new(),
            id: None,
        }
    }
}

impl SelectableControl {
    /// Create a control with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn selected_color(mut self, color: Color) -> Self {
        self.selected_color = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn selected_background(mut self, color: Color) -> Self {
        self.selected_background = color;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the activation handler
    pub fn on_activate(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_activate = Some(ActivateHandler::new(handler));
        self
    }

    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn inner_style(mut self, style: Style) -> Self {
        self.inner_style = style;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Computed style for the indicator ring.
    ///
    /// Size values pass through uninterpreted; a negative or zero `size`
    /// produces degenerate geometry the host clamps as it sees fit.
    fn indicator_style(&self) -> Style {
        let radius = match self.shape {
            Shape::RoundedSquare => self.size / 6.0,
            _ => self.size / 2.0,
        };
        let border_color = if self.selected {
            self.selected_color
        } else {
            self.border_color
        };
        let background = if self.selected {
            self.selected_background
        } else {
            self.background
        };
        Style::new()
            .size(self.size)
            .corner_radius(radius)
            .border_width(self.border_width)
            .border_color(border_color)
            .background(background)
    }

    /// Computed style for the inner mark, half the indicator's size.
    ///
    /// The mark is always in the tree; when not selected its fill is
    /// transparent, so selection toggles paint without reshaping the tree.
    fn inner_mark_style(&self) -> Style {
        let radius = match self.shape {
            Shape::RoundedSquare => self.size / 12.0,
            _ => self.size / 4.0,
        };
        let fill = if self.selected {
            self.selected_color
        } else {
            Color::Transparent
        };
        Style::new()
            .size(self.size * 0.5)
            .corner_radius(radius)
            .background(fill)
            .patched(&self.inner_style)
    }

    // -------------------------------------------------------------------------
    // Build
    // -------------------------------------------------------------------------

    /// Build the render tree for this control.
    ///
    /// The tree is an activatable region containing the indicator and,
    /// when present, the label after it on the same row.
    pub fn build(&self) -> Node {
        let indicator = Node::container_styled(
            vec![Node::box_(self.inner_mark_style())],
            self.indicator_style(),
            Layout::row().justify(Justify::Center).align(Align::Center),
        );

        let mut children = vec![indicator];
        if let Some(label) = &self.label {
            children.push(label.to_node());
        }

        let mut region = Node::region_styled(
            children,
            self.style.clone(),
            Layout::row().align(Align::Center),
        )
        .disabled(self.disabled);
        if let Some(id) = &self.id {
            region = region.id(id.clone());
        }
        if let Some(handler) = &self.on_activate {
            region = region.on_activate(handler.clone());
        }
        region
    }
}

/// Partial control configuration. `Some` fields replace the base value.
///
/// Overrides cover visual and interaction attributes only. Selection state,
/// the activation handler, the label and the id are owned by whoever builds
/// the control, so they cannot be overridden from shared or per-option
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct ControlOverrides {
    pub size: Option<f32>,
    pub border_width: Option<f32>,
    pub border_color: Option<Color>,
    pub selected_color: Option<Color>,
    pub background: Option<Color>,
    pub selected_background: Option<Color>,
    pub shape: Option<Shape>,
    pub disabled: Option<bool>,
    pub style: Option<Style>,
    pub inner_style: Option<Style>,
}

impl ControlOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
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

    pub fn selected_color(mut self, color: Color) -> Self {
        self.selected_color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn selected_background(mut self, color: Color) -> Self {
        self.selected_background = Some(color);
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn inner_style(mut self, style: Style) -> Self {
        self.inner_style = Some(style);
        self
    }

    /// Apply these overrides on top of `control`, field by field.
    ///
    /// Style patches merge through [`Style::patched`] rather than replacing
    /// the whole patch, so independent layers can each set different
    /// properties.
    pub fn apply(&self, mut control: SelectableControl) -> SelectableControl {
        if let Some(size) = self.size {
            control.size = size;
        }
        if let Some(border_width) = self.border_width {
            control.border_width = border_width;
        }
        if let Some(border_color) = self.border_color {
            control.border_color = border_color;
        }
        if let Some(selected_color) = self.selected_color {
            control.selected_color = selected_color;
        }
        if let Some(background) = self.background {
            control.background = background;
        }
        if let Some(selected_background) = self.selected_background {
            control.selected_background = selected_background;
        }
        if let Some(shape) = self.shape {
            control.shape = shape;
        }
        if let Some(disabled) = self.disabled {
            control.disabled = disabled;
        }
        if let Some(style) = &self.style {
            control.style = control.style.clone().patched(style);
        }
        if let Some(inner_style) = &self.inner_style {
            control.inner_style = control.inner_style.clone().patched(inner_style);
        }
        control
    }
}

/// Resolve an effective control from lowest to highest precedence:
/// built-in defaults, then group-shared overrides, then per-option
/// overrides.
pub fn resolve_control(
    defaults: SelectableControl,
    shared: &ControlOverrides,
    per_option: &ControlOverrides,
) -> SelectableControl {
    per_option.apply(shared.apply(defaults))
}
