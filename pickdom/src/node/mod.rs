//! Node types for the render tree.
//!
//! A tree of [`Node`]s is a plain value describing what to draw. Building
//! one has no side effects; the host rendering engine owns measurement,
//! layout, painting and gesture hit-testing. Gestures the host resolves
//! against an activatable region come back in through [`Node::activate`]
//! or [`Node::activate_region`].

mod layout;

pub use layout::Layout;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::event::{ActivateHandler, DispatchError, EventResult};
use crate::types::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the render tree
#[derive(Debug, Clone)]
pub enum Node {
    /// Text content
    Text { content: String, style: Style },

    /// Leaf box with no children (indicator marks, spacers)
    Box { style: Style },

    /// Container laying out children along its primary axis
    Container {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Activation-sensitive area wrapping its children
    Region {
        /// Element ID (auto-generated if not specified)
        id: String,
        children: Vec<Node>,
        style: Style,
        layout: Layout,
        /// Disabled regions ignore activation gestures.
        disabled: bool,
        /// Handler for activation gestures
        on_activate: Option<ActivateHandler>,
    },
}

impl Node {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: Style::new(),
        }
    }

    /// Create a text node with style
    pub fn text_styled(content: impl Into<String>, style: Style) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    /// Create a leaf box node
    pub fn box_(style: Style) -> Self {
        Self::Box { style }
    }

    /// Create a row container
    pub fn row(children: Vec<Node>) -> Self {
        Self::Container {
            children,
            style: Style::new(),
            layout: Layout::row(),
        }
    }

    /// Create a column container
    pub fn column(children: Vec<Node>) -> Self {
        Self::Container {
            children,
            style: Style::new(),
            layout: Layout::column(),
        }
    }

    /// Create a container with style and layout
    pub fn container_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Container {
            children,
            style,
            layout,
        }
    }

    /// Create an activatable region with an auto-generated id
    pub fn region(children: Vec<Node>) -> Self {
        Self::Region {
            id: generate_id("control"),
            children,
            style: Style::new(),
            layout: Layout::default(),
            disabled: false,
            on_activate: None,
        }
    }

    /// Create an activatable region with style and layout
    pub fn region_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Region {
            id: generate_id("control"),
            children,
            style,
            layout,
            disabled: false,
            on_activate: None,
        }
    }

    // Region builders. No-ops on other node kinds.

    /// Set the region id
    pub fn id(mut self, new_id: impl Into<String>) -> Self {
        if let Self::Region { id, .. } = &mut self {
            *id = new_id.into();
        }
        self
    }

    /// Set whether the region is disabled
    pub fn disabled(mut self, value: bool) -> Self {
        if let Self::Region { disabled, .. } = &mut self {
            *disabled = value;
        }
        self
    }

    /// Set the region's activation handler
    pub fn on_activate(mut self, handler: ActivateHandler) -> Self {
        if let Self::Region { on_activate, .. } = &mut self {
            *on_activate = Some(handler);
        }
        self
    }

    // Accessors

    /// Get the node's children (empty for leaves)
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Container { children, .. } | Self::Region { children, .. } => children,
            _ => &[],
        }
    }

    /// Get the node's style
    pub fn style(&self) -> &Style {
        match self {
            Self::Text { style, .. }
            | Self::Box { style }
            | Self::Container { style, .. }
            | Self::Region { style, .. } => style,
        }
    }

    /// Get the node's layout, if it is a container or region
    pub fn layout(&self) -> Option<&Layout> {
        match self {
            Self::Container { layout, .. } | Self::Region { layout, .. } => Some(layout),
            _ => None,
        }
    }

    /// Check if this node is an activatable region
    pub fn is_region(&self) -> bool {
        matches!(self, Self::Region { .. })
    }

    /// Check if this node is a disabled region
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Region { disabled: true, .. })
    }

    /// Get the region id if any
    pub fn region_id(&self) -> Option<&str> {
        match self {
            Self::Region { id, .. } => Some(id.as_str()),
            _ => None,
        }
    }

    // Dispatch

    /// Deliver an activation gesture to this node.
    ///
    /// Disabled regions ignore the gesture without invoking anything.
    /// Activating a region with no handler wired is an error rather than a
    /// silent no-op, so broken wiring surfaces at the first gesture instead
    /// of never. Non-region nodes ignore gestures.
    pub fn activate(&self) -> Result<EventResult, DispatchError> {
        match self {
            Self::Region {
                disabled: true, id, ..
            } => {
                log::trace!("[dispatch] ignoring activation on disabled region {id}");
                Ok(EventResult::Ignored)
            }
            Self::Region {
                on_activate: Some(handler),
                id,
                ..
            } => {
                log::trace!("[dispatch] activating region {id}");
                handler.invoke();
                Ok(EventResult::Consumed)
            }
            Self::Region {
                on_activate: None,
                id,
                ..
            } => {
                log::debug!("[dispatch] region {id} has no activation handler");
                Err(DispatchError::NoHandler)
            }
            _ => Ok(EventResult::Ignored),
        }
    }

    /// Deliver an activation gesture to the `index`-th region in tree order.
    pub fn activate_region(&self, index: usize) -> Result<EventResult, DispatchError> {
        match self.regions().get(index) {
            Some(region) => region.activate(),
            None => Err(DispatchError::NoSuchRegion(index)),
        }
    }

    /// Collect all activatable regions from this node and its children (in tree order)
    fn collect_regions<'a>(&'a self, regions: &mut Vec<&'a Node>) {
        if self.is_region() {
            regions.push(self);
        }
        for child in self.children() {
            child.collect_regions(regions);
        }
    }

    /// Get all activatable regions in tree order
    pub fn regions(&self) -> Vec<&Node> {
        let mut regions = Vec::new();
        self.collect_regions(&mut regions);
        regions
    }

    /// Find a region by id anywhere in the tree
    pub fn find_region(&self, target_id: &str) -> Option<&Node> {
        if self.region_id() == Some(target_id) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_region(target_id))
    }
}
