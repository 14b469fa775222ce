//! Mutually exclusive selection across an ordered option list.

use crate::control::{ControlOverrides, Label, SelectableControl, resolve_control};
use crate::event::{ActivateHandler, ChangeHandler};
use crate::node::{Layout, Node};
use crate::types::{Direction, Style, Wrap};

/// One selectable option: the value forwarded on selection, an optional
/// label, and per-option control overrides.
#[derive(Debug, Clone)]
pub struct GroupOption<V> {
    pub value: V,
    pub label: Option<Label>,
    pub overrides: ControlOverrides,
}

impl<V> GroupOption<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            label: None,
            overrides: ControlOverrides::new(),
        }
    }

    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn overrides(mut self, overrides: ControlOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// A group of mutually exclusive selectable controls.
///
/// The group owns no selection state. `value` is compared against each
/// option's value with `V`'s `PartialEq`; matching options render selected,
/// and activating a control forwards that option's value to `on_change`.
/// Re-rendering with the updated value is the caller's job, which keeps
/// one authoritative copy of the selection.
///
/// Values are matched, never indices, so reordering options does not
/// change what a selection means.
///
/// # Example
///
/// ```
/// use pickdom::{GroupOption, SelectableGroup};
///
/// let group = SelectableGroup::new()
///     .options(vec![
///         GroupOption::new("light").label("Light"),
///         GroupOption::new("dark").label("Dark"),
///         GroupOption::new("system").label("System"),
///     ])
///     .value("dark");
///
/// let controls = group.resolve();
/// assert!(controls[1].selected);
/// ```
#[derive(Debug, Clone)]
pub struct SelectableGroup<V> {
    /// Options in render order
    pub options: Vec<GroupOption<V>>,
    /// The currently selected value, owned by the caller
    pub value: Option<V>,
    /// Handler invoked with the activated option's value
    pub on_change: Option<ChangeHandler<V>>,
    /// Overrides shared by every control in the group
    pub shared: ControlOverrides,
    /// Primary axis for the option row
    pub direction: Direction,
    /// Style patch applied over the group container
    pub container_style: Style,
}

impl<V> Default for SelectableGroup<V> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            value: None,
            on_change: None,
            shared: ControlOverrides::new(),
            direction: Direction::Row,
            container_style: Style::new(),
        }
    }
}

impl<V: Clone + PartialEq + 'static> SelectableGroup<V> {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: Vec<GroupOption<V>>) -> Self {
        self.options = options;
        self
    }

    /// Append a single option
    pub fn option(mut self, option: GroupOption<V>) -> Self {
        self.options.push(option);
        self
    }

    /// Set the selected value
    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Fn(&V) + 'static) -> Self {
        self.on_change = Some(ChangeHandler::new(handler));
        self
    }

    pub fn shared(mut self, shared: ControlOverrides) -> Self {
        self.shared = shared;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    /// Get the number of options
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if there are no options
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Resolve the effective control for every option, in input order.
    ///
    /// Each control is built from the defaults, the shared overrides, then
    /// the option's own overrides. An unset `value` matches nothing;
    /// duplicate option values are not deduplicated, so every matching
    /// option resolves selected.
    pub fn resolve(&self) -> Vec<SelectableControl> {
        self.options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let mut control =
                    resolve_control(SelectableControl::default(), &self.shared, &option.overrides);
                control.selected = self.value.as_ref() == Some(&option.value);
                control.label = option.label.clone();
                // Position-derived ids, stable while options are not
                // reordered or filtered at runtime.
                control.id = Some(format!("opt-{index}"));
                control.on_activate = self.on_change.clone().map(|on_change| {
                    let value = option.value.clone();
                    ActivateHandler::new(move || on_change.invoke(&value))
                });
                control
            })
            .collect()
    }

    /// Build the group's render tree: one control per option inside a
    /// wrapping container along `direction`.
    pub fn build(&self) -> Node {
        let controls = self.resolve();
        log::debug!(
            "[group] building {} controls ({} selected)",
            controls.len(),
            controls.iter().filter(|control| control.selected).count()
        );
        let children: Vec<Node> = controls.iter().map(SelectableControl::build).collect();
        Node::container_styled(
            children,
            self.container_style.clone(),
            Layout {
                direction: self.direction,
                wrap: Wrap::Wrap,
                ..Layout::default()
            },
        )
    }
}
