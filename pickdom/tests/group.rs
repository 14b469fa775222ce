use std::cell::RefCell;
use std::rc::Rc;

use pickdom::{
    Color, ControlOverrides, Direction, DispatchError, EventResult, GroupOption, Label, Node,
    SelectableGroup, Shape, Style, Wrap,
};

fn theme_options() -> Vec<GroupOption<&'static str>> {
    vec![
        GroupOption::new("light").label("Light"),
        GroupOption::new("dark").label("Dark"),
        GroupOption::new("system").label("System"),
    ]
}

fn selected_flags<V: Clone + PartialEq + 'static>(group: &SelectableGroup<V>) -> Vec<bool> {
    group.resolve().iter().map(|c| c.selected).collect()
}

// ============================================================================
// Value Matching
// ============================================================================

#[test]
fn test_value_match_selects_exactly_one() {
    let group = SelectableGroup::new().options(theme_options()).value("dark");

    assert_eq!(selected_flags(&group), vec![false, true, false]);
}

#[test]
fn test_no_value_selects_none() {
    let group = SelectableGroup::new().options(theme_options());

    assert_eq!(selected_flags(&group), vec![false, false, false]);
}

#[test]
fn test_unmatched_value_selects_none() {
    let group = SelectableGroup::new()
        .options(theme_options())
        .value("solarized");

    assert_eq!(selected_flags(&group), vec![false, false, false]);
}

#[test]
fn test_duplicate_values_all_select() {
    let group = SelectableGroup::new()
        .options(vec![
            GroupOption::new("dup").label("First"),
            GroupOption::new("dup").label("Second"),
            GroupOption::new("other").label("Other"),
        ])
        .value("dup");

    assert_eq!(selected_flags(&group), vec![true, true, false]);
}

#[test]
fn test_selection_follows_value_not_position() {
    let reordered = vec![
        GroupOption::new("system").label("System"),
        GroupOption::new("light").label("Light"),
        GroupOption::new("dark").label("Dark"),
    ];
    let group = SelectableGroup::new().options(reordered).value("dark");

    // "dark" moved to index 2 and the selection moved with it
    assert_eq!(selected_flags(&group), vec![false, false, true]);
}

// ============================================================================
// Change Forwarding
// ============================================================================

#[test]
fn test_activation_forwards_value() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let group = SelectableGroup::new().options(theme_options()).on_change({
        let seen = Rc::clone(&seen);
        move |value: &&str| seen.borrow_mut().push(*value)
    });

    let tree = group.build();
    assert_eq!(tree.activate_region(1), Ok(EventResult::Consumed));
    assert_eq!(*seen.borrow(), vec!["dark"]);
}

#[test]
fn test_sequential_activations_forward_in_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let group = SelectableGroup::new().options(theme_options()).on_change({
        let seen = Rc::clone(&seen);
        move |value: &&str| seen.borrow_mut().push(*value)
    });

    let tree = group.build();
    for index in [0, 2, 1] {
        tree.activate_region(index).unwrap();
    }
    assert_eq!(*seen.borrow(), vec!["light", "system", "dark"]);
}

#[test]
fn test_activation_does_not_move_selection_by_itself() {
    // Controlled component: the group renders the value it was given, and
    // only a rebuild with a new value changes what is selected
    let current = Rc::new(RefCell::new("light"));
    let build = |current: &Rc<RefCell<&'static str>>| {
        let sink = Rc::clone(current);
        SelectableGroup::new()
            .options(theme_options())
            .value(*current.borrow())
            .on_change(move |value: &&str| *sink.borrow_mut() = *value)
    };

    let group = build(&current);
    group.build().activate_region(2).unwrap();

    // The already-built group still renders the old value
    assert_eq!(selected_flags(&group), vec![true, false, false]);
    // Rebuilding from the updated state moves the selection
    assert_eq!(selected_flags(&build(&current)), vec![false, false, true]);
}

#[test]
fn test_no_change_handler_is_an_error_on_activation() {
    let group = SelectableGroup::new().options(theme_options());
    let tree = group.build();

    assert_eq!(tree.activate_region(0), Err(DispatchError::NoHandler));
}

#[test]
fn test_out_of_range_region_index() {
    let group = SelectableGroup::new().options(theme_options());
    let tree = group.build();

    assert_eq!(tree.activate_region(7), Err(DispatchError::NoSuchRegion(7)));
}

#[test]
fn test_disabled_option_ignores_activation() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let options = vec![
        GroupOption::new("on").label("On"),
        GroupOption::new("off")
            .label("Off")
            .overrides(ControlOverrides::new().disabled(true)),
    ];
    let group = SelectableGroup::new().options(options).on_change({
        let seen = Rc::clone(&seen);
        move |value: &&str| seen.borrow_mut().push(*value)
    });

    let tree = group.build();
    assert_eq!(tree.activate_region(1), Ok(EventResult::Ignored));
    assert!(seen.borrow().is_empty());

    // The enabled sibling still works
    assert_eq!(tree.activate_region(0), Ok(EventResult::Consumed));
    assert_eq!(*seen.borrow(), vec!["on"]);
}

// ============================================================================
// Config Layering
// ============================================================================

#[test]
fn test_shared_overrides_apply_to_all() {
    let group = SelectableGroup::new()
        .options(theme_options())
        .shared(ControlOverrides::new().size(30.0));

    for control in group.resolve() {
        assert_eq!(control.size, 30.0);
    }
}

#[test]
fn test_option_overrides_beat_shared() {
    let options = vec![
        GroupOption::new("a"),
        GroupOption::new("b")
            .overrides(ControlOverrides::new().border_color(Color::rgb(0, 0, 255))),
    ];
    let group = SelectableGroup::new()
        .options(options)
        .shared(ControlOverrides::new().border_color(Color::rgb(255, 0, 0)));

    let controls = group.resolve();
    assert_eq!(controls[0].border_color, Color::rgb(255, 0, 0));
    assert_eq!(controls[1].border_color, Color::rgb(0, 0, 255));
}

#[test]
fn test_layering_keeps_unset_defaults() {
    let group = SelectableGroup::new()
        .options(vec![GroupOption::new("only")])
        .shared(ControlOverrides::new().shape(Shape::RoundedSquare));

    let control = &group.resolve()[0];
    assert_eq!(control.shape, Shape::RoundedSquare);
    assert_eq!(control.size, 24.0);
    assert_eq!(control.border_width, 2.0);
}

#[test]
fn test_labels_resolve_in_option_order() {
    let group = SelectableGroup::new().options(theme_options());

    let labels: Vec<String> = group
        .resolve()
        .into_iter()
        .map(|control| match control.label {
            Some(Label::Text(text)) => text,
            other => panic!("expected text label, got {other:?}"),
        })
        .collect();
    assert_eq!(labels, vec!["Light", "Dark", "System"]);
}

// ============================================================================
// Built Tree
// ============================================================================

#[test]
fn test_group_container_wraps_along_direction() {
    let group = SelectableGroup::new().options(theme_options());
    let tree = group.build();

    let layout = tree.layout().unwrap();
    assert_eq!(layout.direction, Direction::Row);
    assert_eq!(layout.wrap, Wrap::Wrap);

    let vertical = SelectableGroup::new()
        .options(theme_options())
        .direction(Direction::Column);
    assert_eq!(
        vertical.build().layout().unwrap().direction,
        Direction::Column
    );
}

#[test]
fn test_container_style_applies() {
    let group = SelectableGroup::new()
        .options(theme_options())
        .container_style(Style::new().background(Color::rgb(250, 250, 250)));

    let tree = group.build();
    assert_eq!(tree.style().background, Some(Color::rgb(250, 250, 250)));
}

#[test]
fn test_position_derived_region_ids() {
    let group = SelectableGroup::new().options(theme_options());
    let tree = group.build();

    let ids: Vec<&str> = tree
        .regions()
        .iter()
        .filter_map(|region| region.region_id())
        .collect();
    assert_eq!(ids, vec!["opt-0", "opt-1", "opt-2"]);
}

#[test]
fn test_empty_group_builds_empty_container() {
    let group: SelectableGroup<&str> = SelectableGroup::new();
    let tree = group.build();

    assert!(group.is_empty());
    assert_eq!(tree.children().len(), 0);
    assert!(tree.regions().is_empty());
}

#[test]
fn test_len_counts_options() {
    let group = SelectableGroup::new().options(theme_options());

    assert_eq!(group.len(), 3);
    assert!(!group.is_empty());
}

#[test]
fn test_one_region_per_option() {
    let group = SelectableGroup::new().options(theme_options());
    let tree = group.build();

    assert_eq!(tree.regions().len(), 3);
    match &tree {
        Node::Container { children, .. } => assert_eq!(children.len(), 3),
        other => panic!("expected container node, got {other:?}"),
    }
}

// ============================================================================
// Typed Values
// ============================================================================

#[test]
fn test_string_values_and_incremental_options() {
    let group = SelectableGroup::new()
        .option(GroupOption::new(String::from("sm")).label("Small"))
        .option(GroupOption::new(String::from("lg")).label("Large"))
        .value(String::from("lg"));

    assert_eq!(group.len(), 2);
    assert_eq!(selected_flags(&group), vec![false, true]);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ImageFit {
    Contain,
    Cover,
}

#[test]
fn test_enum_values_match_and_forward() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let group = SelectableGroup::new()
        .options(vec![
            GroupOption::new(ImageFit::Contain).label("Contain"),
            GroupOption::new(ImageFit::Cover).label("Cover"),
        ])
        .value(ImageFit::Cover)
        .on_change({
            let seen = Rc::clone(&seen);
            move |value: &ImageFit| seen.borrow_mut().push(*value)
        });

    assert_eq!(selected_flags(&group), vec![false, true]);

    group.build().activate_region(0).unwrap();
    assert_eq!(*seen.borrow(), vec![ImageFit::Contain]);
}
