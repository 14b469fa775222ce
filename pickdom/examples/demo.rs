//! Headless walkthrough of a controlled selection group.
//!
//! Plays the host role: builds the tree, delivers activation gestures,
//! stores the forwarded value, and rebuilds. Run with
//! `cargo run --example demo`; dispatch logs land in `demo.log`.

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use pickdom::{Color, ControlOverrides, GroupOption, Node, SelectableGroup};
use simplelog::{Config, LevelFilter, WriteLogger};

type Selection = Rc<RefCell<Option<&'static str>>>;

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let selection: Selection = Rc::new(RefCell::new(None));

    println!("initial state:");
    print_group(&build_group(&selection).build());

    for (gesture, index) in [("tap System", 2), ("tap Dark", 1), ("tap Dark again", 1)] {
        let tree = build_group(&selection).build();
        tree.activate_region(index).expect("option exists");

        println!("\n{gesture}:");
        print_group(&build_group(&selection).build());
    }

    Ok(())
}

fn build_group(selection: &Selection) -> SelectableGroup<&'static str> {
    let sink = Rc::clone(selection);
    let mut group = SelectableGroup::new()
        .options(vec![
            GroupOption::new("light").label("Light"),
            GroupOption::new("dark").label("Dark"),
            GroupOption::new("system").label("System"),
        ])
        .shared(ControlOverrides::new().selected_color(Color::rgb(30, 144, 255)))
        .on_change(move |value: &&str| *sink.borrow_mut() = Some(*value));
    if let Some(current) = *selection.borrow() {
        group = group.value(current);
    }
    group
}

/// Print one line per control, reading selection off the built tree the
/// way a paint pass would: a filled inner mark means selected.
fn print_group(tree: &Node) {
    for region in tree.regions() {
        let mark = &region.children()[0].children()[0];
        let filled = mark
            .style()
            .background
            .is_some_and(|color| !color.is_transparent());
        let bullet = if filled { "(*)" } else { "( )" };
        let label = region.children().get(1).map(node_text).unwrap_or_default();
        println!("  {bullet} {label}");
    }
}

fn node_text(node: &Node) -> String {
    match node {
        Node::Text { content, .. } => content.clone(),
        _ => String::new(),
    }
}
