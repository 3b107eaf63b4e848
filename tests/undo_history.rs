//! Undo history through the facade

use std::cell::RefCell;
use std::rc::Rc;

use mindmap_view::{
    HeadlessCanvas, HeadlessSurface, Mind, MindEvent, MindMap, MindMapOptions, NodeRecord,
    NodeTree, Size,
};
use pretty_assertions::assert_eq;

type Map = MindMap<HeadlessSurface, HeadlessCanvas>;

fn open(options: MindMapOptions) -> Map {
    let tree = NodeTree::new(NodeRecord::new("root", "A"));
    let mut map = MindMap::new(
        Mind::from_tree(&tree).unwrap(),
        HeadlessSurface::new(Size::new(800.0, 600.0)),
        HeadlessCanvas::new(),
        options,
    );
    map.init().unwrap();
    map
}

fn root_topic(map: &Map) -> String {
    map.mind().root().topic.clone().unwrap_or_default()
}

fn stacked_topics(map: &Map) -> Vec<String> {
    map.undo_manager()
        .snapshots()
        .map(|s| s.root.topic.clone().unwrap_or_default())
        .collect()
}

#[test]
fn test_capacity_two_scenario() {
    let mut map = open(MindMapOptions::default().with_undo_limit(2));
    // snapshots A, B, C are recorded before each rename
    for topic in ["B", "C", "D"] {
        map.update_node(&"root".into(), topic).unwrap();
    }
    assert_eq!(stacked_topics(&map), vec!["B", "C"]);

    assert!(map.undo().unwrap());
    assert_eq!(root_topic(&map), "C");
    assert_eq!(stacked_topics(&map), vec!["B"]);

    assert!(map.undo().unwrap());
    assert_eq!(root_topic(&map), "B");
    assert!(map.undo_manager().is_empty());

    assert!(!map.undo().unwrap());
    assert_eq!(root_topic(&map), "B");
}

#[test]
fn test_undo_on_empty_stack_leaves_tree_alone() {
    let mut map = open(MindMapOptions::default());
    let before = map.node_tree();
    assert!(!map.undo().unwrap());
    assert_eq!(map.node_tree(), before);
    assert_eq!(map.view().registry().len(), 1);
}

#[test]
fn test_undo_does_not_record_itself() {
    let mut map = open(MindMapOptions::default());
    map.update_node(&"root".into(), "B").unwrap();
    map.update_node(&"root".into(), "C").unwrap();
    map.undo().unwrap();
    assert_eq!(map.undo_manager().len(), 1);
}

#[test]
fn test_undo_restores_structure_and_view() {
    let mut map = open(MindMapOptions::default());
    map.add_node(&"root".into(), "x", Some("X".to_string()), None)
        .unwrap();
    map.add_node(&"x".into(), "y", Some("Y".to_string()), None)
        .unwrap();
    map.remove_node(&"x".into()).unwrap();
    assert!(!map.mind().contains(&"y".into()));

    map.undo().unwrap();
    assert!(map.mind().contains(&"y".into()));
    assert!(map.view().registry().is_bound(&"y".into()));
    assert_eq!(map.view().canvas().lines().len(), 4);

    map.undo().unwrap();
    assert!(!map.mind().contains(&"y".into()));
    assert!(!map.view().registry().is_bound(&"y".into()));
}

#[test]
fn test_snapshot_is_independent_of_live_tree() {
    let mut map = open(MindMapOptions::default());
    map.update_node(&"root".into(), "B").unwrap();
    map.update_node(&"root".into(), "C").unwrap();
    assert_eq!(stacked_topics(&map), vec!["A", "B"]);
}

#[test]
fn test_non_mutating_operations_are_not_checkpoints() {
    let mut map = open(MindMapOptions::default());
    map.add_node(&"root".into(), "x", Some("X".to_string()), None)
        .unwrap();
    map.add_node(&"x".into(), "y", Some("Y".to_string()), None)
        .unwrap();
    let depth = map.undo_manager().len();

    map.select_node(&"x".into()).unwrap();
    map.toggle_node(&"x".into()).unwrap();
    map.toggle_node(&"x".into()).unwrap();
    map.edit_node_begin(&"x".into()).unwrap();
    map.edit_node_end().unwrap();
    map.resize();
    map.center_root();

    assert_eq!(map.undo_manager().len(), depth);
}

#[test]
fn test_before_edit_carries_previous_tree() {
    let mut map = open(MindMapOptions::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    map.add_listener(move |event| {
        if let MindEvent::BeforeEdit(tree) = event {
            sink.borrow_mut()
                .push(tree.root.topic.clone().unwrap_or_default());
        }
    });

    map.update_node(&"root".into(), "B").unwrap();
    map.show_node_tree(&NodeTree::new(NodeRecord::new("other", "Other")))
        .unwrap();

    assert_eq!(*seen.borrow(), vec!["A".to_string(), "B".to_string()]);
    assert_eq!(map.mind().root_id().as_str(), "other");

    map.undo().unwrap();
    assert_eq!(map.mind().root_id().as_str(), "root");
    assert_eq!(root_topic(&map), "B");
}

#[test]
fn test_invalid_tree_is_rejected_before_checkpoint() {
    let mut map = open(MindMapOptions::default());
    let tree = NodeTree::new(
        NodeRecord::new("root", "R")
            .with_child(NodeRecord::new("dup", "1"))
            .with_child(NodeRecord::new("dup", "2")),
    );
    assert!(map.show_node_tree(&tree).is_err());
    assert!(map.undo_manager().is_empty());
    assert_eq!(root_topic(&map), "A");
}

#[test]
fn test_zero_limit_disables_history() {
    let mut map = open(MindMapOptions::default().with_undo_limit(0));
    map.update_node(&"root".into(), "B").unwrap();
    assert!(!map.undo().unwrap());
    assert_eq!(root_topic(&map), "B");
}
