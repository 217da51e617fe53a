use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rb_tree::{
    Color, LogObserver, NodeView, RbTree, RecordingObserver, TreeEvent, TreeView,
};
use simplelog::{Config, LevelFilter, TestLogger};

use TreeEvent::*;

fn recorded_tree(keys: &[i32]) -> (RbTree<i32>, Arc<RecordingObserver<i32>>) {
    let recorder = Arc::new(RecordingObserver::new());
    let mut tree = RbTree::<i32>::new().with_observer(recorder.clone());
    for &k in keys {
        tree.insert(k).unwrap();
    }
    recorder.take();
    (tree, recorder)
}

fn observer<F>(f: F) -> F
where
    F: Fn(TreeEvent, &TreeView<'_, i32>, Option<NodeView<'_, i32>>),
{
    f
}

#[test]
fn insert_into_empty_reports_bst_insert_and_insert_matrix() {
    let (mut tree, recorder) = recorded_tree(&[]);
    tree.insert(10).unwrap();
    assert_eq!(recorder.events(), vec![AfterBstInsert, AfterInsert]);
}

#[test]
fn straight_line_insert_events_matrix() {
    let (mut tree, recorder) = recorded_tree(&[10, 20]);
    tree.insert(30).unwrap();
    assert_eq!(
        recorder.events(),
        vec![
            AfterBstInsert,
            AfterRecolorParent,
            AfterRecolorGrandparent,
            AfterRotateLeft,
            AfterInsert
        ]
    );

    let snapshots = recorder.snapshots();
    // Raw BST state before rebalancing: a right-leaning chain.
    assert_eq!(snapshots[0].keys, vec![10, 20, 30]);
    assert_eq!(snapshots[0].focus, Some(30));
    assert_eq!(snapshots[0].focus_color, Some(Color::Red));
    assert!(snapshots[0].rendering.starts_with("Node[0] black { 10 }"));
    // The pivot moved down under the new root.
    assert_eq!(snapshots[3].focus, Some(10));
    assert!(snapshots[4].rendering.starts_with("Node[1] black { 20 }"));
}

#[test]
fn zig_zag_insert_events_matrix() {
    let (mut tree, recorder) = recorded_tree(&[10, 30]);
    tree.insert(20).unwrap();
    assert_eq!(
        recorder.events(),
        vec![
            AfterBstInsert,
            AfterRotateRight,
            AfterRecolorParent,
            AfterRecolorGrandparent,
            AfterRotateLeft,
            AfterInsert
        ]
    );
    let snapshots = recorder.snapshots();
    assert_eq!(snapshots[1].focus, Some(30));
    assert_eq!(snapshots[4].focus, Some(10));
}

#[test]
fn red_uncle_insert_events_matrix() {
    let (mut tree, recorder) = recorded_tree(&[10, 5, 15]);
    tree.insert(1).unwrap();
    assert_eq!(recorder.events(), vec![AfterBstInsert, AfterRecolorUncleRed, AfterInsert]);
    let snapshots = recorder.snapshots();
    assert_eq!(snapshots[1].focus, Some(10));
    // Grandparent is painted red, the root recolor happens afterwards.
    assert_eq!(snapshots[1].focus_color, Some(Color::Red));
}

#[test]
fn red_leaf_removal_events_matrix() {
    let (mut tree, recorder) = recorded_tree(&[10, 5, 15]);
    tree.remove(&5).unwrap();
    assert_eq!(recorder.events(), vec![AfterSplice, AfterRemove]);
    let snapshots = recorder.snapshots();
    assert_eq!(snapshots[0].focus, None);
    assert_eq!(snapshots[1].keys, vec![10, 15]);
}

#[test]
fn black_leaf_removal_events_matrix() {
    let (mut tree, recorder) = recorded_tree(&[10, 5, 15, 1]);
    tree.remove(&15).unwrap();
    assert_eq!(
        recorder.events(),
        vec![AfterSplice, AfterDeleteRecolor, AfterRotateRight, AfterRemove]
    );
    assert_eq!(recorder.snapshots()[2].focus, Some(10));
}

#[test]
fn failed_operations_report_nothing_matrix() {
    let (mut tree, recorder) = recorded_tree(&[1, 2, 3]);
    assert!(tree.insert(2).is_err());
    assert!(tree.remove(&9).is_err());
    assert!(recorder.is_empty());
}

#[test]
fn snapshots_serialize_to_json_matrix() {
    let (mut tree, recorder) = recorded_tree(&[]);
    tree.insert(7).unwrap();
    let json = serde_json::to_value(recorder.snapshots()).unwrap();
    assert_eq!(json[0]["event"], "after_bst_insert");
    assert_eq!(json[0]["focus"], 7);
    assert_eq!(json[0]["focus_color"], "black");
    assert_eq!(json[1]["event"], "after_insert");
    assert_eq!(json[1]["keys"], serde_json::json!([7]));
}

#[test]
fn take_observer_stops_notifications_matrix() {
    let (mut tree, recorder) = recorded_tree(&[1]);
    assert!(tree.take_observer().is_some());
    tree.insert(2).unwrap();
    tree.remove(&1).unwrap();
    assert_eq!(recorder.len(), 0);
}

#[test]
fn closure_observer_matrix() {
    let rotations = Arc::new(AtomicUsize::new(0));
    let counter = rotations.clone();
    let mut tree = RbTree::<i32>::new();
    tree.set_observer(Arc::new(observer(move |event, tree, _node| {
        if matches!(event, AfterRotateLeft | AfterRotateRight) {
            counter.fetch_add(1, Ordering::SeqCst);
        }
        assert!(tree.root().is_some() || event == AfterRemove);
    })));

    for k in 1..=3 {
        tree.insert(k).unwrap();
    }
    assert_eq!(rotations.load(Ordering::SeqCst), 1);
}

#[test]
fn log_observer_matrix() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    let mut tree = RbTree::<i32>::new().with_observer(Arc::new(LogObserver::new()));
    for k in [5, 3, 8, 1, 4] {
        tree.insert(k).unwrap();
    }
    tree.remove(&3).unwrap();
    tree.assert_valid().unwrap();
}
