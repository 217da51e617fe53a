//! Diagnostic hook invoked at named checkpoints of insert and remove.
//!
//! Observers only ever see [`TreeView`] / [`NodeView`] borrows, so they can
//! inspect intermediate states (including transiently invalid ones between
//! fixup steps) but cannot change the tree.

use std::fmt::Debug;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::types::Color;
use crate::view::{NodeView, TreeView};

/// Checkpoints reported to a [`TreeObserver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeEvent {
    /// New node linked as a plain BST leaf, before any fixup.
    AfterBstInsert,
    /// Insert finished, invariants restored.
    AfterInsert,
    /// Parent and uncle painted black, grandparent red. Focus is the
    /// grandparent.
    AfterRecolorUncleRed,
    /// Black-uncle case: parent painted black.
    AfterRecolorParent,
    /// Black-uncle case: grandparent painted red.
    AfterRecolorGrandparent,
    /// Focus is the pivot, now the left child of the lifted node.
    AfterRotateLeft,
    /// Focus is the pivot, now the right child of the lifted node.
    AfterRotateRight,
    /// Excised node unlinked. Focus is its replacement, if any.
    AfterSplice,
    /// A delete-fixup recolor step. Focus is the node carrying the extra
    /// black, if any.
    AfterDeleteRecolor,
    /// Remove finished, invariants restored.
    AfterRemove,
}

pub trait TreeObserver<K> {
    fn notify(&self, event: TreeEvent, tree: &TreeView<'_, K>, node: Option<NodeView<'_, K>>);
}

impl<K, F> TreeObserver<K> for F
where
    F: Fn(TreeEvent, &TreeView<'_, K>, Option<NodeView<'_, K>>),
{
    fn notify(&self, event: TreeEvent, tree: &TreeView<'_, K>, node: Option<NodeView<'_, K>>) {
        self(event, tree, node)
    }
}

/// Writes one `log` record per checkpoint.
#[derive(Clone, Copy, Debug)]
pub struct LogObserver {
    level: log::Level,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::with_level(log::Level::Debug)
    }

    pub fn with_level(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug> TreeObserver<K> for LogObserver {
    fn notify(&self, event: TreeEvent, tree: &TreeView<'_, K>, node: Option<NodeView<'_, K>>) {
        match node {
            Some(n) => log::log!(
                self.level,
                "{event:?}: node {:?} ({:?}), size {}",
                n.key(),
                n.color(),
                tree.len()
            ),
            None => log::log!(self.level, "{event:?}: nil, size {}", tree.len()),
        }
    }
}

/// State of the tree captured at one checkpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot<K> {
    pub event: TreeEvent,
    pub focus: Option<K>,
    pub focus_color: Option<Color>,
    /// In-order keys at the time of the event.
    pub keys: Vec<K>,
    pub rendering: String,
}

/// Records a [`Snapshot`] for every checkpoint.
pub struct RecordingObserver<K> {
    snapshots: Mutex<Vec<Snapshot<K>>>,
}

impl<K> RecordingObserver<K> {
    pub fn new() -> Self {
        Self {
            snapshots: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Snapshot<K>>> {
        self.snapshots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<TreeEvent> {
        self.lock().iter().map(|s| s.event).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drains everything recorded so far.
    pub fn take(&self) -> Vec<Snapshot<K>> {
        std::mem::take(&mut *self.lock())
    }
}

impl<K: Clone> RecordingObserver<K> {
    pub fn snapshots(&self) -> Vec<Snapshot<K>> {
        self.lock().clone()
    }
}

impl<K> Default for RecordingObserver<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Debug> TreeObserver<K> for RecordingObserver<K> {
    fn notify(&self, event: TreeEvent, tree: &TreeView<'_, K>, node: Option<NodeView<'_, K>>) {
        let snapshot = Snapshot {
            event,
            focus: node.map(|n| n.key().clone()),
            focus_color: node.map(|n| n.color()),
            keys: tree.keys().into_iter().cloned().collect(),
            rendering: tree.print(),
        };
        self.lock().push(snapshot);
    }
}
