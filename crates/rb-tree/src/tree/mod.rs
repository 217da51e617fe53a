//! The [`RbTree`] container.

mod insert;
mod remove;

use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::error::RbTreeError;
use crate::observer::{TreeEvent, TreeObserver};
use crate::types::{RbNode, Side};
use crate::util;
use crate::view::{NodeView, TreeView};

/// Shared handle to an installed observer.
pub type ObserverRef<K> = Arc<dyn TreeObserver<K> + Send + Sync>;

fn default_comparator<K: Ord>(a: &K, b: &K) -> i32 {
    a.cmp(b) as i32
}

/// Red-black tree of unique keys.
///
/// Nodes are stored in an arena owned by the tree and linked by `u32`
/// indices, so a tree holds at most `u32::MAX + 1` keys. Lookups, inserts
/// and removals are O(log n).
pub struct RbTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<RbNode<K>>,
    root: Option<u32>,
    comparator: C,
    observer: Option<ObserverRef<K>>,
}

impl<K: Ord> RbTree<K, fn(&K, &K) -> i32> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: Ord> Default for RbTree<K, fn(&K, &K) -> i32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            observer: None,
        }
    }

    /// Installs `observer`, builder style.
    pub fn with_observer(mut self, observer: ObserverRef<K>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Installs `observer`, returning the one it replaces.
    pub fn set_observer(&mut self, observer: ObserverRef<K>) -> Option<ObserverRef<K>> {
        self.observer.replace(observer)
    }

    pub fn take_observer(&mut self) -> Option<ObserverRef<K>> {
        self.observer.take()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn view(&self) -> TreeView<'_, K> {
        TreeView::new(&self.arena, self.root)
    }

    pub fn root(&self) -> Option<NodeView<'_, K>> {
        self.view().root()
    }

    /// Looks `key` up. Absence is not an error.
    pub fn find(&self, key: &K) -> Option<NodeView<'_, K>> {
        util::find(&self.arena, self.root, key, &self.comparator)
            .map(|idx| NodeView::new(&self.arena, idx))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Node holding the smallest key.
    pub fn first(&self) -> Option<NodeView<'_, K>> {
        util::first(&self.arena, self.root).map(|idx| NodeView::new(&self.arena, idx))
    }

    /// Node holding the largest key.
    pub fn last(&self) -> Option<NodeView<'_, K>> {
        util::last(&self.arena, self.root).map(|idx| NodeView::new(&self.arena, idx))
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn black_height(&self) -> usize {
        util::black_height(&self.arena, self.root)
    }

    /// Checks the red-black invariants and that every arena node is
    /// reachable from the root.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_red_black_tree(&self.arena, self.root, &self.comparator)?;
        let reachable = util::size(&self.arena, self.root);
        if reachable != self.arena.len() {
            return Err(format!(
                "Arena holds {} nodes but {reachable} are reachable",
                self.arena.len()
            ));
        }
        Ok(())
    }

    fn notify(&self, event: TreeEvent, node: Option<u32>) {
        if let Some(observer) = &self.observer {
            let node = node.map(|idx| NodeView::new(&self.arena, idx));
            observer.notify(event, &self.view(), node);
        }
    }

    /// Rotates around `x` towards `dir` and reports it.
    fn rotate(&mut self, x: u32, dir: Side) -> Result<(), RbTreeError> {
        self.root = util::rotate(&mut self.arena, self.root, x, dir)?;
        log::trace!("rotated {dir:?} around node {x}");
        let event = match dir {
            Side::Left => TreeEvent::AfterRotateLeft,
            Side::Right => TreeEvent::AfterRotateRight,
        };
        self.notify(event, Some(x));
        Ok(())
    }
}

impl<K: Debug, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn print(&self) -> String {
        self.view().print()
    }
}

impl<K: Debug, C> Debug for RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.view().keys()).finish()
    }
}
