//! Borrowed, read-only handles into a tree.
//!
//! A view holds a shared borrow of the arena, so it cannot outlive the next
//! mutation of the tree it came from.

use std::fmt;

use crate::types::{Color, RbNode};
use crate::util;

/// Read-only view of a whole tree.
pub struct TreeView<'a, K> {
    arena: &'a [RbNode<K>],
    root: Option<u32>,
}

impl<K> Clone for TreeView<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for TreeView<'_, K> {}

impl<'a, K> TreeView<'a, K> {
    pub(crate) fn new(arena: &'a [RbNode<K>], root: Option<u32>) -> Self {
        Self { arena, root }
    }

    pub fn arena(&self) -> &'a [RbNode<K>] {
        self.arena
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn root(&self) -> Option<NodeView<'a, K>> {
        self.root.map(|idx| NodeView::new(self.arena, idx))
    }

    /// Node at arena slot `index`, if the slot exists.
    pub fn node(&self, index: u32) -> Option<NodeView<'a, K>> {
        ((index as usize) < self.arena.len()).then(|| NodeView::new(self.arena, index))
    }

    pub fn len(&self) -> usize {
        util::size(self.arena, self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> usize {
        util::height(self.arena, self.root)
    }

    pub fn black_height(&self) -> usize {
        util::black_height(self.arena, self.root)
    }

    /// Keys in ascending order. Diagnostic helper, walks the whole tree.
    pub fn keys(&self) -> Vec<&'a K> {
        let mut out = Vec::new();
        let mut curr = util::first(self.arena, self.root);
        while let Some(i) = curr {
            out.push(&self.arena[i as usize].k);
            curr = util::next(self.arena, i);
        }
        out
    }
}

impl<K: fmt::Debug> TreeView<'_, K> {
    pub fn print(&self) -> String {
        util::print(self.arena, self.root, "")
    }
}

/// Read-only view of a single node.
pub struct NodeView<'a, K> {
    arena: &'a [RbNode<K>],
    idx: u32,
}

impl<K> Clone for NodeView<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeView<'_, K> {}

impl<'a, K> NodeView<'a, K> {
    pub(crate) fn new(arena: &'a [RbNode<K>], idx: u32) -> Self {
        Self { arena, idx }
    }

    fn node(&self) -> &'a RbNode<K> {
        &self.arena[self.idx as usize]
    }

    fn link(&self, idx: Option<u32>) -> Option<NodeView<'a, K>> {
        idx.map(|i| NodeView::new(self.arena, i))
    }

    /// Arena slot of this node. Valid until the tree is next mutated.
    pub fn index(&self) -> u32 {
        self.idx
    }

    pub fn key(&self) -> &'a K {
        &self.node().k
    }

    pub fn color(&self) -> Color {
        self.node().c
    }

    pub fn is_red(&self) -> bool {
        self.color().is_red()
    }

    pub fn is_black(&self) -> bool {
        self.color().is_black()
    }

    pub fn parent(&self) -> Option<NodeView<'a, K>> {
        self.link(self.node().p)
    }

    pub fn left(&self) -> Option<NodeView<'a, K>> {
        self.link(self.node().l)
    }

    pub fn right(&self) -> Option<NodeView<'a, K>> {
        self.link(self.node().r)
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeView<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("index", &self.idx)
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}
