use crate::error::RbTreeError;
use crate::observer::TreeEvent;
use crate::types::{Color, Side};
use crate::util;

use super::RbTree;

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Removes `key`.
    ///
    /// Fails with [`RbTreeError::KeyNotFound`] if the key is absent; the tree
    /// is not modified in that case.
    pub fn remove(&mut self, key: &K) -> Result<(), RbTreeError> {
        let target = util::find(&self.arena, self.root, key, &self.comparator)
            .ok_or(RbTreeError::KeyNotFound)?;

        // A node with two children keeps its position and takes over the key
        // of its in-order successor, which has no left child and is excised
        // instead.
        let excised = match (self.arena[target as usize].l, self.arena[target as usize].r) {
            (Some(_), Some(r)) => {
                let successor = util::leftmost(&self.arena, r);
                util::swap_keys(&mut self.arena, target, successor);
                successor
            }
            _ => target,
        };
        log::trace!("removing node {target}, excising node {excised}");

        let color = self.arena[excised as usize].c;
        let child = self.arena[excised as usize].l.or(self.arena[excised as usize].r);
        let slot = self.slot_of(excised);

        match slot {
            Some((p, side)) => {
                util::set_child(&mut self.arena, p, side, child);
            }
            None => {
                if let Some(c) = child {
                    let side = util::side_of(&self.arena, excised, c);
                    util::set_child(&mut self.arena, excised, side, None);
                }
                self.root = child;
            }
        }
        self.notify(TreeEvent::AfterSplice, child);

        if color.is_black() {
            self.delete_fixup(child, slot)?;
        }

        self.root = util::release(&mut self.arena, self.root, excised);
        self.notify(TreeEvent::AfterRemove, None);
        Ok(())
    }

    /// Absorbs the extra black carried by `x`.
    ///
    /// `x` may be nil, so its position is tracked as `(parent, side)`;
    /// `None` means `x` sits at the root.
    fn delete_fixup(
        &mut self,
        mut x: Option<u32>,
        mut pos: Option<(u32, Side)>,
    ) -> Result<(), RbTreeError> {
        while let Some((p, side)) = pos {
            if util::is_red(&self.arena, x) {
                break;
            }

            let sibling = util::get_child(&self.arena, p, side.opposite());
            debug_assert!(
                sibling.is_some(),
                "double-black node under {p} ({side:?}) has no sibling"
            );
            let Some(w) = sibling else {
                // A double-black node always has a sibling in a valid tree.
                log::error!("double-black node under {p} ({side:?}) has no sibling");
                x = Some(p);
                pos = self.slot_of(p);
                continue;
            };

            if self.arena[w as usize].is_red() {
                util::paint(&mut self.arena, w, Color::Black);
                util::paint(&mut self.arena, p, Color::Red);
                self.notify(TreeEvent::AfterDeleteRecolor, x);
                self.rotate(p, side)?;
                // p keeps x on the same side; the new sibling is black.
                continue;
            }

            let near = util::get_child(&self.arena, w, side);
            let far = util::get_child(&self.arena, w, side.opposite());

            if util::is_black(&self.arena, near) && util::is_black(&self.arena, far) {
                util::paint(&mut self.arena, w, Color::Red);
                self.notify(TreeEvent::AfterDeleteRecolor, Some(p));
                x = Some(p);
                pos = self.slot_of(p);
                continue;
            }

            if let (Some(near), true) = (near, util::is_black(&self.arena, far)) {
                util::paint(&mut self.arena, near, Color::Black);
                util::paint(&mut self.arena, w, Color::Red);
                self.notify(TreeEvent::AfterDeleteRecolor, x);
                self.rotate(w, side.opposite())?;
                // The sibling now has a red far child.
                continue;
            }

            let parent_color = self.arena[p as usize].c;
            util::paint(&mut self.arena, w, parent_color);
            util::paint(&mut self.arena, p, Color::Black);
            if let Some(far) = far {
                util::paint(&mut self.arena, far, Color::Black);
            }
            self.notify(TreeEvent::AfterDeleteRecolor, x);
            self.rotate(p, side)?;
            x = self.root;
            break;
        }

        if let Some(x) = x {
            util::paint(&mut self.arena, x, Color::Black);
        }
        Ok(())
    }

    fn slot_of(&self, node: u32) -> Option<(u32, Side)> {
        util::get_p(&self.arena, node).map(|p| (p, util::side_of(&self.arena, p, node)))
    }
}
