use std::cmp::Ordering;

use crate::error::RbTreeError;
use crate::observer::TreeEvent;
use crate::types::{Color, RbNode, Side};
use crate::util;

use super::RbTree;

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Inserts `key`.
    ///
    /// Fails with [`RbTreeError::DuplicateKey`] if an equal key is already
    /// present; the tree is not modified in that case.
    pub fn insert(&mut self, key: K) -> Result<(), RbTreeError> {
        let node = self.insert_bst(key)?;
        log::trace!("linked node {node} as a leaf");
        self.notify(TreeEvent::AfterBstInsert, Some(node));

        self.insert_fixup(node)?;
        self.notify(TreeEvent::AfterInsert, Some(node));
        Ok(())
    }

    /// Plain BST insertion. The first node becomes a black root, any other
    /// node is linked red under the leaf where the search walk ends.
    fn insert_bst(&mut self, key: K) -> Result<u32, RbTreeError> {
        let Some(mut curr) = self.root else {
            let node = util::next_index(&self.arena);
            let mut record = RbNode::new(key);
            record.set_color(Color::Black);
            self.arena.push(record);
            self.root = Some(node);
            return Ok(node);
        };

        let side = loop {
            let side = match (self.comparator)(&key, &self.arena[curr as usize].k).cmp(&0) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Err(RbTreeError::DuplicateKey),
            };
            match util::get_child(&self.arena, curr, side) {
                Some(next) => curr = next,
                None => break side,
            }
        };

        let node = util::next_index(&self.arena);
        self.arena.push(RbNode::new(key));
        util::set_child(&mut self.arena, curr, side, Some(node));
        Ok(node)
    }

    /// Resolves double-red violations upwards from `n`.
    fn insert_fixup(&mut self, mut n: u32) -> Result<(), RbTreeError> {
        loop {
            let Some(p) = util::get_p(&self.arena, n) else {
                break;
            };
            if util::is_black(&self.arena, Some(p)) {
                break;
            }
            // A red parent is never the root.
            let Some(g) = util::get_p(&self.arena, p) else {
                break;
            };

            let p_side = util::side_of(&self.arena, g, p);
            let uncle = util::get_child(&self.arena, g, p_side.opposite());

            if let Some(u) = uncle.filter(|&u| self.arena[u as usize].is_red()) {
                util::paint(&mut self.arena, p, Color::Black);
                util::paint(&mut self.arena, u, Color::Black);
                util::paint(&mut self.arena, g, Color::Red);
                self.notify(TreeEvent::AfterRecolorUncleRed, Some(g));
                n = g;
                continue;
            }

            // Zig-zag: straighten the line first. The old node becomes the
            // parent and the old parent the child.
            let (n, p) = if util::side_of(&self.arena, p, n) != p_side {
                self.rotate(p, p_side)?;
                (p, n)
            } else {
                (n, p)
            };

            util::paint(&mut self.arena, p, Color::Black);
            self.notify(TreeEvent::AfterRecolorParent, Some(n));
            util::paint(&mut self.arena, g, Color::Red);
            self.notify(TreeEvent::AfterRecolorGrandparent, Some(n));

            self.rotate(g, p_side.opposite())?;
            break;
        }

        if let Some(root) = self.root {
            util::paint(&mut self.arena, root, Color::Black);
        }
        Ok(())
    }
}
