//! Parent/child relation setters.
//!
//! These are the only functions that rewrite child slots. Assigning a node
//! as a child first detaches it from its previous parent (that parent's
//! slot becomes nil), then attaches it. The node that previously occupied
//! the target slot loses its parent link and is handed back to the caller.
//! Key order is never checked here.

use crate::types::{Node, Side};

use super::{get_child, get_p, set_p};

/// Which side of `parent` holds `child`.
///
/// `child` must be a child of `parent`.
#[inline]
pub fn side_of<N: Node>(arena: &[N], parent: u32, child: u32) -> Side {
    if arena[parent as usize].l() == Some(child) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Installs `child` in the `side` slot of `this`.
///
/// Returns the previous occupant of the slot, now parentless, or `None` when
/// the slot was empty or already held `child`.
pub fn set_child<N: Node>(arena: &mut [N], this: u32, side: Side, child: Option<u32>) -> Option<u32> {
    if get_child(arena, this, side) == child {
        return None;
    }

    if let Some(c) = child {
        if let Some(old) = get_p(arena, c) {
            let old_side = side_of(arena, old, c);
            arena[old as usize].set_child_link(old_side, None);
        }
        set_p(arena, c, Some(this));
    }

    let prev = get_child(arena, this, side);
    arena[this as usize].set_child_link(side, child);
    if let Some(prev) = prev {
        set_p(arena, prev, None);
    }
    prev
}

/// `setLeft`: see [`set_child`].
pub fn set_left<N: Node>(arena: &mut [N], this: u32, child: Option<u32>) -> Option<u32> {
    set_child(arena, this, Side::Left, child)
}

/// `setRight`: see [`set_child`].
pub fn set_right<N: Node>(arena: &mut [N], this: u32, child: Option<u32>) -> Option<u32> {
    set_child(arena, this, Side::Right, child)
}
