//! Rotation primitives.
//!
//! ```text
//!       x                 y
//!      / \   left(x)     / \
//!     a   y  ------->   x   c
//!        / \           / \
//!       b   c         a   b
//! ```
//!
//! Rotations are O(1): three relation-setter calls, no subtree is visited.
//! They return the (possibly new) root index.

use crate::error::RbTreeError;
use crate::types::{Node, Side};

use super::link::{set_child, side_of};
use super::{get_child, get_p};

/// Rotates around `x` towards `dir`: the child of `x` on the opposite side
/// takes the place of `x`, and `x` becomes its `dir` child.
///
/// Fails with [`RbTreeError::InvalidRotation`] when that child is missing;
/// the arena is untouched in that case.
pub fn rotate<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    x: u32,
    dir: Side,
) -> Result<Option<u32>, RbTreeError> {
    let up = dir.opposite();
    let y = get_child(arena, x, up).ok_or(RbTreeError::InvalidRotation)?;
    let slot = get_p(arena, x).map(|p| (p, side_of(arena, p, x)));
    let inner = get_child(arena, y, dir);

    // y's inner subtree moves under x; this also detaches y from x.
    set_child(arena, x, up, inner);

    let mut root = root;
    match slot {
        Some((p, side)) => {
            set_child(arena, p, side, Some(y));
        }
        None => root = Some(y),
    }

    set_child(arena, y, dir, Some(x));
    Ok(root)
}

/// Lifts the right child of `x`.
pub fn rotate_left<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    x: u32,
) -> Result<Option<u32>, RbTreeError> {
    rotate(arena, root, x, Side::Left)
}

/// Lifts the left child of `x`.
pub fn rotate_right<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    x: u32,
) -> Result<Option<u32>, RbTreeError> {
    rotate(arena, root, x, Side::Right)
}
