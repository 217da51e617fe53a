//! Arena-level tree utilities.
//!
//! Every function here works on a caller-owned `Vec<RbNode<K>>` (or a slice
//! of it) and node indices. The [`RbTree`](crate::RbTree) container is built
//! on top of them; they are public so that tests and tools can drive the
//! structural primitives directly on hand-built arenas.
//!
//! - [`link`]: detach-then-attach relation setters (`set_left`, `set_right`)
//! - [`rotate`]: `rotate_left` / `rotate_right`
//! - [`validate`]: the red-black invariant checker
//! - [`print`]: debug rendering

pub mod link;
pub mod print;
pub mod rotate;
pub mod validate;

use crate::types::{Color, Node, RbNode, Side};

pub use link::{set_child, set_left, set_right, side_of};
pub use print::print;
pub use rotate::{rotate, rotate_left, rotate_right};
pub use validate::assert_red_black_tree;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn get_child<N: Node>(arena: &[N], idx: u32, side: Side) -> Option<u32> {
    arena[idx as usize].child(side)
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

/// Color of a possibly-absent node. The nil leaf is BLACK.
#[inline]
pub fn color_of<K>(arena: &[RbNode<K>], node: Option<u32>) -> Color {
    node.map_or(Color::Black, |i| arena[i as usize].c)
}

#[inline]
pub(crate) fn is_red<K>(arena: &[RbNode<K>], node: Option<u32>) -> bool {
    color_of(arena, node).is_red()
}

#[inline]
pub(crate) fn is_black<K>(arena: &[RbNode<K>], node: Option<u32>) -> bool {
    color_of(arena, node).is_black()
}

#[inline]
pub(crate) fn paint<K>(arena: &mut [RbNode<K>], node: u32, c: Color) {
    arena[node as usize].c = c;
}

#[inline]
pub(crate) fn leftmost<N: Node>(arena: &[N], mut curr: u32) -> u32 {
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    curr
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    root.map(|r| leftmost(arena, r))
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes on the longest path from `root` down to a leaf.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}

/// Black nodes on the leftmost path from `root` to nil, `root` included.
///
/// Equals the black-height of every path once the tree is valid.
pub fn black_height<K>(arena: &[RbNode<K>], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = root;
    while let Some(i) = curr {
        if arena[i as usize].is_black() {
            count += 1;
        }
        curr = get_l(arena, i);
    }
    count
}

/// Finds a node by key.
pub fn find<K, C>(arena: &[RbNode<K>], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, &arena[i as usize].k);
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Swaps the keys held by two nodes. Links and colors stay put.
pub(crate) fn swap_keys<K>(arena: &mut [RbNode<K>], a: u32, b: u32) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi as usize);
    std::mem::swap(&mut head[lo as usize].k, &mut tail[0].k);
}

/// Frees the slot of a fully detached node.
///
/// The last arena node is moved into the vacated slot and every link to it
/// (parent's child slot, children's parent links, `root`) is rewritten.
/// Returns the possibly updated root.
pub(crate) fn release<K>(arena: &mut Vec<RbNode<K>>, root: Option<u32>, node: u32) -> Option<u32> {
    debug_assert!(arena[node as usize].p.is_none());
    debug_assert!(arena[node as usize].l.is_none() && arena[node as usize].r.is_none());

    let last = (arena.len() - 1) as u32;
    let mut root = root;
    if node != last {
        let moved = &arena[last as usize];
        let (p, l, r) = (moved.p, moved.l, moved.r);
        if let Some(p) = p {
            if arena[p as usize].l == Some(last) {
                arena[p as usize].l = Some(node);
            } else {
                arena[p as usize].r = Some(node);
            }
        }
        if let Some(l) = l {
            set_p(arena, l, Some(node));
        }
        if let Some(r) = r {
            set_p(arena, r, Some(node));
        }
        if root == Some(last) {
            root = Some(node);
        }
    }
    arena.swap_remove(node as usize);
    root
}

/// Index the next pushed node will get. Arenas are capped at `u32::MAX + 1`
/// nodes.
#[inline]
pub(crate) fn next_index<K>(arena: &[RbNode<K>]) -> u32 {
    debug_assert!(
        arena.len() <= u32::MAX as usize,
        "arena is full: {} nodes",
        arena.len()
    );
    arena.len() as u32
}
