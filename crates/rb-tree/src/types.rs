//! Node records and link traits.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Each "pointer"
//! is an `Option<u32>` index into that arena; `None` stands for the nil
//! leaf, which every algorithm in this crate treats as BLACK.

use serde::Serialize;

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Parent / left / right links.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);

    #[inline]
    fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.l(),
            Side::Right => self.r(),
        }
    }

    #[inline]
    fn set_child_link(&mut self, side: Side, v: Option<u32>) {
        match side {
            Side::Left => self.set_l(v),
            Side::Right => self.set_r(v),
        }
    }
}

/// A red-black tree node stored in the arena.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub c: Color,
}

impl<K> RbNode<K> {
    /// Creates a detached RED node.
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            c: Color::Red,
        }
    }

    pub fn key(&self) -> &K {
        &self.k
    }

    pub fn color(&self) -> Color {
        self.c
    }

    pub fn is_black(&self) -> bool {
        self.c.is_black()
    }

    pub fn is_red(&self) -> bool {
        self.c.is_red()
    }

    pub fn set_color(&mut self, c: Color) {
        self.c = c;
    }
}

impl<K> Node for RbNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
