//! Arena-based red-black tree.
//!
//! [`RbTree`] stores unique keys ordered by a comparator and keeps itself
//! balanced: after every insert and remove the root is black, no red node
//! has a red child, and every root-to-nil path crosses the same number of
//! black nodes. Height stays within `2 * log2(n + 1)`.
//!
//! Instead of raw pointers, nodes live in a `Vec` arena owned by the tree
//! and link to each other with `Option<u32>` indices.
//!
//! ```
//! use rb_tree::{Color, RbTree, RbTreeError};
//!
//! let mut tree = RbTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key).unwrap();
//! }
//! let root = tree.root().unwrap();
//! assert_eq!(*root.key(), 20);
//! assert_eq!(root.color(), Color::Black);
//!
//! assert_eq!(tree.insert(20), Err(RbTreeError::DuplicateKey));
//! tree.remove(&20).unwrap();
//! assert!(tree.find(&20).is_none());
//! tree.assert_valid().unwrap();
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`RbNode`], [`Color`], [`Side`], the [`Node`] link trait |
//! | [`util`] | relation setters, rotations, traversal helpers, invariant checker |
//! | [`tree`] | [`RbTree`]: search, insert, remove and both fixup engines |
//! | [`view`] | [`TreeView`] / [`NodeView`] read-only handles |
//! | [`observer`] | [`TreeObserver`] checkpoint hook, [`LogObserver`], [`RecordingObserver`] |

pub mod error;
pub mod observer;
pub mod tree;
pub mod types;
pub mod util;
pub mod view;

pub use error::RbTreeError;
pub use observer::{LogObserver, RecordingObserver, Snapshot, TreeEvent, TreeObserver};
pub use tree::{ObserverRef, RbTree};
pub use types::{Color, Node, RbNode, Side};
pub use view::{NodeView, TreeView};
