use thiserror::Error;

/// Errors reported by tree operations.
///
/// Every failing public operation leaves the tree exactly as it was before
/// the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RbTreeError {
    #[error("duplicate key")]
    DuplicateKey,
    #[error("key not found")]
    KeyNotFound,
    /// A rotation was requested around a node lacking the child that would
    /// move up. Seen only when the tree structure is already corrupted.
    #[error("invalid rotation: pivot has no child on the lifted side")]
    InvalidRotation,
}
