//! Errors reported by the list operations.
//!
//! Untyped structural operations -- `pop_node`, `dequeue_node`, `remove`, `find_keyed` -- report absence through
//! `Option`, the typed operations built atop them report _why_ they could not complete through `Error`.

use thiserror::Error;

use crate::{collection::Node, value::Kind};

/// Result of the typed operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failure of a typed operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The list contains no node.
    #[error("the list is empty")]
    Empty,
    /// The node at the requested position holds a value of a different kind.
    ///
    /// The list is left untouched.
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        /// The kind requested by the caller.
        expected: Kind,
        /// The kind actually stored.
        found: Kind,
    },
    /// No keyed node matches the key.
    #[error("no node is keyed by {key:?}")]
    KeyNotFound {
        /// The key looked up, as provided by the caller.
        key: String,
    },
}

/// Failure to push a node, as the store of the list is exhausted.
///
/// The rejected node is handed back to the caller.
#[derive(Debug, PartialEq, Error)]
#[error("the store is full")]
pub struct Full(pub Node);

impl Full {
    /// Returns the node which could not be pushed.
    pub fn into_inner(self) -> Node {
        self.0
    }
}

/// Failure to allocate a slot from a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("memory allocation failed")]
pub struct AllocError;

// mod tests
