//! The `Store` trait, through which lists allocate their nodes.
//!
//! A store hands out handles rather than pointers. A handle is a plain, copyable, value: it may be freely stored in
//! other nodes, then resolved into a reference at a later time.

use core::fmt;

use crate::error::AllocError;

/// A handle to a value allocated by a `Store`.
///
/// A handle is generational: once the value it refers to is deallocated, the handle never resolves again, even if
/// the slot it refers to is reused by a later allocation.
///
/// A handle also records the identity of the store which allocated it, and never resolves in any other store.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    store: u32,
    index: u32,
    generation: u32,
}

impl NodeHandle {
    pub(crate) const fn new(store: u32, index: u32, generation: u32) -> Self {
        Self {
            store,
            index,
            generation,
        }
    }

    pub(crate) const fn store(self) -> u32 {
        self.store
    }

    pub(crate) const fn index(self) -> usize {
        self.index as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "NodeHandle({}:{}v{})", self.store, self.index, self.generation)
    }
}

/// A trait abstracting the storage of the nodes of a collection.
///
/// Handles are only meaningful to the store which allocated them. A handle is invalidated when used as an argument to
/// `Store::deallocate`, alongside all its copies; allocating never invalidates existing handles.
pub trait Store<T> {
    /// Attempts to allocate a slot for `value`.
    ///
    /// On success, returns a handle to the slot.
    ///
    /// #   Errors
    ///
    /// Returns `value`, alongside an `AllocError`, if the store is exhausted.
    fn allocate(&mut self, value: T) -> Result<NodeHandle, (T, AllocError)>;

    /// Deallocates the slot referenced by `handle`, returning the value it held.
    ///
    /// Returns `None` if `handle` is invalid.
    fn deallocate(&mut self, handle: NodeHandle) -> Option<T>;

    /// Resolves `handle` into a reference to its value.
    ///
    /// Returns `None` if `handle` is invalid.
    fn resolve(&self, handle: NodeHandle) -> Option<&T>;

    /// Resolves `handle` into a mutable reference to its value.
    ///
    /// Returns `None` if `handle` is invalid.
    fn resolve_mut(&mut self, handle: NodeHandle) -> Option<&mut T>;

    /// Returns the number of allocated slots.
    fn len(&self) -> usize;

    /// Returns the maximum number of slots, if bounded.
    fn capacity(&self) -> Option<usize>;

    /// Returns whether no slot is allocated.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A refinement of `Store` which grows on demand.
///
/// Allocation from a growable store only fails when memory itself is exhausted, which aborts.
pub trait GrowableStore<T>: Store<T> {
    /// Allocates a slot for `value`, returning a handle to the slot.
    fn insert(&mut self, value: T) -> NodeHandle;
}
