//! A growable store, backed by the global allocator.

use core::fmt;

use crate::{
    error::AllocError,
    interface::{GrowableStore, NodeHandle, Store},
    store::slot::{FreeList, Slot},
};

/// An implementation of `Store` over a growable array of slots.
///
/// Vacated slots are reused, most recently vacated first, before the array grows.
pub struct ArenaStore<T> {
    slots: Vec<Slot<T>>,
    free: FreeList,
}

impl<T> ArenaStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        let slots = Vec::new();
        let free = FreeList::empty();

        Self { slots, free }
    }

    /// Creates an empty store, able to hold at least `capacity` values before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = Vec::with_capacity(capacity);
        let free = FreeList::empty();

        Self { slots, free }
    }
}

impl<T> Default for ArenaStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> for ArenaStore<T> {
    fn allocate(&mut self, value: T) -> Result<NodeHandle, (T, AllocError)> {
        let value = match self.free.occupy(&mut self.slots, value) {
            Ok(handle) => return Ok(handle),
            Err(value) => value,
        };

        let Ok(index) = u32::try_from(self.slots.len()) else {
            return Err((value, AllocError));
        };

        let generation = 0;

        self.slots.push(Slot::Occupied { generation, value });

        Ok(self.free.register(index, generation))
    }

    fn deallocate(&mut self, handle: NodeHandle) -> Option<T> {
        self.free.vacate(&mut self.slots, handle)
    }

    fn resolve(&self, handle: NodeHandle) -> Option<&T> {
        self.free.resolve(&self.slots, handle)
    }

    fn resolve_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        self.free.resolve_mut(&mut self.slots, handle)
    }

    fn len(&self) -> usize {
        self.free.occupied()
    }

    fn capacity(&self) -> Option<usize> {
        None
    }
}

impl<T> GrowableStore<T> for ArenaStore<T> {
    /// Allocates a slot for `value`, returning a handle to the slot.
    ///
    /// #   Panics
    ///
    /// Panics if more than `u32::MAX` slots would be required.
    fn insert(&mut self, value: T) -> NodeHandle {
        match self.allocate(value) {
            Ok(handle) => handle,
            Err(_) => panic!("ArenaStore cannot hold more than {} slots", u32::MAX),
        }
    }
}

impl<T> fmt::Debug for ArenaStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("ArenaStore")
            .field("len", &self.free.occupied())
            .field("slots", &self.slots.len())
            .finish()
    }
}

// mod tests
