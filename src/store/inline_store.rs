//! A dead simple fixed-capacity Store.
//!
//! This store never allocates beyond its own footprint: once all `N` slots are occupied, allocation fails until a slot
//! is vacated.

use core::{array, fmt};

use crate::{
    error::AllocError,
    interface::{NodeHandle, Store},
    store::slot::{FreeList, Slot},
};

/// An implementation of `Store` providing `N` inline slots.
pub struct InlineStore<T, const N: usize> {
    slots: [Slot<T>; N],
    free: FreeList,
}

impl<T, const N: usize> InlineStore<T, N> {
    /// Creates an empty store.
    ///
    /// #   Panics
    ///
    /// Panics if `N` exceeds `u32::MAX`.
    pub fn new() -> Self {
        assert!(u32::try_from(N).is_ok(), "InlineStore cannot hold more than {} slots", u32::MAX);

        //  Each slot links to the next, the last slot ends the free list.
        let slots = array::from_fn(|index| {
            let next = index + 1;

            Slot::vacant((next < N).then_some(next as u32))
        });

        let free = FreeList::threaded(N);

        Self { slots, free }
    }
}

impl<T, const N: usize> Default for InlineStore<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Store<T> for InlineStore<T, N> {
    fn allocate(&mut self, value: T) -> Result<NodeHandle, (T, AllocError)> {
        self.free.occupy(&mut self.slots, value).map_err(|value| (value, AllocError))
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
        Some(N)
    }
}

impl<T, const N: usize> fmt::Debug for InlineStore<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("InlineStore")
            .field("len", &self.free.occupied())
            .field("capacity", &N)
            .finish()
    }
}

// mod tests
