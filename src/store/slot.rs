//! Slots, and the free list threading through the vacant ones, shared by the stores.

use core::{
    mem,
    sync::atomic::{AtomicU32, Ordering},
};

use crate::interface::NodeHandle;

//  Source of store identities, so that handles of one store never resolve in another.
static NEXT_STORE: AtomicU32 = AtomicU32::new(0);

//  Returns a fresh store identity, unique unless `u32::MAX` stores are created in the lifetime of the process.
fn next_store() -> u32 {
    NEXT_STORE.fetch_add(1, Ordering::Relaxed)
}

pub(crate) enum Slot<T> {
    Occupied {
        generation: u32,
        value: T,
    },
    //  `next` is the index of the next vacant slot of the free list, if any.
    Vacant {
        generation: u32,
        next: Option<u32>,
    },
}

impl<T> Slot<T> {
    pub(crate) const fn vacant(next: Option<u32>) -> Self {
        Slot::Vacant { generation: 0, next }
    }
}

//  Invariants:
//  -   `store` is the identity of the store, embedded in all its handles.
//  -   `head` is the index of the first vacant slot, if any.
//  -   `occupied` is the number of occupied slots.
#[derive(Debug)]
pub(crate) struct FreeList {
    store: u32,
    head: Option<u32>,
    occupied: usize,
}

impl FreeList {
    pub(crate) fn empty() -> Self {
        Self::threaded(0)
    }

    //  Creates a free list threading through `length` vacant slots, in index order.
    pub(crate) fn threaded(length: usize) -> Self {
        let store = next_store();
        let head = if length == 0 { None } else { Some(0) };

        Self {
            store,
            head,
            occupied: 0,
        }
    }

    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    //  Moves `value` in the first vacant slot, if any, or returns it.
    pub(crate) fn occupy<T>(&mut self, slots: &mut [Slot<T>], value: T) -> Result<NodeHandle, T> {
        let Some(index) = self.head else {
            return Err(value);
        };

        let slot = &mut slots[index as usize];

        let Slot::Vacant { generation, next } = *slot else {
            //  The free list only ever threads through vacant slots.
            debug_assert!(false, "occupied slot {index} in free list");

            return Err(value);
        };

        *slot = Slot::Occupied { generation, value };

        self.head = next;
        self.occupied += 1;

        Ok(NodeHandle::new(self.store, index, generation))
    }

    //  Registers a freshly pushed occupied slot at `index`, returning its handle.
    pub(crate) fn register(&mut self, index: u32, generation: u32) -> NodeHandle {
        self.occupied += 1;

        NodeHandle::new(self.store, index, generation)
    }

    //  Moves the value out of the slot of `handle`, if `handle` is valid, pushing the slot on the free list.
    pub(crate) fn vacate<T>(&mut self, slots: &mut [Slot<T>], handle: NodeHandle) -> Option<T> {
        if handle.store() != self.store {
            return None;
        }

        let slot = slots.get_mut(handle.index())?;

        match &*slot {
            Slot::Occupied { generation, .. } if *generation == handle.generation() => {}
            _ => return None,
        }

        let next = self.head;
        let generation = handle.generation().wrapping_add(1);

        let Slot::Occupied { value, .. } = mem::replace(slot, Slot::Vacant { generation, next }) else {
            return None;
        };

        //  `handle.index()` was produced from an `u32`, hence converting back is lossless.
        self.head = Some(handle.index() as u32);
        self.occupied -= 1;

        Some(value)
    }

    pub(crate) fn resolve<'a, T>(&self, slots: &'a [Slot<T>], handle: NodeHandle) -> Option<&'a T> {
        if handle.store() != self.store {
            return None;
        }

        match slots.get(handle.index())? {
            Slot::Occupied { generation, value } if *generation == handle.generation() => Some(value),
            _ => None,
        }
    }

    pub(crate) fn resolve_mut<'a, T>(&self, slots: &'a mut [Slot<T>], handle: NodeHandle) -> Option<&'a mut T> {
        if handle.store() != self.store {
            return None;
        }

        match slots.get_mut(handle.index())? {
            Slot::Occupied { generation, value } if *generation == handle.generation() => Some(value),
            _ => None,
        }
    }
}

// mod tests
