use std::fmt::{self, Debug, Formatter};
use std::iter;

use super::Handle;
#[doc(inline)]
pub use crate::util::error::PoolExhausted;

/// A fixed-capacity arena of slots, each holding at most one `S`.
///
/// Free slots are tracked by a stack of indices. [`Pool::acquire`] pops from it and
/// [`Pool::release`] pushes onto it, so reuse is last-in-first-out. A fresh pool hands out indices
/// in ascending order: `0, 1, 2, ...` until the first release changes the order.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `with_cap` | `O(cap)` |
/// | `acquire` | `O(1)` |
/// | `release` | `O(1)` |
/// | `get/get_mut` | `O(1)` |
///
/// The invariant `in_use() + available() + retired() == cap()` holds after every operation.
///
/// # Retirement
/// Each release bumps the slot's generation. A slot released while at the last generation,
/// [`u32::MAX`], isn't returned to the free stack. It stays empty for the rest of the pool's life,
/// so an old handle can never match a new occupant.
pub struct Pool<S> {
    pub(crate) slots: Box<[Slot<S>]>,
    pub(crate) free: Box<[usize]>,
    pub(crate) available: usize,
    pub(crate) retired: usize,
}

pub(crate) struct Slot<S> {
    pub generation: u32,
    pub value: Option<S>,
}

impl<S> Pool<S> {
    /// Creates a new Pool with `cap` free slots.
    pub fn with_cap(cap: usize) -> Pool<S> {
        Pool {
            slots: iter::repeat_with(|| Slot { generation: 0, value: None })
                .take(cap)
                .collect(),
            // Stored in reverse so that popping the top of the stack yields index 0 first.
            free: (0..cap).rev().collect(),
            available: cap,
            retired: 0,
        }
    }

    /// Returns the total number of slots, free or not.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of slots that can still be acquired.
    pub const fn available(&self) -> usize {
        self.available
    }

    /// Returns the number of slots currently holding a value.
    pub fn in_use(&self) -> usize {
        self.cap() - self.available - self.retired
    }

    /// Returns the number of slots taken out of service after running out of generations.
    pub const fn retired(&self) -> usize {
        self.retired
    }

    /// Returns true if the next [`acquire`](Pool::acquire) would fail.
    pub const fn is_exhausted(&self) -> bool {
        self.available == 0
    }

    /// Moves `value` into the most recently released free slot and returns a handle to it.
    ///
    /// If every slot is in use, the pool is left untouched and `value` is dropped.
    pub fn acquire(&mut self, value: S) -> Result<Handle<S>, PoolExhausted> {
        let Some(top) = self.available.checked_sub(1) else {
            log::debug!("pool of {} slots exhausted", self.cap());
            return Err(PoolExhausted { cap: self.cap() });
        };

        let index = self.free[top];
        let slot = &mut self.slots[index];
        debug_assert!(slot.value.is_none(), "free stack handed out an occupied slot");

        slot.value = Some(value);
        self.available = top;

        log::trace!("acquired slot {index}v{}, {} left", slot.generation, self.available);
        Ok(Handle::new(index, slot.generation))
    }

    /// Takes the value out of the slot referred to by `handle` and returns the slot to the free
    /// stack.
    ///
    /// Returns [`None`] without modifying the pool if `handle` is stale, meaning its slot has
    /// already been released since it was acquired.
    pub fn release(&mut self, handle: Handle<S>) -> Option<S> {
        let Some(slot) = self.live_slot_mut(handle) else {
            log::warn!("ignored release of stale handle {handle:?}");
            return None;
        };

        let value = slot.value.take();
        let Some(generation) = slot.generation.checked_add(1) else {
            log::warn!("retiring slot {} after its last generation", handle.index);
            self.retired += 1;
            return value;
        };
        slot.generation = generation;

        self.free[self.available] = handle.index;
        self.available += 1;

        log::trace!("released slot {}, {} free", handle.index, self.available);
        value
    }

    /// Returns a reference to the value behind `handle`, if the handle is still live.
    pub fn get(&self, handle: Handle<S>) -> Option<&S> {
        match self.slots.get(handle.index) {
            Some(slot) if slot.generation == handle.generation => slot.value.as_ref(),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value behind `handle`, if the handle is still live.
    pub fn get_mut(&mut self, handle: Handle<S>) -> Option<&mut S> {
        self.live_slot_mut(handle)?.value.as_mut()
    }

    /// Returns true if `handle` refers to an occupied slot of the generation it was issued for.
    pub fn contains(&self, handle: Handle<S>) -> bool {
        self.get(handle).is_some()
    }

    fn live_slot_mut(&mut self, handle: Handle<S>) -> Option<&mut Slot<S>> {
        match self.slots.get_mut(handle.index) {
            Some(slot) if slot.generation == handle.generation && slot.value.is_some() => Some(slot),
            _ => None,
        }
    }
}

impl<S> Debug for Pool<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("cap", &self.cap())
            .field("available", &self.available)
            .field("retired", &self.retired)
            .field("free", &&self.free[..self.available])
            .finish()
    }
}
