use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A typed reference to one slot of a [`Pool`](super::Pool).
///
/// A handle is only an index plus the generation the slot had when it was acquired. Releasing the
/// slot bumps its generation, after which every handle to the old occupant is stale and is
/// rejected by the pool instead of aliasing whatever reuses the slot. A slot that runs out of
/// generations is retired rather than wrapped around, see [`Pool`](super::Pool#retirement).
pub struct Handle<S> {
    pub(crate) index: usize,
    pub(crate) generation: u32,
    pub(crate) _phantom: PhantomData<fn() -> S>,
}

impl<S> Handle<S> {
    pub(crate) const fn new(index: usize, generation: u32) -> Handle<S> {
        Handle {
            index,
            generation,
            _phantom: PhantomData,
        }
    }

    /// Returns the index of the slot this handle refers to.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the generation of the slot at the time it was acquired.
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

// The derives would require S: Clone etc, which a handle doesn't need.

impl<S> Clone for Handle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Handle<S> {}

impl<S> PartialEq for Handle<S> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<S> Eq for Handle<S> {}

impl<S> Hash for Handle<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<S> Debug for Handle<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index, self.generation)
    }
}
