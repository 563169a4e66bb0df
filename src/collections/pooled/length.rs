use std::num::NonZero;

/// The length of a non-empty list. Empty lists are represented by [`ListState::Empty`] instead,
/// so a zero length never needs to be stored.
///
/// [`ListState::Empty`]: super::ListState::Empty
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Length after linking one more node. The node pool's capacity is a `usize`, so this can't
    /// overflow in practice.
    pub const fn incremented(self) -> Length {
        Length(self.0.saturating_add(1))
    }

    /// Length after unlinking one node, or [`None`] if that would leave the list empty.
    pub const fn decremented(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub const fn joined(self, other: Length) -> Length {
        Length(self.0.saturating_add(other.0.get()))
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
