use std::fmt::{self, Debug, Formatter};

use super::NodeId;

/// Where the cursor of a non-empty list sits. An empty list has no cursor position at all, see
/// [`ListState`](super::ListState).
pub(crate) enum CursorPosition<T> {
    BeforeStart,
    At(NodeId<T>),
    AfterEnd,
}

pub(crate) use CursorPosition::*;

impl<T> CursorPosition<T> {
    pub const fn node(&self) -> Option<NodeId<T>> {
        match self {
            At(id) => Some(*id),
            BeforeStart | AfterEnd => None,
        }
    }
}

impl<T> Clone for CursorPosition<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CursorPosition<T> {}

impl<T> PartialEq for CursorPosition<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BeforeStart, BeforeStart) | (AfterEnd, AfterEnd) => true,
            (At(a), At(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for CursorPosition<T> {}

impl<T> Debug for CursorPosition<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BeforeStart => write!(f, "BeforeStart"),
            At(id) => f.debug_tuple("At").field(id).finish(),
            AfterEnd => write!(f, "AfterEnd"),
        }
    }
}

/// An enum to represent the cursor of a [`List`](super::List), as reported by
/// [`ListArena::position`](super::ListArena::position).
#[derive(Debug, PartialEq, Eq)]
pub enum Position<'a, T> {
    /// The list holds no items and therefore the cursor doesn't point anywhere.
    Empty,
    /// The cursor is pointing to the 'ghost' item before the start of the list.
    BeforeStart,
    /// The cursor is pointing to a node within the list, containing the borrowed item.
    At(&'a T),
    /// The cursor is pointing to the 'ghost' item after the end of the list.
    AfterEnd,
}
