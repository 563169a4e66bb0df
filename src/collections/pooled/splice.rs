use std::mem;

use super::{AfterEnd, At, BeforeStart, Empty, Full, List, ListArena, UnknownList};
use crate::util::option::OptionExtension;

impl<T> ListArena<T> {
    /// Moves every item of `other` onto the end of `list`, in order, consuming `other`.
    ///
    /// The cursor of `list` stays where it was, unless `list` was empty, in which case it takes
    /// over the cursor of `other`. No items are copied and no node slots change hands; only the
    /// header slot of `other` is released.
    ///
    /// If `list` is unknown to this arena, nothing changes and `other` stays allocated. Handles
    /// don't record which arena created them, so a handle from another arena can name the same slot
    /// as `list`. That is rejected as unknown before anything is released.
    pub fn concat(&mut self, list: &List<T>, other: List<T>) -> Result<(), UnknownList> {
        if !self.lists.contains(list.handle) {
            return Err(list.unknown());
        }
        if other.handle == list.handle {
            log::warn!("refused to concatenate list {} onto itself", list.slot());
            return Err(other.unknown());
        }
        let other_state = self.lists.release(other.handle).ok_or(other.unknown())?;
        // Checked above, and releasing a different slot can't invalidate list's handle.
        let state = self.lists.get_mut(list.handle).unreachable();

        log::debug!(
            "concatenating list {} ({} items) onto list {} ({} items)",
            other.slot(),
            other_state.len(),
            list.slot(),
            state.len()
        );

        match other_state {
            Empty => {},
            Full(other_contents) => match state {
                Empty => *state = Full(other_contents),
                Full(contents) => contents.splice(&mut self.nodes, other_contents),
            },
        }
        Ok(())
    }

    /// Tears down `list`, dropping every item it holds and releasing all of its slots.
    pub fn free(&mut self, list: List<T>) -> Result<(), UnknownList> {
        self.free_with(list, drop)
    }

    /// Tears down `list`, passing every item to `cleanup` from first to last, then releases its
    /// node slots followed by its own header slot.
    pub fn free_with<F>(&mut self, list: List<T>, mut cleanup: F) -> Result<(), UnknownList>
    where
        F: FnMut(T),
    {
        let state = self.lists.get_mut(list.handle).ok_or(list.unknown())?;
        log::debug!("freeing list {} with {} items", list.slot(), state.len());

        if let Full(contents) = mem::replace(state, Empty) {
            let mut link = Some(contents.head);
            while let Some(id) = link {
                let node = self.nodes.take_node(id);
                link = node.next;
                cleanup(node.value);
            }
        }

        self.lists.release(list.handle);
        Ok(())
    }

    /// Scans forward from the cursor for the first item matching `predicate` and returns it.
    ///
    /// The scan starts at the item under the cursor, or at the first item if the cursor is before
    /// the start. It never wraps around, so items before the starting point are not examined. On a
    /// match, the cursor is left on the matching item. Otherwise it is left after the end of the
    /// list.
    pub fn search<P>(&mut self, list: &List<T>, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let Full(contents) = self.lists.get_mut(list.handle)? else {
            return None;
        };

        let mut link = match contents.pos {
            BeforeStart => Some(contents.head),
            At(id) => Some(id),
            AfterEnd => None,
        };
        while let Some(id) = link {
            if predicate(self.nodes.value(id)) {
                break;
            }
            link = self.nodes.next(id);
        }

        contents.pos = link.map_or(AfterEnd, At);
        Some(self.nodes.value(link?))
    }

    /// A version of [`search`](ListArena::search) where matching is decided by `comparator`, given
    /// each item along with `arg`.
    pub fn search_with<A, C>(&mut self, list: &List<T>, comparator: C, arg: &A) -> Option<&T>
    where
        A: ?Sized,
        C: Fn(&T, &A) -> bool,
    {
        self.search(list, |item| comparator(item, arg))
    }
}
