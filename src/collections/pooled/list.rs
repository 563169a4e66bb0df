use std::fmt::{self, Debug, Formatter};

use super::{
    AfterEnd, ArenaConfig, At, BeforeStart, Empty, Full, ListContents, ListState, Node, Position,
};
use crate::collections::arena::{Handle, Pool};
#[doc(inline)]
pub use crate::util::error::{ListError, PoolExhausted, UnknownList};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A handle to one list living in a [`ListArena`].
///
/// The handle is deliberately neither [`Clone`] nor [`Copy`]: [`ListArena::free`] and
/// [`ListArena::concat`] consume it, so a torn-down list can't be named again. Dropping a handle
/// without freeing it keeps its slots in use until the arena itself is dropped.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct List<T> {
    pub(crate) handle: Handle<ListState<T>>,
}

impl<T> List<T> {
    /// Returns the index of the list-pool slot holding this list's header.
    pub const fn slot(&self) -> usize {
        self.handle.index()
    }

    pub(crate) const fn unknown(&self) -> UnknownList {
        UnknownList { slot: self.handle.index() }
    }
}

/// Fixed-capacity storage for any number of cursor-based doubly linked lists of `T`.
///
/// The arena owns two pools: one of list headers and one of nodes shared by every list it created.
/// All list operations are methods on the arena taking the [`List`] handle they act on. Each list
/// carries a cursor which is either on one of its items, just before the first one, or just after
/// the last one. See [`Position`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
///
/// | Method | Complexity |
/// |-|-|
/// | `create` | `O(1)` |
/// | `count` | `O(1)` |
/// | `first/last/next/prev/curr` | `O(1)` |
/// | `add/insert/append/prepend` | `O(1)` |
/// | `remove/trim` | `O(1)` |
/// | `concat` | `O(1)` |
/// | `free` | `O(n)` |
/// | `search` | `O(n)` |
///
/// # Exhaustion
/// Creating a list or inserting an item fails with [`PoolExhausted`] once the corresponding pool
/// is full. A failed insertion leaves the list untouched and drops the rejected item.
pub struct ListArena<T> {
    pub(crate) nodes: Pool<Node<T>>,
    pub(crate) lists: Pool<ListState<T>>,
}

impl<T> ListArena<T> {
    /// Creates a ListArena with the default pool sizes from [`ArenaConfig::default`].
    pub fn new() -> ListArena<T> {
        ListArena::with_config(ArenaConfig::default())
    }

    /// Creates a ListArena with room for `node_cap` items and `list_cap` lists.
    pub fn with_cap(node_cap: usize, list_cap: usize) -> ListArena<T> {
        ListArena::with_config(ArenaConfig::new(node_cap, list_cap))
    }

    pub fn with_config(config: ArenaConfig) -> ListArena<T> {
        log::debug!(
            "creating list arena with {} node and {} list slots",
            config.node_cap,
            config.list_cap
        );
        ListArena {
            nodes: Pool::with_cap(config.node_cap),
            lists: Pool::with_cap(config.list_cap),
        }
    }

    /// Returns the total number of items the arena can hold.
    pub fn node_cap(&self) -> usize {
        self.nodes.cap()
    }

    /// Returns the total number of lists the arena can hold.
    pub fn list_cap(&self) -> usize {
        self.lists.cap()
    }

    /// Returns the number of items that can still be inserted, across all lists.
    pub const fn available_nodes(&self) -> usize {
        self.nodes.available()
    }

    /// Returns the number of lists that can still be created.
    pub const fn available_lists(&self) -> usize {
        self.lists.available()
    }

    /// Creates a new, empty list, panicking on a failure.
    ///
    /// # Panics
    /// Panics if every list slot is in use.
    pub fn create(&mut self) -> List<T> {
        self.try_create().throw()
    }

    /// Creates a new, empty list, returning an [`Err`] if every list slot is in use.
    pub fn try_create(&mut self) -> Result<List<T>, PoolExhausted> {
        let handle = self.lists.acquire(Empty)?;
        log::debug!("created list in slot {}", handle.index());
        Ok(List { handle })
    }

    /// Returns the number of items in `list`, or 0 if the handle is unknown to this arena.
    pub fn count(&self, list: &List<T>) -> usize {
        self.lists.get(list.handle).map_or(0, ListState::len)
    }

    /// Returns true if `list` holds no items.
    pub fn is_empty(&self, list: &List<T>) -> bool {
        self.lists.get(list.handle).is_none_or(ListState::is_empty)
    }

    /// Returns the position of `list`'s cursor.
    pub fn position(&self, list: &List<T>) -> Position<'_, T> {
        match self.lists.get(list.handle) {
            None | Some(Empty) => Position::Empty,
            Some(Full(ListContents { pos, .. })) => match *pos {
                BeforeStart => Position::BeforeStart,
                At(id) => Position::At(self.nodes.value(id)),
                AfterEnd => Position::AfterEnd,
            },
        }
    }

    /// Moves the cursor to the first item and returns it, if the list isn't empty.
    pub fn first(&mut self, list: &List<T>) -> Option<&T> {
        let Full(contents) = self.lists.get_mut(list.handle)? else {
            return None;
        };
        contents.pos = At(contents.head);
        Some(self.nodes.value(contents.head))
    }

    /// Moves the cursor to the last item and returns it, if the list isn't empty.
    pub fn last(&mut self, list: &List<T>) -> Option<&T> {
        let Full(contents) = self.lists.get_mut(list.handle)? else {
            return None;
        };
        contents.pos = At(contents.tail);
        Some(self.nodes.value(contents.tail))
    }

    /// Advances the cursor and returns the item it lands on.
    ///
    /// Moving past the last item parks the cursor after the end, where it stays until moved back
    /// with [`prev`](ListArena::prev) or repositioned. Before the start, the cursor moves to the
    /// first item.
    pub fn next(&mut self, list: &List<T>) -> Option<&T> {
        let Full(contents) = self.lists.get_mut(list.handle)? else {
            return None;
        };
        contents.pos = match contents.pos {
            BeforeStart => At(contents.head),
            At(id) => self.nodes.next(id).map_or(AfterEnd, At),
            AfterEnd => AfterEnd,
        };
        Some(self.nodes.value(contents.pos.node()?))
    }

    /// Moves the cursor back and returns the item it lands on. The mirror image of
    /// [`next`](ListArena::next).
    pub fn prev(&mut self, list: &List<T>) -> Option<&T> {
        let Full(contents) = self.lists.get_mut(list.handle)? else {
            return None;
        };
        contents.pos = match contents.pos {
            BeforeStart => BeforeStart,
            At(id) => self.nodes.prev(id).map_or(BeforeStart, At),
            AfterEnd => At(contents.tail),
        };
        Some(self.nodes.value(contents.pos.node()?))
    }

    /// Returns the item under the cursor, or [`None`] if the cursor isn't on an item.
    pub fn curr(&self, list: &List<T>) -> Option<&T> {
        match self.position(list) {
            Position::At(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the item under the cursor, if there is one.
    pub fn curr_mut(&mut self, list: &List<T>) -> Option<&mut T> {
        let Full(contents) = self.lists.get(list.handle)? else {
            return None;
        };
        let id = contents.pos.node()?;
        Some(self.nodes.value_mut(id))
    }

    /// Adds `value` directly after the cursor and moves the cursor onto it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the node pool is exhausted or `list` is unknown to this arena.
    pub fn add(&mut self, list: &List<T>, value: T) {
        self.try_add(list, value).throw()
    }

    /// Adds `value` directly after the cursor and moves the cursor onto it.
    ///
    /// Before the start of the list, the item becomes the new first item. After the end, or on the
    /// last item, it becomes the new last item.
    pub fn try_add(&mut self, list: &List<T>, value: T) -> Result<(), ListError> {
        let state = self.lists.get_mut(list.handle).ok_or(list.unknown())?;
        match state {
            Empty => *state = ListState::single(&mut self.nodes, value)?,
            Full(contents) => match contents.pos {
                BeforeStart => contents.push_front(&mut self.nodes, value)?,
                At(id) => contents.push_after(&mut self.nodes, id, value)?,
                AfterEnd => contents.push_back(&mut self.nodes, value)?,
            },
        }
        Ok(())
    }

    /// Inserts `value` directly before the cursor and moves the cursor onto it, panicking on a
    /// failure.
    ///
    /// # Panics
    /// Panics if the node pool is exhausted or `list` is unknown to this arena.
    pub fn insert(&mut self, list: &List<T>, value: T) {
        self.try_insert(list, value).throw()
    }

    /// Inserts `value` directly before the cursor and moves the cursor onto it.
    ///
    /// Before the start of the list, or on the first item, the item becomes the new first item.
    /// After the end, it becomes the new last item.
    pub fn try_insert(&mut self, list: &List<T>, value: T) -> Result<(), ListError> {
        let state = self.lists.get_mut(list.handle).ok_or(list.unknown())?;
        match state {
            Empty => *state = ListState::single(&mut self.nodes, value)?,
            Full(contents) => match contents.pos {
                BeforeStart => contents.push_front(&mut self.nodes, value)?,
                At(id) => contents.push_before(&mut self.nodes, id, value)?,
                AfterEnd => contents.push_back(&mut self.nodes, value)?,
            },
        }
        Ok(())
    }

    /// Adds `value` to the end of the list and moves the cursor onto it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the node pool is exhausted or `list` is unknown to this arena.
    pub fn append(&mut self, list: &List<T>, value: T) {
        self.try_append(list, value).throw()
    }

    /// Adds `value` to the end of the list and moves the cursor onto it.
    pub fn try_append(&mut self, list: &List<T>, value: T) -> Result<(), ListError> {
        let state = self.lists.get_mut(list.handle).ok_or(list.unknown())?;
        match state {
            Empty => *state = ListState::single(&mut self.nodes, value)?,
            Full(contents) => contents.push_back(&mut self.nodes, value)?,
        }
        Ok(())
    }

    /// Adds `value` to the start of the list and moves the cursor onto it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the node pool is exhausted or `list` is unknown to this arena.
    pub fn prepend(&mut self, list: &List<T>, value: T) {
        self.try_prepend(list, value).throw()
    }

    /// Adds `value` to the start of the list and moves the cursor onto it.
    pub fn try_prepend(&mut self, list: &List<T>, value: T) -> Result<(), ListError> {
        let state = self.lists.get_mut(list.handle).ok_or(list.unknown())?;
        match state {
            Empty => *state = ListState::single(&mut self.nodes, value)?,
            Full(contents) => contents.push_front(&mut self.nodes, value)?,
        }
        Ok(())
    }

    /// Takes the item under the cursor out of the list and returns it. The cursor moves to the
    /// following item, or to the new last item if the removed one was last.
    ///
    /// Returns [`None`] and leaves the list alone if the cursor isn't on an item.
    pub fn remove(&mut self, list: &List<T>) -> Option<T> {
        let Full(contents) = self.lists.get_mut(list.handle)? else {
            return None;
        };
        let id = contents.pos.node()?;

        if id == contents.tail {
            return self.trim(list);
        }

        let node = self.nodes.take_node(id);
        // The removed node isn't the tail, so it has a successor.
        let next = node.next.unreachable();
        match node.prev {
            Some(prev) => self.nodes.set_next(prev, Some(next)),
            None => contents.head = next,
        }
        self.nodes.set_prev(next, node.prev);

        // Two or more nodes were linked, since the removed one wasn't also the tail.
        contents.len = contents.len.decremented().unreachable();
        contents.pos = At(next);
        Some(node.value)
    }

    /// Takes the last item out of the list and returns it, regardless of the cursor. The cursor
    /// moves to the new last item.
    pub fn trim(&mut self, list: &List<T>) -> Option<T> {
        let state = self.lists.get_mut(list.handle)?;
        let Full(contents) = &mut *state else {
            return None;
        };

        let node = self.nodes.take_node(contents.tail);
        match contents.len.decremented() {
            Some(new_len) => {
                let new_tail = node.prev.unreachable();
                self.nodes.set_next(new_tail, None);
                contents.tail = new_tail;
                contents.len = new_len;
                contents.pos = At(new_tail);
            },
            None => *state = Empty,
        }

        Some(node.value)
    }
}

impl<T> ListArena<T> {
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self, list: &List<T>) {
        let Some(Full(contents)) = self.lists.get(list.handle) else {
            return;
        };

        let mut curr = contents.head;
        let mut seen = 1;
        assert_eq!(self.nodes.prev(curr), None, "head shouldn't have a predecessor");
        while let Some(next) = self.nodes.next(curr) {
            assert_eq!(self.nodes.prev(next), Some(curr));
            curr = next;
            seen += 1;
        }
        assert_eq!(contents.tail, curr);
        assert_eq!(contents.len.get(), seen);
    }
}

impl<T> Default for ListArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for ListArena<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListArena")
            .field("nodes", &self.nodes)
            .field("lists", &self.lists)
            .finish()
    }
}
