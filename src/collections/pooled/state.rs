use derive_more::IsVariant;

use super::{At, CursorPosition, Length, Node, NodeId, ONE};
use crate::collections::arena::{Pool, PoolExhausted};

/// The contents of one list-pool slot.
#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

pub(crate) use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeId<T>,
    pub tail: NodeId<T>,
    pub pos: CursorPosition<T>,
}

impl<T> ListState<T> {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// A list holding only `value`, with the cursor on it.
    pub fn single(nodes: &mut Pool<Node<T>>, value: T) -> Result<ListState<T>, PoolExhausted> {
        let node = nodes.acquire(Node {
            value,
            prev: None,
            next: None,
        })?;

        Ok(Full(ListContents {
            len: ONE,
            head: node,
            tail: node,
            pos: At(node),
        }))
    }
}

// Every insertion below acquires its node before touching any link, so an exhausted pool leaves
// the list exactly as it was.

impl<T> ListContents<T> {
    pub fn push_front(&mut self, nodes: &mut Pool<Node<T>>, value: T) -> Result<(), PoolExhausted> {
        let node = nodes.acquire(Node {
            value,
            prev: None,
            next: Some(self.head),
        })?;

        nodes.set_prev(self.head, Some(node));
        self.head = node;
        self.linked(node);
        Ok(())
    }

    pub fn push_back(&mut self, nodes: &mut Pool<Node<T>>, value: T) -> Result<(), PoolExhausted> {
        let node = nodes.acquire(Node {
            value,
            prev: Some(self.tail),
            next: None,
        })?;

        nodes.set_next(self.tail, Some(node));
        self.tail = node;
        self.linked(node);
        Ok(())
    }

    /// Links `value` directly after `anchor`, which must belong to this list.
    pub fn push_after(
        &mut self,
        nodes: &mut Pool<Node<T>>,
        anchor: NodeId<T>,
        value: T,
    ) -> Result<(), PoolExhausted> {
        match nodes.next(anchor) {
            Some(next) => self.push_between(nodes, anchor, next, value),
            None => self.push_back(nodes, value),
        }
    }

    /// Links `value` directly before `anchor`, which must belong to this list.
    pub fn push_before(
        &mut self,
        nodes: &mut Pool<Node<T>>,
        anchor: NodeId<T>,
        value: T,
    ) -> Result<(), PoolExhausted> {
        match nodes.prev(anchor) {
            Some(prev) => self.push_between(nodes, prev, anchor, value),
            None => self.push_front(nodes, value),
        }
    }

    fn push_between(
        &mut self,
        nodes: &mut Pool<Node<T>>,
        prev: NodeId<T>,
        next: NodeId<T>,
        value: T,
    ) -> Result<(), PoolExhausted> {
        let node = nodes.acquire(Node {
            value,
            prev: Some(prev),
            next: Some(next),
        })?;

        nodes.set_next(prev, Some(node));
        nodes.set_prev(next, Some(node));
        self.linked(node);
        Ok(())
    }

    fn linked(&mut self, node: NodeId<T>) {
        self.len = self.len.incremented();
        self.pos = At(node);
    }

    /// Attaches `other`'s chain after this list's tail. The cursor stays where it was.
    pub fn splice(&mut self, nodes: &mut Pool<Node<T>>, other: ListContents<T>) {
        nodes.set_next(self.tail, Some(other.head));
        nodes.set_prev(other.head, Some(self.tail));
        self.tail = other.tail;
        self.len = self.len.joined(other.len);
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListContents<T> {}
