use std::iter::FusedIterator;

use super::{Full, Link, List, ListArena, ListContents, Node};
use crate::collections::arena::Pool;

impl<T> ListArena<T> {
    /// Returns an iterator over the items of `list`, from first to last. Iterating doesn't move the
    /// list's cursor.
    ///
    /// An unknown handle yields an empty iterator.
    pub fn iter(&self, list: &List<T>) -> Iter<'_, T> {
        match self.lists.get(list.handle) {
            Some(Full(ListContents { len, head, tail, .. })) => Iter {
                nodes: &self.nodes,
                front: Some(*head),
                back: Some(*tail),
                len: len.get(),
            },
            _ => Iter {
                nodes: &self.nodes,
                front: None,
                back: None,
                len: 0,
            },
        }
    }
}

pub struct Iter<'a, T> {
    // Both ends walk towards each other and len tracks how many items are left between them, so
    // they never cross.
    pub(crate) nodes: &'a Pool<Node<T>>,
    pub(crate) front: Link<T>,
    pub(crate) back: Link<T>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.len = self.len.checked_sub(1)?;
        let nodes: &'a Pool<Node<T>> = self.nodes;
        let node = nodes.node(self.front?);
        self.front = node.next;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.len = self.len.checked_sub(1)?;
        let nodes: &'a Pool<Node<T>> = self.nodes;
        let node = nodes.node(self.back?);
        self.back = node.prev;
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}
