use crate::collections::arena::{Handle, Pool};
use crate::util::option::OptionExtension;

pub(crate) type NodeId<T> = Handle<Node<T>>;

pub(crate) type Link<T> = Option<NodeId<T>>;

/// One item of a list plus the slots of its neighbours. Links are plain handles into the shared
/// node pool; a node never owns the nodes it points to.
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

// Every handle passed in here is reachable from a live list, so its slot is occupied.

impl<T> Pool<Node<T>> {
    pub(crate) fn node(&self, id: NodeId<T>) -> &Node<T> {
        self.get(id).unreachable()
    }

    pub(crate) fn node_mut(&mut self, id: NodeId<T>) -> &mut Node<T> {
        self.get_mut(id).unreachable()
    }

    pub(crate) fn value(&self, id: NodeId<T>) -> &T {
        &self.node(id).value
    }

    pub(crate) fn value_mut(&mut self, id: NodeId<T>) -> &mut T {
        &mut self.node_mut(id).value
    }

    pub(crate) fn next(&self, id: NodeId<T>) -> Link<T> {
        self.node(id).next
    }

    pub(crate) fn prev(&self, id: NodeId<T>) -> Link<T> {
        self.node(id).prev
    }

    pub(crate) fn set_next(&mut self, id: NodeId<T>, link: Link<T>) {
        self.node_mut(id).next = link;
    }

    pub(crate) fn set_prev(&mut self, id: NodeId<T>, link: Link<T>) {
        self.node_mut(id).prev = link;
    }

    /// Releases a linked node, returning its contents.
    pub(crate) fn take_node(&mut self, id: NodeId<T>) -> Node<T> {
        self.release(id).unreachable()
    }
}
