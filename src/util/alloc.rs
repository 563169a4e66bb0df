//! Allocation helpers for tests.

use std::cell::Cell;
use std::rc::Rc;

/// A value that bumps a shared counter when dropped, so tests can tell whether a pool released (and
/// dropped) the items it held.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a counter with no drops recorded.
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of `CountedDrop`s sharing this counter that have been dropped.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Default for CountedDrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
