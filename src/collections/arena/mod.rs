//! Fixed-capacity slot pools. Primarily revolves around [`Pool`] and the generation-tagged
//! [`Handle`]s it hands out.
//!
//! A pool never grows. Every slot is allocated up front and recycled through a LIFO stack of free
//! indices, so the most recently released slot is always the next one handed out.

mod handle;
mod pool;
mod tests;

pub use handle::*;
pub use pool::*;
