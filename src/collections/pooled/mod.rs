//! Cursor-based doubly linked lists stored in fixed-capacity pools. Primarily revolves around
//! [`ListArena`] and the [`List`] handles it hands out.
//!
//! Every list of an arena shares one pool of nodes, and every list header occupies a slot of a
//! second, smaller pool. Neither pool grows, so running out of slots is an ordinary, recoverable
//! [`PoolExhausted`] error rather than an allocation failure.

mod config;
mod cursor;
mod iter;
mod length;
mod list;
mod node;
mod splice;
mod state;

pub use config::*;
pub use cursor::*;
pub use iter::*;
pub(crate) use length::*;
pub use list::*;
pub(crate) use node::*;
pub(crate) use state::*;
