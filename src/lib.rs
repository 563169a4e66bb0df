//! Cursor-based doubly linked lists living in fixed-capacity pools.
//!
//! # Purpose
//! Some programs would rather know their worst-case memory use up front than grow on demand. This
//! crate provides a bidirectional list whose nodes and headers come out of two preallocated pools,
//! shared by every list created from the same [`ListArena`](collections::pooled::ListArena). When a
//! pool runs dry, the operation that needed a slot fails cleanly and the list is left as it was.
//!
//! Each list carries a cursor that can sit on an item, just before the first one or just after
//! the last one. Relative operations such as `next`, `add`, `insert` and `remove` act at the cursor.
//!
//! # Method
//! Storage is addressed through generation-tagged indices instead of pointers, so there is no
//! `unsafe` in the linking code and a handle to a released slot is detected rather than silently
//! reused. Nodes only hold the indices of their neighbours; the arena owns everything.
//!
//! # Error Handling
//! Failures are strongly typed: [`PoolExhausted`](collections::arena::PoolExhausted) when a pool
//! has no free slot, and [`UnknownList`](collections::pooled::UnknownList) when a handle no longer
//! refers to a live list. Operations that can fail come in pairs, `try_x` returning a [`Result`]
//! and `x` panicking with the error's message, since most callers size their arena so that
//! exhaustion is a bug. Not being on an item is not an error at all; the affected reads simply
//! return [`None`].
//!
//! # Logging
//! Slot traffic is reported through the [`log`] facade at `trace` level, list lifecycle events at
//! `debug`. The library never installs a logger itself.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
