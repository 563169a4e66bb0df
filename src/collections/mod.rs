//! Collection types backed by fixed-capacity storage.
//!
//! # Purpose
//! These types trade unbounded growth for predictable resource use: every slot a collection can
//! ever occupy is allocated up front, and running out is reported rather than triggering another
//! allocation.
//!
//! # Method
//! Storage lives in [`arena::Pool`]s addressed by generation-tagged handles instead of pointers,
//! which keeps all of the linking logic free of `unsafe`.

#[cfg(feature = "arena")]
pub mod arena;
#[cfg(feature = "pooled")]
pub mod pooled;
