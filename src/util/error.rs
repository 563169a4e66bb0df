use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A fixed-capacity pool had no free slot left to hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolExhausted {
    /// The capacity of the pool that ran out.
    pub cap: usize,
}

impl Display for PoolExhausted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Pool exhausted, all {} slots are in use!", self.cap)
    }
}

impl Error for PoolExhausted {}

/// A list handle no longer refers to a live list header in this arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownList {
    /// The list-pool slot the stale handle pointed at.
    pub slot: usize,
}

impl Display for UnknownList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "List slot {} doesn't hold a live list!", self.slot)
    }
}

impl Error for UnknownList {}

/// Any of the ways inserting into a list can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ListError {
    /// The node pool had no free slot for the new item.
    PoolExhausted(PoolExhausted),
    /// The list handle doesn't refer to a live list.
    UnknownList(UnknownList),
}
