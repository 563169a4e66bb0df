/// The number of node slots in a [`ListArena`](super::ListArena) built with [`ArenaConfig::default`].
pub const DEFAULT_NODE_CAP: usize = 100;

/// The number of list slots in a [`ListArena`](super::ListArena) built with [`ArenaConfig::default`].
pub const DEFAULT_LIST_CAP: usize = 10;

/// Pool sizes for a [`ListArena`](super::ListArena). Neither pool ever grows after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaConfig {
    /// Items that can be held at once, across every list of the arena.
    pub node_cap: usize,
    /// Lists that can exist at once.
    pub list_cap: usize,
}

impl ArenaConfig {
    pub const fn new(node_cap: usize, list_cap: usize) -> ArenaConfig {
        ArenaConfig { node_cap, list_cap }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig::new(DEFAULT_NODE_CAP, DEFAULT_LIST_CAP)
    }
}
