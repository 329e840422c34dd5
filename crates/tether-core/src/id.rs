//! Generational handles for linked nodes and list headers.
//!
//! Both handle types pair a slot index with the generation the slot had when
//! the handle was issued. A store bumps the generation whenever it frees a
//! slot, so a handle outliving its record resolves to nothing instead of to
//! whatever record reused the slot.

use std::fmt;

/// Identifies a record whose embedded [`ListNode`](crate::ListNode) can be
/// linked into a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Create a handle from a slot index and generation.
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the owning store.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Slot generation at the time this handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}v{}", self.index, self.generation)
    }
}

/// Identifies a list header within a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId {
    index: u32,
    generation: u32,
}

impl ListId {
    /// Create a handle from a slot index and generation.
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the owning store.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Slot generation at the time this handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list {}v{}", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_compare_by_index_and_generation() {
        assert_eq!(NodeId::new(3, 1), NodeId::new(3, 1));
        assert_ne!(NodeId::new(3, 1), NodeId::new(3, 2));
        assert_ne!(ListId::new(0, 0), ListId::new(1, 0));
    }

    #[test]
    fn display_includes_generation() {
        assert_eq!(NodeId::new(7, 2).to_string(), "node 7v2");
        assert_eq!(ListId::new(0, 5).to_string(), "list 0v5");
    }
}
