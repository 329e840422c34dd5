//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use tether_core::{ListError, ListId, NodeId};

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The slab is at its configured slot limit.
    CapacityExceeded {
        /// Which slab was full ("records" or "lists").
        pool: &'static str,
        /// The configured slot limit.
        capacity: u32,
    },
    /// A handle whose slot has been freed or never existed.
    StaleHandle {
        /// Slot index encoded in the handle.
        index: u32,
        /// Generation encoded in the handle.
        generation: u32,
    },
    /// Tried to remove a record whose node is still linked into a list.
    StillLinked {
        /// The linked record.
        node: NodeId,
    },
    /// Tried to release a list that still holds nodes.
    ListNotEmpty {
        /// The list being released.
        list: ListId,
        /// Number of nodes still linked.
        len: usize,
    },
    /// The configuration failed validation.
    InvalidConfig {
        /// What was wrong.
        reason: String,
    },
    /// A list operation failed.
    List(ListError),
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { pool, capacity } => {
                write!(f, "arena capacity exceeded: {pool} limit is {capacity} slots")
            }
            Self::StaleHandle { index, generation } => {
                write!(f, "stale handle: slot {index}, generation {generation}")
            }
            Self::StillLinked { node } => {
                write!(f, "{node} is still linked into a list")
            }
            Self::ListNotEmpty { list, len } => {
                write!(f, "{list} still holds {len} nodes")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
            Self::List(err) => write!(f, "list operation failed: {err}"),
        }
    }
}

impl Error for ArenaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::List(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ListError> for ArenaError {
    fn from(err: ListError) -> Self {
        Self::List(err)
    }
}
