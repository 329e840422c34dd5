//! Error types for list operations.

use std::error::Error;
use std::fmt;

use crate::id::{ListId, NodeId};
use crate::link::Link;

/// Errors from [`IntrusiveList`](crate::IntrusiveList) operations.
///
/// Running out of nodes is not an error: `unlink_head`/`unlink_tail` on an
/// empty list return `Ok(None)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The list handle does not resolve in this store.
    UnknownList {
        /// The unresolved handle.
        list: ListId,
    },
    /// The node handle does not resolve in this store.
    UnknownNode {
        /// The unresolved handle.
        node: NodeId,
    },
    /// Tried to insert a node that is already part of a list.
    AlreadyLinked {
        /// The linked node.
        node: NodeId,
    },
    /// Tried to unlink, or insert next to, a node that is not in a list.
    NotLinked {
        /// The unlinked node.
        node: NodeId,
    },
    /// A link slot points somewhere that does not point back.
    Corrupted {
        /// The position whose links are inconsistent.
        at: Link,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownList { list } => write!(f, "unknown {list}"),
            Self::UnknownNode { node } => write!(f, "unknown {node}"),
            Self::AlreadyLinked { node } => write!(f, "{node} is already linked"),
            Self::NotLinked { node } => write!(f, "{node} is not linked"),
            Self::Corrupted { at } => write!(f, "corrupted links at {at:?}"),
        }
    }
}

impl Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_handle() {
        let err = ListError::AlreadyLinked {
            node: NodeId::new(1, 0),
        };
        assert_eq!(err.to_string(), "node 1v0 is already linked");

        let err = ListError::UnknownList {
            list: ListId::new(9, 3),
        };
        assert_eq!(err.to_string(), "unknown list 9v3");
    }
}
