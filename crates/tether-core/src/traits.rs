//! Seams between the list operations and the records and storage they
//! operate on.

use crate::id::{ListId, NodeId};
use crate::link::{ListHead, ListNode};

/// A record that embeds a [`ListNode`].
///
/// The record owns the node as a plain field; linking it never moves or
/// copies the record.
pub trait Linked {
    /// The embedded node.
    fn list_node(&self) -> &ListNode;

    /// Mutable access to the embedded node.
    fn list_node_mut(&mut self) -> &mut ListNode;
}

/// Resolves handles to the link slots they name.
///
/// Implemented by whatever owns the records and list headers (see
/// `tether_arena::RecordArena`). Every [`IntrusiveList`](crate::IntrusiveList)
/// operation is written against this trait, so stores decide how records are
/// laid out and how stale handles are detected.
///
/// A store and every list and node it holds form a single unit of mutual
/// exclusion. No locking happens here; mutation goes through `&mut self`.
pub trait LinkStore {
    /// The header for `list`, or `None` if the handle does not resolve.
    fn list_head(&self, list: ListId) -> Option<&ListHead>;

    /// Mutable header for `list`.
    fn list_head_mut(&mut self, list: ListId) -> Option<&mut ListHead>;

    /// The node embedded in the record named by `node`.
    fn list_node(&self, node: NodeId) -> Option<&ListNode>;

    /// Mutable node embedded in the record named by `node`.
    fn list_node_mut(&mut self, node: NodeId) -> Option<&mut ListNode>;

    /// Number of records currently held. Bounds walks during validation.
    fn node_count(&self) -> usize;
}
