//! Link slots, embedded list nodes and list headers.
//!
//! A [`Link`] names a position a `next`/`prev` slot can point at: a real
//! node, or one of the two boundaries of a list. The boundaries stand in
//! for null, so a linked node always has both neighbours.

use smallvec::SmallVec;

use crate::id::{ListId, NodeId};

/// Forward order of a list, as returned by
/// [`IntrusiveList::snapshot`](crate::IntrusiveList::snapshot).
///
/// Inline storage covers the short chains (message parts, header lists)
/// these lists usually hold; longer lists spill to the heap.
pub type ListOrder = SmallVec<[NodeId; 8]>;

/// A position a link slot can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    /// The head boundary of a list. Its `next` slot is the list's `head`;
    /// it has no `prev`.
    Head(ListId),
    /// A linked node.
    Node(NodeId),
    /// The tail boundary of a list. Its `prev` slot is the list's
    /// `tailpred`; it has no `next`. Traversal stops here.
    Tail(ListId),
}

impl Link {
    /// The head boundary of `list`, where a backward walk ends.
    pub const fn start_of(list: ListId) -> Self {
        Link::Head(list)
    }

    /// The tail boundary of `list`, where a forward walk ends.
    ///
    /// This is an equality marker only; it is never resolved as a node.
    pub const fn end_of(list: ListId) -> Self {
        Link::Tail(list)
    }

    /// The node this link points at, or `None` for a boundary.
    pub fn node(self) -> Option<NodeId> {
        match self {
            Link::Node(node) => Some(node),
            Link::Head(_) | Link::Tail(_) => None,
        }
    }

    /// Whether this link is one of the two list boundaries.
    pub fn is_boundary(self) -> bool {
        !matches!(self, Link::Node(_))
    }
}

impl From<NodeId> for Link {
    fn from(node: NodeId) -> Self {
        Link::Node(node)
    }
}

/// The pair of link slots a record embeds to become list-linkable.
///
/// A fresh node is unlinked. Only the list operations in this crate move a
/// node between the unlinked and linked states; embedding records see the
/// links read-only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListNode {
    pub(crate) links: Option<Links>,
}

/// `next`/`prev` of a linked node. Both are always set together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) next: Link,
    pub(crate) prev: Link,
}

impl ListNode {
    /// An unlinked node.
    pub const fn new() -> Self {
        Self { links: None }
    }

    /// Whether this node is currently part of a list.
    pub fn is_linked(&self) -> bool {
        self.links.is_some()
    }

    /// The following position, or `None` while unlinked.
    pub fn next(&self) -> Option<Link> {
        self.links.map(|l| l.next)
    }

    /// The preceding position, or `None` while unlinked.
    pub fn prev(&self) -> Option<Link> {
        self.links.map(|l| l.prev)
    }

    pub(crate) fn link(&mut self, prev: Link, next: Link) {
        self.links = Some(Links { next, prev });
    }

    pub(crate) fn unlink(&mut self) {
        self.links = None;
    }
}

/// A list header: the `head` and `tailpred` slots.
///
/// Conceptually the header overlays two boundary nodes. The head boundary's
/// `next` is `head`; the tail boundary's `prev` is `tailpred`. The remaining
/// slot of each boundary is permanently absent, which is what ends a walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListHead {
    pub(crate) head: Link,
    pub(crate) tailpred: Link,
}

impl ListHead {
    /// An empty header for `list`: `head` points at the tail boundary and
    /// `tailpred` at the head boundary.
    pub const fn empty(list: ListId) -> Self {
        Self {
            head: Link::Tail(list),
            tailpred: Link::Head(list),
        }
    }

    /// First position after the head boundary.
    pub fn head(&self) -> Link {
        self.head
    }

    /// Last position before the tail boundary.
    pub fn tailpred(&self) -> Link {
        self.tailpred
    }
}
