//! The intrusive list operations.
//!
//! Every operation works on link slots through [`LinkStore`]. The helpers at
//! the bottom of this module resolve the `next` or `prev` slot of any
//! [`Link`]: for a node that is the node's own field, for `Head(list)` it is
//! the header's `head` and for `Tail(list)` it is the header's `tailpred`.
//! Because the boundaries resolve like nodes, insertion and removal are the
//! same two slot writes wherever they happen in the list.

use crate::error::ListError;
use crate::id::{ListId, NodeId};
use crate::iter::{Drain, Iter};
use crate::link::{Link, ListHead, ListNode, ListOrder};
use crate::traits::LinkStore;
use crate::validate;

/// Doubly-linked list operations over any [`LinkStore`].
///
/// Implemented for every store; bring the trait into scope and call the
/// methods on the store itself:
///
/// ```
/// # use tether_core::{IntrusiveList, LinkStore, ListHead, ListId, ListNode, NodeId};
/// # struct Store { nodes: Vec<ListNode>, head: ListHead }
/// # impl LinkStore for Store {
/// #     fn list_head(&self, _: ListId) -> Option<&ListHead> { Some(&self.head) }
/// #     fn list_head_mut(&mut self, _: ListId) -> Option<&mut ListHead> { Some(&mut self.head) }
/// #     fn list_node(&self, n: NodeId) -> Option<&ListNode> { self.nodes.get(n.index() as usize) }
/// #     fn list_node_mut(&mut self, n: NodeId) -> Option<&mut ListNode> { self.nodes.get_mut(n.index() as usize) }
/// #     fn node_count(&self) -> usize { self.nodes.len() }
/// # }
/// let list = ListId::new(0, 0);
/// let mut store = Store { nodes: vec![ListNode::new(); 2], head: ListHead::empty(list) };
/// let (a, b) = (NodeId::new(0, 0), NodeId::new(1, 0));
///
/// store.append_node(list, a).unwrap();
/// store.append_node(list, b).unwrap();
/// assert_eq!(store.length(list).unwrap(), 2);
/// assert_eq!(store.unlink_head(list).unwrap(), Some(a));
/// assert_eq!(store.unlink_head(list).unwrap(), Some(b));
/// assert_eq!(store.unlink_head(list).unwrap(), None);
/// ```
///
/// # Errors
///
/// Every operation reports handles that do not resolve
/// ([`ListError::UnknownList`], [`ListError::UnknownNode`]). Inserting a node
/// that is already linked, or unlinking one that is not, is rejected before
/// any slot is written. Slots that do not point back at their neighbour are
/// reported as [`ListError::Corrupted`]; each operation checks the slots it
/// touches, [`validate`](Self::validate) checks the whole list.
pub trait IntrusiveList: LinkStore {
    /// Reset `list` to the empty state.
    ///
    /// Nodes still linked into the list are detached first, so none of them
    /// is left believing it is linked into a list that no longer holds it.
    /// Detaching walks in from both ends and stops at the first link that
    /// does not point back; a corrupted list is reset all the same. Fails
    /// only if `list` does not resolve.
    fn init(&mut self, list: ListId) -> Result<(), ListError> {
        let ListHead { head, tailpred } = *header(&*self, list)?;
        let detached = detach_run(self, head, Link::start_of(list), Walk::Forward)
            + detach_run(self, tailpred, Link::end_of(list), Walk::Backward);
        *header_mut(self, list)? = ListHead::empty(list);
        if detached > 0 {
            log::trace!("init {list}: detached {detached} nodes");
        }
        Ok(())
    }

    /// Whether `list` holds no nodes. O(1).
    fn is_empty(&self, list: ListId) -> Result<bool, ListError> {
        Ok(header(self, list)?.head == Link::end_of(list))
    }

    /// Number of linked nodes, counted by walking from the head. O(n).
    ///
    /// The walk must end at this list's own tail boundary within
    /// [`LinkStore::node_count`] hops; anything else is [`ListError::Corrupted`].
    fn length(&self, list: ListId) -> Result<usize, ListError> {
        let bound = self.node_count();
        let mut at = header(self, list)?.head;
        let mut len = 0;
        loop {
            match at {
                Link::Tail(end) if end == list => return Ok(len),
                Link::Node(_) if len < bound => {
                    len += 1;
                    at = next_slot(self, at)?;
                }
                _ => return Err(ListError::Corrupted { at }),
            }
        }
    }

    /// Detach and return the first node, or `None` if the list is empty.
    ///
    /// The detached node is left unlinked and may be inserted anywhere.
    fn unlink_head(&mut self, list: ListId) -> Result<Option<NodeId>, ListError> {
        let first = header(&*self, list)?.head;
        match first {
            Link::Node(node) => self.node_unlink(node).map(Some),
            Link::Tail(end) if end == list => Ok(None),
            at => Err(ListError::Corrupted { at }),
        }
    }

    /// Detach and return the last node, or `None` if the list is empty.
    fn unlink_tail(&mut self, list: ListId) -> Result<Option<NodeId>, ListError> {
        let last = header(&*self, list)?.tailpred;
        match last {
            Link::Node(node) => self.node_unlink(node).map(Some),
            Link::Head(start) if start == list => Ok(None),
            at => Err(ListError::Corrupted { at }),
        }
    }

    /// Insert `node` as the first element. Returns `node`.
    fn prepend_node(&mut self, list: ListId, node: NodeId) -> Result<NodeId, ListError> {
        let first = header(&*self, list)?.head;
        link_between(self, Link::start_of(list), first, node)?;
        Ok(node)
    }

    /// Insert `node` as the last element. Returns `node`.
    fn append_node(&mut self, list: ListId, node: NodeId) -> Result<NodeId, ListError> {
        let last = header(&*self, list)?.tailpred;
        link_between(self, last, Link::end_of(list), node)?;
        Ok(node)
    }

    /// Insert `node` directly after the linked node `anchor`.
    fn insert_after(&mut self, anchor: NodeId, node: NodeId) -> Result<NodeId, ListError> {
        let (_, next) = links_of(&*self, anchor)?;
        link_between(self, Link::Node(anchor), next, node)?;
        Ok(node)
    }

    /// Insert `node` directly before the linked node `anchor`.
    fn insert_before(&mut self, anchor: NodeId, node: NodeId) -> Result<NodeId, ListError> {
        let (prev, _) = links_of(&*self, anchor)?;
        link_between(self, prev, Link::Node(anchor), node)?;
        Ok(node)
    }

    /// Remove `node` from whichever list holds it. Returns `node`.
    ///
    /// No list handle is needed: if `node` is first or last, its neighbour
    /// is a boundary, and rewriting the boundary's slot updates the header.
    fn node_unlink(&mut self, node: NodeId) -> Result<NodeId, ListError> {
        let (prev, next) = links_of(&*self, node)?;
        let here = Link::Node(node);
        if next_slot(&*self, prev)? != here {
            return Err(ListError::Corrupted { at: prev });
        }
        if prev_slot(&*self, next)? != here {
            return Err(ListError::Corrupted { at: next });
        }
        *prev_slot_mut(self, next)? = prev;
        *next_slot_mut(self, prev)? = next;
        self.list_node_mut(node)
            .ok_or(ListError::UnknownNode { node })?
            .unlink();
        Ok(node)
    }

    /// The first node, or `None` if the list is empty.
    fn first(&self, list: ListId) -> Result<Option<NodeId>, ListError> {
        Ok(header(self, list)?.head.node())
    }

    /// The last node, or `None` if the list is empty.
    fn last(&self, list: ListId) -> Result<Option<NodeId>, ListError> {
        Ok(header(self, list)?.tailpred.node())
    }

    /// The node after `node`, or `None` if `node` is last.
    fn next(&self, node: NodeId) -> Result<Option<NodeId>, ListError> {
        Ok(links_of(self, node)?.1.node())
    }

    /// The node before `node`, or `None` if `node` is first.
    fn prev(&self, node: NodeId) -> Result<Option<NodeId>, ListError> {
        Ok(links_of(self, node)?.0.node())
    }

    /// Iterate over the nodes of `list`, front to back. Reversible.
    fn iter(&self, list: ListId) -> Result<Iter<'_, Self>, ListError> {
        let head = header(self, list)?;
        Ok(Iter::new(self, list, head.head, head.tailpred))
    }

    /// Unlink nodes from the front of `list` until it is empty.
    ///
    /// Nodes not yet yielded when the iterator is dropped stay linked.
    fn drain(&mut self, list: ListId) -> Result<Drain<'_, Self>, ListError> {
        header(&*self, list)?;
        Ok(Drain::new(self, list))
    }

    /// Forward order of `list`.
    ///
    /// Checks every link on the way, like [`validate`](Self::validate); a
    /// list that fails the check yields [`ListError::Corrupted`] rather than
    /// a partial order.
    fn snapshot(&self, list: ListId) -> Result<ListOrder, ListError> {
        let mut order = ListOrder::new();
        validate::walk(self, list, |node| order.push(node))?;
        Ok(order)
    }

    /// Walk the whole list and check every link against its neighbour.
    ///
    /// Returns the length on success. Walks are bounded by
    /// [`LinkStore::node_count`], so a cycle is reported rather than
    /// followed forever.
    fn validate(&self, list: ListId) -> Result<usize, ListError> {
        validate::check(self, list)
    }
}

impl<S: LinkStore + ?Sized> IntrusiveList for S {}

fn header<S: LinkStore + ?Sized>(store: &S, list: ListId) -> Result<&ListHead, ListError> {
    store
        .list_head(list)
        .ok_or(ListError::UnknownList { list })
}

fn header_mut<S: LinkStore + ?Sized>(
    store: &mut S,
    list: ListId,
) -> Result<&mut ListHead, ListError> {
    store
        .list_head_mut(list)
        .ok_or(ListError::UnknownList { list })
}

/// `(prev, next)` of a node that must be linked.
pub(crate) fn links_of<S: LinkStore + ?Sized>(
    store: &S,
    node: NodeId,
) -> Result<(Link, Link), ListError> {
    let links = store
        .list_node(node)
        .ok_or(ListError::UnknownNode { node })?
        .links
        .ok_or(ListError::NotLinked { node })?;
    Ok((links.prev, links.next))
}

#[derive(Clone, Copy)]
enum Walk {
    Forward,
    Backward,
}

/// Unlink the run of nodes starting at `at` whose back-links lead to
/// `came_from`. Stops at the first boundary, unresolved node or link that
/// does not point back. Returns how many nodes were unlinked.
fn detach_run<S: LinkStore + ?Sized>(
    store: &mut S,
    mut at: Link,
    mut came_from: Link,
    walk: Walk,
) -> usize {
    let bound = store.node_count();
    let mut detached = 0;
    while detached < bound {
        let Link::Node(node) = at else { break };
        let Some(links) = store.list_node(node).and_then(|n| n.links) else {
            break;
        };
        let (back, ahead) = match walk {
            Walk::Forward => (links.prev, links.next),
            Walk::Backward => (links.next, links.prev),
        };
        if back != came_from {
            log::debug!("init stopped at {node}: link does not point back");
            break;
        }
        if let Some(n) = store.list_node_mut(node) {
            n.unlink();
        }
        detached += 1;
        came_from = at;
        at = ahead;
    }
    detached
}

/// Insert the unlinked `node` between two positions that point at each other.
fn link_between<S: LinkStore + ?Sized>(
    store: &mut S,
    prev: Link,
    next: Link,
    node: NodeId,
) -> Result<(), ListError> {
    match store.list_node(node) {
        None => return Err(ListError::UnknownNode { node }),
        Some(n) if n.is_linked() => return Err(ListError::AlreadyLinked { node }),
        Some(_) => {}
    }
    if next_slot(&*store, prev)? != next {
        return Err(ListError::Corrupted { at: prev });
    }
    if prev_slot(&*store, next)? != prev {
        return Err(ListError::Corrupted { at: next });
    }
    store
        .list_node_mut(node)
        .ok_or(ListError::UnknownNode { node })?
        .link(prev, next);
    *next_slot_mut(store, prev)? = Link::Node(node);
    *prev_slot_mut(store, next)? = Link::Node(node);
    Ok(())
}

fn next_slot<S: LinkStore + ?Sized>(store: &S, at: Link) -> Result<Link, ListError> {
    let slot = match at {
        Link::Head(list) => store.list_head(list).map(|h| h.head),
        Link::Node(node) => store.list_node(node).and_then(ListNode::next),
        Link::Tail(_) => None,
    };
    slot.ok_or(ListError::Corrupted { at })
}

fn prev_slot<S: LinkStore + ?Sized>(store: &S, at: Link) -> Result<Link, ListError> {
    let slot = match at {
        Link::Tail(list) => store.list_head(list).map(|h| h.tailpred),
        Link::Node(node) => store.list_node(node).and_then(ListNode::prev),
        Link::Head(_) => None,
    };
    slot.ok_or(ListError::Corrupted { at })
}

fn next_slot_mut<S: LinkStore + ?Sized>(store: &mut S, at: Link) -> Result<&mut Link, ListError> {
    let slot = match at {
        Link::Head(list) => store.list_head_mut(list).map(|h| &mut h.head),
        Link::Node(node) => store
            .list_node_mut(node)
            .and_then(|n| n.links.as_mut())
            .map(|l| &mut l.next),
        Link::Tail(_) => None,
    };
    slot.ok_or(ListError::Corrupted { at })
}

fn prev_slot_mut<S: LinkStore + ?Sized>(store: &mut S, at: Link) -> Result<&mut Link, ListError> {
    let slot = match at {
        Link::Tail(list) => store.list_head_mut(list).map(|h| &mut h.tailpred),
        Link::Node(node) => store
            .list_node_mut(node)
            .and_then(|n| n.links.as_mut())
            .map(|l| &mut l.prev),
        Link::Head(_) => None,
    };
    slot.ok_or(ListError::Corrupted { at })
}
