//! Traversal and draining iterators.

use std::iter::FusedIterator;

use crate::error::ListError;
use crate::id::{ListId, NodeId};
use crate::link::Link;
use crate::list::IntrusiveList;
use crate::traits::LinkStore;

/// Borrowing iterator over the nodes of a list.
///
/// Created by [`IntrusiveList::iter`]. Walks `next` from the front and
/// `prev` from the back; the two ends stop when they meet. A node is yielded
/// only if its link back toward the end it was reached from is intact.
/// The first link that fails this ends the iteration, and the failure is
/// kept in [`error`](Iter::error).
pub struct Iter<'s, S: ?Sized> {
    store: &'s S,
    list: ListId,
    front: Link,
    /// Where `front` was reached from; its `prev` must name this.
    front_from: Link,
    back: Link,
    /// Where `back` was reached from; its `next` must name this.
    back_from: Link,
    done: bool,
    error: Option<ListError>,
}

impl<'s, S: LinkStore + ?Sized> Iter<'s, S> {
    pub(crate) fn new(store: &'s S, list: ListId, front: Link, back: Link) -> Self {
        let empty = front == Link::end_of(list) && back == Link::start_of(list);
        Self {
            store,
            list,
            front,
            front_from: Link::start_of(list),
            back,
            back_from: Link::end_of(list),
            done: empty,
            error: None,
        }
    }

    /// The broken link that ended the iteration early, if any.
    pub fn error(&self) -> Option<&ListError> {
        self.error.as_ref()
    }

    fn fail(&mut self, at: Link) -> Option<NodeId> {
        log::debug!("iteration of {} stopped at {at:?}", self.list);
        self.done = true;
        self.error = Some(ListError::Corrupted { at });
        None
    }

    fn step(&mut self, forward: bool) -> Option<NodeId> {
        if self.done {
            return None;
        }
        let (at, came_from) = if forward {
            (self.front, self.front_from)
        } else {
            (self.back, self.back_from)
        };
        let Link::Node(node) = at else {
            return self.fail(at);
        };
        let Some(links) = self.store.list_node(node).and_then(|n| n.links) else {
            return self.fail(at);
        };
        let (back_link, ahead) = if forward {
            (links.prev, links.next)
        } else {
            (links.next, links.prev)
        };
        if back_link != came_from {
            return self.fail(at);
        }
        if self.front == self.back {
            self.done = true;
        } else if forward {
            self.front_from = at;
            self.front = ahead;
        } else {
            self.back_from = at;
            self.back = ahead;
        }
        Some(node)
    }
}

impl<S: LinkStore + ?Sized> Iterator for Iter<'_, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.step(true)
    }
}

impl<S: LinkStore + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<NodeId> {
        self.step(false)
    }
}

impl<S: LinkStore + ?Sized> FusedIterator for Iter<'_, S> {}

/// Iterator that unlinks nodes from the front of a list.
///
/// Created by [`IntrusiveList::drain`]. Each yielded node is already
/// unlinked. Ends when `unlink_head` reports the list empty. An error from
/// `unlink_head` is yielded once and ends the iteration, so collecting into
/// `Result<Vec<_>, _>` tells a drained list from a broken one.
pub struct Drain<'s, S: ?Sized> {
    store: &'s mut S,
    list: ListId,
    drained: usize,
    done: bool,
}

impl<'s, S: LinkStore + ?Sized> Drain<'s, S> {
    pub(crate) fn new(store: &'s mut S, list: ListId) -> Self {
        Self {
            store,
            list,
            drained: 0,
            done: false,
        }
    }
}

impl<S: LinkStore + ?Sized> Iterator for Drain<'_, S> {
    type Item = Result<NodeId, ListError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.store.unlink_head(self.list) {
            Ok(Some(node)) => {
                self.drained += 1;
                Some(Ok(node))
            }
            Ok(None) => {
                self.done = true;
                log::trace!("drained {} nodes from {}", self.drained, self.list);
                None
            }
            Err(err) => {
                self.done = true;
                log::debug!(
                    "drain of {} stopped after {} nodes: {err}",
                    self.list,
                    self.drained
                );
                Some(Err(err))
            }
        }
    }
}

impl<S: LinkStore + ?Sized> FusedIterator for Drain<'_, S> {}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::id::{ListId, NodeId};
    use crate::link::{Link, ListNode};
    use crate::list::IntrusiveList;
    use crate::testing::VecStore;
    use crate::traits::LinkStore;

    #[test]
    fn iter_walks_both_directions() {
        let mut store = VecStore::new();
        let list = store.list();
        let nodes = store.nodes(4);
        for &n in &nodes {
            store.append_node(list, n).unwrap();
        }
        let forward: Vec<_> = store.iter(list).unwrap().collect();
        assert_eq!(forward, nodes);
        let backward: Vec<_> = store.iter(list).unwrap().rev().collect();
        assert_eq!(backward, nodes.iter().rev().copied().collect::<Vec<_>>());
    }

    #[test]
    fn iter_ends_meet_without_repeats() {
        let mut store = VecStore::new();
        let list = store.list();
        let nodes = store.nodes(5);
        for &n in &nodes {
            store.append_node(list, n).unwrap();
        }
        let mut it = store.iter(list).unwrap();
        assert_eq!(it.next(), Some(nodes[0]));
        assert_eq!(it.next_back(), Some(nodes[4]));
        assert_eq!(it.next(), Some(nodes[1]));
        assert_eq!(it.next_back(), Some(nodes[3]));
        assert_eq!(it.next(), Some(nodes[2]));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn iter_over_empty_list_yields_nothing() {
        let mut store = VecStore::new();
        let list = store.list();
        assert_eq!(store.iter(list).unwrap().count(), 0);
        assert_eq!(store.iter(list).unwrap().next_back(), None);
    }

    #[test]
    fn drain_empties_list_in_order() {
        let mut store = VecStore::new();
        let list = store.list();
        let nodes = store.nodes(3);
        for &n in &nodes {
            store.append_node(list, n).unwrap();
        }
        let drained: Result<Vec<_>, _> = store.drain(list).unwrap().collect();
        assert_eq!(drained, Ok(nodes.clone()));
        assert!(store.is_empty(list).unwrap());
        for &n in &nodes {
            assert!(!store.list_node(n).unwrap().is_linked());
        }
    }

    #[test]
    fn dropped_drain_leaves_rest_linked() {
        let mut store = VecStore::new();
        let list = store.list();
        let nodes = store.nodes(3);
        for &n in &nodes {
            store.append_node(list, n).unwrap();
        }
        assert_eq!(store.drain(list).unwrap().next(), Some(Ok(nodes[0])));
        assert_eq!(store.snapshot(list).unwrap().as_slice(), &nodes[1..]);
    }

    /// a, b, c with b's links cleared behind its neighbours' backs.
    fn list_with_detached_middle() -> (VecStore, ListId, [NodeId; 3]) {
        let mut store = VecStore::new();
        let list = store.list();
        let [a, b, c] = [store.node(), store.node(), store.node()];
        for n in [a, b, c] {
            store.append_node(list, n).unwrap();
        }
        *store.raw_node_mut(b) = ListNode::new();
        (store, list, [a, b, c])
    }

    #[test]
    fn iter_stops_at_broken_link_and_reports_it() {
        let (store, list, [a, b, c]) = list_with_detached_middle();

        let mut it = store.iter(list).unwrap();
        assert_eq!(it.by_ref().collect::<Vec<_>>(), vec![a]);
        assert_eq!(it.error(), Some(&ListError::Corrupted { at: Link::Node(b) }));

        let mut it = store.iter(list).unwrap().rev();
        assert_eq!(it.next(), Some(c));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn iter_skips_node_whose_back_link_disagrees() {
        let mut store = VecStore::new();
        let list = store.list();
        let [a, b, c] = [store.node(), store.node(), store.node()];
        for n in [a, b, c] {
            store.append_node(list, n).unwrap();
        }
        // b claims to follow c, so reaching it from a is not trusted.
        store.raw_node_mut(b).links.as_mut().unwrap().prev = Link::Node(c);

        let mut it = store.iter(list).unwrap();
        assert_eq!(it.next(), Some(a));
        assert_eq!(it.next(), None);
        assert_eq!(it.error(), Some(&ListError::Corrupted { at: Link::Node(b) }));
    }

    #[test]
    fn healthy_iteration_has_no_error() {
        let mut store = VecStore::new();
        let list = store.list();
        for n in store.nodes(3) {
            store.append_node(list, n).unwrap();
        }
        let mut it = store.iter(list).unwrap();
        assert_eq!(it.by_ref().count(), 3);
        assert_eq!(it.error(), None);
    }

    #[test]
    fn drain_yields_the_error_instead_of_ending_quietly() {
        let (mut store, list, [a, b, _]) = list_with_detached_middle();

        let mut drain = store.drain(list).unwrap();
        assert_eq!(drain.next(), Some(Err(ListError::Corrupted { at: Link::Node(b) })));
        assert_eq!(drain.next(), None);
        drop(drain);
        assert!(store.list_node(a).unwrap().is_linked());

        let collected: Result<Vec<_>, _> = store.drain(list).unwrap().collect();
        assert!(collected.is_err());
    }
}
