//! Test utilities and mock stores for Tether development.
//!
//! Provides a mock implementation of [`LinkStore`] ([`MockLinkStore`]),
//! fixture records in [`fixtures`], and assertion helpers that check a list
//! from both ends.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use tether_core::{IntrusiveList, LinkStore, ListHead, ListId, ListNode, NodeId};

/// Mock implementation of [`LinkStore`].
///
/// Backed by two `HashMap`s, so handles are whatever the test chooses.
/// Register nodes with [`add_node`](MockLinkStore::add_node) and lists with
/// [`add_list`](MockLinkStore::add_list) before handing the store to code
/// under test.
pub struct MockLinkStore {
    nodes: HashMap<NodeId, ListNode>,
    heads: HashMap<ListId, ListHead>,
}

impl MockLinkStore {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            heads: HashMap::new(),
        }
    }

    /// Register an unlinked node under `node`.
    pub fn add_node(&mut self, node: NodeId) -> NodeId {
        self.nodes.insert(node, ListNode::new());
        node
    }

    /// Register `count` nodes with indices `0..count`, generation 0.
    pub fn add_nodes(&mut self, count: u32) -> Vec<NodeId> {
        (0..count)
            .map(|i| self.add_node(NodeId::new(i, 0)))
            .collect()
    }

    /// Register an empty list under `list`.
    pub fn add_list(&mut self, list: ListId) -> ListId {
        self.heads.insert(list, ListHead::empty(list));
        list
    }

    /// Forget `node`, as if its record had been freed.
    pub fn forget_node(&mut self, node: NodeId) {
        self.nodes.remove(&node);
    }
}

impl Default for MockLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkStore for MockLinkStore {
    fn list_head(&self, list: ListId) -> Option<&ListHead> {
        self.heads.get(&list)
    }

    fn list_head_mut(&mut self, list: ListId) -> Option<&mut ListHead> {
        self.heads.get_mut(&list)
    }

    fn list_node(&self, node: NodeId) -> Option<&ListNode> {
        self.nodes.get(&node)
    }

    fn list_node_mut(&mut self, node: NodeId) -> Option<&mut ListNode> {
        self.nodes.get_mut(&node)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Nodes of `list` front to back.
pub fn forward<S: LinkStore + ?Sized>(store: &S, list: ListId) -> Vec<NodeId> {
    store.iter(list).expect("list resolves").collect()
}

/// Nodes of `list` back to front.
pub fn backward<S: LinkStore + ?Sized>(store: &S, list: ListId) -> Vec<NodeId> {
    store.iter(list).expect("list resolves").rev().collect()
}

/// Assert that `list` holds exactly `expected`, in order, and that every
/// way of looking at it agrees: validation, `length`, `is_empty`, both
/// walk directions, `first`/`last` and each node's `next`/`prev`.
pub fn assert_list<S: LinkStore + ?Sized>(store: &S, list: ListId, expected: &[NodeId]) {
    assert_eq!(
        store.validate(list),
        Ok(expected.len()),
        "validate({list})"
    );
    assert_eq!(store.length(list), Ok(expected.len()), "length({list})");
    assert_eq!(
        store.is_empty(list),
        Ok(expected.is_empty()),
        "is_empty({list})"
    );
    assert_eq!(forward(store, list), expected, "forward walk of {list}");
    let mut reversed = expected.to_vec();
    reversed.reverse();
    assert_eq!(backward(store, list), reversed, "backward walk of {list}");
    assert_eq!(store.first(list), Ok(expected.first().copied()));
    assert_eq!(store.last(list), Ok(expected.last().copied()));
    for (i, &node) in expected.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| expected[p]);
        let next = expected.get(i + 1).copied();
        assert_eq!(store.prev(node), Ok(prev), "prev({node})");
        assert_eq!(store.next(node), Ok(next), "next({node})");
    }
}

/// Assert that none of `nodes` is linked into any list.
pub fn assert_unlinked<S: LinkStore + ?Sized>(store: &S, nodes: &[NodeId]) {
    for &node in nodes {
        let linked = store
            .list_node(node)
            .unwrap_or_else(|| panic!("{node} does not resolve"))
            .is_linked();
        assert!(!linked, "{node} is still linked");
    }
}
