//! A minimal `Vec`-backed store for unit tests.

use crate::id::{ListId, NodeId};
use crate::link::{ListHead, ListNode};
use crate::list::IntrusiveList;
use crate::traits::LinkStore;

/// Nodes and headers in two vectors; every handle has generation 0.
pub(crate) struct VecStore {
    nodes: Vec<ListNode>,
    heads: Vec<ListHead>,
}

impl VecStore {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            heads: Vec::new(),
        }
    }

    pub(crate) fn node(&mut self) -> NodeId {
        self.nodes.push(ListNode::new());
        NodeId::new(self.nodes.len() as u32 - 1, 0)
    }

    pub(crate) fn nodes(&mut self, count: usize) -> Vec<NodeId> {
        (0..count).map(|_| self.node()).collect()
    }

    pub(crate) fn list(&mut self) -> ListId {
        let list = ListId::new(self.heads.len() as u32, 0);
        self.heads.push(ListHead::empty(list));
        list
    }

    pub(crate) fn forward(&self, list: ListId) -> Vec<NodeId> {
        self.iter(list).unwrap().collect()
    }

    pub(crate) fn backward(&self, list: ListId) -> Vec<NodeId> {
        self.iter(list).unwrap().rev().collect()
    }

    /// Direct access for tests that corrupt links on purpose.
    pub(crate) fn raw_node_mut(&mut self, node: NodeId) -> &mut ListNode {
        &mut self.nodes[node.index() as usize]
    }

    pub(crate) fn raw_head_mut(&mut self, list: ListId) -> &mut ListHead {
        &mut self.heads[list.index() as usize]
    }
}

impl LinkStore for VecStore {
    fn list_head(&self, list: ListId) -> Option<&ListHead> {
        if list.generation() != 0 {
            return None;
        }
        self.heads.get(list.index() as usize)
    }

    fn list_head_mut(&mut self, list: ListId) -> Option<&mut ListHead> {
        if list.generation() != 0 {
            return None;
        }
        self.heads.get_mut(list.index() as usize)
    }

    fn list_node(&self, node: NodeId) -> Option<&ListNode> {
        if node.generation() != 0 {
            return None;
        }
        self.nodes.get(node.index() as usize)
    }

    fn list_node_mut(&mut self, node: NodeId) -> Option<&mut ListNode> {
        if node.generation() != 0 {
            return None;
        }
        self.nodes.get_mut(node.index() as usize)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
