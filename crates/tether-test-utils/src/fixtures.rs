//! Fixture records that embed a list node.
//!
//! Two record shapes the lists are meant for:
//!
//! - [`Part`]: one part of a multipart message body.
//! - [`Header`]: a `name: value` header line.

use tether_arena::{ArenaConfig, RecordArena};
use tether_core::{IntrusiveList, Linked, ListId, ListNode, NodeId};

/// One part of a multipart message.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub content_type: String,
    pub body: Vec<u8>,
    node: ListNode,
}

impl Part {
    pub fn new(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.into(),
            body: body.into(),
            node: ListNode::new(),
        }
    }
}

impl Linked for Part {
    fn list_node(&self) -> &ListNode {
        &self.node
    }

    fn list_node_mut(&mut self) -> &mut ListNode {
        &mut self.node
    }
}

/// A single header line.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub name: String,
    pub value: String,
    node: ListNode,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            node: ListNode::new(),
        }
    }
}

impl Linked for Header {
    fn list_node(&self) -> &ListNode {
        &self.node
    }

    fn list_node_mut(&mut self) -> &mut ListNode {
        &mut self.node
    }
}

/// An arena with small limits, so capacity tests stay fast.
pub fn small_arena<T: Linked>() -> RecordArena<T> {
    let config = ArenaConfig::new()
        .with_record_capacity(8)
        .with_max_records(256)
        .with_max_lists(16);
    RecordArena::new(config).expect("fixture config is valid")
}

/// Build a header list from `(name, value)` pairs, in order.
pub fn header_list(
    arena: &mut RecordArena<Header>,
    lines: &[(&str, &str)],
) -> (ListId, Vec<NodeId>) {
    let list = arena.new_list().expect("list slot available");
    let ids = lines
        .iter()
        .map(|&(name, value)| {
            let id = arena
                .insert(Header::new(name, value))
                .expect("record slot available");
            arena.append_node(list, id).expect("fresh node links")
        })
        .collect();
    (list, ids)
}

/// Header names of `list`, front to back.
pub fn header_names(arena: &RecordArena<Header>, list: ListId) -> Vec<String> {
    arena
        .iter(list)
        .expect("list resolves")
        .map(|id| arena.get(id).expect("linked record is live").name.clone())
        .collect()
}

/// Build a part chain from `(content_type, body)` pairs, in order.
pub fn part_chain(
    arena: &mut RecordArena<Part>,
    parts: &[(&str, &str)],
) -> (ListId, Vec<NodeId>) {
    let list = arena.new_list().expect("list slot available");
    let ids = parts
        .iter()
        .map(|&(content_type, body)| {
            let id = arena
                .insert(Part::new(content_type, body))
                .expect("record slot available");
            arena.append_node(list, id).expect("fresh node links")
        })
        .collect();
    (list, ids)
}
