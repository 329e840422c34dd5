//! Benchmark fixtures for the Tether list crates.
//!
//! - [`Entry`]: a minimal record embedding a list node
//! - [`filled_list`]: an arena with one list of `n` appended entries
//! - [`shuffled_order`]: a seeded permutation of handles for random-order work

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tether::prelude::*;

/// A record carrying a sequence number and its list node.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Position at which the entry was created.
    pub seq: u64,
    node: ListNode,
}

impl Entry {
    /// An unlinked entry.
    pub fn new(seq: u64) -> Self {
        Self {
            seq,
            node: ListNode::new(),
        }
    }
}

impl Linked for Entry {
    fn list_node(&self) -> &ListNode {
        &self.node
    }

    fn list_node_mut(&mut self) -> &mut ListNode {
        &mut self.node
    }
}

/// An arena sized for `n` entries.
pub fn arena_for(n: usize) -> RecordArena<Entry> {
    let config = ArenaConfig::new()
        .with_record_capacity(n)
        .with_max_records((n as u32).max(1))
        .with_max_lists(4);
    RecordArena::new(config).expect("bench config is valid")
}

/// Build an arena holding one list of `n` entries, appended in order.
pub fn filled_list(n: usize) -> (RecordArena<Entry>, ListId, Vec<NodeId>) {
    let mut arena = arena_for(n);
    let list = arena.new_list().expect("list slot");
    let ids = (0..n as u64)
        .map(|seq| {
            let id = arena.insert(Entry::new(seq)).expect("record slot");
            arena.append_node(list, id).expect("fresh entry links")
        })
        .collect();
    (arena, list, ids)
}

/// A copy of `ids` in a deterministic random order.
pub fn shuffled_order(ids: &[NodeId], seed: u64) -> Vec<NodeId> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order = ids.to_vec();
    order.shuffle(&mut rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_list_is_in_append_order() {
        let (arena, list, ids) = filled_list(100);
        assert_eq!(arena.validate(list).unwrap(), 100);
        let walked: Vec<_> = arena.iter(list).unwrap().collect();
        assert_eq!(walked, ids);
        assert_eq!(arena.get(ids[42]).unwrap().seq, 42);
    }

    #[test]
    fn shuffled_order_is_a_deterministic_permutation() {
        let (_, _, ids) = filled_list(64);
        let a = shuffled_order(&ids, 7);
        let b = shuffled_order(&ids, 7);
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort_by_key(|id| id.index());
        assert_eq!(sorted, ids);
    }

    #[test]
    fn empty_list_builds() {
        let (arena, list, ids) = filled_list(0);
        assert!(ids.is_empty());
        assert!(arena.is_empty(list).unwrap());
    }
}
