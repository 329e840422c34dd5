//! The record arena: records that embed a list node, plus list headers.

use tether_core::{IntrusiveList, LinkStore, Linked, ListHead, ListId, ListNode, NodeId};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::slab::Slab;

/// Owns records and list headers; resolves [`NodeId`] and [`ListId`]
/// handles for the [`IntrusiveList`] operations.
///
/// The arena never links or unlinks anything on its own. It refuses to
/// drop a record that is still linked, and to release a list that still
/// holds nodes, so every link slot keeps pointing at something live.
///
/// All mutation goes through `&mut self`. To share an arena between
/// threads, wrap it in a lock; the arena with its lists and nodes is one
/// unit of mutual exclusion.
///
/// ```
/// use tether_arena::{ArenaConfig, RecordArena};
/// use tether_core::{IntrusiveList, Linked, ListNode};
///
/// struct Part {
///     body: &'static str,
///     node: ListNode,
/// }
///
/// impl Linked for Part {
///     fn list_node(&self) -> &ListNode { &self.node }
///     fn list_node_mut(&mut self) -> &mut ListNode { &mut self.node }
/// }
///
/// let mut arena = RecordArena::new(ArenaConfig::default()).unwrap();
/// let parts = arena.new_list().unwrap();
/// let a = arena.insert(Part { body: "a", node: ListNode::new() }).unwrap();
/// let b = arena.insert(Part { body: "b", node: ListNode::new() }).unwrap();
/// arena.append_node(parts, a).unwrap();
/// arena.prepend_node(parts, b).unwrap();
///
/// let bodies: Vec<_> = arena
///     .iter(parts)
///     .unwrap()
///     .map(|id| arena.get(id).unwrap().body)
///     .collect();
/// assert_eq!(bodies, ["b", "a"]);
/// ```
#[derive(Debug)]
pub struct RecordArena<T> {
    records: Slab<T>,
    lists: Slab<ListHead>,
    config: ArenaConfig,
}

impl<T: Linked> RecordArena<T> {
    /// Create an empty arena.
    ///
    /// Returns `Err(ArenaError::InvalidConfig)` if `config` fails
    /// [`ArenaConfig::validate`].
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            records: Slab::new("records", config.record_capacity, config.max_records),
            lists: Slab::new("lists", 0, config.max_lists),
            config,
        })
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Store `record` and return its handle.
    ///
    /// The embedded node starts unlinked regardless of what `record`
    /// carried in.
    pub fn insert(&mut self, mut record: T) -> Result<NodeId, ArenaError> {
        *record.list_node_mut() = ListNode::new();
        let (index, generation) = self.records.insert(record)?;
        let node = NodeId::new(index, generation);
        log::trace!("inserted {node}");
        Ok(node)
    }

    /// Take `node`'s record out of the arena.
    ///
    /// The record must be unlinked first: removing a linked record would
    /// leave its neighbours pointing at a freed slot.
    pub fn remove(&mut self, node: NodeId) -> Result<T, ArenaError> {
        let record = self
            .records
            .get(node.index(), node.generation())
            .ok_or(ArenaError::StaleHandle {
                index: node.index(),
                generation: node.generation(),
            })?;
        if record.list_node().is_linked() {
            return Err(ArenaError::StillLinked { node });
        }
        let record = self.records.remove(node.index(), node.generation())?;
        log::trace!("removed {node}");
        Ok(record)
    }

    /// Unlink `node` from its list, if any, then remove its record.
    pub fn unlink_and_remove(&mut self, node: NodeId) -> Result<T, ArenaError> {
        if self.is_linked(node) {
            self.node_unlink(node)?;
        }
        self.remove(node)
    }

    /// The record named by `node`.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.records.get(node.index(), node.generation())
    }

    /// Mutable access to the record named by `node`.
    ///
    /// Overwriting the embedded node through this reference detaches the
    /// record from its neighbours' point of view only; the next operation
    /// touching those neighbours reports [`tether_core::ListError::Corrupted`].
    /// [`IntrusiveList::init`] still resets such a list, after which its
    /// records can be removed and the list released.
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.records.get_mut(node.index(), node.generation())
    }

    /// Whether `node` names a live record.
    pub fn contains(&self, node: NodeId) -> bool {
        self.records.contains(node.index(), node.generation())
    }

    /// Whether `node` names a live record that is linked into a list.
    pub fn is_linked(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(|r| r.list_node().is_linked())
    }

    /// Number of live records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Iterate over live records with their handles, in slot order.
    pub fn records(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.records
            .iter()
            .map(|(index, generation, record)| (NodeId::new(index, generation), record))
    }

    /// Create an empty list.
    pub fn new_list(&mut self) -> Result<ListId, ArenaError> {
        let (index, generation) = self
            .lists
            .insert_with(|index, generation| ListHead::empty(ListId::new(index, generation)))?;
        let list = ListId::new(index, generation);
        log::trace!("created {list}");
        Ok(list)
    }

    /// Free an empty list's header.
    ///
    /// Drain the list first; releasing a list with nodes would leave them
    /// linked to a header that no longer exists.
    pub fn release_list(&mut self, list: ListId) -> Result<(), ArenaError> {
        let len = self.length(list)?;
        if len > 0 {
            return Err(ArenaError::ListNotEmpty { list, len });
        }
        self.lists.remove(list.index(), list.generation())?;
        log::trace!("released {list}");
        Ok(())
    }

    /// Number of live lists.
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Whether `list` names a live list.
    pub fn contains_list(&self, list: ListId) -> bool {
        self.lists.contains(list.index(), list.generation())
    }

    /// Drop every record and list. All outstanding handles go stale.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing arena: {} records, {} lists",
            self.records.len(),
            self.lists.len()
        );
        self.records.clear();
        self.lists.clear();
    }
}

impl<T: Linked> LinkStore for RecordArena<T> {
    fn list_head(&self, list: ListId) -> Option<&ListHead> {
        self.lists.get(list.index(), list.generation())
    }

    fn list_head_mut(&mut self, list: ListId) -> Option<&mut ListHead> {
        self.lists.get_mut(list.index(), list.generation())
    }

    fn list_node(&self, node: NodeId) -> Option<&ListNode> {
        self.get(node).map(Linked::list_node)
    }

    fn list_node_mut(&mut self, node: NodeId) -> Option<&mut ListNode> {
        self.get_mut(node).map(Linked::list_node_mut)
    }

    fn node_count(&self) -> usize {
        self.records.len()
    }
}

impl<T: Linked> Default for RecordArena<T> {
    fn default() -> Self {
        Self {
            records: Slab::new(
                "records",
                ArenaConfig::DEFAULT_RECORD_CAPACITY,
                ArenaConfig::DEFAULT_MAX_RECORDS,
            ),
            lists: Slab::new("lists", 0, ArenaConfig::DEFAULT_MAX_LISTS),
            config: ArenaConfig::default(),
        }
    }
}
