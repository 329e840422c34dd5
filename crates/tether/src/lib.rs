//! Tether: intrusive doubly-linked lists whose boundaries behave like nodes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tether sub-crates. For most users, adding `tether` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tether::prelude::*;
//!
//! // A record becomes linkable by embedding a ListNode.
//! struct Header {
//!     name: String,
//!     node: ListNode,
//! }
//!
//! impl Linked for Header {
//!     fn list_node(&self) -> &ListNode { &self.node }
//!     fn list_node_mut(&mut self) -> &mut ListNode { &mut self.node }
//! }
//!
//! let mut arena = RecordArena::new(ArenaConfig::default()).unwrap();
//! let headers = arena.new_list().unwrap();
//! for name in ["To", "From", "Subject"] {
//!     let id = arena
//!         .insert(Header { name: name.into(), node: ListNode::new() })
//!         .unwrap();
//!     arena.append_node(headers, id).unwrap();
//! }
//!
//! // Walk by hand, stopping at the end marker.
//! let mut at = arena.list_head(headers).unwrap().head();
//! let mut names = Vec::new();
//! while at != Link::end_of(headers) {
//!     let id = at.node().unwrap();
//!     names.push(arena.get(id).unwrap().name.clone());
//!     at = arena.list_node(id).unwrap().next().unwrap();
//! }
//! assert_eq!(names, ["To", "From", "Subject"]);
//!
//! // Drain as a queue.
//! while let Some(id) = arena.unlink_head(headers).unwrap() {
//!     arena.remove(id).unwrap();
//! }
//! assert!(arena.is_empty(headers).unwrap());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`list`] | `tether-core` | Handles, link encoding, `IntrusiveList` operations, iterators |
//! | [`arena`] | `tether-arena` | `RecordArena`, configuration, arena errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Handles, link encoding and list operations (`tether-core`).
///
/// The [`list::IntrusiveList`] trait carries every operation; it is
/// implemented for all [`list::LinkStore`]s.
pub use tether_core as list;

/// Record and list-header storage (`tether-arena`).
///
/// [`arena::RecordArena`] is the store most code uses.
pub use tether_arena as arena;

/// Common imports for typical Tether usage.
///
/// ```rust
/// use tether::prelude::*;
/// ```
pub mod prelude {
    pub use tether_arena::{ArenaConfig, ArenaError, RecordArena};
    pub use tether_core::{
        IntrusiveList, Link, LinkStore, Linked, ListError, ListHead, ListId, ListNode, NodeId,
    };
}
