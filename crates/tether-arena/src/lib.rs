//! Generational record storage for Tether lists.
//!
//! [`RecordArena`] owns the records that embed a
//! [`ListNode`](tether_core::ListNode) and the headers of the lists those
//! records are linked into. It implements [`LinkStore`](tether_core::LinkStore),
//! so every [`IntrusiveList`](tether_core::IntrusiveList) operation can be
//! called on it directly.
//!
//! # Architecture
//!
//! ```text
//! RecordArena<T: Linked>
//! ├── Slab<T>         records, NodeId = (slot, generation)
//! ├── Slab<ListHead>  list headers, ListId = (slot, generation)
//! └── ArenaConfig     initial reservation and hard slot limits
//! ```
//!
//! Freed slots are recycled through a free list and their generation is
//! bumped, so handles to removed records or released lists stop resolving
//! instead of aliasing whatever reuses the slot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod slab;

pub use arena::RecordArena;
pub use config::ArenaConfig;
pub use error::ArenaError;
