//! Core types and operations for the Tether intrusive list.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! link encoding that lets the head and tail boundaries of a list behave
//! like ordinary nodes, the storage seam ([`LinkStore`]) that resolves
//! handles to link fields, and the [`IntrusiveList`] operations built on
//! top of it.
//!
//! # Link encoding
//!
//! ```text
//!   Head(L) ──next──▶ Node(a) ──next──▶ Node(b) ──next──▶ Tail(L)
//!   Head(L) ◀──prev── Node(a) ◀──prev── Node(b) ◀──prev── Tail(L)
//!      │                                                   │
//!      └─ next slot = ListHead::head      prev slot = ListHead::tailpred ─┘
//! ```
//!
//! `Head(L)` has no `prev` and `Tail(L)` has no `next`; those absent slots
//! play the role of the null terminator. Every other slot is always present,
//! so insertion and removal never branch on emptiness or on position.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod iter;
pub mod link;
pub mod list;
pub mod traits;
mod validate;

pub use error::ListError;
pub use id::{ListId, NodeId};
pub use iter::{Drain, Iter};
pub use link::{Link, ListHead, ListNode, ListOrder};
pub use list::IntrusiveList;
pub use traits::{LinkStore, Linked};

#[cfg(test)]
mod testing;
