//! Whole-list well-formedness check.

use crate::error::ListError;
use crate::id::{ListId, NodeId};
use crate::link::Link;
use crate::traits::LinkStore;

/// Walk `list` forward, checking that each node's `prev` names the position
/// the walk came from and that `tailpred` names the last position reached.
///
/// Checking every `prev` on the forward walk covers the backward walk too:
/// it visits the same positions in reverse. The walk gives up after
/// `node_count` nodes, which only a cycle can exceed.
pub(crate) fn check<S: LinkStore + ?Sized>(store: &S, list: ListId) -> Result<usize, ListError> {
    walk(store, list, |_| {})
}

/// [`check`], handing each node to `visit` once its back-link has passed.
pub(crate) fn walk<S: LinkStore + ?Sized>(
    store: &S,
    list: ListId,
    mut visit: impl FnMut(NodeId),
) -> Result<usize, ListError> {
    let header = store
        .list_head(list)
        .ok_or(ListError::UnknownList { list })?;
    let bound = store.node_count();

    let mut came_from = Link::start_of(list);
    let mut at = header.head;
    let mut len = 0usize;
    loop {
        let node = match at {
            Link::Tail(end) if end == list => break,
            Link::Node(node) => node,
            _ => return corrupted(list, at),
        };
        let Some(links) = store.list_node(node).and_then(|n| n.links) else {
            return corrupted(list, at);
        };
        if links.prev != came_from {
            return corrupted(list, at);
        }
        len += 1;
        if len > bound {
            return corrupted(list, at);
        }
        visit(node);
        came_from = at;
        at = links.next;
    }

    if header.tailpred != came_from {
        return corrupted(list, Link::end_of(list));
    }
    Ok(len)
}

fn corrupted(list: ListId, at: Link) -> Result<usize, ListError> {
    log::debug!("{list} failed validation at {at:?}");
    Err(ListError::Corrupted { at })
}
