//! Event propagation: where an event travels and how far.
//!
//! Bubbling events visit the target, each ancestor up to the root, and then
//! the document itself. Non-bubbling events visit only the target. A handler
//! returning [`Outcome::Stop`] ends the walk immediately, including any
//! handlers still queued at the same stop.

use crate::document::{Document, NodeId};
use crate::event::Event;

/// One stop on an event's propagation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    Node(NodeId),
    /// The document-level listener slot, after the root.
    Document,
}

/// Handler result controlling propagation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Continue,
    Stop,
}

/// The ordered stops an event visits.
///
/// Targets that are detached from the document only reach their own
/// ancestors, never the document slot.
pub fn propagation_path(doc: &Document, event: &Event) -> Vec<Dispatch> {
    let mut path = vec![Dispatch::Node(event.target)];
    if !event.bubbles() {
        return path;
    }

    path.extend(doc.ancestors(event.target).into_iter().map(Dispatch::Node));
    if doc.is_connected(event.target) {
        path.push(Dispatch::Document);
    }
    path
}

/// Walk `path`, calling `handler` for each stop until it returns
/// [`Outcome::Stop`].
///
/// Returns the stop where propagation ended early, or `None` when every
/// stop was visited.
pub fn run<F>(path: &[Dispatch], mut handler: F) -> Option<Dispatch>
where
    F: FnMut(Dispatch) -> Outcome,
{
    for stop in path {
        if handler(*stop) == Outcome::Stop {
            log::trace!("propagation stopped at {stop:?}");
            return Some(*stop);
        }
    }
    None
}
