//! Listener registry shared by every widget attached to a [`Host`](crate::Host).

use dropdom::{Dispatch, EventKind};

use crate::widget::WidgetId;

/// What a widget does when one of its listeners fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Toggle if the event hit the trigger itself, then stop propagation.
    ToggleFromTrigger,
    /// Toggle and stop propagation if the trigger contains the event
    /// target; close otherwise.
    ToggleOrDismiss,
    Open,
    Close,
}

/// A listener a widget asks to have registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub target: Dispatch,
    pub kind: EventKind,
    pub action: Action,
}

impl Subscription {
    pub fn new(target: Dispatch, kind: EventKind, action: Action) -> Self {
        Self {
            target,
            kind,
            action,
        }
    }
}

/// A registered subscription and the widget that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub owner: WidgetId,
    pub target: Dispatch,
    pub kind: EventKind,
    pub action: Action,
}

/// Registered listeners in registration order.
#[derive(Debug, Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, owner: WidgetId, sub: Subscription) {
        self.entries.push(Listener {
            owner,
            target: sub.target,
            kind: sub.kind,
            action: sub.action,
        });
    }

    /// Drop every listener owned by `owner`. Returns how many were removed.
    pub fn unsubscribe_owner(&mut self, owner: WidgetId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|l| l.owner != owner);
        before - self.entries.len()
    }

    /// Listeners for `kind` at one propagation stop, in registration order.
    ///
    /// Returns a snapshot, so handlers may change the registry without
    /// affecting the event in flight.
    pub fn at(&self, target: Dispatch, kind: EventKind) -> Vec<Listener> {
        self.entries
            .iter()
            .filter(|l| l.target == target && l.kind == kind)
            .copied()
            .collect()
    }

    pub fn owned_by(&self, owner: WidgetId) -> impl Iterator<Item = &Listener> + '_ {
        self.entries.iter().filter(move |l| l.owner == owner)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
