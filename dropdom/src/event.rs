use crate::document::NodeId;

/// Pointer interactions delivered to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Primary button click.
    Click,
    /// Pointer moved onto an element or one of its descendants.
    PointerOver,
    /// Pointer left an element's subtree. Does not bubble.
    PointerLeave,
}

impl EventKind {
    pub fn bubbles(self) -> bool {
        match self {
            EventKind::Click | EventKind::PointerOver => true,
            EventKind::PointerLeave => false,
        }
    }
}

/// An event aimed at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: NodeId,
}

impl Event {
    pub fn click(target: NodeId) -> Self {
        Self {
            kind: EventKind::Click,
            target,
        }
    }

    pub fn pointer_over(target: NodeId) -> Self {
        Self {
            kind: EventKind::PointerOver,
            target,
        }
    }

    pub fn pointer_leave(target: NodeId) -> Self {
        Self {
            kind: EventKind::PointerLeave,
            target,
        }
    }

    pub fn bubbles(&self) -> bool {
        self.kind.bubbles()
    }
}
