//! The drop-down widget: discovered elements, wiring and state machine.

mod events;
mod setup;
mod state;

use std::sync::atomic::{AtomicUsize, Ordering};

use dropdom::NodeId;

use crate::config::Config;

/// Unique identifier for a DropDown widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(usize);

impl WidgetId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

/// A drop-down attached to a host element.
///
/// The widget holds handles into the document but owns none of it: the
/// live disclosure state is the host's `data-state` attribute, so the
/// document can be inspected or changed directly.
#[derive(Debug, Clone)]
pub struct DropDown {
    id: WidgetId,
    host: NodeId,
    config: Config,
    trigger: Option<NodeId>,
    panel: Option<NodeId>,
    /// Widget hosts found inside this one at setup. Not refreshed later.
    nested: Vec<NodeId>,
}

impl DropDown {
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The element this widget is attached to.
    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn trigger(&self) -> Option<NodeId> {
        self.trigger
    }

    pub fn panel(&self) -> Option<NodeId> {
        self.panel
    }

    pub fn nested(&self) -> &[NodeId] {
        &self.nested
    }
}
