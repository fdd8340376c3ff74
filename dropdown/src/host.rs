//! Runtime that owns a document, its widgets and their listeners.

use std::collections::{HashMap, HashSet};

use dropdom::{Dispatch, Document, Event, NodeId, Outcome, dispatch, propagation_path};

use crate::config::{Defaults, DisclosureState};
use crate::error::{Diagnostic, SetupError};
use crate::listeners::Listeners;
use crate::widget::{DropDown, WidgetId};
use crate::WIDGET_TAG;

/// Result of a successful [`Host::attach`].
#[derive(Debug, Clone)]
pub struct Attached {
    pub widget: WidgetId,
    pub diagnostics: Vec<Diagnostic>,
}

/// What happened while delivering one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Listeners that ran.
    pub invoked: usize,
    /// Where a listener stopped propagation, if one did.
    pub stopped_at: Option<Dispatch>,
}

impl DispatchReport {
    pub fn propagation_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }
}

/// Owns a [`Document`] and drives the widgets attached to it.
///
/// All mutation happens inside [`Host::dispatch`] or the explicit state
/// calls, one event at a time.
#[derive(Debug, Default)]
pub struct Host {
    document: Document,
    widgets: HashMap<WidgetId, DropDown>,
    listeners: Listeners,
    defaults: Defaults,
}

impl Host {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            ..Default::default()
        }
    }

    /// Use different values for options a host element leaves unset.
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Set up a widget on `node` and register its listeners.
    pub fn attach(&mut self, node: NodeId) -> Result<Attached, SetupError> {
        if !self.document.exists(node) {
            return Err(SetupError::UnknownNode(node));
        }
        if let Some(existing) = self.widget_at(node) {
            return Err(SetupError::AlreadyAttached(node, existing));
        }

        let (widget, diagnostics) = DropDown::setup(&mut self.document, node, &self.defaults)?;
        let id = widget.id();

        for sub in widget.subscriptions() {
            self.listeners.subscribe(id, sub);
        }
        self.widgets.insert(id, widget);

        Ok(Attached {
            widget: id,
            diagnostics,
        })
    }

    /// Attach every `drop-down` element in document order, outer widgets
    /// before the ones they contain.
    ///
    /// Elements added by an outer widget's template are picked up too.
    /// A failing element does not stop the others.
    pub fn attach_all(&mut self) -> Vec<Result<Attached, SetupError>> {
        let mut tried = HashSet::new();
        let mut results = Vec::new();

        loop {
            let root = self.document.root();
            let next = self.document.descendants(root).into_iter().find(|node| {
                self.document.tag(*node) == Some(WIDGET_TAG)
                    && !tried.contains(node)
                    && self.widget_at(*node).is_none()
            });
            let Some(node) = next else {
                break;
            };
            tried.insert(node);

            let result = self.attach(node);
            if let Err(err) = &result {
                log::error!("failed to attach widget on {node}: {err}");
            }
            results.push(result);
        }

        results
    }

    /// Remove a widget and every listener it registered.
    pub fn detach(&mut self, id: WidgetId) -> Option<DropDown> {
        let widget = self.widgets.remove(&id)?;
        let removed = self.listeners.unsubscribe_owner(id);
        log::debug!("{id} detached, {removed} listeners removed");
        Some(widget)
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    pub fn widget(&self, id: WidgetId) -> Option<&DropDown> {
        self.widgets.get(&id)
    }

    /// The widget attached to `node`, if any.
    pub fn widget_at(&self, node: NodeId) -> Option<WidgetId> {
        self.widgets
            .values()
            .find(|w| w.host() == node)
            .map(DropDown::id)
    }

    /// Attached widgets, in attach order.
    pub fn widget_ids(&self) -> Vec<WidgetId> {
        let mut ids: Vec<WidgetId> = self.widgets.keys().copied().collect();
        ids.sort();
        ids
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Deliver an event along its propagation path.
    ///
    /// At each stop the matching listeners run in registration order. A
    /// listener returning [`Outcome::Stop`] ends delivery on the spot.
    pub fn dispatch(&mut self, event: Event) -> DispatchReport {
        let path = propagation_path(&self.document, &event);
        let Self {
            document,
            widgets,
            listeners,
            ..
        } = self;

        let mut invoked = 0;
        let stopped_at = dispatch::run(&path, |stop| {
            for listener in listeners.at(stop, event.kind) {
                let Some(widget) = widgets.get(&listener.owner) else {
                    continue;
                };
                invoked += 1;
                if widget.handle(listener.action, &event, document) == Outcome::Stop {
                    return Outcome::Stop;
                }
            }
            Outcome::Continue
        });

        DispatchReport {
            invoked,
            stopped_at,
        }
    }

    pub fn click(&mut self, target: NodeId) -> DispatchReport {
        self.dispatch(Event::click(target))
    }

    pub fn pointer_over(&mut self, target: NodeId) -> DispatchReport {
        self.dispatch(Event::pointer_over(target))
    }

    pub fn pointer_leave(&mut self, target: NodeId) -> DispatchReport {
        self.dispatch(Event::pointer_leave(target))
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn state(&self, id: WidgetId) -> Option<DisclosureState> {
        self.widgets.get(&id).map(|w| w.state(&self.document))
    }

    /// Returns false if the widget is unknown.
    pub fn open(&mut self, id: WidgetId) -> bool {
        self.with_widget(id, DropDown::open)
    }

    pub fn close(&mut self, id: WidgetId) -> bool {
        self.with_widget(id, DropDown::close)
    }

    pub fn toggle(&mut self, id: WidgetId) -> bool {
        self.with_widget(id, DropDown::toggle)
    }

    /// Write the host's `data-state` and nothing else, as an outside script
    /// would.
    pub fn set_state(&mut self, id: WidgetId, state: DisclosureState) -> bool {
        let Some(widget) = self.widgets.get(&id) else {
            return false;
        };
        self.document.set_data(widget.host(), "state", state.as_str());
        true
    }

    fn with_widget(&mut self, id: WidgetId, f: impl FnOnce(&DropDown, &mut Document)) -> bool {
        match self.widgets.get(&id) {
            Some(widget) => {
                f(widget, &mut self.document);
                true
            }
            None => false,
        }
    }
}
