//! Open/closed state machine.

use dropdom::Document;

use super::DropDown;
use crate::config::DisclosureState;

impl DropDown {
    /// Current state, read from the host's `data-state`.
    pub fn state(&self, doc: &Document) -> DisclosureState {
        doc.data(self.host, "state")
            .map(DisclosureState::parse)
            .unwrap_or_default()
    }

    /// Open the panel. Re-applies the open state if already open.
    pub fn open(&self, doc: &mut Document) {
        log::debug!("{} open", self.id);
        self.apply_state(doc, DisclosureState::On);
    }

    /// Close the panel and mark every nested widget closed.
    ///
    /// Nested widgets only get their `data-state` written; their triggers
    /// and panels are left for them to reconcile.
    pub fn close(&self, doc: &mut Document) {
        log::debug!("{} close", self.id);
        self.apply_state(doc, DisclosureState::Off);
        for nested in &self.nested {
            doc.set_data(*nested, "state", DisclosureState::Off.as_str());
        }
    }

    pub fn toggle(&self, doc: &mut Document) {
        match self.state(doc) {
            DisclosureState::On => self.close(doc),
            DisclosureState::Off => self.open(doc),
        }
    }

    /// Write `state` to the host, trigger and panel.
    pub(super) fn apply_state(&self, doc: &mut Document, state: DisclosureState) {
        let (current, previous) = (state.as_str(), state.toggled().as_str());

        doc.set_data(self.host, "state", current);

        if let Some(trigger) = self.trigger {
            doc.set_attr(trigger, "aria-expanded", state.is_on().to_string());
            doc.set_data(trigger, "state", current);
            doc.remove_class(trigger, previous);
            doc.add_class(trigger, current);
        }

        if let Some(panel) = self.panel {
            doc.remove_class(panel, previous);
            doc.add_class(panel, current);
        }
    }
}
