//! Listener wiring and event handling.

use dropdom::{Dispatch, Document, Event, EventKind, Outcome};

use super::DropDown;
use crate::config::{DismissScope, OpenTrigger};
use crate::listeners::{Action, Subscription};

impl DropDown {
    /// Listeners this widget needs, chosen by `data-on` and `data-off`.
    ///
    /// Without a trigger nothing is wired. Hover-opened widgets ignore
    /// `data-off`.
    pub fn subscriptions(&self) -> Vec<Subscription> {
        let Some(trigger) = self.trigger else {
            return Vec::new();
        };
        let on_trigger = |kind, action| Subscription::new(Dispatch::Node(trigger), kind, action);

        match (&self.config.on, &self.config.off) {
            (OpenTrigger::Click, DismissScope::OwnTrigger) => {
                vec![on_trigger(EventKind::Click, Action::ToggleFromTrigger)]
            }
            (OpenTrigger::Click, DismissScope::Anywhere) => vec![Subscription::new(
                Dispatch::Document,
                EventKind::Click,
                Action::ToggleOrDismiss,
            )],
            (OpenTrigger::Hover, _) => vec![
                on_trigger(EventKind::PointerOver, Action::Open),
                on_trigger(EventKind::Click, Action::ToggleFromTrigger),
                Subscription::new(
                    Dispatch::Node(self.host),
                    EventKind::PointerLeave,
                    Action::Close,
                ),
            ],
            (OpenTrigger::Click, DismissScope::Other(_)) | (OpenTrigger::Other(_), _) => {
                Vec::new()
            }
        }
    }

    /// Run `action` for `event`.
    pub fn handle(&self, action: Action, event: &Event, doc: &mut Document) -> Outcome {
        match action {
            Action::ToggleFromTrigger => {
                // Clicks on the trigger's children keep propagating.
                if self.trigger != Some(event.target) {
                    return Outcome::Continue;
                }
                self.toggle(doc);
                Outcome::Stop
            }
            Action::ToggleOrDismiss => {
                let Some(trigger) = self.trigger else {
                    return Outcome::Continue;
                };
                if doc.contains(trigger, event.target) {
                    self.toggle(doc);
                    Outcome::Stop
                } else {
                    self.close(doc);
                    Outcome::Continue
                }
            }
            Action::Open => {
                self.open(doc);
                Outcome::Continue
            }
            Action::Close => {
                self.close(doc);
                Outcome::Continue
            }
        }
    }
}
