//! One-time setup: resolve options, inject markup, find elements.

use dropdom::{Document, NodeId, Selector};

use super::{DropDown, WidgetId};
use crate::animation;
use crate::config::{self, Defaults, Resolved};
use crate::error::{Diagnostic, SetupError};
use crate::markup;
use crate::WIDGET_TAG;

const TRIGGER_TAG: &str = "button";
const PANEL_CLASS: &str = "drop-content";

impl DropDown {
    /// Build a widget on `host`, mutating the document as setup requires.
    ///
    /// Listener registration is left to the caller, see
    /// [`DropDown::subscriptions`].
    pub(crate) fn setup(
        doc: &mut Document,
        host: NodeId,
        defaults: &Defaults,
    ) -> Result<(Self, Vec<Diagnostic>), SetupError> {
        let id = WidgetId::new();
        let Resolved {
            config,
            mut diagnostics,
        } = config::resolve(doc, host, defaults);

        markup::provision(doc, host, &config)?;

        let trigger = doc
            .descendants(host)
            .into_iter()
            .find(|node| doc.tag(*node) == Some(TRIGGER_TAG));
        if trigger.is_none() {
            diagnostics.push(Diagnostic::MissingTrigger);
        }

        let panel = match Selector::parse(&config.dest) {
            Ok(selector) => {
                let panel = doc.query_selector(host, &selector);
                if panel.is_none() {
                    diagnostics.push(Diagnostic::MissingPanel {
                        dest: config.dest.clone(),
                    });
                }
                panel
            }
            Err(error) => {
                diagnostics.push(Diagnostic::InvalidSelector {
                    dest: config.dest.clone(),
                    error,
                });
                None
            }
        };

        let nested = doc
            .descendants(host)
            .into_iter()
            .filter(|node| doc.tag(*node) == Some(WIDGET_TAG))
            .collect();

        let widget = Self {
            id,
            host,
            config,
            trigger,
            panel,
            nested,
        };

        widget.configure_elements(doc);
        let staggered = animation::apply_delays(doc, host, &widget.config.anim);

        for diagnostic in &diagnostics {
            diagnostic.emit(id);
        }
        log::debug!(
            "{id} set up on {host}: on={} off={} anim={} ({staggered} staggered) nested={}",
            widget.config.on.as_str(),
            widget.config.off.as_str(),
            widget.config.anim.as_str(),
            widget.nested.len(),
        );

        Ok((widget, diagnostics))
    }

    fn configure_elements(&self, doc: &mut Document) {
        if let Some(panel) = self.panel {
            doc.set_attr(panel, "role", "menu");
            if doc.id_of(panel).is_none_or(str::is_empty) {
                let id = doc.unique_id(PANEL_CLASS);
                doc.set_attr(panel, "id", id);
            }
            doc.add_class(panel, PANEL_CLASS);
        }

        if let Some(trigger) = self.trigger {
            doc.set_attr(trigger, "aria-label", "menu button");
            doc.set_attr(trigger, "aria-haspopup", "menu");
            if let Some(panel_id) = self.panel.and_then(|p| doc.id_of(p)).map(str::to_string) {
                doc.set_attr(trigger, "aria-controls", panel_id);
            }
        }

        self.apply_state(doc, self.config.state);
    }
}
