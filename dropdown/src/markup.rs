//! Template-driven markup injection.

use dropdom::{Document, Element, NodeId};

use crate::config::Config;
use crate::error::SetupError;

/// Reserved `data-template` value selecting [`example_fragment`].
pub const EXAMPLE_TEMPLATE: &str = "example";
const EXAMPLE_TEMPLATE_SHORT: &str = "ex";

/// Decoded `data-html` marker.
///
/// Each flag is a plain substring test, so several placements can be
/// requested at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MarkupMode {
    pub template: bool,
    pub prepend: bool,
    pub append: bool,
    pub replace: bool,
}

impl MarkupMode {
    pub fn parse(marker: &str) -> Self {
        Self {
            template: marker.contains("template"),
            prepend: marker.contains("-prepend"),
            append: marker.contains("-append"),
            replace: marker.contains("-replace"),
        }
    }
}

/// The built-in demo markup: a trigger and two panels.
pub fn example_fragment() -> Vec<Element> {
    vec![
        Element::button("Drop Me"),
        Element::ul()
            .class("drop-content default")
            .children((1..=3).map(|n| Element::li().child(Element::link(format!("Link {n}"))))),
        Element::ul()
            .class("drop-content offset")
            .child(Element::li().child(Element::link("Link 1"))),
    ]
}

/// Inject the configured template into `host`.
///
/// Returns the top-level nodes inserted, empty when the marker does not ask
/// for a template. The cloned fragment is consumed by the first placement
/// that fires, in prepend, append, replace order; later placements work with
/// what is left, which is nothing.
pub fn provision(
    doc: &mut Document,
    host: NodeId,
    config: &Config,
) -> Result<Vec<NodeId>, SetupError> {
    let Some(mode) = config.markup.filter(|mode| mode.template) else {
        return Ok(Vec::new());
    };

    let Some(template) = config.template.as_deref().filter(|t| !t.is_empty()) else {
        return Err(SetupError::MissingTemplate {
            marker: doc.data(host, "html").unwrap_or_default().to_string(),
        });
    };

    let mut fragment = match template {
        EXAMPLE_TEMPLATE | EXAMPLE_TEMPLATE_SHORT => example_fragment(),
        id => doc
            .template(id)
            .ok_or_else(|| SetupError::UnknownTemplate(id.to_string()))?,
    };
    log::debug!("provisioning '{template}' into {host} ({mode:?})");

    let mut inserted = Vec::new();
    if mode.prepend {
        inserted = doc.prepend_elements(host, std::mem::take(&mut fragment));
    }
    if mode.append {
        inserted.extend(doc.append_elements(host, std::mem::take(&mut fragment)));
    }
    if mode.replace {
        inserted = doc.replace_children(host, std::mem::take(&mut fragment));
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marker_tokens() {
        assert_eq!(MarkupMode::parse("none"), MarkupMode::default());
        let mode = MarkupMode::parse("template-prepend-append");
        assert!(mode.template && mode.prepend && mode.append && !mode.replace);
        // Placement tokens without the template token still decode.
        let mode = MarkupMode::parse("x-replace");
        assert!(!mode.template && mode.replace);
    }

    #[test]
    fn test_example_fragment_shape() {
        let fragment = example_fragment();
        assert_eq!(fragment.len(), 3);
        assert_eq!(fragment[0].tag, "button");
        assert_eq!(fragment[1].content.children().len(), 3);
        assert_eq!(fragment[2].content.children().len(), 1);
        assert_eq!(fragment[1].classes, vec!["drop-content", "default"]);
    }
}
