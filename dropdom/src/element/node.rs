use std::collections::BTreeMap;

use super::Content;

/// Builder-style description of a piece of markup.
///
/// Elements are plain values: they describe what gets mounted into a
/// [`Document`](crate::Document) or stored as a template fragment, and are
/// never mutated by the document afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,

    // Styling hooks
    pub classes: Vec<String>,

    /// Every other attribute, including `data-*`, `role` and `aria-*`.
    pub attributes: BTreeMap<String, String>,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// A `span` holding only text.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new("span").content_text(content)
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").content_text(label)
    }

    pub fn ul() -> Self {
        Self::new("ul")
    }

    pub fn li() -> Self {
        Self::new("li")
    }

    /// A link with an empty `href`.
    pub fn link(label: impl Into<String>) -> Self {
        Self::new("a").attr("href", "").content_text(label)
    }

    /// A `drop-down` host element.
    pub fn drop_down() -> Self {
        Self::new("drop-down")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add one or more whitespace-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set `data-<name>`.
    pub fn data(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{name}"), value)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    // Content
    pub fn content_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
