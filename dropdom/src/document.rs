use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::element::{Content, Element};
use crate::selector::Selector;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    /// Custom style properties such as `--delay`.
    style: BTreeMap<String, String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// A live element tree plus the document-level template registry.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Removing
/// children detaches them but keeps their slots, so stale handles stay valid
/// and simply stop being reachable from [`Document::root`].
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    templates: HashMap<String, Vec<Element>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document with a `body` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body")],
            templates: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn exists(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    // -------------------------------------------------------------------------
    // Tree construction
    // -------------------------------------------------------------------------

    /// Append an element tree under the root.
    pub fn mount(&mut self, element: Element) -> NodeId {
        let root = self.root();
        self.append_element(root, element)
    }

    /// Append an element tree as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.build(&element);
        self.link(parent, id, None);
        id
    }

    /// Insert elements before the existing children of `parent`, keeping
    /// their relative order.
    pub fn prepend_elements(&mut self, parent: NodeId, elements: Vec<Element>) -> Vec<NodeId> {
        let ids: Vec<NodeId> = elements.iter().map(|el| self.build(el)).collect();
        for (offset, id) in ids.iter().enumerate() {
            self.link(parent, *id, Some(offset));
        }
        ids
    }

    pub fn append_elements(&mut self, parent: NodeId, elements: Vec<Element>) -> Vec<NodeId> {
        elements
            .into_iter()
            .map(|el| self.append_element(parent, el))
            .collect()
    }

    /// Detach every child of `parent` and insert `elements` in their place.
    pub fn replace_children(&mut self, parent: NodeId, elements: Vec<Element>) -> Vec<NodeId> {
        let Some(node) = self.nodes.get_mut(parent.0) else {
            return Vec::new();
        };
        let old = std::mem::take(&mut node.children);
        for child in old {
            self.nodes[child.0].parent = None;
        }
        self.append_elements(parent, elements)
    }

    fn build(&mut self, element: &Element) -> NodeId {
        let mut node = Node::new(&element.tag);
        node.classes = element.classes.clone();
        node.attributes = element.attributes.clone();
        if let Some(id) = &element.id {
            node.attributes.insert("id".to_string(), id.clone());
        }
        if let Content::Text(text) = &element.content {
            node.text = Some(text.clone());
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(node);

        for child in element.content.children() {
            let child_id = self.build(child);
            self.link(id, child_id, None);
        }

        id
    }

    fn link(&mut self, parent: NodeId, child: NodeId, at: Option<usize>) {
        if parent.0 >= self.nodes.len() {
            return;
        }
        self.nodes[child.0].parent = Some(parent);
        let children = &mut self.nodes[parent.0].children;
        match at {
            Some(index) if index <= children.len() => children.insert(index, child),
            _ => children.push(child),
        }
    }

    // -------------------------------------------------------------------------
    // Traversal
    // -------------------------------------------------------------------------

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|n| n.tag.as_str())
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).and_then(|n| n.text.as_deref())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Ancestors of `id`, nearest first. The node itself is not included.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(node) = current {
            out.push(node);
            current = self.parent(node);
        }
        out
    }

    /// True if `other` is `id` itself or one of its descendants.
    pub fn contains(&self, id: NodeId, other: NodeId) -> bool {
        other == id || self.ancestors(other).contains(&id)
    }

    /// True if the node is reachable from the root.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(self.root(), id)
    }

    /// Descendants of `id` in document order. The node itself is not included.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn get_attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id.0)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.get_attr(id, name).is_some()
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.attributes.insert(name.to_string(), value.into());
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.nodes
            .get_mut(id.0)
            .and_then(|n| n.attributes.remove(name))
    }

    /// Read `data-<name>`.
    pub fn data(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get_attr(id, &format!("data-{name}"))
    }

    /// Write `data-<name>`.
    pub fn set_data(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        self.set_attr(id, &format!("data-{name}"), value);
    }

    pub fn id_of(&self, id: NodeId) -> Option<&str> {
        self.get_attr(id, "id")
    }

    /// First connected node carrying the given `id` attribute.
    pub fn element_by_id(&self, value: &str) -> Option<NodeId> {
        let root = self.root();
        std::iter::once(root)
            .chain(self.descendants(root))
            .find(|node| self.id_of(*node) == Some(value))
    }

    /// Generate an element id that no node in this document carries.
    ///
    /// Ids come from a process-wide counter and are checked against the
    /// document, so they stay unique even when authors pick similar names.
    pub fn unique_id(&self, prefix: &str) -> String {
        loop {
            let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            let candidate = format!("{prefix}-{n}");
            let taken = self
                .nodes
                .iter()
                .any(|node| node.attributes.get("id") == Some(&candidate));
            if !taken {
                return candidate;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Classes and style properties
    // -------------------------------------------------------------------------

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.nodes
            .get(id.0)
            .map(|n| n.classes.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.classes.retain(|c| c != class);
        }
    }

    pub fn style_property(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id.0)
            .and_then(|n| n.style.get(name))
            .map(String::as_str)
    }

    pub fn set_style_property(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.style.insert(name.to_string(), value.into());
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// First descendant of `scope` matching `selector`, in document order.
    pub fn query_selector(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|node| selector.matches(self, *node))
    }

    /// Every descendant of `scope` matching `selector`, in document order.
    pub fn query_selector_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|node| selector.matches(self, *node))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Templates
    // -------------------------------------------------------------------------

    pub fn register_template(&mut self, id: impl Into<String>, fragment: Vec<Element>) {
        self.templates.insert(id.into(), fragment);
    }

    /// A fresh copy of a registered template fragment.
    pub fn template(&self, id: &str) -> Option<Vec<Element>> {
        self.templates.get(id).cloned()
    }

    // -------------------------------------------------------------------------
    // Serialization
    // -------------------------------------------------------------------------

    /// Serialize a node and its subtree as markup.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        let _ = write!(out, "<{}{}>", node.tag, self.describe_attributes(id));
        if let Some(text) = &node.text {
            out.push_str(text);
        }
        for child in &node.children {
            self.write_html(*child, out);
        }
        let _ = write!(out, "</{}>", node.tag);
    }

    /// Attribute list as it appears inside an opening tag, with a leading
    /// space when not empty.
    pub fn describe_attributes(&self, id: NodeId) -> String {
        let Some(node) = self.nodes.get(id.0) else {
            return String::new();
        };
        let mut out = String::new();
        if let Some(value) = node.attributes.get("id") {
            let _ = write!(out, " id=\"{value}\"");
        }
        if !node.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", node.classes.join(" "));
        }
        for (name, value) in node.attributes.iter().filter(|(k, _)| *k != "id") {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        if !node.style.is_empty() {
            let style: Vec<String> = node
                .style
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect();
            let _ = write!(out, " style=\"{}\"", style.join("; "));
        }
        out
    }
}
