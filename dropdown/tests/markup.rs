use dropdom::{Document, Element, NodeId};
use dropdown::{Diagnostic, Host, SetupError};

fn widget(html: &str, template: Option<&str>) -> Element {
    let el = Element::drop_down()
        .data("state", "off")
        .data("overlay", "false")
        .data("html", html);
    match template {
        Some(t) => el.data("template", t),
        None => el,
    }
}

fn tags(doc: &Document, node: NodeId) -> Vec<String> {
    doc.children(node)
        .iter()
        .filter_map(|c| doc.tag(*c).map(str::to_string))
        .collect()
}

// ============================================================================
// Skipping
// ============================================================================

#[test]
fn test_no_marker_skips_injection() {
    let mut doc = Document::new();
    let node = doc.mount(
        Element::drop_down()
            .data("state", "off")
            .data("overlay", "false")
            .child(Element::button("Menu")),
    );

    let mut host = Host::new(doc);
    host.attach(node).unwrap();

    assert_eq!(tags(host.document(), node), vec!["button"]);
}

#[test]
fn test_marker_without_template_token_skips_even_without_template() {
    let mut doc = Document::new();
    let node = doc.mount(widget("static-append", None).child(Element::button("Menu")));

    let mut host = Host::new(doc);
    assert!(host.attach(node).is_ok());
    assert_eq!(tags(host.document(), node), vec!["button"]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_template_is_fatal() {
    let mut doc = Document::new();
    let node = doc.mount(widget("template-append", None));

    let mut host = Host::new(doc);
    let err = host.attach(node).unwrap_err();

    assert_eq!(
        err,
        SetupError::MissingTemplate {
            marker: "template-append".into()
        }
    );
    assert!(host.widget_at(node).is_none());
    assert!(host.listeners().is_empty());
}

#[test]
fn test_empty_template_counts_as_missing() {
    let mut doc = Document::new();
    let node = doc.mount(widget("template-append", Some("")));

    let mut host = Host::new(doc);
    assert_eq!(
        host.attach(node).unwrap_err(),
        SetupError::MissingTemplate {
            marker: "template-append".into()
        }
    );
    assert!(host.widget_at(node).is_none());
}

#[test]
fn test_unknown_template_is_fatal() {
    let mut doc = Document::new();
    let node = doc.mount(widget("template-append", Some("nope")));

    let mut host = Host::new(doc);
    assert_eq!(
        host.attach(node).unwrap_err(),
        SetupError::UnknownTemplate("nope".into())
    );
}

// ============================================================================
// Built-in example
// ============================================================================

#[test]
fn test_example_template_is_cloned() {
    let mut doc = Document::new();
    let node = doc.mount(widget("template-append", Some("example")));

    let mut host = Host::new(doc);
    let attached = host.attach(node).unwrap();
    let doc = host.document();

    assert_eq!(tags(doc, node), vec!["button", "ul", "ul"]);
    assert!(attached.diagnostics.is_empty());

    let w = host.widget(attached.widget).unwrap();
    let panel = w.panel().unwrap();
    assert!(doc.has_class(panel, "default"));
    assert_eq!(doc.text(w.trigger().unwrap()), Some("Drop Me"));
}

#[test]
fn test_short_example_alias() {
    let mut doc = Document::new();
    let node = doc.mount(widget("template-append", Some("ex")));

    let mut host = Host::new(doc);
    host.attach(node).unwrap();
    assert_eq!(tags(host.document(), node).len(), 3);
}

#[test]
fn test_each_attach_gets_a_fresh_copy() {
    let mut doc = Document::new();
    let a = doc.mount(widget("template-append", Some("example")));
    let b = doc.mount(widget("template-append", Some("example")));

    let mut host = Host::new(doc);
    let wa = host.attach(a).unwrap().widget;
    let wb = host.attach(b).unwrap().widget;

    let ta = host.widget(wa).unwrap().trigger().unwrap();
    let tb = host.widget(wb).unwrap().trigger().unwrap();
    assert_ne!(ta, tb);

    let pa = host.widget(wa).unwrap().panel().unwrap();
    let pb = host.widget(wb).unwrap().panel().unwrap();
    assert_ne!(host.document().id_of(pa), host.document().id_of(pb));
}

// ============================================================================
// Placement
// ============================================================================

fn registry_doc(html: &str) -> (Document, NodeId) {
    let mut doc = Document::new();
    doc.register_template(
        "tpl",
        vec![
            Element::button("From template"),
            Element::ul().class("drop-content"),
        ],
    );
    let node = doc.mount(widget(html, Some("tpl")).child(Element::text("existing")));
    (doc, node)
}

#[test]
fn test_prepend_places_fragment_first() {
    let (doc, node) = registry_doc("template-prepend");
    let mut host = Host::new(doc);
    host.attach(node).unwrap();

    assert_eq!(tags(host.document(), node), vec!["button", "ul", "span"]);
}

#[test]
fn test_append_places_fragment_last() {
    let (doc, node) = registry_doc("template-append");
    let mut host = Host::new(doc);
    host.attach(node).unwrap();

    assert_eq!(tags(host.document(), node), vec!["span", "button", "ul"]);
}

#[test]
fn test_replace_drops_existing_children() {
    let (doc, node) = registry_doc("template-replace");
    let mut host = Host::new(doc);
    host.attach(node).unwrap();

    assert_eq!(tags(host.document(), node), vec!["button", "ul"]);
}

#[test]
fn test_fragment_is_consumed_by_first_placement() {
    // Append after prepend has nothing left to insert.
    let (doc, node) = registry_doc("template-prepend-append");
    let mut host = Host::new(doc);
    host.attach(node).unwrap();
    assert_eq!(tags(host.document(), node), vec!["button", "ul", "span"]);

    // Replace after prepend clears everything.
    let (doc, node) = registry_doc("template-prepend-replace");
    let mut host = Host::new(doc);
    let attached = host.attach(node).unwrap();
    assert!(tags(host.document(), node).is_empty());
    assert!(attached.diagnostics.contains(&Diagnostic::MissingTrigger));
}

#[test]
fn test_template_without_placement_inserts_nothing() {
    let (doc, node) = registry_doc("template");
    let mut host = Host::new(doc);
    let attached = host.attach(node).unwrap();

    assert_eq!(tags(host.document(), node), vec!["span"]);
    assert!(attached.diagnostics.contains(&Diagnostic::MissingTrigger));
}
