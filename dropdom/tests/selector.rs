use dropdom::{Document, Element, NodeId, Selector, SelectorError};

fn page() -> (Document, NodeId) {
    let mut doc = Document::new();
    let host = doc.mount(
        Element::drop_down()
            .id("outer")
            .child(Element::button("Menu"))
            .child(
                Element::ul()
                    .class("drop-content default")
                    .data("state", "on")
                    .child(Element::li().child(Element::link("A")))
                    .child(
                        Element::li().child(
                            Element::drop_down()
                                .id("inner")
                                .child(Element::button("Sub"))
                                .child(Element::ul().class("drop-content")),
                        ),
                    ),
            ),
    );
    (doc, host)
}

fn select_all(doc: &Document, scope: NodeId, sel: &str) -> Vec<NodeId> {
    doc.query_selector_all(scope, &Selector::parse(sel).unwrap())
}

#[test]
fn test_type_selector_first_match() {
    let (doc, host) = page();
    let button = doc
        .query_selector(host, &Selector::parse("button").unwrap())
        .unwrap();
    assert_eq!(doc.text(button), Some("Menu"));
}

#[test]
fn test_scope_itself_is_not_matched() {
    let (doc, host) = page();
    let found = select_all(&doc, host, "drop-down");
    assert_eq!(found.len(), 1);
    assert_eq!(doc.id_of(found[0]), Some("inner"));
}

#[test]
fn test_class_selector() {
    let (doc, host) = page();
    assert_eq!(select_all(&doc, host, ".drop-content").len(), 2);
    assert_eq!(select_all(&doc, host, "ul.drop-content.default").len(), 1);
    assert_eq!(select_all(&doc, host, ".missing").len(), 0);
}

#[test]
fn test_id_and_attribute_selectors() {
    let (doc, _) = page();
    let root = doc.root();
    assert_eq!(select_all(&doc, root, "#inner").len(), 1);
    assert_eq!(select_all(&doc, root, "[data-state]").len(), 1);
    assert_eq!(select_all(&doc, root, "[data-state=on]").len(), 1);
    assert_eq!(select_all(&doc, root, "[data-state='off']").len(), 0);
}

#[test]
fn test_descendant_combinator() {
    let (doc, host) = page();
    assert_eq!(select_all(&doc, host, "ul li").len(), 2);
    assert_eq!(select_all(&doc, host, "#outer ul li a").len(), 1);
    assert_eq!(select_all(&doc, host, "#outer .drop-content").len(), 2);
    assert_eq!(select_all(&doc, host, "#inner .drop-content").len(), 1);
    // Outer compounds may match ancestors above the scope.
    let inner = doc.element_by_id("inner").unwrap();
    assert_eq!(select_all(&doc, inner, "#outer ul").len(), 1);
}

#[test]
fn test_selector_list() {
    let (doc, host) = page();
    assert_eq!(select_all(&doc, host, "button, a").len(), 3);
}

#[test]
fn test_invalid_selectors() {
    assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
    assert_eq!(Selector::parse("."), Err(SelectorError::ExpectedName('.')));
}

#[test]
fn test_pseudo_classes_and_other_combinators_are_rejected() {
    assert_eq!(
        Selector::parse("ul:first-of-type"),
        Err(SelectorError::Unsupported(':'))
    );
    assert_eq!(Selector::parse("#outer > ul"), Err(SelectorError::Unsupported('>')));
    assert_eq!(Selector::parse("button + ul"), Err(SelectorError::Unsupported('+')));
    assert_eq!(Selector::parse("button ~ ul"), Err(SelectorError::Unsupported('~')));
}
