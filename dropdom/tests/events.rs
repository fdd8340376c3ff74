use dropdom::dispatch::run;
use dropdom::{propagation_path, Dispatch, Document, Element, Event, Outcome};

fn nested() -> (Document, [dropdom::NodeId; 3]) {
    let mut doc = Document::new();
    let outer = doc.mount(
        Element::div()
            .id("outer")
            .child(Element::div().id("middle").child(Element::button("x").id("btn"))),
    );
    let middle = doc.element_by_id("middle").unwrap();
    let btn = doc.element_by_id("btn").unwrap();
    (doc, [outer, middle, btn])
}

#[test]
fn test_click_bubbles_to_document() {
    let (doc, [outer, middle, btn]) = nested();
    let path = propagation_path(&doc, &Event::click(btn));
    assert_eq!(
        path,
        vec![
            Dispatch::Node(btn),
            Dispatch::Node(middle),
            Dispatch::Node(outer),
            Dispatch::Node(doc.root()),
            Dispatch::Document,
        ]
    );
}

#[test]
fn test_pointer_leave_does_not_bubble() {
    let (doc, [outer, ..]) = nested();
    let path = propagation_path(&doc, &Event::pointer_leave(outer));
    assert_eq!(path, vec![Dispatch::Node(outer)]);
}

#[test]
fn test_detached_target_never_reaches_document() {
    let (mut doc, [outer, middle, btn]) = nested();
    doc.replace_children(outer, Vec::new());

    let path = propagation_path(&doc, &Event::click(btn));
    assert_eq!(path, vec![Dispatch::Node(btn), Dispatch::Node(middle)]);
}

#[test]
fn test_run_stops_early() {
    let (doc, [_, middle, btn]) = nested();
    let path = propagation_path(&doc, &Event::pointer_over(btn));

    let mut visited = Vec::new();
    let stopped = run(&path, |stop| {
        visited.push(stop);
        if stop == Dispatch::Node(middle) {
            Outcome::Stop
        } else {
            Outcome::Continue
        }
    });

    assert_eq!(stopped, Some(Dispatch::Node(middle)));
    assert_eq!(visited, vec![Dispatch::Node(btn), Dispatch::Node(middle)]);
}

#[test]
fn test_run_visits_everything_without_stop() {
    let (doc, [.., btn]) = nested();
    let path = propagation_path(&doc, &Event::click(btn));

    let mut count = 0;
    assert_eq!(
        run(&path, |_| {
            count += 1;
            Outcome::Continue
        }),
        None
    );
    assert_eq!(count, path.len());
}
