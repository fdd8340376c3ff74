//! The demo page: three widgets covering each wiring mode.

use dropdom::{Document, Element};

pub fn build() -> Document {
    let mut doc = Document::new();

    doc.register_template(
        "account",
        vec![
            Element::button("Account"),
            Element::ul()
                .class("drop-content")
                .child(Element::li().child(Element::link("Profile")))
                .child(Element::li().child(settings_menu()))
                .child(Element::li().child(Element::link("Sign out"))),
        ],
    );

    doc.mount(Element::text("dropdown demo"));

    // Click to open, click the trigger again to close.
    doc.mount(
        Element::drop_down()
            .data("state", "off")
            .data("overlay", "false")
            .data("html", "template-append")
            .data("template", "example")
            .data("anim", "unfold"),
    );

    // Closes on any click outside; holds a nested widget.
    doc.mount(
        Element::drop_down()
            .data("state", "off")
            .data("overlay", "true")
            .data("off", "any")
            .data("html", "template-replace")
            .data("template", "account")
            .child(Element::text("replaced at setup")),
    );

    // Opens on hover, closes when the pointer leaves.
    doc.mount(
        Element::drop_down()
            .data("state", "off")
            .data("overlay", "false")
            .data("on", "hover")
            .data("anim", "slide-rl")
            .child(Element::button("Hover me"))
            .child(
                Element::ul().class("drop-content").children(
                    ["Docs", "Blog", "Changelog"].map(|l| Element::li().child(Element::link(l))),
                ),
            ),
    );

    doc.mount(Element::div().id("outside").child(Element::text("click here to dismiss")));

    doc
}

fn settings_menu() -> Element {
    Element::drop_down()
        .data("state", "off")
        .data("overlay", "false")
        .child(Element::button("Settings"))
        .child(
            Element::ul()
                .class("drop-content")
                .child(Element::li().child(Element::link("Theme")))
                .child(Element::li().child(Element::link("Language"))),
        )
}
