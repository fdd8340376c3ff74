//! A configuration-driven drop-down menu widget.
//!
//! A widget is attached to a host element in a [`dropdom::Document`]. Its
//! behavior is read from `data-*` attributes on that element:
//!
//! | attribute | values | default |
//! |---|---|---|
//! | `data-state` | `on`, `off` | `off` |
//! | `data-overlay` | `true`, `false` | `false` |
//! | `data-on` | `click`, `hover` | `click` |
//! | `data-off` | `self`, `any` | `self` |
//! | `data-anim` | `slide-rl`, `softdrop`, `unfold` | `softdrop` |
//! | `data-dest` | selector for the panel | `.drop-content` |
//! | `data-template` | template id, or `example` | none |
//! | `data-html` | `template`, plus `-prepend`/`-append`/`-replace` | none |
//!
//! # Example
//!
//! ```
//! use dropdom::{Document, Element};
//! use dropdown::{DisclosureState, Host};
//!
//! let mut doc = Document::new();
//! let node = doc.mount(
//!     Element::drop_down()
//!         .data("state", "off")
//!         .data("overlay", "false")
//!         .data("html", "template-append")
//!         .data("template", "example"),
//! );
//!
//! let mut host = Host::new(doc);
//! let attached = host.attach(node).unwrap();
//! let trigger = host.widget(attached.widget).unwrap().trigger().unwrap();
//!
//! host.click(trigger);
//! assert_eq!(host.state(attached.widget), Some(DisclosureState::On));
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod host;
pub mod listeners;
pub mod markup;
pub mod widget;

pub use animation::{AnimationDelay, animation_delays};
pub use config::{Animation, Config, Defaults, DisclosureState, DismissScope, OpenTrigger};
pub use error::{Diagnostic, SetupError};
pub use host::{Attached, DispatchReport, Host};
pub use listeners::{Action, Listener, Listeners, Subscription};
pub use markup::{MarkupMode, example_fragment};
pub use widget::{DropDown, WidgetId};

/// Tag name of widget host elements.
pub const WIDGET_TAG: &str = "drop-down";
