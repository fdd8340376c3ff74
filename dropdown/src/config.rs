//! Widget options and the resolver that reads them from `data-*` attributes.

use dropdom::{Document, NodeId};

use crate::error::Diagnostic;
use crate::markup::MarkupMode;

/// Disclosure state of a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisclosureState {
    On,
    #[default]
    Off,
}

impl DisclosureState {
    /// Only the exact value `on` opens; anything else reads as closed.
    pub fn parse(value: &str) -> Self {
        if value == "on" { Self::On } else { Self::Off }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    pub fn is_on(self) -> bool {
        self == Self::On
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

impl std::fmt::Display for DisclosureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interaction that opens the panel (`data-on`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum OpenTrigger {
    #[default]
    Click,
    Hover,
    /// Unrecognized value, kept as written. Wires nothing.
    Other(String),
}

impl OpenTrigger {
    pub fn parse(value: &str) -> Self {
        match value {
            "click" => Self::Click,
            "hover" => Self::Hover,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Click => "click",
            Self::Hover => "hover",
            Self::Other(value) => value,
        }
    }
}

/// Which clicks close an open panel (`data-off`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DismissScope {
    /// Only clicks on the trigger (`self`).
    #[default]
    OwnTrigger,
    /// Any click in the document (`any`).
    Anywhere,
    /// Unrecognized value, kept as written. Wires nothing.
    Other(String),
}

impl DismissScope {
    pub fn parse(value: &str) -> Self {
        match value {
            "self" => Self::OwnTrigger,
            "any" => Self::Anywhere,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::OwnTrigger => "self",
            Self::Anywhere => "any",
            Self::Other(value) => value,
        }
    }
}

/// Animation mode (`data-anim`). Only drives per-item delay tokens; the
/// motion itself belongs to the stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Animation {
    /// `slide-rl`: ordinal delays 1, 2, 3, ...
    SlideRightLeft,
    #[default]
    Softdrop,
    /// `unfold`: -100ms, 0ms, 100ms, ...
    Unfold,
    /// Unrecognized value, kept as written. Assigns no delays.
    Other(String),
}

impl Animation {
    pub fn parse(value: &str) -> Self {
        match value {
            "slide-rl" => Self::SlideRightLeft,
            "softdrop" => Self::Softdrop,
            "unfold" => Self::Unfold,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::SlideRightLeft => "slide-rl",
            Self::Softdrop => "softdrop",
            Self::Unfold => "unfold",
            Self::Other(value) => value,
        }
    }
}

/// Values written to a host element for options it does not set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub state: DisclosureState,
    /// Keep this `false`: an overlay that is on before styles settle
    /// flashes over the page.
    pub overlay: bool,
    pub on: OpenTrigger,
    pub off: DismissScope,
    pub anim: Animation,
    pub dest: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            state: DisclosureState::Off,
            overlay: false,
            on: OpenTrigger::Click,
            off: DismissScope::OwnTrigger,
            anim: Animation::Softdrop,
            dest: ".drop-content".to_string(),
        }
    }
}

impl Defaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: DisclosureState) -> Self {
        self.state = state;
        self
    }

    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn on(mut self, on: OpenTrigger) -> Self {
        self.on = on;
        self
    }

    pub fn off(mut self, off: DismissScope) -> Self {
        self.off = off;
        self
    }

    pub fn anim(mut self, anim: Animation) -> Self {
        self.anim = anim;
        self
    }

    pub fn dest(mut self, dest: impl Into<String>) -> Self {
        self.dest = dest.into();
        self
    }
}

/// Fully resolved widget options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// State at setup time. The live state is the host's `data-state`.
    pub state: DisclosureState,
    pub overlay: bool,
    pub on: OpenTrigger,
    pub off: DismissScope,
    pub anim: Animation,
    pub dest: String,
    pub template: Option<String>,
    /// Decoded `data-html` marker, if present.
    pub markup: Option<MarkupMode>,
}

/// Output of [`resolve`].
#[derive(Debug, Clone)]
pub struct Resolved {
    pub config: Config,
    pub diagnostics: Vec<Diagnostic>,
}

/// Fill in missing options on `host` and read back the full configuration.
///
/// `data-state` and `data-overlay` decide the first paint, so leaving them
/// out (or empty) yields a [`Diagnostic::FoucRisk`]. The other options are
/// filled silently, and only when absent.
pub fn resolve(doc: &mut Document, host: NodeId, defaults: &Defaults) -> Resolved {
    let mut diagnostics = Vec::new();

    let paint_critical = [
        ("state", defaults.state.as_str()),
        ("overlay", if defaults.overlay { "true" } else { "false" }),
    ];
    for (option, default) in paint_critical {
        if doc.data(host, option).is_none_or(str::is_empty) {
            diagnostics.push(Diagnostic::FoucRisk { option });
            doc.set_data(host, option, default);
        }
    }

    let lazy = [
        ("on", defaults.on.as_str()),
        ("off", defaults.off.as_str()),
        ("anim", defaults.anim.as_str()),
        ("dest", defaults.dest.as_str()),
    ];
    for (option, default) in lazy {
        if doc.data(host, option).is_none() {
            doc.set_data(host, option, default);
        }
    }

    let read = |option: &str| doc.data(host, option).unwrap_or_default();
    let config = Config {
        state: DisclosureState::parse(read("state")),
        overlay: read("overlay") == "true",
        on: OpenTrigger::parse(read("on")),
        off: DismissScope::parse(read("off")),
        anim: Animation::parse(read("anim")),
        dest: read("dest").to_string(),
        template: doc.data(host, "template").map(str::to_string),
        markup: doc.data(host, "html").map(MarkupMode::parse),
    };

    Resolved {
        config,
        diagnostics,
    }
}
