use dropdom::{NodeId, SelectorError};
use thiserror::Error;

use crate::widget::WidgetId;

/// Errors that abort widget setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Markup injection was requested without naming a template.
    #[error("data-html=\"{marker}\" requests a template but data-template is not set")]
    MissingTemplate { marker: String },

    /// `data-template` names a template the document does not have.
    #[error("template '{0}' is not registered in the document")]
    UnknownTemplate(String),

    #[error("node {0} does not exist in this document")]
    UnknownNode(NodeId),

    #[error("node {0} already hosts {1}")]
    AlreadyAttached(NodeId, WidgetId),
}

/// Non-fatal setup findings. The widget still attaches; whatever depends on
/// the missing piece does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A paint-critical option (`state` or `overlay`) was not set and got
    /// its default.
    FoucRisk { option: &'static str },
    /// No `button` inside the widget. No listeners are wired.
    MissingTrigger,
    /// Nothing matched `data-dest`.
    MissingPanel { dest: String },
    /// `data-dest` is not a selector this crate understands.
    InvalidSelector { dest: String, error: SelectorError },
}

impl Diagnostic {
    pub fn level(&self) -> log::Level {
        match self {
            Self::FoucRisk { .. } | Self::InvalidSelector { .. } => log::Level::Warn,
            Self::MissingTrigger | Self::MissingPanel { .. } => log::Level::Error,
        }
    }

    pub(crate) fn emit(&self, widget: WidgetId) {
        log::log!(self.level(), "{widget}: {self}");
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FoucRisk { option } => {
                write!(f, "data-{option} was not set, this can cause FOUC")
            }
            Self::MissingTrigger => write!(f, "no trigger button found"),
            Self::MissingPanel { dest } => write!(f, "no panel matches '{dest}'"),
            Self::InvalidSelector { dest, error } => {
                write!(f, "data-dest '{dest}' is not a valid selector: {error}")
            }
        }
    }
}
