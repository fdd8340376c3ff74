pub mod dispatch;
pub mod document;
pub mod element;
pub mod event;
pub mod selector;

pub use dispatch::{propagation_path, Dispatch, Outcome};
pub use document::{Document, NodeId};
pub use element::{Content, Element};
pub use event::{Event, EventKind};
pub use selector::{Selector, SelectorError};
