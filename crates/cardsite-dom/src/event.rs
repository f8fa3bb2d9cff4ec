//! UI events and listener handles.

use std::fmt;
use std::rc::Rc;

use crate::document::{Document, NodeId};

/// Event handler bound to an element or the window.
///
/// Handlers receive the document mutably so they can update the tree.
pub type Handler = Rc<dyn Fn(&mut Document, &Event)>;

/// A dispatched UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event type without the `on` prefix (e.g. "click")
    pub kind: String,

    /// Node the event was dispatched at
    pub target: NodeId,

    /// Key name for keyboard events (e.g. "Escape")
    pub key: Option<String>,
}

impl Event {
    /// Create an event of the given type.
    pub fn new(kind: impl Into<String>, target: NodeId) -> Self {
        Self {
            kind: kind.into(),
            target,
            key: None,
        }
    }

    /// A click on `target`.
    pub fn click(target: NodeId) -> Self {
        Self::new("click", target)
    }

    /// A key press with `key` focused on `target`.
    pub fn keydown(target: NodeId, key: impl Into<String>) -> Self {
        Self {
            kind: "keydown".to_string(),
            target,
            key: Some(key.into()),
        }
    }
}

/// A registered listener.
#[derive(Clone)]
pub(crate) struct Listener {
    pub(crate) kind: String,
    pub(crate) handler: Handler,
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("kind", &self.kind).finish()
    }
}
