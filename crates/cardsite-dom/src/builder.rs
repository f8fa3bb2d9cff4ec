//! Declarative element construction.

use std::rc::Rc;

use crate::document::{Document, NodeId};
use crate::event::{Event, Handler};

/// Element configuration: class name, attributes and event handlers.
///
/// Attributes keep insertion order so serialized output is stable.
#[derive(Default)]
pub struct Attrs {
    class: Option<String>,
    attributes: Vec<(String, String)>,
    listeners: Vec<(String, Handler)>,
}

impl Attrs {
    /// Empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name (space-separated list).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set an attribute.
    pub fn set(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }

    /// Set an attribute when a value is present; `None` omits it.
    pub fn opt<V: Into<String>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    /// Bind a handler for events of `kind` (e.g. "click").
    pub fn on(mut self, kind: &str, handler: impl Fn(&mut Document, &Event) + 'static) -> Self {
        self.listeners.push((kind.to_string(), Rc::new(handler)));
        self
    }
}

/// Build one element with `attrs` applied and `children` appended in order.
pub fn el(doc: &mut Document, tag: &str, attrs: Attrs, children: &[NodeId]) -> NodeId {
    let node = doc.create_element(tag);

    // A freshly created element always accepts attributes and listeners.
    if let Some(class) = attrs.class {
        let _ = doc.set_attribute(node, "class", class);
    }
    for (name, value) in attrs.attributes {
        let _ = doc.set_attribute(node, &name, value);
    }
    for (kind, handler) in attrs.listeners {
        let _ = doc.add_event_listener(node, &kind, handler);
    }

    for child in children {
        doc.append(node, *child);
    }

    node
}

/// Create a detached text node.
pub fn text(doc: &mut Document, content: impl Into<String>) -> NodeId {
    doc.create_text(content)
}
