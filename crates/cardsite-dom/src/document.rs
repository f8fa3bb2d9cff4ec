//! Arena-backed document tree.

use std::rc::Rc;

use crate::event::{Event, Handler, Listener};
use crate::selector::{Selector, SelectorError};

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// The payload of a node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// An element with a tag name
    Element(ElementData),
    /// A text node
    Text(String),
}

/// Element tag, attributes, inline style and listeners.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) style: Vec<(String, String)>,
    pub(crate) listeners: Vec<Listener>,
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Errors raised by document operations.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Node is not an element: {0:?}")]
    NotAnElement(NodeId),

    #[error("Invalid selector: {0}")]
    Selector(#[from] SelectorError),
}

/// An HTML document: `html > (head, body)` plus window-level listeners.
///
/// Detached nodes stay in the arena but are unreachable from the root and
/// therefore invisible to lookups and serialization.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    window_listeners: Vec<Listener>,
}

impl Document {
    /// Create an empty document with `html`, `head` and `body`.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            window_listeners: Vec::new(),
        };

        let root = doc.create_element("html");
        let head = doc.create_element("head");
        let body = doc.create_element("body");
        doc.append(root, head);
        doc.append(root, body);

        doc.root = root;
        doc.head = head;
        doc.body = body;
        doc
    }

    /// The `html` element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `head` element.
    pub fn head(&self) -> NodeId {
        self.head
    }

    /// The `body` element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(ElementData {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Remove `node` from its parent, if any.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    /// Remove every child of `node`.
    pub fn clear_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    /// Children of `node` in order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Parent of `node`, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Node payload.
    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.0].kind
    }

    /// Tag name of an element, `None` for text nodes.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element(data) => Some(&data.tag),
            NodeKind::Text(_) => None,
        }
    }

    pub(crate) fn element(&self, node: NodeId) -> Option<&ElementData> {
        match &self.nodes[node.0].kind {
            NodeKind::Element(data) => Some(data),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementData, DomError> {
        match &mut self.nodes[node.0].kind {
            NodeKind::Element(data) => Ok(data),
            NodeKind::Text(_) => Err(DomError::NotAnElement(node)),
        }
    }

    /// Set or replace an attribute.
    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        let value = value.into();
        let data = self.element_mut(node)?;
        match data.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => data.attributes.push((name.to_string(), value)),
        }
        Ok(())
    }

    /// Remove an attribute if present.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), DomError> {
        self.element_mut(node)?.attributes.retain(|(k, _)| k != name);
        Ok(())
    }

    /// Read an attribute.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whitespace-separated class names of an element.
    pub fn class_list(&self, node: NodeId) -> Vec<&str> {
        self.attribute(node, "class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Set an inline style property. An empty value removes it.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        let data = self.element_mut(node)?;
        if value.is_empty() {
            data.style.retain(|(k, _)| k != property);
            return Ok(());
        }
        match data.style.iter_mut().find(|(k, _)| k == property) {
            Some((_, v)) => *v = value.to_string(),
            None => data.style.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }

    /// Read an inline style property, empty when unset.
    pub fn style(&self, node: NodeId, property: &str) -> &str {
        self.element(node)
            .and_then(|d| d.style.iter().find(|(k, _)| k == property))
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Replace all children of `node` with a single text node.
    ///
    /// An empty string leaves the node without children.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        self.clear_children(node);
        if !text.is_empty() {
            let t = self.create_text(text);
            self.append(node, t);
        }
    }

    /// Concatenated text of `node` and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Element(_) => {
                for child in &self.nodes[node.0].children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    /// Preorder list of `node` and every attached descendant.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current.0].children.iter().rev());
        }
        out
    }

    /// Find an attached element by its `id` attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|n| self.attribute(*n, "id") == Some(id))
    }

    /// All attached elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.query_all_in(self.root, selector)
    }

    /// Elements under `scope` (inclusive) matching `selector`.
    pub fn query_all_in(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|n| selector.matches(self, *n))
            .collect())
    }

    /// Bind `handler` to events of `kind` on `node`.
    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        kind: &str,
        handler: Handler,
    ) -> Result<(), DomError> {
        self.element_mut(node)?.listeners.push(Listener {
            kind: kind.to_string(),
            handler,
        });
        Ok(())
    }

    /// Bind `handler` to events of `kind` reaching the window.
    pub fn add_window_listener(&mut self, kind: &str, handler: Handler) {
        self.window_listeners.push(Listener {
            kind: kind.to_string(),
            handler,
        });
    }

    /// Number of listeners bound to `node`.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.element(node).map(|d| d.listeners.len()).unwrap_or(0)
    }

    /// Drop every window-level listener.
    pub fn clear_window_listeners(&mut self) {
        self.window_listeners.clear();
    }

    /// Number of window-level listeners.
    pub fn window_listener_count(&self) -> usize {
        self.window_listeners.len()
    }

    /// Dispatch `event`, bubbling from the target up to the window.
    ///
    /// Returns the number of handlers invoked. Handlers are collected before
    /// any runs, so tree changes made by a handler do not alter the path.
    pub fn dispatch(&mut self, event: &Event) -> usize {
        let mut handlers: Vec<Handler> = Vec::new();
        let mut current = Some(event.target);

        while let Some(node) = current {
            if let Some(data) = self.element(node) {
                handlers.extend(
                    data.listeners
                        .iter()
                        .filter(|l| l.kind == event.kind)
                        .map(|l| Rc::clone(&l.handler)),
                );
            }
            current = self.parent(node);
        }

        handlers.extend(
            self.window_listeners
                .iter()
                .filter(|l| l.kind == event.kind)
                .map(|l| Rc::clone(&l.handler)),
        );

        for handler in &handlers {
            handler(self, event);
        }

        handlers.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
