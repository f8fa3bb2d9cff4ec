//! HTML serialization.

use crate::document::{Document, NodeId, NodeKind};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text children are emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Document {
    /// Serialize `node` and its subtree.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, false, &mut out);
        out
    }

    /// Serialize the children of `node`.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        let raw = self.tag(node).is_some_and(|t| RAW_TEXT_ELEMENTS.contains(&t));
        for child in self.children(node) {
            self.write_node(*child, raw, &mut out);
        }
        out
    }

    fn write_node(&self, node: NodeId, raw_text: bool, out: &mut String) {
        match self.kind(node) {
            NodeKind::Text(t) if raw_text => out.push_str(t),
            NodeKind::Text(t) => out.push_str(&escape_text(t)),
            NodeKind::Element(data) => {
                out.push('<');
                out.push_str(&data.tag);

                for (name, value) in &data.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }

                if !data.style.is_empty() {
                    let style = data
                        .style
                        .iter()
                        .map(|(k, v)| format!("{}: {}", k, v))
                        .collect::<Vec<_>>()
                        .join("; ");
                    out.push_str(" style=\"");
                    out.push_str(&escape_attr(&style));
                    out.push('"');
                }

                out.push('>');

                if VOID_ELEMENTS.contains(&data.tag.as_str()) {
                    return;
                }

                let raw = RAW_TEXT_ELEMENTS.contains(&data.tag.as_str());
                for child in self.children(node) {
                    self.write_node(*child, raw, out);
                }

                out.push_str("</");
                out.push_str(&data.tag);
                out.push('>');
            }
        }
    }
}

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
