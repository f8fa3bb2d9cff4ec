//! A small CSS selector subset.
//!
//! Supports compound selectors built from an optional tag name plus any
//! number of `.class` and `#id` parts, joined by the descendant combinator
//! (whitespace). That covers what the widget adapters query, e.g.
//! `.photoSwiper .swiper-pagination` or `a.glightbox`.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Document, NodeId};

/// One compound selector, e.g. `div.card.figure`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some(tag) = doc.tag(node) else {
            return false;
        };

        if let Some(expected) = &self.tag {
            if expected != "*" && expected != tag {
                return false;
            }
        }

        if let Some(expected) = &self.id {
            if doc.attribute(node, "id") != Some(expected.as_str()) {
                return false;
            }
        }

        let classes = doc.class_list(node);
        self.classes.iter().all(|c| classes.contains(&c.as_str()))
    }
}

/// A parsed selector: compounds from outermost to innermost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

/// Errors from parsing a selector.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unsupported selector syntax: {0}")]
    Unsupported(String),
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        static COMPOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^(\*|[a-zA-Z][a-zA-Z0-9-]*)?((?:[.#][A-Za-z_][A-Za-z0-9_-]*)*)$")
                .expect("Invalid compound regex")
        });
        static PART_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"([.#])([A-Za-z_][A-Za-z0-9_-]*)").expect("Invalid part regex")
        });

        let mut compounds = Vec::new();

        for token in source.split_whitespace() {
            let caps = COMPOUND_RE
                .captures(token)
                .ok_or_else(|| SelectorError::Unsupported(token.to_string()))?;

            let mut compound = Compound {
                tag: caps.get(1).map(|m| m.as_str().to_ascii_lowercase()),
                ..Default::default()
            };

            let parts = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            for part in PART_RE.captures_iter(parts) {
                let name = part[2].to_string();
                if &part[1] == "#" {
                    compound.id = Some(name);
                } else {
                    compound.classes.push(name);
                }
            }

            if compound == Compound::default() {
                return Err(SelectorError::Unsupported(token.to_string()));
            }

            compounds.push(compound);
        }

        if compounds.is_empty() {
            return Err(SelectorError::Empty);
        }

        Ok(Self { compounds })
    }

    /// Whether `node` matches this selector.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((last, ancestors)) = self.compounds.split_last() else {
            return false;
        };

        if !last.matches(doc, node) {
            return false;
        }

        // Descendant combinators only, so matching the nearest ancestor for
        // each remaining compound is sufficient.
        let mut pending = ancestors.iter().rev();
        let mut wanted = pending.next();
        let mut current = doc.parent(node);

        while let (Some(compound), Some(candidate)) = (wanted, current) {
            if compound.matches(doc, candidate) {
                wanted = pending.next();
            }
            current = doc.parent(candidate);
        }

        wanted.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{el, Attrs};

    fn gallery() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let dots = el(&mut doc, "div", Attrs::new().class("swiper-pagination"), &[]);
        let stray = el(&mut doc, "div", Attrs::new().class("swiper-pagination"), &[]);
        let swiper = el(
            &mut doc,
            "section",
            Attrs::new().class("swiper photoSwiper").set("id", "photos"),
            &[dots],
        );
        let body = doc.body();
        doc.append(body, swiper);
        doc.append(body, stray);
        (doc, dots, stray)
    }

    #[test]
    fn matches_descendant_class() {
        let (doc, dots, _) = gallery();

        let found = doc.query_all(".photoSwiper .swiper-pagination").unwrap();

        assert_eq!(found, vec![dots]);
    }

    #[test]
    fn matches_plain_class_everywhere() {
        let (doc, dots, stray) = gallery();

        let found = doc.query_all(".swiper-pagination").unwrap();

        assert_eq!(found, vec![dots, stray]);
    }

    #[test]
    fn matches_tag_and_id() {
        let (doc, dots, _) = gallery();

        assert_eq!(doc.query_all("section#photos div").unwrap(), vec![dots]);
        assert!(doc.query_all("article").unwrap().is_empty());
    }

    #[test]
    fn rejects_unsupported_syntax() {
        assert_eq!(Selector::parse("  "), Err(SelectorError::Empty));
        assert!(matches!(
            Selector::parse("a > b"),
            Err(SelectorError::Unsupported(_))
        ));
        assert!(matches!(
            Selector::parse("[data-x]"),
            Err(SelectorError::Unsupported(_))
        ));
    }
}
