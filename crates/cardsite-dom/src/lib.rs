//! Owned DOM tree for rendering pages outside a browser.
//!
//! Provides an arena-backed document with element construction helpers,
//! bubbling event dispatch, simple CSS selector queries, and HTML
//! serialization.

pub mod builder;
pub mod document;
pub mod event;
pub mod selector;
pub mod serialize;

pub use builder::{el, text, Attrs};
pub use document::{Document, DomError, NodeId, NodeKind};
pub use event::{Event, Handler};
pub use selector::{Selector, SelectorError};
pub use serialize::{escape_attr, escape_text};
