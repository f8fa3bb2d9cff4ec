//! Widget capability traits.

use cardsite_dom::{Document, DomError};

use crate::options::{CarouselOptions, LightboxOptions};

/// Which widget a handle or call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Carousel,
    Lightbox,
}

/// Result of initializing a widget over existing markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetHandle {
    pub kind: WidgetKind,

    /// Selector the widget was bound to
    pub selector: String,

    /// Slides (carousel) or trigger anchors (lightbox) found at init time
    pub items: usize,
}

/// A recorded initialization, replayed by the client bootstrap script.
#[derive(Debug, Clone, PartialEq)]
pub enum InitCall {
    Carousel(CarouselOptions),
    Lightbox(LightboxOptions),
}

/// Errors that can occur while initializing a widget.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("No markup matches widget selector: {0}")]
    NoTarget(String),

    #[error("Widget selector error: {0}")]
    Dom(#[from] DomError),

    #[error("Failed to serialize widget options: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Capability for turning gallery markup into a carousel.
pub trait CarouselFactory {
    /// Initialize a carousel over the markup matched by `options.selector`.
    ///
    /// Must only be called once the slides are in the document.
    fn create(
        &mut self,
        doc: &Document,
        options: &CarouselOptions,
    ) -> Result<WidgetHandle, WidgetError>;
}

/// Capability for binding a lightbox to trigger anchors.
pub trait LightboxFactory {
    /// Initialize a lightbox over every element matched by `options.selector`.
    fn create(
        &mut self,
        doc: &Document,
        options: &LightboxOptions,
    ) -> Result<WidgetHandle, WidgetError>;
}
