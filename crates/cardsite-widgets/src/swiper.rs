//! Swiper and GLightbox adapters.

use cardsite_dom::Document;

use crate::options::{CarouselOptions, LightboxOptions};
use crate::traits::{
    CarouselFactory, InitCall, LightboxFactory, WidgetError, WidgetHandle, WidgetKind,
};

/// Carousel factory backed by Swiper.
///
/// Validates the target markup and records each call for the bootstrap
/// script.
#[derive(Debug, Default)]
pub struct SwiperFactory {
    calls: Vec<InitCall>,
}

impl SwiperFactory {
    /// Create a new factory with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded initializations in call order.
    pub fn calls(&self) -> &[InitCall] {
        &self.calls
    }
}

impl CarouselFactory for SwiperFactory {
    fn create(
        &mut self,
        doc: &Document,
        options: &CarouselOptions,
    ) -> Result<WidgetHandle, WidgetError> {
        if doc.query_all(&options.selector)?.is_empty() {
            return Err(WidgetError::NoTarget(options.selector.clone()));
        }

        let slides = doc
            .query_all(&format!("{} .swiper-slide", options.selector))?
            .len();

        for control in [
            &options.pagination.el,
            &options.navigation.next_el,
            &options.navigation.prev_el,
        ] {
            if doc.query_all(control)?.is_empty() {
                tracing::warn!("Carousel control not found: {}", control);
            }
        }

        tracing::debug!("Carousel {} bound to {} slides", options.selector, slides);

        self.calls.push(InitCall::Carousel(options.clone()));

        Ok(WidgetHandle {
            kind: WidgetKind::Carousel,
            selector: options.selector.clone(),
            items: slides,
        })
    }
}

/// Lightbox factory backed by GLightbox.
#[derive(Debug, Default)]
pub struct GLightboxFactory {
    calls: Vec<InitCall>,
}

impl GLightboxFactory {
    /// Create a new factory with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded initializations in call order.
    pub fn calls(&self) -> &[InitCall] {
        &self.calls
    }
}

impl LightboxFactory for GLightboxFactory {
    fn create(
        &mut self,
        doc: &Document,
        options: &LightboxOptions,
    ) -> Result<WidgetHandle, WidgetError> {
        // An empty gallery is fine; GLightbox simply has nothing to open.
        let triggers = doc.query_all(&options.selector)?.len();

        tracing::debug!("Lightbox {} bound to {} triggers", options.selector, triggers);

        self.calls.push(InitCall::Lightbox(options.clone()));

        Ok(WidgetHandle {
            kind: WidgetKind::Lightbox,
            selector: options.selector.clone(),
            items: triggers,
        })
    }
}
