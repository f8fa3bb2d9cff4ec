//! Page orchestration.
//!
//! Loads the content document once, renders every section in order, then
//! hands the finished markup to the lightbox and carousel capabilities.
//! Any failure replaces the page body with a diagnostic view.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Datelike;

use cardsite_content::{load_content, Content, ContentError, ContentLocation, DEFAULT_CONTENT_FILE};
use cardsite_dom::{el, text, Attrs, Document};
use cardsite_widgets::{
    CarouselFactory, CarouselOptions, LightboxFactory, LightboxOptions, WidgetHandle,
};

use crate::host::{Mounts, PHOTO_GALLERY, VIDEO_GALLERY};
use crate::modal::{ModalMount, VideoModal};
use crate::sections::{
    render_cta, render_footer, render_photo_slides, render_profile, render_social_links,
    render_video_slides, Labels,
};
use crate::RenderError;

/// Errors that end a page start.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// What a successful render produced.
#[derive(Debug)]
pub struct RenderSummary {
    pub photos: usize,
    pub videos: usize,

    /// Live modal controller, bound to the rendered document
    pub modal: Rc<RefCell<VideoModal>>,

    /// Lightbox first, then one handle per carousel
    pub widgets: Vec<WidgetHandle>,
}

/// Result of [`App::start`].
#[derive(Debug)]
pub enum Outcome {
    Rendered(RenderSummary),
    /// The body now shows the diagnostic view for this error
    Failed(AppError),
}

impl Outcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Page orchestrator with injected widget capabilities.
pub struct App<'a> {
    carousels: &'a mut dyn CarouselFactory,
    lightbox: &'a mut dyn LightboxFactory,
    labels: Labels,
    year: i32,
    content_name: String,
}

impl<'a> App<'a> {
    /// Create an orchestrator using default labels and the current year.
    pub fn new(
        carousels: &'a mut dyn CarouselFactory,
        lightbox: &'a mut dyn LightboxFactory,
    ) -> Self {
        Self {
            carousels,
            lightbox,
            labels: Labels::default(),
            year: chrono::Local::now().year(),
            content_name: DEFAULT_CONTENT_FILE.to_string(),
        }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Override the footer year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Load the content document from `location` and render the page.
    ///
    /// Start once per document; the modal triggers bound here stay bound.
    pub async fn start(&mut self, doc: &mut Document, location: &ContentLocation) -> Outcome {
        self.content_name = location.file_name();

        tracing::debug!("Loading content from {}", location);
        match load_content(location).await {
            Ok(content) => self.start_with(doc, &content),
            Err(e) => self.fail(doc, e.into()),
        }
    }

    /// Render already-loaded content.
    pub fn start_with(&mut self, doc: &mut Document, content: &Content) -> Outcome {
        match self.render(doc, content) {
            Ok(summary) => {
                tracing::debug!(
                    "Rendered {} photos, {} videos, {} widgets",
                    summary.photos,
                    summary.videos,
                    summary.widgets.len()
                );
                Outcome::Rendered(summary)
            }
            Err(e) => self.fail(doc, e.into()),
        }
    }

    fn fail(&self, doc: &mut Document, err: AppError) -> Outcome {
        tracing::error!("Page start failed: {}", err);
        show_error(doc, &err, &self.content_name, &self.labels);
        Outcome::Failed(err)
    }

    fn render(
        &mut self,
        doc: &mut Document,
        content: &Content,
    ) -> Result<RenderSummary, RenderError> {
        let mounts = Mounts::resolve(doc)?;
        let profile = content.profile.as_ref();

        render_profile(doc, &mounts, profile, &self.labels)?;
        render_social_links(
            doc,
            mounts.social_links,
            profile.map(|p| p.links()).unwrap_or_default(),
        );
        render_cta(doc, mounts.cta_row, profile.map(|p| p.cta()).unwrap_or_default());

        let modal_mount = ModalMount::resolve(doc)?;
        let modal = VideoModal::install(doc, modal_mount)?;

        render_photo_slides(doc, mounts.photo_wrapper, content.photos(), &self.labels);
        render_video_slides(
            doc,
            mounts.video_wrapper,
            content.videos(),
            &self.labels,
            VideoModal::opener(&modal),
        )?;

        let mut widgets = vec![self.lightbox.create(doc, &LightboxOptions::default())?];
        for gallery in [PHOTO_GALLERY, VIDEO_GALLERY] {
            widgets.push(self.carousels.create(doc, &CarouselOptions::for_gallery(gallery))?);
        }

        render_footer(
            doc,
            mounts.footer_text,
            content.owner_name().unwrap_or(""),
            self.year,
        );

        Ok(RenderSummary {
            photos: content.photos().len(),
            videos: content.videos().len(),
            modal,
            widgets,
        })
    }
}

/// Replace the page body with the load failure view.
///
/// Window listeners bound by an earlier render are dropped with the body.
pub fn show_error(
    doc: &mut Document,
    err: &dyn std::fmt::Display,
    content_name: &str,
    labels: &Labels,
) {
    let body = doc.body();
    doc.clear_children(body);
    doc.clear_window_listeners();

    let title_text = text(doc, labels.error_title.as_str());
    let title = el(doc, "h2", Attrs::new(), &[title_text]);

    let detail_text = text(doc, err.to_string());
    let detail = el(doc, "pre", Attrs::new().class("loadErrorDetail"), &[detail_text]);

    let lead = text(doc, "Check that ");
    let file_text = text(doc, content_name);
    let file = el(doc, "b", Attrs::new(), &[file_text]);
    let tail = text(
        doc,
        " sits next to the page and that the site is served over http (not file://).",
    );
    let hint = el(doc, "p", Attrs::new().class("loadErrorHint"), &[lead, file, tail]);

    let view = el(doc, "div", Attrs::new().class("loadError"), &[title, detail, hint]);
    doc.append(body, view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsite_content::parse_content;
    use cardsite_dom::Event;
    use cardsite_widgets::{GLightboxFactory, SwiperFactory, WidgetError};
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;

    use crate::host::{ids, skeleton};
    use crate::ModalState;

    fn host() -> Document {
        let mut doc = Document::new();
        skeleton(&mut doc, &Labels::default());
        doc
    }

    fn count(doc: &Document, selector: &str) -> usize {
        doc.query_all(selector).unwrap().len()
    }

    fn body_text(doc: &Document) -> String {
        doc.text_content(doc.body())
    }

    #[test]
    fn renders_profile_photos_and_footer() {
        let content = parse_content(
            r#"{ "profile": { "name": "A" }, "photos": [{ "src": "1.jpg" }, { "src": "2.jpg" }], "videos": [] }"#,
        )
        .unwrap();
        let mut doc = host();
        let (mut swiper, mut glightbox) = (SwiperFactory::new(), GLightboxFactory::new());

        let outcome = App::new(&mut swiper, &mut glightbox)
            .with_year(2024)
            .start_with(&mut doc, &content);

        let Outcome::Rendered(summary) = outcome else {
            panic!("expected a rendered page");
        };
        assert_eq!(summary.photos, 2);
        assert_eq!(summary.videos, 0);
        assert_eq!(count(&doc, "#photoWrapper .swiper-slide"), 2);
        assert_eq!(count(&doc, "#videoWrapper .swiper-slide"), 0);
        let footer = doc.get_element_by_id(ids::FOOTER_TEXT).unwrap();
        assert_eq!(doc.text_content(footer), "© A · 2024");
    }

    #[test]
    fn initializes_lightbox_then_both_carousels() {
        let content = parse_content(r#"{ "photos": [{ "src": "1.jpg" }] }"#).unwrap();
        let mut doc = host();
        let (mut swiper, mut glightbox) = (SwiperFactory::new(), GLightboxFactory::new());

        let outcome = App::new(&mut swiper, &mut glightbox).start_with(&mut doc, &content);

        let Outcome::Rendered(summary) = outcome else {
            panic!("expected a rendered page");
        };
        let selectors: Vec<&str> = summary.widgets.iter().map(|w| w.selector.as_str()).collect();
        assert_eq!(selectors, vec![".glightbox", ".photoSwiper", ".videoSwiper"]);
        assert_eq!(summary.widgets[0].items, 1);
        assert_eq!(swiper.calls().len(), 2);
        assert_eq!(glightbox.calls().len(), 1);
    }

    #[test]
    fn video_slides_open_the_modal() {
        let content =
            parse_content(r#"{ "videos": [{ "youtubeId": "abc", "caption": "Reel" }] }"#).unwrap();
        let mut doc = host();
        let (mut swiper, mut glightbox) = (SwiperFactory::new(), GLightboxFactory::new());

        let outcome = App::new(&mut swiper, &mut glightbox).start_with(&mut doc, &content);
        let Outcome::Rendered(summary) = outcome else {
            panic!("expected a rendered page");
        };

        let button = doc.query_all("#videoWrapper button").unwrap()[0];
        doc.dispatch(&Event::click(button));

        assert_eq!(
            summary.modal.borrow().state(),
            &ModalState::Open {
                video_id: "abc".to_string(),
                caption: "Reel".to_string()
            }
        );
        doc.dispatch(&Event::keydown(doc.body(), "Escape"));
        assert_eq!(summary.modal.borrow().state(), &ModalState::Closed);
    }

    #[test]
    fn missing_mount_shows_diagnostic_instead_of_partial_page() {
        let content = parse_content(r#"{ "profile": { "name": "A" } }"#).unwrap();
        let mut doc = Document::new();
        let (mut swiper, mut glightbox) = (SwiperFactory::new(), GLightboxFactory::new());

        let outcome = App::new(&mut swiper, &mut glightbox).start_with(&mut doc, &content);

        assert!(matches!(
            outcome,
            Outcome::Failed(AppError::Render(RenderError::MissingMount(_)))
        ));
        assert!(body_text(&doc).contains("Failed to load"));
        assert!(body_text(&doc).contains("brand"));
        assert!(swiper.calls().is_empty());
    }

    struct BrokenCarousel;

    impl CarouselFactory for BrokenCarousel {
        fn create(
            &mut self,
            _doc: &Document,
            options: &CarouselOptions,
        ) -> Result<WidgetHandle, WidgetError> {
            Err(WidgetError::NoTarget(options.selector.clone()))
        }
    }

    #[test]
    fn widget_failure_replaces_rendered_sections() {
        let content =
            parse_content(r#"{ "profile": { "name": "A" }, "photos": [{ "src": "1.jpg" }] }"#)
                .unwrap();
        let mut doc = host();
        let (mut carousel, mut glightbox) = (BrokenCarousel, GLightboxFactory::new());

        let outcome = App::new(&mut carousel, &mut glightbox).start_with(&mut doc, &content);

        assert!(!outcome.is_rendered());
        assert_eq!(count(&doc, ".swiper-slide"), 0);
        assert_eq!(doc.window_listener_count(), 0);
        assert!(doc.get_element_by_id(ids::FOOTER_TEXT).is_none());
        assert!(body_text(&doc).contains(".photoSwiper"));
    }

    #[tokio::test]
    async fn http_404_shows_status_in_diagnostic() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/media.json");
                then.status(404);
            })
            .await;
        let location = ContentLocation::resolve(&server.base_url(), "media.json").unwrap();
        let mut doc = host();
        let (mut swiper, mut glightbox) = (SwiperFactory::new(), GLightboxFactory::new());

        let outcome = App::new(&mut swiper, &mut glightbox)
            .start(&mut doc, &location)
            .await;

        assert!(matches!(
            outcome,
            Outcome::Failed(AppError::Content(ContentError::Load { status: 404, .. }))
        ));
        let shown = body_text(&doc);
        assert!(shown.contains("Failed to load"));
        assert!(shown.contains("404"));
        assert!(shown.contains("media.json"));
        assert!(doc.get_element_by_id(ids::PHOTO_WRAPPER).is_none());
    }

    #[test]
    fn diagnostic_escapes_error_text() {
        let mut doc = host();

        show_error(&mut doc, &"<b>bad</b>", "media.json", &Labels::default());

        let html = doc.inner_html(doc.body());
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(html.contains("<b>media.json</b>"));
    }
}
