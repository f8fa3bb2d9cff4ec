//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use cardsite_content::model::{EMBED_BASE, EMBED_QUERY};
use cardsite_content::{ContentError, ContentLocation, DEFAULT_CONTENT_FILE};
use cardsite_dom::Document;
use cardsite_widgets::{
    generate_bootstrap, GLightboxFactory, ModalRuntime, SwiperFactory, WidgetError,
};

use crate::app::{App, Outcome};
use crate::assets::AssetPipeline;
use crate::host::{ids, skeleton};
use crate::sections::Labels;
use crate::templates::{Context, TemplateEngine};

/// Configuration for building a card site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Page URL or site directory the content path is resolved against
    pub origin: String,

    /// Content document path relative to the origin
    pub content: String,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Page title; the rendered brand is used when empty
    pub title: String,

    /// Document language
    pub lang: String,

    /// Placeholder texts
    pub labels: Labels,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            origin: "site".to_string(),
            content: DEFAULT_CONTENT_FILE.to_string(),
            output_dir: PathBuf::from("dist"),
            minify: true,
            title: String::new(),
            lang: "en".to_string(),
            labels: Labels::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of photo slides rendered
    pub photos: usize,

    /// Number of video slides rendered
    pub videos: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,

    /// Whether the page was written with the diagnostic view
    pub failed: bool,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Invalid content location: {0}")]
    Content(#[from] ContentError),

    #[error("Failed to generate bootstrap script: {0}")]
    Widget(#[from] WidgetError),

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Card site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Render the page and write it with its assets.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let location = ContentLocation::resolve(&self.config.origin, &self.config.content)?;
        tracing::info!("Rendering card from {}", location);

        let mut doc = Document::new();
        skeleton(&mut doc, &self.config.labels);

        let mut swiper = SwiperFactory::new();
        let mut glightbox = GLightboxFactory::new();
        let outcome = App::new(&mut swiper, &mut glightbox)
            .with_labels(self.config.labels.clone())
            .start(&mut doc, &location)
            .await;

        let (photos, videos, failed) = match &outcome {
            Outcome::Rendered(summary) => (summary.photos, summary.videos, false),
            Outcome::Failed(_) => (0, 0, true),
        };

        // The diagnostic view has no widgets to wire.
        let script = if failed {
            String::new()
        } else {
            let mut calls = glightbox.calls().to_vec();
            calls.extend_from_slice(swiper.calls());
            generate_bootstrap(&calls, Some(&modal_runtime()))?
        };

        let html = self.render_page(&doc, script)?;
        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        self.generate_assets()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            photos,
            videos,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
            failed,
        })
    }

    fn render_page(&self, doc: &Document, script: String) -> Result<String, BuildError> {
        let text_of = |id: &str| {
            doc.get_element_by_id(id)
                .map(|node| doc.text_content(node))
                .unwrap_or_default()
        };

        let title = if self.config.title.is_empty() {
            let brand = text_of(ids::BRAND);
            if brand.is_empty() {
                self.config.labels.brand.clone()
            } else {
                brand
            }
        } else {
            self.config.title.clone()
        };

        let mut context = Context::with_widgets(&title, &self.config.lang);
        context.description = text_of(ids::PROFILE_TITLE);
        context.body = doc.inner_html(doc.body());
        context.script = script;

        self.templates
            .render_page(&context)
            .map_err(|e: minijinja::Error| BuildError::Template(e.to_string()))
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::Write(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Keeping unminified CSS: {}", e);
                    css
                }
            }
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(())
    }
}

/// Client modal wiring for the host skeleton.
fn modal_runtime() -> ModalRuntime {
    ModalRuntime {
        modal_id: ids::VIDEO_MODAL.to_string(),
        close_id: ids::MODAL_CLOSE.to_string(),
        frame_id: ids::YT_FRAME.to_string(),
        caption_id: ids::VIDEO_CAPTION.to_string(),
        trigger_selector: format!("#{} [data-youtube-id]", ids::VIDEO_WRAPPER),
        embed_base: EMBED_BASE.to_string(),
        embed_query: EMBED_QUERY.to_string(),
    }
}
