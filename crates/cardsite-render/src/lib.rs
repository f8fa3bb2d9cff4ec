//! Business card page renderer.
//!
//! Populates a host skeleton from the content document, wires the video
//! modal and gallery widgets, and builds the static page around it.

pub mod app;
pub mod assets;
pub mod builder;
pub mod host;
pub mod modal;
pub mod sections;
pub mod templates;

use cardsite_dom::DomError;
use cardsite_widgets::WidgetError;

pub use app::{App, AppError, Outcome, RenderSummary};
pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use modal::{ModalMount, ModalState, VideoModal};
pub use sections::Labels;

/// Errors that can occur while populating the page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Host page has no element with id \"{0}\"")]
    MissingMount(String),

    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),
}
