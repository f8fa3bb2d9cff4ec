//! Content model and loader for business card sites.
//!
//! A site is described by a single JSON document with a profile, a photo
//! gallery and a video gallery. Every field is optional.

pub mod loader;
pub mod model;

pub use loader::{load_content, parse_content, ContentError, ContentLocation, DEFAULT_CONTENT_FILE};
pub use model::{embed_url, thumbnail_url, Content, LinkItem, Photo, Profile, Video};
