//! Content document model.

use serde::Deserialize;

/// Thumbnail URL template for a video id.
pub const THUMBNAIL_BASE: &str = "https://i.ytimg.com/vi/";

/// Embed URL template for a video id. Uses the no-cookie domain and
/// suppresses related videos and branding.
pub const EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";
pub const EMBED_QUERY: &str = "?rel=0&modestbranding=1";

/// The whole content document (`media.json`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Content {
    /// Site owner profile
    #[serde(default)]
    pub profile: Option<Profile>,

    /// Photo gallery items
    #[serde(default)]
    pub photos: Option<Vec<Photo>>,

    /// Video gallery items
    #[serde(default)]
    pub videos: Option<Vec<Video>>,
}

impl Content {
    /// Photos in order; empty when absent.
    pub fn photos(&self) -> &[Photo] {
        self.photos.as_deref().unwrap_or_default()
    }

    /// Videos in order; empty when absent.
    pub fn videos(&self) -> &[Video] {
        self.videos.as_deref().unwrap_or_default()
    }

    /// Profile name, or `None` when missing or empty.
    pub fn owner_name(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| non_empty(&p.name))
    }
}

/// Site owner profile.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub about: Option<String>,

    /// Profile photo URL
    #[serde(default)]
    pub photo: Option<String>,

    /// Social links
    #[serde(default)]
    pub links: Option<Vec<LinkItem>>,

    /// Call-to-action buttons
    #[serde(default)]
    pub cta: Option<Vec<LinkItem>>,
}

impl Profile {
    /// Social links in order; empty when absent.
    pub fn links(&self) -> &[LinkItem] {
        self.links.as_deref().unwrap_or_default()
    }

    /// CTA items in order; empty when absent.
    pub fn cta(&self) -> &[LinkItem] {
        self.cta.as_deref().unwrap_or_default()
    }
}

/// A social link or CTA item.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LinkItem {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

impl LinkItem {
    /// Display text, empty when absent.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Target URL, empty when absent.
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// Mail links stay in the current tab; everything else opens a new one.
    pub fn opens_in_same_tab(&self) -> bool {
        self.url().starts_with("mailto:")
    }
}

/// A photo gallery item.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Photo {
    /// Full-resolution image URL
    #[serde(default)]
    pub src: Option<String>,

    /// Thumbnail URL (defaults to `src`)
    #[serde(default)]
    pub thumb: Option<String>,

    #[serde(default)]
    pub caption: Option<String>,
}

impl Photo {
    /// Full-resolution URL, empty when absent.
    pub fn src(&self) -> &str {
        self.src.as_deref().unwrap_or("")
    }

    /// Thumbnail URL, falling back to the full-resolution image.
    pub fn thumb_src(&self) -> &str {
        non_empty(&self.thumb).unwrap_or_else(|| self.src())
    }

    /// Caption, or `None` when missing or empty.
    pub fn caption(&self) -> Option<&str> {
        non_empty(&self.caption)
    }
}

/// A video gallery item.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Video {
    /// External video identifier
    #[serde(default, rename = "youtubeId")]
    pub youtube_id: Option<String>,

    #[serde(default)]
    pub caption: Option<String>,
}

impl Video {
    /// Video id, empty when absent.
    pub fn id(&self) -> &str {
        self.youtube_id.as_deref().unwrap_or("")
    }

    /// Caption, or `None` when missing or empty.
    pub fn caption(&self) -> Option<&str> {
        non_empty(&self.caption)
    }

    /// Preview image for this video.
    pub fn thumbnail_url(&self) -> String {
        thumbnail_url(self.id())
    }

    /// Privacy-respecting embed URL for this video.
    pub fn embed_url(&self) -> String {
        embed_url(self.id())
    }
}

/// Preview image URL for a video id.
pub fn thumbnail_url(video_id: &str) -> String {
    format!(
        "{}{}/hqdefault.jpg",
        THUMBNAIL_BASE,
        urlencoding::encode(video_id)
    )
}

/// Embed URL for a video id.
pub fn embed_url(video_id: &str) -> String {
    format!(
        "{}{}{}",
        EMBED_BASE,
        urlencoding::encode(video_id),
        EMBED_QUERY
    )
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
