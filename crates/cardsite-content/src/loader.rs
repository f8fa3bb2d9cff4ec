//! Content document loading.

use std::fmt;
use std::path::PathBuf;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use url::Url;

use crate::model::Content;

/// Content file name used when none is configured.
pub const DEFAULT_CONTENT_FILE: &str = "media.json";

/// Where the content document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLocation {
    /// Fetched over HTTP(S)
    Http(Url),
    /// Read from disk
    File(PathBuf),
}

impl ContentLocation {
    /// Resolve a content path against an origin.
    ///
    /// An origin starting with `http://` or `https://` is treated as the
    /// page URL, and the path is joined the way a browser resolves a
    /// relative link (`http://host/card/` + `media.json` gives
    /// `http://host/card/media.json`). Any other origin is a directory.
    pub fn resolve(origin: &str, path: &str) -> Result<Self, ContentError> {
        if origin.starts_with("http://") || origin.starts_with("https://") {
            let base = Url::parse(origin)
                .map_err(|e| ContentError::InvalidOrigin(format!("{}: {}", origin, e)))?;
            let url = base
                .join(path)
                .map_err(|e| ContentError::InvalidOrigin(format!("{}: {}", path, e)))?;
            Ok(Self::Http(url))
        } else {
            Ok(Self::File(PathBuf::from(origin).join(path)))
        }
    }

    /// Last path segment, e.g. `media.json`.
    pub fn file_name(&self) -> String {
        let name = match self {
            Self::Http(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .map(str::to_string),
            Self::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string()),
        };
        name.filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_FILE.to_string())
    }
}

impl fmt::Display for ContentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors that can occur while loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to load {location}: HTTP {status}")]
    Load { location: String, status: u16 },

    #[error("Failed to request {location}: {message}")]
    Request { location: String, message: String },

    #[error("Failed to read {location}: {message}")]
    Read { location: String, message: String },

    #[error("Failed to parse {location}: {message}")]
    Parse { location: String, message: String },

    #[error("Invalid content origin: {0}")]
    InvalidOrigin(String),
}

/// Load and parse the content document. Attempted exactly once.
pub async fn load_content(location: &ContentLocation) -> Result<Content, ContentError> {
    let source = match location {
        ContentLocation::Http(url) => fetch(url).await?,
        ContentLocation::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ContentError::Read {
                    location: location.to_string(),
                    message: e.to_string(),
                })?
        }
    };

    parse_at(&source, &location.to_string())
}

/// Parse a content document held in memory.
pub fn parse_content(source: &str) -> Result<Content, ContentError> {
    parse_at(source, "inline document")
}

async fn fetch(url: &Url) -> Result<String, ContentError> {
    tracing::debug!("Fetching content from {}", url);

    let request_error = |e: reqwest::Error| ContentError::Request {
        location: url.to_string(),
        message: e.to_string(),
    };

    let response = reqwest::Client::new()
        .get(url.clone())
        .header(CACHE_CONTROL, "no-store")
        .header(PRAGMA, "no-cache")
        .send()
        .await
        .map_err(request_error)?;

    let status = response.status();
    tracing::debug!("Content response status: {}", status);

    if !status.is_success() {
        return Err(ContentError::Load {
            location: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(request_error)
}

fn parse_at(source: &str, location: &str) -> Result<Content, ContentError> {
    serde_json::from_str(source).map_err(|e| ContentError::Parse {
        location: location.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn resolves_relative_to_page_url() {
        let location = ContentLocation::resolve("https://card.example/me/", "media.json").unwrap();

        assert_eq!(
            location,
            ContentLocation::Http(Url::parse("https://card.example/me/media.json").unwrap())
        );
    }

    #[test]
    fn resolves_relative_to_directory() {
        let location = ContentLocation::resolve("site", "media.json").unwrap();

        assert_eq!(location, ContentLocation::File(PathBuf::from("site/media.json")));
    }

    #[test]
    fn file_name_is_last_segment() {
        let http = ContentLocation::resolve("https://card.example/", "data/site.json").unwrap();
        let file = ContentLocation::resolve("site", "media.json").unwrap();

        assert_eq!(http.file_name(), "site.json");
        assert_eq!(file.file_name(), "media.json");
    }

    #[test]
    fn parse_errors_are_reported() {
        let result = parse_content("{ not json");

        assert!(matches!(result, Err(ContentError::Parse { .. })));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let result = parse_content(r#"{ "photos": "nope" }"#);

        assert!(matches!(result, Err(ContentError::Parse { .. })));
    }

    #[tokio::test]
    async fn fetches_with_caching_disabled() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/media.json")
                    .header("cache-control", "no-store");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body(r#"{ "profile": { "name": "A" } }"#);
            })
            .await;

        let location = ContentLocation::resolve(&server.base_url(), "media.json").unwrap();
        let content = load_content(&location).await.unwrap();

        mock.assert_async().await;
        assert_eq!(content.owner_name(), Some("A"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_load_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/media.json");
                then.status(404);
            })
            .await;

        let location = ContentLocation::resolve(&server.base_url(), "media.json").unwrap();
        let err = load_content(&location).await.unwrap_err();

        assert!(matches!(err, ContentError::Load { status: 404, .. }));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn reads_from_directory() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("media.json"),
            r#"{ "photos": [{ "src": "a.jpg" }] }"#,
        )
        .unwrap();

        let origin = temp.path().to_string_lossy().to_string();
        let location = ContentLocation::resolve(&origin, "media.json").unwrap();
        let content = load_content(&location).await.unwrap();

        assert_eq!(content.photos().len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let temp = tempdir().unwrap();
        let origin = temp.path().to_string_lossy().to_string();

        let location = ContentLocation::resolve(&origin, "media.json").unwrap();
        let result = load_content(&location).await;

        assert!(matches!(result, Err(ContentError::Read { .. })));
    }
}
