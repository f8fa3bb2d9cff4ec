//! `card.toml` configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cardsite_content::DEFAULT_CONTENT_FILE;
use cardsite_render::Labels;
use serde::Deserialize;

/// Configuration file structure (card.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Page title; empty uses the profile name
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Content file relative to the origin
    #[serde(default = "default_content")]
    pub content: String,
    /// Site directory holding the content file
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Page URL; when set, content is fetched from here instead of `dir`
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            lang: default_lang(),
            content: default_content(),
            dir: default_dir(),
            base_url: String::new(),
            output: default_output(),
        }
    }
}

impl SiteConfig {
    /// Where the content path is resolved against. A relative `dir` is joined
    /// to `root`, the directory holding `card.toml`; `base_url` is returned
    /// unchanged.
    pub fn origin_in(&self, root: &Path) -> String {
        if !self.base_url.is_empty() {
            return self.base_url.clone();
        }
        root.join(&self.dir).to_string_lossy().to_string()
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

fn default_lang() -> String {
    "en".to_string()
}
fn default_content() -> String {
    DEFAULT_CONTENT_FILE.to_string()
}
fn default_dir() -> String {
    "site".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}
